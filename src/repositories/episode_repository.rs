// src/repositories/episode_repository.rs

use std::sync::Arc;

use crate::data::sample_episodes;
use crate::domain::{ensure_unique_ids, validate_audio_episode, AudioEpisode, PetType};
use crate::error::AppResult;

pub trait EpisodeRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<AudioEpisode>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<AudioEpisode>>;
    fn episodes_for_species(&self, pet_type: PetType) -> AppResult<Vec<AudioEpisode>>;

    /// First episode of every other species, walking [`PetType::ALL`]
    /// circularly from just after `current`. Species without episodes are
    /// skipped, so at most `PetType::ALL.len() - 1` episodes come back.
    fn related_episodes(&self, current: PetType) -> AppResult<Vec<AudioEpisode>> {
        let all_types = PetType::ALL;
        let start = current.index();
        let mut related = Vec::with_capacity(all_types.len() - 1);

        for offset in 1..all_types.len() {
            let next_type = all_types[(start + offset) % all_types.len()];
            if let Some(first) = self.episodes_for_species(next_type)?.into_iter().next() {
                related.push(first);
            }
        }

        Ok(related)
    }
}

pub struct InMemoryEpisodeRepository {
    episodes: Arc<Vec<AudioEpisode>>,
}

impl InMemoryEpisodeRepository {
    pub fn new(episodes: Vec<AudioEpisode>) -> AppResult<Self> {
        for episode in &episodes {
            validate_audio_episode(episode)?;
        }
        ensure_unique_ids(episodes.iter().map(|e| e.id.as_str()))?;

        Ok(Self {
            episodes: Arc::new(episodes),
        })
    }

    pub fn with_sample_data() -> AppResult<Self> {
        Self::new(sample_episodes())
    }
}

impl EpisodeRepository for InMemoryEpisodeRepository {
    fn list_all(&self) -> AppResult<Vec<AudioEpisode>> {
        Ok(self.episodes.as_ref().clone())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<AudioEpisode>> {
        Ok(self.episodes.iter().find(|e| e.id == id).cloned())
    }

    fn episodes_for_species(&self, pet_type: PetType) -> AppResult<Vec<AudioEpisode>> {
        Ok(self
            .episodes
            .iter()
            .filter(|e| e.pet_type == pet_type)
            .cloned()
            .collect())
    }
}
