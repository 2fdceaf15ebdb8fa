// src/services/tips_service.rs
use std::sync::Arc;

use serde::Serialize;

use crate::domain::{AudioEpisode, PetType};
use crate::error::{AppError, AppResult};
use crate::repositories::EpisodeRepository;

/// Shown instead of the player when a species has no episodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

pub struct TipsService {
    episode_repo: Arc<dyn EpisodeRepository>,
}

impl TipsService {
    pub fn new(episode_repo: Arc<dyn EpisodeRepository>) -> Self {
        Self { episode_repo }
    }

    /// Tips categories, in selector order
    pub fn categories(&self) -> [PetType; 4] {
        PetType::ALL
    }

    pub fn episodes_for(&self, pet_type: PetType) -> AppResult<Vec<AudioEpisode>> {
        self.episode_repo.episodes_for_species(pet_type)
    }

    /// "Descubre más contenido" strip
    pub fn related(&self, pet_type: PetType) -> AppResult<Vec<AudioEpisode>> {
        self.episode_repo.related_episodes(pet_type)
    }

    pub fn get_episode(&self, episode_id: &str) -> AppResult<AudioEpisode> {
        self.episode_repo
            .get_by_id(episode_id)?
            .ok_or(AppError::NotFound)
    }

    pub fn empty_state(pet_type: PetType) -> EmptyState {
        EmptyState {
            title: "No hay podcasts disponibles".to_string(),
            message: format!(
                "Estamos trabajando en crear nuevos contenidos para {}s",
                pet_type.display_name().to_lowercase()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryEpisodeRepository;

    fn service() -> TipsService {
        TipsService::new(Arc::new(InMemoryEpisodeRepository::with_sample_data().unwrap()))
    }

    #[test]
    fn test_episodes_for_species() {
        let ids: Vec<String> = service()
            .episodes_for(PetType::Cat)
            .unwrap()
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(ids, vec!["cat_ep1", "cat_ep2"]);
    }

    #[test]
    fn test_related_skips_current_species() {
        let related = service().related(PetType::Fish).unwrap();
        let ids: Vec<&str> = related.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["dog_ep1", "cat_ep1", "bird_ep1"]);
    }

    #[test]
    fn test_empty_state_text() {
        let state = TipsService::empty_state(PetType::Bird);
        assert_eq!(state.title, "No hay podcasts disponibles");
        assert_eq!(state.message, "Estamos trabajando en crear nuevos contenidos para aves");
    }

    #[test]
    fn test_empty_species_yields_no_episodes() {
        let repo = InMemoryEpisodeRepository::new(Vec::new()).unwrap();
        let service = TipsService::new(Arc::new(repo));
        assert!(service.episodes_for(PetType::Dog).unwrap().is_empty());
        assert!(service.related(PetType::Dog).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_episode() {
        assert!(matches!(service().get_episode("x"), Err(AppError::NotFound)));
    }
}
