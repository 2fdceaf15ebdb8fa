use super::entity::AudioEpisode;
use crate::domain::{DomainError, DomainResult};

/// Validates all AudioEpisode invariants
pub fn validate_audio_episode(episode: &AudioEpisode) -> DomainResult<()> {
    if episode.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Episode id cannot be empty".to_string(),
        ));
    }
    if episode.duration_seconds == 0 {
        return Err(DomainError::InvalidDuration(episode.id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_episodes;

    #[test]
    fn test_sample_episodes_are_valid() {
        for episode in sample_episodes() {
            assert!(validate_audio_episode(&episode).is_ok());
        }
    }

    #[test]
    fn test_zero_duration_fails() {
        let mut episode = sample_episodes().remove(0);
        episode.duration_seconds = 0;
        assert!(matches!(
            validate_audio_episode(&episode),
            Err(DomainError::InvalidDuration(_))
        ));
    }
}
