pub mod entity;
pub mod invariants;

pub use entity::{AudioEpisode, AudioResource};
pub use invariants::validate_audio_episode;
