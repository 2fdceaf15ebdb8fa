// src/integrations/audio/backend.rs
//
// Audio collaborator seam.
// Positions and durations are in milliseconds, like the platform players.

#[cfg(test)]
use mockall::automock;

use crate::domain::AudioResource;
use crate::error::AppResult;

/// Invoked once when the handle reaches the end of the track
pub type CompletionListener = Box<dyn Fn() + Send + Sync>;

/// One decoding/playback handle bound to a single resource
#[cfg_attr(test, automock)]
pub trait AudioHandle: Send + Sync {
    fn play(&self);
    fn pause(&self);
    fn stop(&self);
    fn seek_to(&self, position_ms: u64);

    /// Live playing state of the underlying player
    fn is_playing(&self) -> bool;
    fn current_position_ms(&self) -> u64;
    fn duration_ms(&self) -> u64;

    fn set_on_completion(&self, listener: CompletionListener);

    /// Frees the underlying player; the handle is unusable afterwards
    fn release(&self);
}

/// Creates handles for bundled resources
#[cfg_attr(test, automock)]
pub trait AudioBackend: Send + Sync {
    /// Fails when the resource cannot be opened; callers do not retry
    fn create(&self, resource: &AudioResource) -> AppResult<Box<dyn AudioHandle>>;
}
