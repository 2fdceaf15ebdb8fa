// src/integrations/video/backend.rs

use crate::error::AppResult;

/// A video player bound to one remote URI
pub trait VideoHandle: Send + Sync {
    fn uri(&self) -> &str;
    fn play(&self);
    fn pause(&self);
    fn seek_to(&self, position_ms: u64);
    fn is_playing(&self) -> bool;

    /// Start as soon as buffering completes
    fn set_play_when_ready(&self, play_when_ready: bool);

    /// Loop the current item forever
    fn set_repeat_one(&self, repeat: bool);

    fn release(&self);
}

pub trait VideoBackend: Send + Sync {
    fn open(&self, uri: &str) -> AppResult<Box<dyn VideoHandle>>;
}
