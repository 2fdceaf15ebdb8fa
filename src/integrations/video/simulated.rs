// src/integrations/video/simulated.rs

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::integrations::video::{VideoBackend, VideoHandle};

/// In-process video backend that tracks how many players are alive
#[derive(Debug, Default, Clone)]
pub struct SimulatedVideoBackend {
    active: Arc<AtomicUsize>,
}

impl SimulatedVideoBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles opened and not yet released
    pub fn active_sessions(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

impl VideoBackend for SimulatedVideoBackend {
    fn open(&self, uri: &str) -> AppResult<Box<dyn VideoHandle>> {
        if !(uri.starts_with("https://") || uri.starts_with("http://")) {
            return Err(AppError::Video(format!("Unsupported video URI: {}", uri)));
        }
        self.active.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(SimulatedVideoHandle {
            uri: uri.to_string(),
            playing: AtomicBool::new(false),
            play_when_ready: AtomicBool::new(true),
            repeat_one: AtomicBool::new(false),
            position_ms: AtomicU64::new(0),
            released: AtomicBool::new(false),
            active: Arc::clone(&self.active),
        }))
    }
}

struct SimulatedVideoHandle {
    uri: String,
    playing: AtomicBool,
    play_when_ready: AtomicBool,
    repeat_one: AtomicBool,
    position_ms: AtomicU64,
    released: AtomicBool,
    active: Arc<AtomicUsize>,
}

impl VideoHandle for SimulatedVideoHandle {
    fn uri(&self) -> &str {
        &self.uri
    }

    fn play(&self) {
        if !self.released.load(Ordering::SeqCst) {
            self.playing.store(true, Ordering::SeqCst);
        }
    }

    fn pause(&self) {
        self.playing.store(false, Ordering::SeqCst);
    }

    fn seek_to(&self, position_ms: u64) {
        self.position_ms.store(position_ms, Ordering::SeqCst);
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn set_play_when_ready(&self, play_when_ready: bool) {
        self.play_when_ready.store(play_when_ready, Ordering::SeqCst);
        self.playing.store(play_when_ready, Ordering::SeqCst);
    }

    fn set_repeat_one(&self, repeat: bool) {
        self.repeat_one.store(repeat, Ordering::SeqCst);
    }

    fn release(&self) {
        if !self.released.swap(true, Ordering::SeqCst) {
            self.playing.store(false, Ordering::SeqCst);
            self.active.fetch_sub(1, Ordering::SeqCst);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_http_uri() {
        let backend = SimulatedVideoBackend::new();
        assert!(matches!(
            backend.open("file:///tmp/max.mp4"),
            Err(AppError::Video(_))
        ));
        assert_eq!(backend.active_sessions(), 0);
    }

    #[test]
    fn test_release_counts_once() {
        let backend = SimulatedVideoBackend::new();
        let handle = backend.open("https://example.com/v.mp4").unwrap();
        handle.release();
        handle.release();
        assert_eq!(backend.active_sessions(), 0);
    }
}
