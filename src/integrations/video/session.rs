// src/integrations/video/session.rs
//
// Scoped video player: acquired when the adoption detail screen is
// entered, released when the guard is dropped (navigation away, app
// teardown, or unwinding).

use crate::error::AppResult;
use crate::integrations::video::{VideoBackend, VideoHandle};

pub struct VideoSession {
    handle: Option<Box<dyn VideoHandle>>,
}

impl VideoSession {
    /// Opens the URI paused and looping, matching the detail screen's player
    pub fn open(backend: &dyn VideoBackend, uri: &str) -> AppResult<Self> {
        let handle = backend.open(uri)?;
        handle.set_play_when_ready(false);
        handle.set_repeat_one(true);
        log::debug!("Video session opened for {}", uri);
        Ok(Self {
            handle: Some(handle),
        })
    }

    pub fn uri(&self) -> Option<&str> {
        self.handle.as_ref().map(|h| h.uri())
    }

    pub fn is_playing(&self) -> bool {
        self.handle.as_ref().map(|h| h.is_playing()).unwrap_or(false)
    }

    /// Toggles the embedded player; returns the new playing state
    pub fn toggle(&self) -> bool {
        match self.handle.as_ref() {
            Some(handle) if handle.is_playing() => {
                handle.pause();
                false
            }
            Some(handle) => {
                handle.play();
                true
            }
            None => false,
        }
    }

    pub fn seek_to(&self, position_ms: u64) {
        if let Some(handle) = self.handle.as_ref() {
            handle.seek_to(position_ms);
        }
    }

    /// Releases the player; safe to call more than once
    pub fn close(&mut self) {
        if let Some(handle) = self.handle.take() {
            log::debug!("Video session released for {}", handle.uri());
            handle.release();
        }
    }
}

impl Drop for VideoSession {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::video::SimulatedVideoBackend;

    const URI: &str = "https://www.pexels.com/download/video/8746813/";

    #[test]
    fn test_session_starts_paused() {
        let backend = SimulatedVideoBackend::new();
        let session = VideoSession::open(&backend, URI).unwrap();
        assert!(!session.is_playing());
        assert_eq!(session.uri(), Some(URI));
        assert_eq!(backend.active_sessions(), 1);
    }

    #[test]
    fn test_toggle_plays_and_pauses() {
        let backend = SimulatedVideoBackend::new();
        let session = VideoSession::open(&backend, URI).unwrap();
        assert!(session.toggle());
        assert!(session.is_playing());
        assert!(!session.toggle());
    }

    #[test]
    fn test_drop_releases_handle() {
        let backend = SimulatedVideoBackend::new();
        {
            let _session = VideoSession::open(&backend, URI).unwrap();
            assert_eq!(backend.active_sessions(), 1);
        }
        assert_eq!(backend.active_sessions(), 0);
    }

    #[test]
    fn test_close_is_idempotent() {
        let backend = SimulatedVideoBackend::new();
        let mut session = VideoSession::open(&backend, URI).unwrap();
        session.close();
        session.close();
        assert_eq!(backend.active_sessions(), 0);
        assert!(!session.toggle());
    }
}
