// src/integrations/audio/simulated.rs
//
// Clock-driven audio backend.
// Playback position advances with tokio's clock, so paused-time tests can
// drive it deterministically. End of track is detected lazily whenever the
// handle is queried.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use tokio::time::Instant;

use crate::domain::{AudioEpisode, AudioResource};
use crate::error::{AppError, AppResult};
use crate::integrations::audio::{AudioBackend, AudioHandle, CompletionListener};

/// Registry of known resources and their real track lengths
#[derive(Debug, Default, Clone)]
pub struct SimulatedAudioBackend {
    tracks: HashMap<AudioResource, u64>,
}

impl SimulatedAudioBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a resource; the first registration of a name wins
    pub fn with_track(mut self, resource: AudioResource, duration_ms: u64) -> Self {
        self.tracks.entry(resource).or_insert(duration_ms);
        self
    }

    /// Registers every episode's resource using its advertised duration
    pub fn from_episodes(episodes: &[AudioEpisode]) -> Self {
        episodes.iter().fold(Self::new(), |backend, episode| {
            backend.with_track(
                episode.audio_resource.clone(),
                u64::from(episode.duration_seconds) * 1000,
            )
        })
    }
}

impl AudioBackend for SimulatedAudioBackend {
    fn create(&self, resource: &AudioResource) -> AppResult<Box<dyn AudioHandle>> {
        let duration_ms = self
            .tracks
            .get(resource)
            .copied()
            .ok_or_else(|| AppError::Playback(format!("Unknown audio resource: {}", resource)))?;

        log::debug!("Opened simulated audio handle for {} ({} ms)", resource, duration_ms);
        Ok(Box::new(SimulatedAudioHandle::new(duration_ms)))
    }
}

#[derive(Debug)]
struct Clock {
    playing: bool,
    /// Position at the moment `anchor` was taken
    anchor_position_ms: u64,
    anchor: Instant,
    released: bool,
}

impl Clock {
    fn position_at(&self, now: Instant, duration_ms: u64) -> u64 {
        if !self.playing {
            return self.anchor_position_ms;
        }
        let elapsed = now.saturating_duration_since(self.anchor).as_millis() as u64;
        self.anchor_position_ms.saturating_add(elapsed).min(duration_ms)
    }
}

pub struct SimulatedAudioHandle {
    duration_ms: u64,
    clock: Mutex<Clock>,
    on_completion: Mutex<Option<CompletionListener>>,
}

impl SimulatedAudioHandle {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            clock: Mutex::new(Clock {
                playing: false,
                anchor_position_ms: 0,
                anchor: Instant::now(),
                released: false,
            }),
            on_completion: Mutex::new(None),
        }
    }

    pub fn is_released(&self) -> bool {
        self.lock_clock().released
    }

    fn lock_clock(&self) -> std::sync::MutexGuard<'_, Clock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stops the clock at the end of the track and fires the listener once.
    /// The listener runs after the clock lock is released.
    fn settle(&self) {
        let finished = {
            let mut clock = self.lock_clock();
            let now = Instant::now();
            if clock.playing && clock.position_at(now, self.duration_ms) >= self.duration_ms {
                clock.playing = false;
                clock.anchor_position_ms = self.duration_ms;
                clock.anchor = now;
                true
            } else {
                false
            }
        };

        if finished {
            let listener = self
                .on_completion
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(listener) = listener.as_ref() {
                listener();
            }
        }
    }
}

impl AudioHandle for SimulatedAudioHandle {
    fn play(&self) {
        self.settle();
        let mut clock = self.lock_clock();
        if clock.released || clock.playing {
            return;
        }
        clock.playing = true;
        clock.anchor = Instant::now();
    }

    fn pause(&self) {
        let mut clock = self.lock_clock();
        let now = Instant::now();
        clock.anchor_position_ms = clock.position_at(now, self.duration_ms);
        clock.anchor = now;
        clock.playing = false;
    }

    fn stop(&self) {
        let mut clock = self.lock_clock();
        clock.playing = false;
        clock.anchor_position_ms = 0;
        clock.anchor = Instant::now();
    }

    fn seek_to(&self, position_ms: u64) {
        let mut clock = self.lock_clock();
        clock.anchor_position_ms = position_ms.min(self.duration_ms);
        clock.anchor = Instant::now();
    }

    fn is_playing(&self) -> bool {
        self.settle();
        self.lock_clock().playing
    }

    fn current_position_ms(&self) -> u64 {
        self.settle();
        self.lock_clock().position_at(Instant::now(), self.duration_ms)
    }

    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    fn set_on_completion(&self, listener: CompletionListener) {
        *self
            .on_completion
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(listener);
    }

    fn release(&self) {
        let mut clock = self.lock_clock();
        clock.playing = false;
        clock.released = true;
        drop(clock);
        self.on_completion
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
    }
}
