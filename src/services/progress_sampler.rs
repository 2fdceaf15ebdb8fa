// src/services/progress_sampler.rs
//
// Progress Sampler - repeating task owned by the audio coordinator
//
// - Never holds the session lock while invoking the progress callback
// - Ends when the coordinator releases the handle

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Notify;
use tokio::task::JoinHandle;

use crate::domain::AudioEpisode;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, PlaybackCompleted, PlaybackProgressUpdated};
use crate::integrations::audio::AudioHandle;

/// Observer invoked with `playhead / duration`
pub type ProgressCallback = Arc<dyn Fn(f32) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Time between two progress samples
    pub sample_interval_ms: u64,
    /// Distance covered by skip forward/backward
    pub skip_step_ms: u64,
    /// Keep ticking while paused (callback skipped); when false the task
    /// parks until playback resumes
    pub sample_while_paused: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            sample_interval_ms: 1000,
            skip_step_ms: 10_000,
            sample_while_paused: true,
        }
    }
}

/// Playback state shared between the coordinator and its sampling task
#[derive(Default)]
pub struct PlaybackSession {
    pub handle: Option<Box<dyn AudioHandle>>,
    pub episode: Option<AudioEpisode>,
    /// Cached flag; `AudioHandle::is_playing` is the live truth
    pub is_playing: bool,
    /// Playhead recorded on pause/seek/skip, restored on resume
    pub current_position_ms: u64,
}

pub(crate) type SharedSession = Arc<Mutex<PlaybackSession>>;
pub(crate) type SharedCallback = Arc<Mutex<Option<ProgressCallback>>>;

pub(crate) fn lock_session(session: &SharedSession) -> std::sync::MutexGuard<'_, PlaybackSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Everything the sampling task needs, cloned out of the coordinator
#[derive(Clone)]
pub(crate) struct SamplerContext {
    pub session: SharedSession,
    pub callback: SharedCallback,
    pub resume: Arc<Notify>,
    pub event_bus: Arc<EventBus>,
    /// Set by the handle's completion listener, cleared by whoever applies it
    pub completed: Arc<AtomicBool>,
}

enum Sample {
    Playing { episode_id: String, progress: f32 },
    Idle,
    Released,
}

/// Progress fraction with the zero-duration guard
pub fn progress_fraction(position_ms: u64, duration_ms: u64) -> f32 {
    if duration_ms > 0 {
        position_ms as f32 / duration_ms as f32
    } else {
        0.0
    }
}

impl SamplerContext {
    fn sample(&self) -> Sample {
        let session = lock_session(&self.session);
        let Some(handle) = session.handle.as_ref() else {
            return Sample::Released;
        };
        if !handle.is_playing() {
            return Sample::Idle;
        }

        let progress = progress_fraction(handle.current_position_ms(), handle.duration_ms());
        let episode_id = session
            .episode
            .as_ref()
            .map(|e| e.id.clone())
            .unwrap_or_default();

        Sample::Playing {
            episode_id,
            progress,
        }
    }

    fn current_callback(&self) -> Option<ProgressCallback> {
        self.callback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn report(&self, episode_id: String, progress: f32) {
        if let Some(callback) = self.current_callback() {
            callback(progress);
        }
        self.event_bus
            .emit(PlaybackProgressUpdated::new(episode_id, progress));
    }

    /// Applies a pending end of track to the locked session: rewinds the
    /// recorded playhead. Returns the episode id when there was one.
    pub(crate) fn take_completion(&self, session: &mut PlaybackSession) -> Option<String> {
        if !self.completed.swap(false, Ordering::SeqCst) {
            return None;
        }

        session.is_playing = false;
        session.current_position_ms = 0;
        Some(
            session
                .episode
                .as_ref()
                .map(|e| e.id.clone())
                .unwrap_or_default(),
        )
    }

    /// Reports zero progress for a completion applied by `take_completion`
    pub(crate) fn announce_completion(&self, episode_id: String) {
        log::info!("Playback completed for episode {}", episode_id);
        if let Some(callback) = self.current_callback() {
            callback(0.0);
        }
        self.event_bus.emit(PlaybackCompleted::new(episode_id));
    }

    fn handle_completion(&self) {
        let completed = {
            let mut session = lock_session(&self.session);
            self.take_completion(&mut session)
        };
        if let Some(episode_id) = completed {
            self.announce_completion(episode_id);
        }
    }
}

async fn run_sampling_loop(
    ctx: SamplerContext,
    mut completions: UnboundedReceiver<()>,
    config: PlaybackConfig,
) {
    let interval = Duration::from_millis(config.sample_interval_ms);

    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            signal = completions.recv() => {
                match signal {
                    Some(()) => {
                        ctx.handle_completion();
                        continue;
                    }
                    None => break,
                }
            }
        }

        match ctx.sample() {
            Sample::Released => break,
            Sample::Playing {
                episode_id,
                progress,
            } => ctx.report(episode_id, progress),
            Sample::Idle if !config.sample_while_paused => {
                tokio::select! {
                    _ = ctx.resume.notified() => {}
                    signal = completions.recv() => {
                        match signal {
                            Some(()) => ctx.handle_completion(),
                            None => break,
                        }
                    }
                }
            }
            Sample::Idle => {}
        }
    }

    log::debug!("Progress sampling loop finished");
}

pub struct ProgressSampler {
    config: PlaybackConfig,
    task_handle: Mutex<Option<JoinHandle<()>>>,
}

impl ProgressSampler {
    pub fn new(config: PlaybackConfig) -> Self {
        Self {
            config,
            task_handle: Mutex::new(None),
        }
    }

    /// Spawns the sampling task on the current tokio runtime
    pub(crate) fn start(
        &self,
        ctx: SamplerContext,
        completions: UnboundedReceiver<()>,
    ) -> AppResult<()> {
        self.stop();

        let runtime = tokio::runtime::Handle::try_current().map_err(|_| {
            AppError::Playback("Progress sampling requires a tokio runtime".to_string())
        })?;
        let task = runtime.spawn(run_sampling_loop(ctx, completions, self.config.clone()));

        *self
            .task_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(task);
        Ok(())
    }

    /// Cancels the pending tick; no-op when not running
    pub fn stop(&self) {
        let mut handle = self
            .task_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(task) = handle.take() {
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task_handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for ProgressSampler {
    fn drop(&mut self) {
        self.stop();
    }
}
