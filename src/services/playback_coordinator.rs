// src/services/playback_coordinator.rs
//
// Audio Playback Coordinator
//
// Owns at most one audio handle at a time and exposes the transport
// controls of the tips player:
// - prepare_episode replaces the handle wholesale (old released first)
// - toggle/skip/seek drive the handle and record the playhead
// - a ProgressSampler task reports playhead/duration once per interval
// - release_media_player is idempotent and cancels the sampler

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::Notify;

use crate::domain::AudioEpisode;
use crate::error::AppResult;
use crate::events::{EventBus, PlaybackPaused, PlaybackPrepared, PlaybackReleased, PlaybackStarted};
use crate::integrations::audio::{AudioBackend, AudioHandle};
use crate::services::progress_sampler::{
    lock_session, PlaybackConfig, PlaybackSession, ProgressCallback, ProgressSampler,
    SamplerContext,
};

pub struct AudioPlayerCoordinator {
    backend: Arc<dyn AudioBackend>,
    config: PlaybackConfig,
    ctx: SamplerContext,
    sampler: ProgressSampler,
}

impl AudioPlayerCoordinator {
    pub fn new(
        backend: Arc<dyn AudioBackend>,
        event_bus: Arc<EventBus>,
        config: PlaybackConfig,
    ) -> Self {
        Self {
            backend,
            sampler: ProgressSampler::new(config.clone()),
            config,
            ctx: SamplerContext {
                session: Arc::new(Mutex::new(PlaybackSession::default())),
                callback: Arc::new(Mutex::new(None)),
                resume: Arc::new(Notify::new()),
                event_bus,
                completed: Arc::new(AtomicBool::new(false)),
            },
        }
    }

    fn session(&self) -> std::sync::MutexGuard<'_, PlaybackSession> {
        lock_session(&self.ctx.session)
    }

    /// Binds a fresh handle to the episode's resource and starts sampling.
    ///
    /// Any active handle is released first. Creation failures are returned
    /// as-is and leave the coordinator without a handle.
    pub fn prepare_episode(&self, episode: &AudioEpisode) -> AppResult<()> {
        if self.session().handle.is_some() {
            self.release_media_player();
        }

        let handle = self.backend.create(&episode.audio_resource).map_err(|e| {
            log::warn!("Could not open audio for episode {}: {}", episode.id, e);
            e
        })?;

        // The listener may fire while the session lock is held; it only flags
        // the end and wakes the sampler
        self.ctx.completed.store(false, Ordering::SeqCst);
        let completed = Arc::clone(&self.ctx.completed);
        let (completion_tx, completion_rx) = tokio::sync::mpsc::unbounded_channel();
        handle.set_on_completion(Box::new(move || {
            completed.store(true, Ordering::SeqCst);
            let _ = completion_tx.send(());
        }));

        {
            let mut session = self.session();
            session.handle = Some(handle);
            session.episode = Some(episode.clone());
            session.is_playing = false;
            session.current_position_ms = 0;
        }

        if let Err(e) = self.sampler.start(self.ctx.clone(), completion_rx) {
            self.release_media_player();
            return Err(e);
        }

        log::info!("Prepared episode {} ({})", episode.id, episode.pet_type);
        self.ctx
            .event_bus
            .emit(PlaybackPrepared::new(episode.id.clone(), episode.pet_type));
        Ok(())
    }

    /// Pauses (recording the playhead) or resumes from the recorded playhead.
    /// Returns the new playing state; `false` when no handle is active.
    ///
    /// An end of track not yet seen by the sampler rewinds to 0 before
    /// resuming.
    pub fn toggle_playback(&self) -> bool {
        let (completed, now_playing, episode_id, position_ms) = {
            let mut guard = self.session();
            let session = &mut *guard;
            let was_playing = match session.handle.as_ref() {
                Some(handle) => handle.is_playing(),
                None => return false,
            };
            let completed = self.ctx.take_completion(session);

            let Some(handle) = session.handle.as_ref() else {
                return false;
            };
            if was_playing {
                handle.pause();
                session.current_position_ms = handle.current_position_ms();
                session.is_playing = false;
            } else {
                handle.seek_to(session.current_position_ms);
                handle.play();
                session.is_playing = true;
            }

            let episode_id = session
                .episode
                .as_ref()
                .map(|e| e.id.clone())
                .unwrap_or_default();
            (completed, session.is_playing, episode_id, session.current_position_ms)
        };

        if let Some(completed_id) = completed {
            self.ctx.announce_completion(completed_id);
        }

        if now_playing {
            self.ctx.resume.notify_one();
            self.ctx
                .event_bus
                .emit(PlaybackStarted::new(episode_id, position_ms));
        } else {
            self.ctx
                .event_bus
                .emit(PlaybackPaused::new(episode_id, position_ms));
        }
        now_playing
    }

    pub fn skip_forward(&self) {
        let step = self.config.skip_step_ms;
        self.move_playhead(|handle| {
            handle
                .current_position_ms()
                .saturating_add(step)
                .min(handle.duration_ms())
        });
    }

    pub fn skip_backward(&self) {
        let step = self.config.skip_step_ms;
        self.move_playhead(|handle| handle.current_position_ms().saturating_sub(step));
    }

    /// Moves the playhead to `fraction × duration`.
    ///
    /// The fraction is not validated; callers pass values in `[0, 1]`.
    /// Negative results saturate to zero.
    pub fn seek_to(&self, fraction: f32) {
        self.move_playhead(|handle| (fraction * handle.duration_ms() as f32) as u64);
    }

    /// Seeks the handle to the computed position and records it
    fn move_playhead<F>(&self, target: F)
    where
        F: FnOnce(&dyn AudioHandle) -> u64,
    {
        let completed = {
            let mut guard = self.session();
            let session = &mut *guard;
            let Some(handle) = session.handle.as_ref() else {
                return;
            };
            let new_position = target(&**handle);
            handle.seek_to(new_position);

            let completed = self.ctx.take_completion(session);
            session.current_position_ms = new_position;
            completed
        };

        if let Some(episode_id) = completed {
            self.ctx.announce_completion(episode_id);
        }
    }

    /// Registers the single progress observer (last write wins)
    pub fn set_progress_callback<F>(&self, callback: F)
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        let callback: ProgressCallback = Arc::new(callback);
        *self
            .ctx
            .callback
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(callback);
    }

    /// Stops and releases the active handle and cancels sampling.
    /// Safe to call when nothing is prepared.
    pub fn release_media_player(&self) {
        let released = {
            let mut session = self.session();
            let handle = session.handle.take();
            session.is_playing = false;
            handle.map(|handle| {
                if handle.is_playing() {
                    handle.stop();
                }
                handle.release();
                session
                    .episode
                    .as_ref()
                    .map(|e| e.id.clone())
                    .unwrap_or_default()
            })
        };

        self.sampler.stop();

        if let Some(episode_id) = released {
            log::debug!("Released audio handle for episode {}", episode_id);
            self.ctx.event_bus.emit(PlaybackReleased::new(episode_id));
        }
    }

    /// Live playing state of the handle, not the cached flag
    pub fn is_playing_episode(&self) -> bool {
        self.session()
            .handle
            .as_ref()
            .map(|h| h.is_playing())
            .unwrap_or(false)
    }

    /// Formats seconds as zero-padded "mm:ss"
    pub fn format_time(seconds: f32) -> String {
        let total = seconds.max(0.0) as u64;
        format!("{:02}:{:02}", total / 60, total % 60)
    }

    /// Advertised duration of the prepared episode; "00:00" when none
    pub fn formatted_duration(&self) -> String {
        self.session()
            .episode
            .as_ref()
            .map(|e| Self::format_time(e.duration_seconds as f32))
            .unwrap_or_else(|| "00:00".to_string())
    }

    pub fn current_episode(&self) -> Option<AudioEpisode> {
        self.session().episode.clone()
    }

    /// Playhead recorded by the last pause/seek/skip
    pub fn playhead_ms(&self) -> u64 {
        self.session().current_position_ms
    }

    pub fn has_active_handle(&self) -> bool {
        self.session().handle.is_some()
    }

    pub fn is_sampling(&self) -> bool {
        self.sampler.is_running()
    }
}

impl Drop for AudioPlayerCoordinator {
    fn drop(&mut self) {
        self.release_media_player();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AudioResource, PetType};
    use crate::error::AppError;
    use crate::integrations::audio::{MockAudioBackend, MockAudioHandle, SimulatedAudioBackend};
    use std::time::Duration;

    fn episode(id: &str, resource: &str, duration_seconds: u32) -> AudioEpisode {
        AudioEpisode {
            id: id.to_string(),
            title: format!("Episode {}", id),
            description: String::new(),
            duration_seconds,
            audio_resource: AudioResource::new(resource),
            pet_type: PetType::Dog,
        }
    }

    fn coordinator_with_track(resource: &str, duration_ms: u64) -> (AudioPlayerCoordinator, Arc<EventBus>) {
        coordinator_with_config(resource, duration_ms, PlaybackConfig::default())
    }

    fn coordinator_with_config(
        resource: &str,
        duration_ms: u64,
        config: PlaybackConfig,
    ) -> (AudioPlayerCoordinator, Arc<EventBus>) {
        let backend = SimulatedAudioBackend::new().with_track(AudioResource::new(resource), duration_ms);
        let bus = Arc::new(EventBus::new());
        let coordinator = AudioPlayerCoordinator::new(Arc::new(backend), Arc::clone(&bus), config);
        (coordinator, bus)
    }

    fn recorder(coordinator: &AudioPlayerCoordinator) -> Arc<Mutex<Vec<f32>>> {
        let values = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&values);
        coordinator.set_progress_callback(move |p| sink.lock().unwrap().push(p));
        values
    }

    fn assert_close(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len(), "got {:?}", actual);
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-4, "got {:?}, expected {:?}", actual, expected);
        }
    }

    #[test]
    fn test_toggle_without_handle_is_noop() {
        let (coordinator, _) = coordinator_with_track("r", 10_000);
        assert!(!coordinator.toggle_playback());
        assert!(!coordinator.is_playing_episode());
        coordinator.skip_forward();
        coordinator.seek_to(0.5);
        assert_eq!(coordinator.playhead_ms(), 0);
    }

    #[test]
    fn test_release_without_handle_is_noop() {
        let (coordinator, bus) = coordinator_with_track("r", 10_000);
        coordinator.release_media_player();
        coordinator.release_media_player();
        assert!(bus.get_event_log().is_empty());
    }

    #[test]
    fn test_format_time() {
        assert_eq!(AudioPlayerCoordinator::format_time(65.0), "01:05");
        assert_eq!(AudioPlayerCoordinator::format_time(0.0), "00:00");
        assert_eq!(AudioPlayerCoordinator::format_time(59.9), "00:59");
        assert_eq!(AudioPlayerCoordinator::format_time(600.0), "10:00");
    }

    #[test]
    fn test_formatted_duration_without_episode() {
        let (coordinator, _) = coordinator_with_track("r", 10_000);
        assert_eq!(coordinator.formatted_duration(), "00:00");
    }

    #[test]
    fn test_prepare_without_runtime_fails_and_releases() {
        let (coordinator, _) = coordinator_with_track("r", 10_000);
        let result = coordinator.prepare_episode(&episode("e1", "r", 10));
        assert!(matches!(result, Err(AppError::Playback(_))));
        assert!(!coordinator.has_active_handle());
    }

    #[tokio::test(start_paused = true)]
    async fn test_prepare_and_toggle() {
        let (coordinator, bus) = coordinator_with_track("r", 100_000);
        coordinator.prepare_episode(&episode("e1", "r", 100)).unwrap();
        assert_eq!(coordinator.formatted_duration(), "01:40");
        assert!(coordinator.is_sampling());

        assert!(coordinator.toggle_playback());
        assert!(coordinator.is_playing_episode());

        tokio::time::sleep(Duration::from_millis(4_200)).await;
        assert!(!coordinator.toggle_playback());
        assert!(!coordinator.is_playing_episode());
        assert_eq!(coordinator.playhead_ms(), 4_200);

        let types = bus.emitted_types();
        assert_eq!(types.first().map(String::as_str), Some("PlaybackPrepared"));
        assert!(types.contains(&"PlaybackStarted".to_string()));
        assert_eq!(types.last().map(String::as_str), Some("PlaybackPaused"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_restores_recorded_playhead() {
        let (coordinator, _) = coordinator_with_track("r", 100_000);
        coordinator.prepare_episode(&episode("e1", "r", 100)).unwrap();
        coordinator.seek_to(0.25);
        assert_eq!(coordinator.playhead_ms(), 25_000);

        coordinator.toggle_playback();
        tokio::time::sleep(Duration::from_millis(1_000)).await;
        coordinator.toggle_playback();
        assert_eq!(coordinator.playhead_ms(), 26_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_seek_boundaries() {
        let (coordinator, _) = coordinator_with_track("r", 30_000);
        coordinator.prepare_episode(&episode("e1", "r", 30)).unwrap();

        coordinator.seek_to(0.0);
        assert_eq!(coordinator.playhead_ms(), 0);
        coordinator.seek_to(1.0);
        assert_eq!(coordinator.playhead_ms(), 30_000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_is_clamped() {
        let (coordinator, _) = coordinator_with_track("r", 30_000);
        coordinator.prepare_episode(&episode("e1", "r", 30)).unwrap();

        coordinator.skip_backward();
        assert_eq!(coordinator.playhead_ms(), 0);

        coordinator.skip_forward();
        assert_eq!(coordinator.playhead_ms(), 10_000);

        coordinator.seek_to(1.0);
        coordinator.skip_forward();
        assert_eq!(coordinator.playhead_ms(), 30_000);

        coordinator.seek_to(0.1);
        coordinator.skip_backward();
        assert_eq!(coordinator.playhead_ms(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_progress_reported_each_tick_while_playing() {
        let (coordinator, _) = coordinator_with_track("r", 100_000);
        let values = recorder(&coordinator);
        coordinator.prepare_episode(&episode("e1", "r", 100)).unwrap();
        coordinator.toggle_playback();

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_close(&values.lock().unwrap(), &[0.01, 0.02, 0.03]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_ticks_skip_callback_but_keep_sampling() {
        let (coordinator, _) = coordinator_with_track("r", 100_000);
        let values = recorder(&coordinator);
        coordinator.prepare_episode(&episode("e1", "r", 100)).unwrap();

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert!(values.lock().unwrap().is_empty());
        assert!(coordinator.is_sampling());
    }

    #[tokio::test(start_paused = true)]
    async fn test_parked_sampler_resumes_with_playback() {
        let config = PlaybackConfig {
            sample_while_paused: false,
            ..PlaybackConfig::default()
        };
        let (coordinator, _) = coordinator_with_config("r", 100_000, config);
        let values = recorder(&coordinator);
        coordinator.prepare_episode(&episode("e1", "r", 100)).unwrap();

        tokio::time::sleep(Duration::from_millis(2_500)).await;
        assert!(values.lock().unwrap().is_empty());

        coordinator.toggle_playback();
        tokio::time::sleep(Duration::from_millis(2_100)).await;
        assert!(!values.lock().unwrap().is_empty());
        assert!(coordinator.is_sampling());
    }

    #[tokio::test(start_paused = true)]
    async fn test_completion_rewinds_and_reports_zero() {
        let (coordinator, bus) = coordinator_with_track("r", 2_000);
        let values = recorder(&coordinator);
        coordinator.prepare_episode(&episode("e1", "r", 2)).unwrap();
        coordinator.toggle_playback();

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert_close(&values.lock().unwrap(), &[0.5, 0.0]);
        assert!(!coordinator.is_playing_episode());
        assert_eq!(coordinator.playhead_ms(), 0);
        assert!(bus.emitted_types().contains(&"PlaybackCompleted".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_after_unseen_end_restarts_from_zero() {
        let (coordinator, bus) = coordinator_with_track("r", 2_000);
        let values = recorder(&coordinator);
        coordinator.prepare_episode(&episode("e1", "r", 2)).unwrap();
        coordinator.seek_to(0.25);
        coordinator.toggle_playback();

        // Track ends at 1500 ms; the next tick would be at 2000 ms
        tokio::time::sleep(Duration::from_millis(1_700)).await;
        assert!(coordinator.toggle_playback());
        assert_eq!(coordinator.playhead_ms(), 0);
        assert!(coordinator.is_playing_episode());

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!coordinator.toggle_playback());
        assert_eq!(coordinator.playhead_ms(), 200);

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert_eq!(coordinator.playhead_ms(), 200);
        assert_close(&values.lock().unwrap(), &[0.75, 0.0]);

        let types = bus.emitted_types();
        let completed: Vec<usize> = types
            .iter()
            .enumerate()
            .filter(|(_, t)| t.as_str() == "PlaybackCompleted")
            .map(|(i, _)| i)
            .collect();
        let last_started = types.iter().rposition(|t| t == "PlaybackStarted").unwrap();
        assert_eq!(completed.len(), 1);
        assert!(completed[0] < last_started);
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_after_unseen_end_reports_completion() {
        let (coordinator, bus) = coordinator_with_track("r", 2_000);
        coordinator.prepare_episode(&episode("e1", "r", 2)).unwrap();
        coordinator.seek_to(0.75);
        coordinator.toggle_playback();

        // Ends at 500 ms, before the first tick
        tokio::time::sleep(Duration::from_millis(700)).await;
        coordinator.skip_backward();
        assert_eq!(coordinator.playhead_ms(), 0);
        assert!(!coordinator.is_playing_episode());
        assert!(bus.emitted_types().contains(&"PlaybackCompleted".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_cancels_sampling() {
        let (coordinator, bus) = coordinator_with_track("r", 100_000);
        let values = recorder(&coordinator);
        coordinator.prepare_episode(&episode("e1", "r", 100)).unwrap();
        coordinator.toggle_playback();

        coordinator.release_media_player();
        assert!(!coordinator.is_sampling());
        assert!(!coordinator.has_active_handle());
        assert!(!coordinator.is_playing_episode());

        tokio::time::sleep(Duration::from_millis(3_000)).await;
        assert!(values.lock().unwrap().is_empty());
        assert_eq!(bus.emitted_types().last().map(String::as_str), Some("PlaybackReleased"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_last_callback_wins() {
        let (coordinator, _) = coordinator_with_track("r", 100_000);
        let first = recorder(&coordinator);
        let second = recorder(&coordinator);
        coordinator.prepare_episode(&episode("e1", "r", 100)).unwrap();
        coordinator.toggle_playback();

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        assert!(first.lock().unwrap().is_empty());
        assert_eq!(second.lock().unwrap().len(), 1);
    }

    fn mock_handle_expecting_release() -> MockAudioHandle {
        let mut handle = MockAudioHandle::new();
        handle.expect_set_on_completion().return_const(());
        handle.expect_is_playing().return_const(false);
        handle.expect_duration_ms().return_const(10_000u64);
        handle.expect_release().times(1).return_const(());
        handle
    }

    #[tokio::test(start_paused = true)]
    async fn test_preparing_again_releases_previous_handle() {
        let mut backend = MockAudioBackend::new();
        backend
            .expect_create()
            .times(2)
            .returning(|_| Ok(Box::new(mock_handle_expecting_release())));

        let coordinator = AudioPlayerCoordinator::new(
            Arc::new(backend),
            Arc::new(EventBus::new()),
            PlaybackConfig::default(),
        );
        coordinator.prepare_episode(&episode("e1", "a", 10)).unwrap();
        coordinator.prepare_episode(&episode("e2", "b", 10)).unwrap();
        assert_eq!(coordinator.current_episode().map(|e| e.id), Some("e2".to_string()));
        coordinator.release_media_player();
    }

    #[tokio::test(start_paused = true)]
    async fn test_release_stops_playing_handle() {
        let mut backend = MockAudioBackend::new();
        backend.expect_create().times(1).returning(|_| {
            let mut handle = MockAudioHandle::new();
            handle.expect_set_on_completion().return_const(());
            handle.expect_is_playing().return_const(true);
            handle.expect_stop().times(1).return_const(());
            handle.expect_release().times(1).return_const(());
            Ok(Box::new(handle))
        });

        let coordinator = AudioPlayerCoordinator::new(
            Arc::new(backend),
            Arc::new(EventBus::new()),
            PlaybackConfig::default(),
        );
        coordinator.prepare_episode(&episode("e1", "a", 10)).unwrap();
        coordinator.release_media_player();
    }

    #[tokio::test(start_paused = true)]
    async fn test_creation_failure_propagates() {
        let mut backend = MockAudioBackend::new();
        backend
            .expect_create()
            .returning(|_| Err(AppError::Playback("corrupt resource".to_string())));

        let coordinator = AudioPlayerCoordinator::new(
            Arc::new(backend),
            Arc::new(EventBus::new()),
            PlaybackConfig::default(),
        );
        let result = coordinator.prepare_episode(&episode("e1", "a", 10));
        assert!(matches!(result, Err(AppError::Playback(_))));
        assert!(!coordinator.toggle_playback());
        assert!(!coordinator.is_sampling());
    }
}
