// src/application/state.rs

use std::sync::Arc;

use crate::config::AppConfig;
use crate::data::sample_episodes;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::audio::{AudioBackend, SimulatedAudioBackend};
use crate::integrations::video::{SimulatedVideoBackend, VideoBackend};
use crate::repositories::{
    EpisodeRepository, InMemoryEpisodeRepository, InMemoryPetRepository, InMemoryProductRepository,
};
use crate::services::{
    AdoptionService, AudioPlayerCoordinator, CartService, CatalogService, NavigationService,
    TipsService,
};

/// Services shared by the app controller.
/// All fields are Arc-wrapped; the composition happens once at startup.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub navigation_service: Arc<NavigationService>,
    pub catalog_service: Arc<CatalogService>,
    pub cart_service: Arc<CartService>,
    pub adoption_service: Arc<AdoptionService>,
    pub tips_service: Arc<TipsService>,
    pub audio_coordinator: Arc<AudioPlayerCoordinator>,
    pub video_backend: Arc<dyn VideoBackend>,
}

impl AppState {
    /// Wires the sample repositories to the given media collaborators
    pub fn new(
        config: &AppConfig,
        audio_backend: Arc<dyn AudioBackend>,
        video_backend: Arc<dyn VideoBackend>,
    ) -> AppResult<Self> {
        let episode_repo = Arc::new(InMemoryEpisodeRepository::with_sample_data()?);
        Self::with_episode_repository(config, audio_backend, video_backend, episode_repo)
    }

    /// Same wiring with a caller-supplied episode catalog
    pub fn with_episode_repository(
        config: &AppConfig,
        audio_backend: Arc<dyn AudioBackend>,
        video_backend: Arc<dyn VideoBackend>,
        episode_repo: Arc<dyn EpisodeRepository>,
    ) -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());

        let product_repo = Arc::new(InMemoryProductRepository::with_sample_data()?);
        let pet_repo = Arc::new(InMemoryPetRepository::with_sample_data()?);

        Ok(Self {
            navigation_service: Arc::new(NavigationService::new(Arc::clone(&event_bus))),
            catalog_service: Arc::new(CatalogService::new(product_repo)?),
            cart_service: Arc::new(CartService::new(Arc::clone(&event_bus))),
            adoption_service: Arc::new(AdoptionService::new(pet_repo, Arc::clone(&event_bus))),
            tips_service: Arc::new(TipsService::new(episode_repo)),
            audio_coordinator: Arc::new(AudioPlayerCoordinator::new(
                audio_backend,
                Arc::clone(&event_bus),
                config.playback.clone(),
            )),
            video_backend,
            event_bus,
        })
    }

    /// Sample data with the clock-driven media backends
    pub fn simulated(config: &AppConfig) -> AppResult<Self> {
        let audio_backend = SimulatedAudioBackend::from_episodes(&sample_episodes());
        Self::new(
            config,
            Arc::new(audio_backend),
            Arc::new(SimulatedVideoBackend::new()),
        )
    }
}
