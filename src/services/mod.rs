// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod adoption_service;
pub mod cart_service;
pub mod catalog_service;
pub mod navigation_service;
pub mod playback_coordinator;
pub mod progress_sampler;
pub mod tips_service;

pub use adoption_service::AdoptionService;

pub use cart_service::CartService;

pub use catalog_service::CatalogService;

pub use navigation_service::{transition, NavigationIntent, NavigationService, Screen};

pub use playback_coordinator::AudioPlayerCoordinator;

pub use progress_sampler::{
    progress_fraction,
    PlaybackConfig,
    PlaybackSession,
    ProgressCallback,
    ProgressSampler,
};

pub use tips_service::{EmptyState, TipsService};
