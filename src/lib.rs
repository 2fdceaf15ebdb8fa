// src/lib.rs
// PetShop - pet-supply storefront, adoption gallery and audio tips player
//
// Architecture:
// - Domain-centric: records and invariants live in domain/
// - Event-driven: services announce facts on a synchronous event bus
// - Explicit: screens are an enum, user actions are intents, no globals
// - Headless: every screen renders to a serializable view model
// - Media collaborators sit behind traits (integrations/)

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_audio_episode,
    validate_pet,
    validate_product,
    // Audio
    AudioEpisode,
    AudioResource,
    // Cart
    Cart,
    DomainError,
    // Pets
    Pet,
    PetType,
    // Products
    Product,
    ProductCategory,
};

// ============================================================================
// PUBLIC API - Error Types & Config
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{create_event_bus, DomainEvent, EventBus, EventLogEntry};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    EpisodeRepository,
    InMemoryEpisodeRepository,
    InMemoryPetRepository,
    InMemoryProductRepository,
    PetRepository,
    ProductRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AdoptionService,
    AudioPlayerCoordinator,
    CartService,
    CatalogService,
    NavigationIntent,
    NavigationService,
    PlaybackConfig,
    Screen,
    TipsService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, Intent, Notification, PetShopApp, ScreenView};

// Re-export application submodules
pub use application::dto;
