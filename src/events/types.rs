// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::PetType;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone + Send + Sync {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($name:ident) => {
        impl DomainEvent for $name {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// NAVIGATION EVENTS
// ============================================================================

/// Emitted after the router commits a new screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub from: String,
    pub to: String,
}

impl ScreenChanged {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            from: from.into(),
            to: to.into(),
        }
    }
}

impl_domain_event!(ScreenChanged);

// ============================================================================
// CART EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAddedToCart {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: String,
    pub cart_size: usize,
}

impl ProductAddedToCart {
    pub fn new(product_id: impl Into<String>, cart_size: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id: product_id.into(),
            cart_size,
        }
    }
}

impl_domain_event!(ProductAddedToCart);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartViewed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub cart_size: usize,
}

impl CartViewed {
    pub fn new(cart_size: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            cart_size,
        }
    }
}

impl_domain_event!(CartViewed);

// ============================================================================
// ADOPTION EVENTS
// ============================================================================

/// Emitted when the user picks a pet to adopt from the gallery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoptionStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub pet_id: String,
}

impl AdoptionStarted {
    pub fn new(pet_id: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            pet_id: pet_id.into(),
        }
    }
}

impl_domain_event!(AdoptionStarted);

/// Emitted when an adoption request is finalized (availability untouched)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoptionRequested {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub pet_id: String,
}

impl AdoptionRequested {
    pub fn new(pet_id: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            pet_id: pet_id.into(),
        }
    }
}

impl_domain_event!(AdoptionRequested);

// ============================================================================
// PLAYBACK EVENTS
// ============================================================================

/// Emitted when an episode is bound to a fresh audio handle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackPrepared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub episode_id: String,
    pub pet_type: PetType,
}

impl PlaybackPrepared {
    pub fn new(episode_id: impl Into<String>, pet_type: PetType) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            episode_id: episode_id.into(),
            pet_type,
        }
    }
}

impl_domain_event!(PlaybackPrepared);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub episode_id: String,
    pub position_ms: u64,
}

impl PlaybackStarted {
    pub fn new(episode_id: impl Into<String>, position_ms: u64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            episode_id: episode_id.into(),
            position_ms,
        }
    }
}

impl_domain_event!(PlaybackStarted);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackPaused {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub episode_id: String,
    pub position_ms: u64,
}

impl PlaybackPaused {
    pub fn new(episode_id: impl Into<String>, position_ms: u64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            episode_id: episode_id.into(),
            position_ms,
        }
    }
}

impl_domain_event!(PlaybackPaused);

/// Emitted once per sampling tick while playing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackProgressUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub episode_id: String,
    pub progress: f32,
}

impl PlaybackProgressUpdated {
    pub fn new(episode_id: impl Into<String>, progress: f32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            episode_id: episode_id.into(),
            progress,
        }
    }
}

impl_domain_event!(PlaybackProgressUpdated);

/// Emitted when the handle reports end of track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub episode_id: String,
}

impl PlaybackCompleted {
    pub fn new(episode_id: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            episode_id: episode_id.into(),
        }
    }
}

impl_domain_event!(PlaybackCompleted);

/// Emitted when the active handle is torn down
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackReleased {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub episode_id: String,
}

impl PlaybackReleased {
    pub fn new(episode_id: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            episode_id: episode_id.into(),
        }
    }
}

impl_domain_event!(PlaybackReleased);
