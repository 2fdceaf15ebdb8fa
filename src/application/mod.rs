// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the presentation and the services
// - Intents come in, screen view models go out
// - It translates between DTOs and domain entities

pub mod app;
pub mod dto;
pub mod error_handling;
pub mod intent;
pub mod notification;
pub mod state;

pub use app::PetShopApp;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use intent::Intent;
pub use notification::{Notification, NotificationLength, NotificationLevel};
pub use state::AppState;
