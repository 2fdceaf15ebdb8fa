// src/services/navigation_service.rs
//
// Screen router
//
// CRITICAL RULES:
// - `transition` is pure: (screen, intent) -> screen, no side effects
// - Exactly one screen is active; the initial screen is Catalog
// - Intents that the current screen cannot emit are rejected, state unchanged
// - The cart is NOT part of the router (add-to-cart is cross-cutting)

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{DomainError, DomainResult, Pet, PetType, Product};
use crate::error::AppResult;
use crate::events::{EventBus, ScreenChanged};

/// The active screen, with its payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "screen", content = "payload", rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Catalog,
    ProductDetail(Product),
    PetGallery,
    PetAdoptionDetail(Pet),
    PetTips,
    PetAudioPlayer(PetType),
}

impl Screen {
    /// Stable name used in logs and events
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Catalog => "catalog",
            Screen::ProductDetail(_) => "product_detail",
            Screen::PetGallery => "pet_gallery",
            Screen::PetAdoptionDetail(_) => "pet_adoption_detail",
            Screen::PetTips => "pet_tips",
            Screen::PetAudioPlayer(_) => "pet_audio_player",
        }
    }
}

/// Navigation requests emitted by screens
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationIntent {
    SelectProduct(Product),
    OpenGallery,
    OpenTips,
    Back,
    StartAdoption(Pet),
    FinalizeAdoption,
    SelectTipsCategory(PetType),
}

impl NavigationIntent {
    fn name(&self) -> &'static str {
        match self {
            NavigationIntent::SelectProduct(_) => "select_product",
            NavigationIntent::OpenGallery => "open_gallery",
            NavigationIntent::OpenTips => "open_tips",
            NavigationIntent::Back => "back",
            NavigationIntent::StartAdoption(_) => "start_adoption",
            NavigationIntent::FinalizeAdoption => "finalize_adoption",
            NavigationIntent::SelectTipsCategory(_) => "select_tips_category",
        }
    }
}

/// The router's state machine
pub fn transition(current: &Screen, intent: NavigationIntent) -> DomainResult<Screen> {
    use NavigationIntent as I;

    let next = match (current, intent) {
        (Screen::Catalog, I::SelectProduct(product)) => Screen::ProductDetail(product),
        (Screen::Catalog, I::OpenGallery) => Screen::PetGallery,
        (Screen::Catalog, I::OpenTips) => Screen::PetTips,

        (Screen::ProductDetail(_), I::Back) => Screen::Catalog,

        (Screen::PetGallery, I::StartAdoption(pet)) => Screen::PetAdoptionDetail(pet),
        (Screen::PetGallery, I::Back) => Screen::Catalog,

        (Screen::PetAdoptionDetail(_), I::Back | I::FinalizeAdoption) => Screen::PetGallery,

        (Screen::PetTips, I::SelectTipsCategory(pet_type)) => Screen::PetAudioPlayer(pet_type),
        (Screen::PetTips, I::Back) => Screen::Catalog,

        (Screen::PetAudioPlayer(_), I::Back) => Screen::PetTips,

        (screen, intent) => {
            return Err(DomainError::InvalidTransition(format!(
                "{} is not available on {}",
                intent.name(),
                screen.name()
            )))
        }
    };

    Ok(next)
}

pub struct NavigationService {
    event_bus: Arc<EventBus>,
}

impl NavigationService {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self { event_bus }
    }

    /// Validates the intent against the current screen without committing
    pub fn resolve(&self, current: &Screen, intent: NavigationIntent) -> AppResult<Screen> {
        transition(current, intent).map_err(|e| {
            log::warn!("Rejected navigation on {}: {}", current.name(), e);
            e.into()
        })
    }

    /// Announces a screen change once the caller has switched screens
    pub fn commit(&self, from: &Screen, to: &Screen) {
        log::info!("Navigation: {} -> {}", from.name(), to.name());
        self.event_bus.emit(ScreenChanged::new(from.name(), to.name()));
    }
}
