// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - One view model per screen; rendering is a pure projection of state
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::Serialize;

use crate::domain::{AudioEpisode, Pet, PetType, Product, ProductCategory};
use crate::services::EmptyState;

// ============================================================================
// CATALOG DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductCardDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price_label: String,
    pub category: ProductCategory,
    pub category_name: String,
    pub category_color: String,
    pub image: Option<String>,
    pub rating: f32,
    pub in_stock: bool,
}

impl From<&Product> for ProductCardDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price_label: product.price_label(),
            category: product.category,
            category_name: product.category.display_name().to_string(),
            category_color: product.category.color().to_string(),
            image: product
                .image_url
                .clone()
                .or_else(|| product.image_res.clone()),
            rating: product.rating,
            in_stock: product.in_stock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryChipDto {
    pub category: ProductCategory,
    pub name: String,
    pub color: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView {
    pub title: String,
    pub cart_count: usize,
    pub categories: Vec<CategoryChipDto>,
    pub section_title: String,
    pub products: Vec<ProductCardDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetailView {
    pub title: String,
    pub product: ProductCardDto,
    pub detailed_description: String,
    pub additional_info: String,
}

// ============================================================================
// ADOPTION DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetCardDto {
    pub id: String,
    pub name: String,
    pub pet_type: PetType,
    pub breed: String,
    pub age: String,
    pub description: String,
    pub image: String,
    pub is_available: bool,
    /// "Disponible" / "Adoptado"
    pub status_label: String,
    /// Adopt button text; the button is disabled for adopted pets
    pub action_label: String,
}

impl From<&Pet> for PetCardDto {
    fn from(pet: &Pet) -> Self {
        let (status_label, action_label) = if pet.is_available {
            ("Disponible", "Adoptar")
        } else {
            ("Adoptado", "Adoptado")
        };

        Self {
            id: pet.id.clone(),
            name: pet.name.clone(),
            pet_type: pet.pet_type,
            breed: pet.breed.clone(),
            age: pet.age.clone(),
            description: pet.description.clone(),
            image: pet.image.clone(),
            is_available: pet.is_available,
            status_label: status_label.to_string(),
            action_label: action_label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryView {
    pub title: String,
    pub heading: String,
    pub subtitle: String,
    pub pets: Vec<PetCardDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoDto {
    pub uri: String,
    pub is_playing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdoptionDetailView {
    pub title: String,
    pub headline: String,
    pub age: String,
    pub about_title: String,
    pub detailed_description: String,
    pub personality: String,
    pub health_status: String,
    pub requirements: String,
    pub video: Option<VideoDto>,
    pub finalize_label: String,
}

impl AdoptionDetailView {
    pub fn new(pet: &Pet, video: Option<VideoDto>) -> Self {
        Self {
            title: format!("Adoptar a {}", pet.name),
            headline: pet.headline(),
            age: pet.age.clone(),
            about_title: format!("Sobre {}", pet.name),
            detailed_description: pet.detailed_description.clone(),
            personality: pet.personality.clone(),
            health_status: pet.health_status.clone(),
            requirements: pet.requirements.clone(),
            video,
            finalize_label: "Finalizar adopción".to_string(),
        }
    }
}

// ============================================================================
// TIPS DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipsCategoryDto {
    pub pet_type: PetType,
    pub name: String,
    pub color: String,
    pub image: String,
}

impl From<PetType> for TipsCategoryDto {
    fn from(pet_type: PetType) -> Self {
        Self {
            pet_type,
            name: pet_type.display_name().to_string(),
            color: pet_type.accent_color().to_string(),
            image: pet_type.cover_image().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TipsView {
    pub title: String,
    pub heading: String,
    pub intro: String,
    pub categories: Vec<TipsCategoryDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EpisodeDto {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Unpadded "m:s" as shown in episode lists
    pub duration_label: String,
    pub category_label: String,
    pub pet_type: PetType,
    pub selected: bool,
}

impl EpisodeDto {
    pub fn new(episode: &AudioEpisode, selected: bool) -> Self {
        Self {
            id: episode.id.clone(),
            title: episode.title.clone(),
            description: episode.description.clone(),
            duration_label: episode.duration_label(),
            category_label: episode.category_label(),
            pet_type: episode.pet_type,
            selected,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerDto {
    pub title: String,
    pub description: String,
    pub is_playing: bool,
    pub progress: f32,
    /// Zero-padded "mm:ss"
    pub current_time: String,
    pub total_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AudioContent {
    Empty(EmptyState),
    Player {
        player: PlayerDto,
        episodes: Vec<EpisodeDto>,
        related_title: String,
        related: Vec<EpisodeDto>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioPlayerView {
    pub title: String,
    pub pet_type: PetType,
    pub accent_color: String,
    pub cover_image: String,
    pub content: AudioContent,
}

// ============================================================================
// SCREEN VIEW
// ============================================================================

/// What the active screen renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenView {
    Catalog(CatalogView),
    ProductDetail(ProductDetailView),
    PetGallery(GalleryView),
    PetAdoptionDetail(AdoptionDetailView),
    PetTips(TipsView),
    PetAudioPlayer(AudioPlayerView),
}
