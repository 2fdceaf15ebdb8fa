// src/application/app.rs
//
// Top-level controller
//
// ARCHITECTURE:
// - Owns the router state, the session cart and the per-screen resources
// - `dispatch` is the only mutation path; `render` is a pure projection
// - Screen resources are acquired on entry and released on exit:
//   the audio session for PetAudioPlayer, the video session for
//   PetAdoptionDetail
// - A failed entry leaves the previous screen and its resources intact

use std::sync::{Arc, Mutex, PoisonError};

use crate::application::dto::{
    AdoptionDetailView, AudioContent, AudioPlayerView, CatalogView, CategoryChipDto, EpisodeDto,
    GalleryView, PetCardDto, PlayerDto, ProductCardDto, ProductDetailView, ScreenView,
    TipsCategoryDto, TipsView, VideoDto,
};
use crate::application::error_handling::ErrorResponse;
use crate::application::intent::Intent;
use crate::application::notification::Notification;
use crate::application::state::AppState;
use crate::domain::{AudioEpisode, Cart, DomainError, PetType, ProductCategory};
use crate::error::{AppError, AppResult};
use crate::integrations::video::VideoSession;
use crate::services::{AudioPlayerCoordinator, CatalogService, NavigationIntent, Screen, TipsService};

/// Per-visit state of the tips player screen
struct AudioScreen {
    episodes: Vec<AudioEpisode>,
    selected: Option<AudioEpisode>,
}

/// Resources acquired while entering a screen, installed on commit
#[derive(Default)]
struct ScreenResources {
    audio: Option<AudioScreen>,
    video: Option<VideoSession>,
}

pub struct PetShopApp {
    state: AppState,
    screen: Screen,
    cart: Cart,
    category_filter: Option<ProductCategory>,
    audio: Option<AudioScreen>,
    video: Option<VideoSession>,
    /// Last value reported by the progress sampler
    progress: Arc<Mutex<f32>>,
    notifications: Vec<Notification>,
}

impl PetShopApp {
    pub fn new(state: AppState) -> Self {
        let progress = Arc::new(Mutex::new(0.0_f32));
        let sink = Arc::clone(&progress);
        state.audio_coordinator.set_progress_callback(move |value| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = value;
        });

        Self {
            state,
            screen: Screen::default(),
            cart: Cart::new(),
            category_filter: None,
            audio: None,
            video: None,
            progress,
            notifications: Vec::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn category_filter(&self) -> Option<ProductCategory> {
        self.category_filter
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drains pending notifications (the UI shows each one once)
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Applies an intent, turning failures into an error notification.
    /// The screen is left unchanged when the intent fails.
    pub fn handle(&mut self, intent: Intent) -> Option<ErrorResponse> {
        match self.dispatch(intent) {
            Ok(()) => None,
            Err(error) => {
                log::warn!("Intent failed on {}: {}", self.screen.name(), error);
                let response = ErrorResponse::from_app_error(error);
                self.notifications
                    .push(Notification::error(response.message.clone()));
                Some(response)
            }
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> AppResult<()> {
        log::debug!("Dispatching {:?} on {}", intent, self.screen.name());

        match intent {
            Intent::SelectCategory { category } => {
                self.require_catalog("select_category")?;
                self.category_filter = CatalogService::toggle_category(self.category_filter, category);
                Ok(())
            }
            Intent::SelectProduct { product_id } => {
                let product = self.state.catalog_service.get_product(&product_id)?;
                self.navigate(NavigationIntent::SelectProduct(product))
            }
            Intent::AddToCart { product_id } => self.add_to_cart(&product_id),
            Intent::ViewCart => {
                self.require_catalog("view_cart")?;
                let message = self.state.cart_service.view_cart(&self.cart);
                self.notifications.push(Notification::short(message));
                Ok(())
            }
            Intent::Search => {
                self.require_catalog("search")?;
                self.notifications.push(Notification::short("Buscar productos"));
                Ok(())
            }
            Intent::OpenGallery => self.navigate(NavigationIntent::OpenGallery),
            Intent::OpenTips => self.navigate(NavigationIntent::OpenTips),
            Intent::Back => self.navigate(NavigationIntent::Back),
            Intent::StartAdoption { pet_id } => self.start_adoption(&pet_id),
            Intent::FinalizeAdoption => self.finalize_adoption(),
            Intent::ToggleVideo => {
                let video = self
                    .video
                    .as_ref()
                    .ok_or_else(|| self.unavailable("toggle_video"))?;
                video.toggle();
                Ok(())
            }
            Intent::SelectTipsCategory { pet_type } => {
                self.navigate(NavigationIntent::SelectTipsCategory(pet_type))
            }
            Intent::SelectEpisode { episode_id } => self.select_episode(&episode_id),
            Intent::TogglePlayback => {
                self.require_audio("toggle_playback")?;
                self.state.audio_coordinator.toggle_playback();
                Ok(())
            }
            Intent::SkipForward => {
                self.require_audio("skip_forward")?;
                self.state.audio_coordinator.skip_forward();
                Ok(())
            }
            Intent::SkipBackward => {
                self.require_audio("skip_backward")?;
                self.state.audio_coordinator.skip_backward();
                Ok(())
            }
            Intent::SeekTo { fraction } => {
                self.require_audio("seek_to")?;
                self.state.audio_coordinator.seek_to(fraction);
                self.set_progress(fraction);
                Ok(())
            }
        }
    }

    // ------------------------------------------------------------------
    // Intent handlers
    // ------------------------------------------------------------------

    /// Cross-cutting: appends on any screen without navigating
    fn add_to_cart(&mut self, product_id: &str) -> AppResult<()> {
        let product = self.state.catalog_service.get_product(product_id)?;
        let message = self.state.cart_service.add_to_cart(&mut self.cart, product);
        self.notifications.push(Notification::short(message));
        Ok(())
    }

    fn start_adoption(&mut self, pet_id: &str) -> AppResult<()> {
        let pet = self.state.adoption_service.get_pet(pet_id)?;
        let next = self
            .state
            .navigation_service
            .resolve(&self.screen, NavigationIntent::StartAdoption(pet.clone()))?;

        let message = self.state.adoption_service.start_adoption(&pet)?;
        self.switch_to(next)?;
        self.notifications.push(Notification::short(message));
        Ok(())
    }

    fn finalize_adoption(&mut self) -> AppResult<()> {
        let Screen::PetAdoptionDetail(pet) = &self.screen else {
            return Err(self.unavailable("finalize_adoption"));
        };
        let pet = pet.clone();

        let next = self
            .state
            .navigation_service
            .resolve(&self.screen, NavigationIntent::FinalizeAdoption)?;
        let message = self.state.adoption_service.finalize_adoption(&pet);
        self.switch_to(next)?;
        self.notifications.push(Notification::long(message));
        Ok(())
    }

    /// Replaces the playback session with another episode of this species
    fn select_episode(&mut self, episode_id: &str) -> AppResult<()> {
        let audio = self
            .audio
            .as_ref()
            .ok_or_else(|| self.unavailable("select_episode"))?;

        let episode = audio
            .episodes
            .iter()
            .find(|e| e.id == episode_id)
            .cloned()
            .ok_or_else(|| {
                AppError::Domain(DomainError::NotFound(format!(
                    "episode {} in this category",
                    episode_id
                )))
            })?;

        self.state.audio_coordinator.release_media_player();
        self.set_progress(0.0);
        if let Some(audio) = self.audio.as_mut() {
            audio.selected = None;
        }

        self.state.audio_coordinator.prepare_episode(&episode)?;
        if let Some(audio) = self.audio.as_mut() {
            audio.selected = Some(episode);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Screen lifecycle
    // ------------------------------------------------------------------

    fn navigate(&mut self, intent: NavigationIntent) -> AppResult<()> {
        let next = self.state.navigation_service.resolve(&self.screen, intent)?;
        self.switch_to(next)
    }

    fn switch_to(&mut self, next: Screen) -> AppResult<()> {
        let resources = self.enter(&next)?;
        self.leave();

        self.audio = resources.audio;
        self.video = resources.video;
        let previous = std::mem::replace(&mut self.screen, next);
        self.state.navigation_service.commit(&previous, &self.screen);
        Ok(())
    }

    fn enter(&self, next: &Screen) -> AppResult<ScreenResources> {
        match next {
            Screen::PetAdoptionDetail(pet) => {
                let video = VideoSession::open(self.state.video_backend.as_ref(), &pet.video_url)?;
                Ok(ScreenResources {
                    video: Some(video),
                    ..ScreenResources::default()
                })
            }
            Screen::PetAudioPlayer(pet_type) => {
                let episodes = self.state.tips_service.episodes_for(*pet_type)?;
                let selected = episodes.first().cloned();
                if let Some(episode) = selected.as_ref() {
                    self.state.audio_coordinator.prepare_episode(episode)?;
                }
                self.set_progress(0.0);
                Ok(ScreenResources {
                    audio: Some(AudioScreen { episodes, selected }),
                    ..ScreenResources::default()
                })
            }
            _ => Ok(ScreenResources::default()),
        }
    }

    /// Releases whatever the current screen holds
    fn leave(&mut self) {
        if self.audio.take().is_some() {
            self.state.audio_coordinator.release_media_player();
        }
        if let Some(mut video) = self.video.take() {
            video.close();
        }
    }

    fn set_progress(&self, value: f32) {
        *self.progress.lock().unwrap_or_else(PoisonError::into_inner) = value;
    }

    fn progress(&self) -> f32 {
        *self.progress.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn unavailable(&self, action: &str) -> AppError {
        AppError::Domain(DomainError::InvalidTransition(format!(
            "{} is not available on {}",
            action,
            self.screen.name()
        )))
    }

    fn require_catalog(&self, action: &str) -> AppResult<()> {
        match self.screen {
            Screen::Catalog => Ok(()),
            _ => Err(self.unavailable(action)),
        }
    }

    fn require_audio(&self, action: &str) -> AppResult<()> {
        match self.audio.as_ref().and_then(|a| a.selected.as_ref()) {
            Some(_) => Ok(()),
            None => Err(self.unavailable(action)),
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn render(&self) -> AppResult<ScreenView> {
        let view = match &self.screen {
            Screen::Catalog => ScreenView::Catalog(self.render_catalog()?),
            Screen::ProductDetail(product) => ScreenView::ProductDetail(ProductDetailView {
                title: "Detalles del producto".to_string(),
                product: ProductCardDto::from(product),
                detailed_description: self.state.catalog_service.detailed_description(product),
                additional_info: CatalogService::additional_info(product),
            }),
            Screen::PetGallery => ScreenView::PetGallery(GalleryView {
                title: "Galería de mascotas".to_string(),
                heading: "Mascotas para adopción".to_string(),
                subtitle: "Encuentra tu compañero perfecto entre nuestras mascotas disponibles para adopción"
                    .to_string(),
                pets: self
                    .state
                    .adoption_service
                    .gallery()?
                    .iter()
                    .map(PetCardDto::from)
                    .collect(),
            }),
            Screen::PetAdoptionDetail(pet) => {
                let video = self.video.as_ref().and_then(|session| {
                    session.uri().map(|uri| VideoDto {
                        uri: uri.to_string(),
                        is_playing: session.is_playing(),
                    })
                });
                ScreenView::PetAdoptionDetail(AdoptionDetailView::new(pet, video))
            }
            Screen::PetTips => ScreenView::PetTips(TipsView {
                title: "Tips para mascotas".to_string(),
                heading: "Podcast de consejos para tu mascota".to_string(),
                intro: "Explora nuestra colección de audios con consejos profesionales sobre el cuidado de cada tipo de mascota. Selecciona una categoría para encontrar todos los episodios disponibles."
                    .to_string(),
                categories: self
                    .state
                    .tips_service
                    .categories()
                    .into_iter()
                    .map(TipsCategoryDto::from)
                    .collect(),
            }),
            Screen::PetAudioPlayer(pet_type) => {
                ScreenView::PetAudioPlayer(self.render_audio_player(*pet_type)?)
            }
        };

        Ok(view)
    }

    fn render_catalog(&self) -> AppResult<CatalogView> {
        let categories = ProductCategory::ALL
            .into_iter()
            .map(|category| CategoryChipDto {
                category,
                name: category.display_name().to_string(),
                color: category.color().to_string(),
                selected: self.category_filter == Some(category),
            })
            .collect();

        Ok(CatalogView {
            title: "Pet Shop".to_string(),
            cart_count: self.cart.len(),
            categories,
            section_title: CatalogService::section_title(self.category_filter).to_string(),
            products: self
                .state
                .catalog_service
                .products(self.category_filter)?
                .iter()
                .map(ProductCardDto::from)
                .collect(),
        })
    }

    fn render_audio_player(&self, pet_type: PetType) -> AppResult<AudioPlayerView> {
        let selected = self.audio.as_ref().and_then(|a| a.selected.as_ref());

        let content = match (self.audio.as_ref(), selected) {
            (Some(audio), Some(episode)) => {
                let coordinator = &self.state.audio_coordinator;
                let progress = self.progress();

                AudioContent::Player {
                    player: PlayerDto {
                        title: episode.title.clone(),
                        description: episode.description.clone(),
                        is_playing: coordinator.is_playing_episode(),
                        progress,
                        current_time: AudioPlayerCoordinator::format_time(
                            progress * episode.duration_seconds as f32,
                        ),
                        total_time: coordinator.formatted_duration(),
                    },
                    episodes: audio
                        .episodes
                        .iter()
                        .map(|e| EpisodeDto::new(e, e.id == episode.id))
                        .collect(),
                    related_title: "Descubre más contenido".to_string(),
                    related: self
                        .state
                        .tips_service
                        .related(pet_type)?
                        .iter()
                        .map(|e| EpisodeDto::new(e, false))
                        .collect(),
                }
            }
            _ => AudioContent::Empty(TipsService::empty_state(pet_type)),
        };

        Ok(AudioPlayerView {
            title: pet_type.tips_title(),
            pet_type,
            accent_color: pet_type.accent_color().to_string(),
            cover_image: pet_type.cover_image().to_string(),
            content,
        })
    }

    pub fn render_json(&self) -> AppResult<serde_json::Value> {
        Ok(serde_json::to_value(self.render()?)?)
    }
}

impl Drop for PetShopApp {
    fn drop(&mut self) {
        self.leave();
    }
}
