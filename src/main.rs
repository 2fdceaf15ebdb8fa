// src/main.rs
//
// Headless driver: replays a list of intents against the app and prints
// every rendered screen as JSON.
//
//   petshop                 # built-in tour
//   petshop session.json    # JSON array of intents

use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use petshop::application::{AppState, Intent, PetShopApp};
use petshop::config::AppConfig;
use petshop::domain::{PetType, ProductCategory};

/// Time given to the sampler between scripted steps
const STEP_PAUSE: Duration = Duration::from_millis(1500);

fn default_tour() -> Vec<Intent> {
    vec![
        Intent::SelectCategory {
            category: ProductCategory::Dogs,
        },
        Intent::SelectProduct {
            product_id: "dog_toy_1".to_string(),
        },
        Intent::AddToCart {
            product_id: "dog_toy_1".to_string(),
        },
        Intent::Back,
        Intent::AddToCart {
            product_id: "dog_toy_1".to_string(),
        },
        Intent::ViewCart,
        Intent::OpenGallery,
        Intent::StartAdoption {
            pet_id: "cat1".to_string(),
        },
        Intent::ToggleVideo,
        Intent::FinalizeAdoption,
        Intent::Back,
        Intent::OpenTips,
        Intent::SelectTipsCategory {
            pet_type: PetType::Bird,
        },
        Intent::TogglePlayback,
        Intent::SkipForward,
        Intent::TogglePlayback,
        Intent::Back,
        Intent::Back,
    ]
}

fn load_script(path: &str) -> anyhow::Result<Vec<Intent>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    Intent::parse_script(&raw).with_context(|| format!("parsing intents in {}", path))
}

// Single-threaded: the progress tick only runs while the driver awaits
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "petshop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;
    log::info!("Starting PetShop ({:?})", config.playback);

    let intents = match std::env::args().nth(1) {
        Some(path) => load_script(&path)?,
        None => default_tour(),
    };

    let mut app = PetShopApp::new(AppState::simulated(&config)?);
    println!("{}", serde_json::to_string_pretty(&app.render_json()?)?);

    for intent in intents {
        log::info!("> {:?}", intent);
        if let Some(error) = app.handle(intent) {
            println!("{}", serde_json::to_string_pretty(&error)?);
        }

        tokio::time::sleep(STEP_PAUSE).await;

        for notification in app.take_notifications() {
            println!("[{:?}] {}", notification.level, notification.message);
        }
        println!("{}", serde_json::to_string_pretty(&app.render_json()?)?);
    }

    log::info!(
        "Session finished on {} with {} item(s) in cart",
        app.screen().name(),
        app.cart().len()
    );
    Ok(())
}
