//! Application configuration

use std::env;

use crate::error::{AppError, AppResult};
use crate::services::PlaybackConfig;

/// Application configuration loaded from environment
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Audio coordinator tuning
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = PlaybackConfig::default();

        let sample_interval_ms = match lookup("PETSHOP_SAMPLE_INTERVAL_MS") {
            Some(raw) => raw.trim().parse::<u64>()?,
            None => defaults.sample_interval_ms,
        };
        if sample_interval_ms == 0 {
            return Err(AppError::Config(
                "PETSHOP_SAMPLE_INTERVAL_MS must be greater than zero".to_string(),
            ));
        }

        let skip_step_ms = match lookup("PETSHOP_SKIP_STEP_MS") {
            Some(raw) => raw.trim().parse::<u64>()?,
            None => defaults.skip_step_ms,
        };

        let sample_while_paused = match lookup("PETSHOP_SAMPLE_WHILE_PAUSED") {
            Some(raw) => parse_bool(&raw)?,
            None => defaults.sample_while_paused,
        };

        Ok(Self {
            playback: PlaybackConfig {
                sample_interval_ms,
                skip_step_ms,
                sample_while_paused,
            },
        })
    }
}

fn parse_bool(raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::Config(format!("Invalid boolean: {}", other))),
    }
}
