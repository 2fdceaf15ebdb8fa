// src/application/error_handling.rs
//
// Error mapping for the presentation boundary
//
// ARCHITECTURE:
// - Maps internal errors → user-friendly responses
// - Provides consistent error format for UI
// - Never exposes internal implementation details
// - Logs errors for debugging

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Record id that no repository knows
    NotFound,

    /// Malformed input or an action the current screen does not offer
    Validation,

    /// Domain invariant violation
    DomainError,

    /// Audio or video collaborator failure
    Playback,

    /// Other/unknown error
    Internal,
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound | AppError::Domain(DomainError::NotFound(_)) => Self {
                success: false,
                error_type: ErrorType::NotFound,
                message: "Resource not found".to_string(),
                details: None,
            },

            AppError::Domain(DomainError::InvalidTransition(reason)) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Action not available on this screen".to_string(),
                details: Some(reason),
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Playback(reason) | AppError::Video(reason) => {
                log::error!("Media error: {}", reason);

                Self {
                    success: false,
                    error_type: ErrorType::Playback,
                    message: "Media could not be played".to_string(),
                    details: Some(reason),
                }
            }

            AppError::Config(reason) => Self {
                success: false,
                error_type: ErrorType::Validation,
                message: "Invalid configuration".to_string(),
                details: Some(reason),
            },

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Validation,
                    message: "Data serialization failed".to_string(),
                    details: Some(serde_error.to_string()),
                }
            }

            AppError::Pattern(pattern_error) => {
                log::error!("Pattern error: {:?}", pattern_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "An unexpected error occurred".to_string(),
                    details: None,
                }
            }

            AppError::Other(message) => {
                log::error!("Unexpected error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "An unexpected error occurred".to_string(),
                    details: None,
                }
            }
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}
