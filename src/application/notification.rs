// src/application/notification.rs
//
// Transient user-facing messages (the platform "toast")

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLength {
    Short,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub length: NotificationLength,
    pub level: NotificationLevel,
}

impl Notification {
    pub fn short(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            length: NotificationLength::Short,
            level: NotificationLevel::Info,
        }
    }

    pub fn long(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            length: NotificationLength::Long,
            level: NotificationLevel::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            length: NotificationLength::Long,
            level: NotificationLevel::Error,
        }
    }
}
