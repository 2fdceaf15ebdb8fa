use serde::{Deserialize, Serialize};

use crate::domain::PetType;

/// Opaque handle to a bundled audio resource
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AudioResource(pub String);

impl AudioResource {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AudioResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An audio tips episode for one species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioEpisode {
    pub id: String,
    pub title: String,
    pub description: String,

    /// Advertised duration in seconds (always > 0)
    pub duration_seconds: u32,

    pub audio_resource: AudioResource,

    pub pet_type: PetType,
}

impl AudioEpisode {
    /// Compact "m:s" label used in episode lists (not zero-padded)
    pub fn duration_label(&self) -> String {
        format!("{}:{}", self.duration_seconds / 60, self.duration_seconds % 60)
    }

    /// Subtitle used by related-episode rows
    pub fn category_label(&self) -> String {
        format!(
            "Consejos para {}s",
            self.pet_type.display_name().to_lowercase()
        )
    }
}
