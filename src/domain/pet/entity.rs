use serde::{Deserialize, Serialize};

use crate::domain::PetType;

/// An adoptable pet shown in the gallery
/// Pets are static sample data: nothing in the app mutates them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    /// Unique within the sample list
    pub id: String,

    pub name: String,

    /// Species tag
    pub pet_type: PetType,

    pub breed: String,

    /// Free-form age text ("2 años", "8 meses")
    pub age: String,

    /// Short description for the gallery card
    pub description: String,

    /// Long description for the adoption detail screen
    pub detailed_description: String,

    /// Bundled image resource name
    pub image: String,

    /// Remote video URL, passed opaquely to the video player
    pub video_url: String,

    pub personality: String,

    pub health_status: String,

    /// Adoption requirements text
    pub requirements: String,

    /// Display-only flag; finalizing an adoption never clears it
    pub is_available: bool,
}

impl Pet {
    /// Title line used by the adoption detail screen
    pub fn headline(&self) -> String {
        format!("{} ({})", self.name, self.breed)
    }
}
