// src/application/intent.rs
//
// User actions as plain values.
// Screens refer to records by id; the controller resolves them through
// the repositories.

use serde::{Deserialize, Serialize};

use crate::domain::{PetType, ProductCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    // Catalog
    SelectCategory { category: ProductCategory },
    SelectProduct { product_id: String },
    AddToCart { product_id: String },
    ViewCart,
    Search,
    OpenGallery,
    OpenTips,

    // Shared
    Back,

    // Adoption
    StartAdoption { pet_id: String },
    FinalizeAdoption,
    ToggleVideo,

    // Tips
    SelectTipsCategory { pet_type: PetType },
    SelectEpisode { episode_id: String },
    TogglePlayback,
    SkipForward,
    SkipBackward,
    SeekTo { fraction: f32 },
}

impl Intent {
    /// Parses a JSON array of intents, e.g. a scripted session
    pub fn parse_script(json: &str) -> serde_json::Result<Vec<Intent>> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_string(&Intent::AddToCart {
            product_id: "dog_toy_1".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"add_to_cart","product_id":"dog_toy_1"}"#);
    }

    #[test]
    fn test_parse_script() {
        let script = r#"[
            {"type": "open_tips"},
            {"type": "select_tips_category", "pet_type": "bird"},
            {"type": "seek_to", "fraction": 0.5},
            {"type": "back"}
        ]"#;

        let intents = Intent::parse_script(script).unwrap();
        assert_eq!(intents.len(), 4);
        assert_eq!(
            intents[1],
            Intent::SelectTipsCategory {
                pet_type: PetType::Bird
            }
        );
        assert_eq!(intents[2], Intent::SeekTo { fraction: 0.5 });
    }

    #[test]
    fn test_unknown_intent_rejected() {
        assert!(Intent::parse_script(r#"[{"type": "checkout"}]"#).is_err());
    }
}
