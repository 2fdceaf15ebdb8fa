use serde::{Deserialize, Serialize};

/// Species tag shared by pets, tips categories and audio episodes.
///
/// Declaration order matters: related-episode lookups walk this order
/// circularly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Dog,
    Cat,
    Bird,
    Fish,
}

impl PetType {
    /// Every species tag, in declaration order
    pub const ALL: [PetType; 4] = [PetType::Dog, PetType::Cat, PetType::Bird, PetType::Fish];

    /// Human-readable (Spanish) name shown in the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            PetType::Dog => "Perro",
            PetType::Cat => "Gato",
            PetType::Bird => "Ave",
            PetType::Fish => "Pez",
        }
    }

    /// Accent color as an ARGB hex string
    pub fn accent_color(&self) -> &'static str {
        match self {
            PetType::Dog => "#FF2196F3",
            PetType::Cat => "#FFE91E63",
            PetType::Bird => "#FFFC3BFF",
            PetType::Fish => "#FF03A9F4",
        }
    }

    /// Image shown on the player screen for this species
    pub fn cover_image(&self) -> &'static str {
        match self {
            PetType::Dog => "max",
            PetType::Cat => "oliver",
            PetType::Bird => "kiwi",
            PetType::Fish => "nemo",
        }
    }

    /// Title of the tips player screen ("Pez" pluralizes irregularly)
    pub fn tips_title(&self) -> String {
        match self {
            PetType::Fish => "Tips para Peces".to_string(),
            other => format!("Tips para {}s", other.display_name()),
        }
    }

    /// Position in [`PetType::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PetType::Dog => 0,
            PetType::Cat => 1,
            PetType::Bird => 2,
            PetType::Fish => 3,
        }
    }
}

impl std::fmt::Display for PetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PetType::Dog => write!(f, "dog"),
            PetType::Cat => write!(f, "cat"),
            PetType::Bird => write!(f, "bird"),
            PetType::Fish => write!(f, "fish"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, pet_type) in PetType::ALL.iter().enumerate() {
            assert_eq!(pet_type.index(), i);
        }
    }

    #[test]
    fn test_tips_title() {
        assert_eq!(PetType::Dog.tips_title(), "Tips para Perros");
        assert_eq!(PetType::Bird.tips_title(), "Tips para Aves");
        assert_eq!(PetType::Fish.tips_title(), "Tips para Peces");
    }

    #[test]
    fn test_serde_tag() {
        let json = serde_json::to_string(&PetType::Cat).unwrap();
        assert_eq!(json, "\"cat\"");
    }
}
