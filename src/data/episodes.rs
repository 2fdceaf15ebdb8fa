use crate::domain::{AudioEpisode, AudioResource, PetType};

fn episode(
    id: &str,
    title: &str,
    description: &str,
    duration_seconds: u32,
    resource: &str,
    pet_type: PetType,
) -> AudioEpisode {
    AudioEpisode {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration_seconds,
        audio_resource: AudioResource::new(resource),
        pet_type,
    }
}

/// Audio tips episodes, grouped by species
pub fn sample_episodes() -> Vec<AudioEpisode> {
    vec![
        episode(
            "dog_ep1",
            "Cuidados esenciales para perros",
            "Aprende sobre alimentación, ejercicio, higiene y salud para mantener a tu perro feliz y saludable.",
            180,
            "big_dog_barking",
            PetType::Dog,
        ),
        episode(
            "dog_ep2",
            "Entrenamiento básico para perros",
            "Técnicas efectivas para enseñar comandos básicos y establecer una buena comunicación con tu perro.",
            240,
            "big_dog_barking",
            PetType::Dog,
        ),
        episode(
            "cat_ep1",
            "Guía completa para cuidar a tu gato",
            "Descubre los secretos para entender el comportamiento felino y proporcionarle los mejores cuidados.",
            210,
            "cat_98721",
            PetType::Cat,
        ),
        episode(
            "cat_ep2",
            "Salud y bienestar felino",
            "Consejos importantes sobre vacunas, visitas al veterinario y señales de alarma en la salud de tu gato.",
            195,
            "cat_98721",
            PetType::Cat,
        ),
        episode(
            "bird_ep1",
            "Todo sobre el cuidado de aves",
            "Consejos especializados sobre nutrición, hábitat y enriquecimiento para aves como mascota.",
            165,
            "parakeets_77058",
            PetType::Bird,
        ),
        episode(
            "fish_ep1",
            "Mantenimiento del acuario y salud de los peces",
            "Aprende a crear y mantener un ambiente acuático ideal para tus peces.",
            150,
            "fish_in_river_6114",
            PetType::Fish,
        ),
    ]
}
