use crate::domain::{Pet, PetType};

/// Pets listed in the adoption gallery
pub fn sample_pets() -> Vec<Pet> {
    vec![
        // Dogs
        Pet {
            id: "dog1".to_string(),
            name: "Max".to_string(),
            pet_type: PetType::Dog,
            breed: "Labrador Retriever".to_string(),
            age: "2 años".to_string(),
            description: "Max es un Labrador muy juguetón y cariñoso. Le encanta correr y es excelente con los niños.".to_string(),
            detailed_description: "Max llegó a nuestro refugio hace 6 meses. Es un Labrador Retriever de pelaje dorado con una personalidad excepcional. Max fue rescatado de una situación de abandono, pero a pesar de su difícil pasado, es extremadamente sociable y confiado. Le encanta jugar a buscar la pelota y disfruta de largos paseos. Es increíblemente paciente con los niños y se lleva bien con otros perros, aunque no ha tenido mucha exposición a gatos.".to_string(),
            image: "max".to_string(),
            video_url: "https://www.pexels.com/download/video/8746813/?fps=29.969999313354492&h=720&w=1366".to_string(),
            personality: "Juguetón, cariñoso, sociable y lleno de energía. Obediente y aprende rápido.".to_string(),
            health_status: "Vacunas al día, desparasitado y microchip implantado. Castrado. Buena salud general.".to_string(),
            requirements: "Hogar con espacio para correr y jugar. Ideal para familia con niños. Requiere ejercicio diario y estimulación mental.".to_string(),
            is_available: true,
        },
        Pet {
            id: "dog2".to_string(),
            name: "Luna".to_string(),
            pet_type: PetType::Dog,
            breed: "Golden Retriever".to_string(),
            age: "1 año y medio".to_string(),
            description: "Luna es una Golden muy inteligente y leal. Está entrenada para obedecer comandos básicos.".to_string(),
            detailed_description: "Luna es una Golden Retriever de pelaje crema con ojos expresivos y dulces. Llegó a nuestro refugio cuando era una cachorra de apenas 3 meses. Ha crecido aquí y ha recibido entrenamiento básico de obediencia, conoce comandos como sentarse, quedarse y dar la pata. Luna es extremadamente leal y busca constantemente la aprobación de las personas. Es especialmente buena con los ancianos y tiene un temperamento tranquilo que la hace ideal como compañera.".to_string(),
            image: "luna".to_string(),
            video_url: "https://www.pexels.com/download/video/3191251/?fps=25.0&h=720&w=1366".to_string(),
            personality: "Inteligente, leal, tranquila y afectuosa. Le gusta complacer a sus humanos.".to_string(),
            health_status: "Todas las vacunas al día, esterilizada. Tuvo una leve infección de oído que ya está completamente curada.".to_string(),
            requirements: "Hogar tranquilo donde reciba atención y cariño. No necesita tanto ejercicio como otras razas pero sí paseos diarios.".to_string(),
            is_available: false,
        },
        // Cats
        Pet {
            id: "cat1".to_string(),
            name: "Mía".to_string(),
            pet_type: PetType::Cat,
            breed: "Siamés".to_string(),
            age: "3 años".to_string(),
            description: "Mía es una gata siamesa muy independiente pero cariñosa. Le encanta observar por la ventana.".to_string(),
            detailed_description: "Mía es una hermosa gata siamés con característicos ojos azules y pelaje beige con puntos oscuros. Fue rescatada de la calle cuando tenía aproximadamente un año de edad. Al principio era muy tímida, pero con paciencia y cuidados adecuados, se ha convertido en una compañera afectuosa aunque conserva su independencia típica de la raza. Le encanta sentarse en las ventanas para observar pájaros y disfrutar del sol. Por las noches, suele buscar compañía y ronronear junto a sus humanos.".to_string(),
            image: "mia".to_string(),
            video_url: "https://www.pexels.com/download/video/4459765/?fps=23.97599983215332&h=720&w=1280".to_string(),
            personality: "Independiente pero afectuosa. Observadora y tranquila. Ocasionalmente juguetona.".to_string(),
            health_status: "Esterilizada, vacunada y desparasitada. Excelente salud.".to_string(),
            requirements: "Hogar tranquilo, preferiblemente sin niños pequeños. Necesita lugares elevados para trepar y observar.".to_string(),
            is_available: true,
        },
        Pet {
            id: "cat2".to_string(),
            name: "Oliver".to_string(),
            pet_type: PetType::Cat,
            breed: "Ragdoll".to_string(),
            age: "8 meses".to_string(),
            description: "Oliver es un gatito muy juguetón y sociable. Le encanta estar cerca de las personas.".to_string(),
            detailed_description: "Oliver es un joven gato Ragdoll de pelaje bicolor (blanco y gris) con ojos azules brillantes. Llegó a nuestro refugio junto con sus hermanos cuando apenas tenían unas semanas de vida. De la camada, Oliver siempre fue el más sociable y afectuoso. Como es típico en su raza, tiende a relajarse completamente cuando se le levanta (de ahí el nombre 'ragdoll' o muñeco de trapo). Es extremadamente cariñoso y disfruta siguiendo a las personas por toda la casa. Le encanta jugar con juguetes interactivos y aprender nuevos trucos.".to_string(),
            image: "oliver".to_string(),
            video_url: "https://www.pexels.com/download/video/10407809/?fps=24.0&h=720&w=1280".to_string(),
            personality: "Juguetón, cariñoso, adaptable y extremadamente sociable. Le encanta la compañía.".to_string(),
            health_status: "Vacunas al día, castrado y microchip implantado. Salud perfecta.".to_string(),
            requirements: "Puede vivir en cualquier tipo de hogar, incluso apartamentos pequeños. Necesita compañía humana diaria y juguetes para estimularlo.".to_string(),
            is_available: true,
        },
        // Birds
        Pet {
            id: "bird1".to_string(),
            name: "Kiwi".to_string(),
            pet_type: PetType::Bird,
            breed: "Periquito".to_string(),
            age: "1 año".to_string(),
            description: "Kiwi es un periquito muy colorido y cantarín. Puede aprender a repetir palabras.".to_string(),
            detailed_description: "Kiwi es un periquito australiano macho de colores verde y amarillo brillantes. Es un ave muy activa que disfruta cantando, especialmente por las mañanas y al atardecer. Ha sido socializado desde joven y es bastante manso, permitiendo que se le manipule con facilidad. Aunque todavía no ha aprendido a hablar, muestra interés cuando se le habla y con paciencia podría aprender a repetir algunas palabras. Le encanta investigar juguetes nuevos y es muy curioso por naturaleza.".to_string(),
            image: "kiwi".to_string(),
            video_url: "https://www.pexels.com/download/video/4229269/?fps=30.913999557495117&h=720&w=1280".to_string(),
            personality: "Cantarín, curioso, activo y relativamente sociable. Tiene un carácter alegre.".to_string(),
            health_status: "Excelente salud. Revisado por veterinario especializado en aves exóticas.".to_string(),
            requirements: "Jaula espaciosa con juguetes y perchas. Necesita tiempo diario fuera de la jaula en un ambiente seguro. Ambiente limpio y sin corrientes de aire.".to_string(),
            is_available: true,
        },
        // Fish
        Pet {
            id: "fish1".to_string(),
            name: "Nemo".to_string(),
            pet_type: PetType::Fish,
            breed: "Pez payaso".to_string(),
            age: "6 meses".to_string(),
            description: "Nemo es un pez payaso muy activo y colorido. Ideal para acuarios pequeños.".to_string(),
            detailed_description: "Nemo es un vibrante pez payaso (Amphiprion ocellaris) con las características franjas naranjas y blancas. Ha sido criado en cautiverio, lo que significa que está bien adaptado a la vida en acuario. Es bastante activo y curioso, explora constantemente su entorno. Los peces payaso son conocidos por su comportamiento interesante, especialmente su relación simbiótica con las anémonas en la naturaleza. Aunque en un acuario doméstico no es necesaria una anémona, Nemo disfruta de espacios pequeños donde pueda sentirse seguro, como pequeñas cuevas o decoraciones.".to_string(),
            image: "nemo".to_string(),
            video_url: "https://www.pexels.com/download/video/5548246/?fps=25.0&h=720&w=1280".to_string(),
            personality: "Activo, curioso y relativamente resistente comparado con otros peces marinos.".to_string(),
            health_status: "Saludable. Criado en cautiverio, lo que lo hace más adaptable a entornos de acuario.".to_string(),
            requirements: "Acuario de agua salada de al menos 20 galones, bien establecido y con parámetros de agua estables. Temperatura entre 24-26°C. Preferiblemente con otros peces payaso o especies compatibles.".to_string(),
            is_available: true,
        },
    ]
}
