use crate::domain::{Product, ProductCategory};

/// Products shown in the catalog
pub fn sample_products() -> Vec<Product> {
    vec![
        // Dogs
        Product::new(
            "dog_food_1",
            "Premium Dog Chow",
            "Alimento completo y balanceado para perros adultos",
            25.99,
            ProductCategory::Dogs,
        )
        .with_image_res("alimento_perro"),
        Product::new(
            "dog_toy_1",
            "Pelota de juguete",
            "Pelota resistente para horas de diversión",
            9.99,
            ProductCategory::Dogs,
        )
        .with_image_res("pelota_perro"),
        Product::new(
            "dog_acc_1",
            "Collar ajustable",
            "Collar de nylon resistente y ajustable",
            12.99,
            ProductCategory::Accessories,
        )
        .with_image_res("collar"),
        // Cats
        Product::new(
            "cat_food_1",
            "Whiskas Sabor Pescado",
            "Alimento húmedo para gatos con sabor a pescado",
            15.50,
            ProductCategory::Cats,
        )
        .with_image_res("alimento_gato"),
        Product::new(
            "cat_toy_1",
            "Ratón de juguete",
            "Juguete interactivo con sonido para gatos",
            5.99,
            ProductCategory::Cats,
        )
        .with_image_res("raton_juguete"),
        // Birds
        Product::new(
            "bird_food_1",
            "Semillas mixtas",
            "Mezcla premium de semillas para canarios y periquitos",
            8.99,
            ProductCategory::Birds,
        )
        .with_image_res("semillas_canario"),
    ]
}
