// src/services/catalog_service.rs
use std::sync::Arc;

use regex::Regex;

use crate::domain::{Product, ProductCategory};
use crate::error::{AppError, AppResult};
use crate::repositories::ProductRepository;

const ALL_PRODUCTS_TITLE: &str = "Todos los productos";

const DOG_FOOD_TEXT: &str = "Alimento premium para perros formulado específicamente para mantener una salud óptima. \
Contiene proteínas de alta calidad, vitaminas esenciales y minerales que promueven un pelaje brillante, \
dientes fuertes y un sistema inmunológico saludable. Sin colorantes ni conservantes artificiales, \
para cuidar la digestión de tu mascota.";

const CAT_FOOD_TEXT: &str = "Alimento completo para gatos con delicioso sabor a pescado que les encanta. \
Enriquecido con taurina para mantener una visión saludable y ácidos grasos omega para un pelaje sedoso. \
Su fórmula especial ayuda a reducir la formación de bolas de pelo y promueve un tracto urinario sano.";

const TOY_TEXT: &str = "Juguete duradero diseñado para proporcionar horas de diversión y ejercicio. \
Fabricado con materiales no tóxicos y seguros para mascotas. Ayuda a reducir el estrés y la ansiedad \
manteniendo a tu mascota activa y estimulada mentalmente. Ideal para juegos interactivos que fortalecen \
el vínculo entre mascota y dueño.";

const COLLAR_TEXT: &str = "Collar ajustable de alta calidad que combina comodidad y durabilidad. \
El material resistente al agua y de secado rápido lo hace perfecto para usar en cualquier clima. \
Su sistema de ajuste fácil permite un ajuste personalizado a medida que tu mascota crece. \
Diseñado para minimizar la irritación de la piel mientras mantiene a tu mascota segura.";

const FISH_TEXT: &str = "Producto especialmente formulado para el ambiente acuático, manteniendo el equilibrio \
del ecosistema de tu acuario. Diseñado por expertos en cuidado de peces para garantizar los mejores \
resultados. Contribuye a crear un entorno saludable donde tus peces puedan prosperar.";

const BIRD_TEXT: &str = "Diseñado específicamente para aves, este producto considera las necesidades únicas \
de las mascotas voladoras. Elaborado con materiales seguros y componentes naturales que promueven \
comportamientos saludables. Perfecto para mantener a tus aves activas, felices y saludables.";

const SMALL_PETS_TEXT: &str = "Pensado para las necesidades específicas de pequeños roedores y mascotas similares. \
Su diseño compacto se adapta perfectamente a jaulas y espacios reducidos, maximizando el confort de tu \
pequeño amigo. Proporciona el ambiente adecuado para el desarrollo natural de estas mascotas.";

const GENERIC_TEXT: &str = "Producto de alta calidad diseñado específicamente para el cuidado integral de tu mascota. \
Elaborado con los mejores materiales y siguiendo estrictos estándares de calidad para garantizar la \
seguridad y bienestar de tu compañero. Este artículo esencial en el cuidado de mascotas te ayudará \
a mantener a tu amigo peludo feliz y saludable por mucho tiempo.";

/// Name keywords that select a description, matched case-insensitively
struct Keywords {
    food: Regex,
    toy: Regex,
    collar: Regex,
}

impl Keywords {
    fn compile() -> AppResult<Self> {
        Ok(Self {
            food: Regex::new(r"(?i)alimento")?,
            toy: Regex::new(r"(?i)juguete")?,
            collar: Regex::new(r"(?i)collar")?,
        })
    }
}

pub struct CatalogService {
    product_repo: Arc<dyn ProductRepository>,
    keywords: Keywords,
}

impl CatalogService {
    pub fn new(product_repo: Arc<dyn ProductRepository>) -> AppResult<Self> {
        Ok(Self {
            product_repo,
            keywords: Keywords::compile()?,
        })
    }

    /// Catalog listing: everything, or one category in source order
    pub fn products(&self, filter: Option<ProductCategory>) -> AppResult<Vec<Product>> {
        match filter {
            Some(category) => self.product_repo.products_by_category(category),
            None => self.product_repo.list_all(),
        }
    }

    pub fn get_product(&self, product_id: &str) -> AppResult<Product> {
        self.product_repo
            .get_by_id(product_id)?
            .ok_or(AppError::NotFound)
    }

    /// Selecting the active category clears the filter
    pub fn toggle_category(
        current: Option<ProductCategory>,
        selected: ProductCategory,
    ) -> Option<ProductCategory> {
        if current == Some(selected) {
            None
        } else {
            Some(selected)
        }
    }

    pub fn section_title(filter: Option<ProductCategory>) -> &'static str {
        filter
            .map(|category| category.display_name())
            .unwrap_or(ALL_PRODUCTS_TITLE)
    }

    /// Short description followed by a paragraph picked from the
    /// product's category and name. First matching rule wins.
    pub fn detailed_description(&self, product: &Product) -> String {
        let name = product.name.as_str();
        let extra = match product.category {
            ProductCategory::Dogs if self.keywords.food.is_match(name) => DOG_FOOD_TEXT,
            ProductCategory::Cats if self.keywords.food.is_match(name) => CAT_FOOD_TEXT,
            _ if self.keywords.toy.is_match(name) => TOY_TEXT,
            _ if self.keywords.collar.is_match(name) => COLLAR_TEXT,
            ProductCategory::Fish => FISH_TEXT,
            ProductCategory::Birds => BIRD_TEXT,
            ProductCategory::SmallPets => SMALL_PETS_TEXT,
            _ => GENERIC_TEXT,
        };

        format!("{}\n\n{}", product.description, extra)
    }

    /// Bullet list shown under "Información adicional"
    pub fn additional_info(product: &Product) -> String {
        let stock = if product.in_stock {
            "• Disponible en stock"
        } else {
            "• Agotado temporalmente"
        };

        let category_specific = match product.category {
            ProductCategory::Food => "• Almacenar en lugar fresco y seco\n• Fecha de caducidad en el empaque",
            ProductCategory::Accessories => "• Material: Nylon y poliéster resistente\n• Lavable a máquina",
            ProductCategory::Dogs => "• Recomendado para perros de todas las edades\n• Made in Colombia",
            ProductCategory::Cats => "• Específico para gatos\n• Testado dermatológicamente",
            ProductCategory::Birds => "• Seguro para todas las especies de aves\n• Libre de componentes tóxicos",
            ProductCategory::Fish => "• Seguro para todos los tipos de acuarios\n• No altera el pH del agua",
            ProductCategory::SmallPets => "• Adecuado para hámsters, conejos y roedores\n• Tamaño compacto",
        };

        format!(
            "{}\n• Envío en 24-48 horas\n• Garantía de calidad\n{}",
            stock, category_specific
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryProductRepository;

    fn service() -> CatalogService {
        let repo = InMemoryProductRepository::with_sample_data().unwrap();
        CatalogService::new(Arc::new(repo)).unwrap()
    }

    fn extra_paragraph(service: &CatalogService, product: &Product) -> String {
        let text = service.detailed_description(product);
        let (head, tail) = text.split_once("\n\n").unwrap();
        assert_eq!(head, product.description);
        tail.to_string()
    }

    #[test]
    fn test_unfiltered_listing_keeps_source_order() {
        let ids: Vec<String> = service().products(None).unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            vec!["dog_food_1", "dog_toy_1", "dog_acc_1", "cat_food_1", "cat_toy_1", "bird_food_1"]
        );
    }

    #[test]
    fn test_category_filter() {
        let products = service().products(Some(ProductCategory::Dogs)).unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["dog_food_1", "dog_toy_1"]);
        assert!(service().products(Some(ProductCategory::Fish)).unwrap().is_empty());
    }

    #[test]
    fn test_toggle_category() {
        let selected = CatalogService::toggle_category(None, ProductCategory::Cats);
        assert_eq!(selected, Some(ProductCategory::Cats));
        assert_eq!(CatalogService::toggle_category(selected, ProductCategory::Cats), None);
        assert_eq!(
            CatalogService::toggle_category(selected, ProductCategory::Birds),
            Some(ProductCategory::Birds)
        );
    }

    #[test]
    fn test_section_title() {
        assert_eq!(CatalogService::section_title(None), "Todos los productos");
        assert_eq!(
            CatalogService::section_title(Some(ProductCategory::SmallPets)),
            "Pequeñas Mascotas"
        );
    }

    #[test]
    fn test_missing_product() {
        assert!(matches!(service().get_product("nope"), Err(AppError::NotFound)));
    }

    #[test]
    fn test_description_rules() {
        let service = service();
        let product = |id: &str| service.get_product(id).unwrap();

        assert_eq!(extra_paragraph(&service, &product("dog_toy_1")), TOY_TEXT);
        assert_eq!(extra_paragraph(&service, &product("cat_toy_1")), TOY_TEXT);
        assert_eq!(extra_paragraph(&service, &product("dog_acc_1")), COLLAR_TEXT);
        assert_eq!(extra_paragraph(&service, &product("bird_food_1")), BIRD_TEXT);
        assert_eq!(extra_paragraph(&service, &product("dog_food_1")), GENERIC_TEXT);
    }

    #[test]
    fn test_food_keyword_is_case_insensitive() {
        let service = service();
        let dog_food = Product::new("d", "ALIMENTO para cachorros", "base", 1.0, ProductCategory::Dogs);
        let cat_food = Product::new("c", "Alimento seco", "base", 1.0, ProductCategory::Cats);
        let fish = Product::new("f", "Filtro", "base", 1.0, ProductCategory::Fish);

        assert_eq!(extra_paragraph(&service, &dog_food), DOG_FOOD_TEXT);
        assert_eq!(extra_paragraph(&service, &cat_food), CAT_FOOD_TEXT);
        assert_eq!(extra_paragraph(&service, &fish), FISH_TEXT);
    }

    #[test]
    fn test_additional_info() {
        let mut product = Product::new("x", "Heno", "base", 3.0, ProductCategory::SmallPets);
        assert_eq!(
            CatalogService::additional_info(&product),
            "• Disponible en stock\n• Envío en 24-48 horas\n• Garantía de calidad\n\
             • Adecuado para hámsters, conejos y roedores\n• Tamaño compacto"
        );

        product.in_stock = false;
        assert!(CatalogService::additional_info(&product).starts_with("• Agotado temporalmente\n"));
    }
}
