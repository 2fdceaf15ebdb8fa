use serde::{Deserialize, Serialize};

/// A purchasable pet-supply product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique within the sample list
    pub id: String,

    pub name: String,

    /// Short description
    pub description: String,

    pub price: f64,

    /// Remote image URL (optional)
    pub image_url: Option<String>,

    /// Bundled image resource name (optional)
    pub image_res: Option<String>,

    pub category: ProductCategory,

    /// Rating on a 0-5 scale
    pub rating: f32,

    pub in_stock: bool,
}

/// Fixed set of catalog categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Dogs,
    Cats,
    Birds,
    Fish,
    SmallPets,
    Accessories,
    Food,
}

impl Product {
    /// Create a product with the catalog defaults (no images, unrated, in stock)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: ProductCategory,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            image_url: None,
            image_res: None,
            category,
            rating: 0.0,
            in_stock: true,
        }
    }

    pub fn with_image_res(mut self, image_res: impl Into<String>) -> Self {
        self.image_res = Some(image_res.into());
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Price label as shown on product cards
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

impl ProductCategory {
    /// Every category, in selector order
    pub const ALL: [ProductCategory; 7] = [
        ProductCategory::Dogs,
        ProductCategory::Cats,
        ProductCategory::Birds,
        ProductCategory::Fish,
        ProductCategory::SmallPets,
        ProductCategory::Accessories,
        ProductCategory::Food,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductCategory::Dogs => "Perros",
            ProductCategory::Cats => "Gatos",
            ProductCategory::Birds => "Aves",
            ProductCategory::Fish => "Peces",
            ProductCategory::SmallPets => "Pequeñas Mascotas",
            ProductCategory::Accessories => "Accesorios",
            ProductCategory::Food => "Alimentos",
        }
    }

    /// Chip color as an ARGB hex string
    pub fn color(&self) -> &'static str {
        match self {
            ProductCategory::Dogs => "#FF2196F3",
            ProductCategory::Cats => "#FFE91E63",
            ProductCategory::Birds => "#FFFC3BFF",
            ProductCategory::Fish => "#FF03A9F4",
            ProductCategory::SmallPets => "#FF9C27B0",
            ProductCategory::Accessories => "#FF4CAF50",
            ProductCategory::Food => "#FFFFA726",
        }
    }
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Dogs => write!(f, "dogs"),
            ProductCategory::Cats => write!(f, "cats"),
            ProductCategory::Birds => write!(f, "birds"),
            ProductCategory::Fish => write!(f, "fish"),
            ProductCategory::SmallPets => write!(f, "small_pets"),
            ProductCategory::Accessories => write!(f, "accessories"),
            ProductCategory::Food => write!(f, "food"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_defaults() {
        let product = Product::new("x", "Thing", "desc", 1.5, ProductCategory::Food);
        assert!(product.in_stock);
        assert_eq!(product.rating, 0.0);
        assert!(product.image_res.is_none());
        assert!(product.image_url.is_none());
    }

    #[test]
    fn test_price_label_two_decimals() {
        let product = Product::new("x", "Thing", "desc", 15.5, ProductCategory::Cats);
        assert_eq!(product.price_label(), "$15.50");
    }
}
