// src/repositories/product_repository.rs

use std::sync::Arc;

use crate::data::sample_products;
use crate::domain::{ensure_unique_ids, validate_product, Product, ProductCategory};
use crate::error::AppResult;

pub trait ProductRepository: Send + Sync {
    fn list_all(&self) -> AppResult<Vec<Product>>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Product>>;
    fn products_by_category(&self, category: ProductCategory) -> AppResult<Vec<Product>>;
}

pub struct InMemoryProductRepository {
    products: Arc<Vec<Product>>,
}

impl InMemoryProductRepository {
    /// Builds the repository after checking every product invariant
    pub fn new(products: Vec<Product>) -> AppResult<Self> {
        for product in &products {
            validate_product(product)?;
        }
        ensure_unique_ids(products.iter().map(|p| p.id.as_str()))?;

        Ok(Self {
            products: Arc::new(products),
        })
    }

    pub fn with_sample_data() -> AppResult<Self> {
        Self::new(sample_products())
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.products.as_ref().clone())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Product>> {
        Ok(self.products.iter().find(|p| p.id == id).cloned())
    }

    fn products_by_category(&self, category: ProductCategory) -> AppResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::error::AppError;

    #[test]
    fn test_filter_returns_only_matching_category_in_order() {
        let repo = InMemoryProductRepository::with_sample_data().unwrap();
        let all = repo.list_all().unwrap();

        for category in ProductCategory::ALL {
            let filtered = repo.products_by_category(category).unwrap();
            assert!(filtered.iter().all(|p| p.category == category));

            // Relative order matches the master list
            let expected: Vec<&str> = all
                .iter()
                .filter(|p| p.category == category)
                .map(|p| p.id.as_str())
                .collect();
            let actual: Vec<&str> = filtered.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_dogs_filter() {
        let repo = InMemoryProductRepository::with_sample_data().unwrap();
        let ids: Vec<String> = repo
            .products_by_category(ProductCategory::Dogs)
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["dog_food_1", "dog_toy_1"]);
    }

    #[test]
    fn test_unmatched_category_is_empty_not_error() {
        let repo = InMemoryProductRepository::with_sample_data().unwrap();
        assert!(repo.products_by_category(ProductCategory::SmallPets).unwrap().is_empty());
        assert!(repo.products_by_category(ProductCategory::Food).unwrap().is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let repo = InMemoryProductRepository::with_sample_data().unwrap();
        let product = repo.get_by_id("cat_toy_1").unwrap().unwrap();
        assert_eq!(product.name, "Ratón de juguete");
        assert!(repo.get_by_id("nope").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut products = sample_products();
        products.push(products[0].clone());
        let result = InMemoryProductRepository::new(products);
        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::DuplicateId(_)))
        ));
    }
}
