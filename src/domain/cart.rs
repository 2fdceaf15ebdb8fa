use serde::{Deserialize, Serialize};

use crate::domain::Product;

/// Session-only shopping cart
///
/// Items keep insertion order and are never deduplicated: adding the same
/// product twice stores it twice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of item prices
    pub fn total(&self) -> f64 {
        self.items.iter().map(|p| p.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductCategory;

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let a = Product::new("a", "A", "", 2.0, ProductCategory::Dogs);
        let b = Product::new("b", "B", "", 3.0, ProductCategory::Cats);
        let mut cart = Cart::new();
        cart.add(a.clone());
        cart.add(b.clone());
        cart.add(a.clone());

        let ids: Vec<&str> = cart.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "a"]);
        assert_eq!(cart.len(), 3);
        assert!((cart.total() - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_new_cart_is_empty() {
        assert!(Cart::new().is_empty());
    }
}
