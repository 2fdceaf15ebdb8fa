// src/services/cart_service.rs
use std::sync::Arc;

use crate::domain::{Cart, Product};
use crate::events::{CartViewed, EventBus, ProductAddedToCart};

/// Session cart operations. The cart itself is owned by the app controller.
pub struct CartService {
    event_bus: Arc<EventBus>,
}

impl CartService {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self { event_bus }
    }

    /// Appends without dedup and returns the confirmation text
    pub fn add_to_cart(&self, cart: &mut Cart, product: Product) -> String {
        let message = format!("{} añadido al carrito", product.name);
        let product_id = product.id.clone();

        cart.add(product);
        log::info!("Added {} to cart ({} items)", product_id, cart.len());
        self.event_bus
            .emit(ProductAddedToCart::new(product_id, cart.len()));

        message
    }

    /// Cart summary text; there is no checkout
    pub fn view_cart(&self, cart: &Cart) -> String {
        self.event_bus.emit(CartViewed::new(cart.len()));
        format!("Ver carrito: {} productos", cart.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_products;

    #[test]
    fn test_add_keeps_duplicates_in_order() {
        let service = CartService::new(Arc::new(EventBus::new()));
        let mut cart = Cart::new();
        let products = sample_products();

        service.add_to_cart(&mut cart, products[0].clone());
        service.add_to_cart(&mut cart, products[1].clone());
        service.add_to_cart(&mut cart, products[0].clone());

        let ids: Vec<&str> = cart.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["dog_food_1", "dog_toy_1", "dog_food_1"]);
    }

    #[test]
    fn test_messages() {
        let bus = Arc::new(EventBus::new());
        let service = CartService::new(Arc::clone(&bus));
        let mut cart = Cart::new();

        let added = service.add_to_cart(&mut cart, sample_products()[0].clone());
        assert_eq!(added, "Premium Dog Chow añadido al carrito");
        assert_eq!(service.view_cart(&cart), "Ver carrito: 1 productos");
        assert_eq!(
            bus.emitted_types(),
            vec!["ProductAddedToCart".to_string(), "CartViewed".to_string()]
        );
    }
}
