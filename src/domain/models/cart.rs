#[cfg(test)]
#[path = "cart_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::nullable::null_as_default;
use super::Product;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub cart_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub product: Product,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        return self.product.price * self.quantity as f64;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<CartItem>,
}

/// Response of `POST /api/cart`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCart {
    pub id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItem {
    pub product_id: i64,
    pub quantity: i64,
}

/// Client side view of the active cart. Counts and totals are always derived
/// from the lines the backend returned, never tracked incrementally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CartSummary {
    pub items: Vec<CartItem>,
    pub item_count: usize,
    pub quantity: i64,
    pub total: f64,
}

impl CartSummary {
    pub fn new(items: Vec<CartItem>) -> CartSummary {
        let quantity = items.iter().map(|item| return item.quantity).sum();
        let total = items
            .iter()
            .fold(0.0, |acc, item| return acc + item.line_total());

        return CartSummary {
            item_count: items.len(),
            items,
            quantity,
            total,
        };
    }

    pub fn is_empty(&self) -> bool {
        return self.items.is_empty();
    }
}

impl From<Cart> for CartSummary {
    fn from(cart: Cart) -> CartSummary {
        return CartSummary::new(cart.items);
    }
}
