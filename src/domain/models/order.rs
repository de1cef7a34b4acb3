use chrono::DateTime;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::nullable::null_as_default;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    /// Unit price at the time of purchase.
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        return self.price * self.quantity as f64;
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn total(&self) -> f64 {
        return self
            .items
            .iter()
            .fold(0.0, |acc, item| return acc + item.line_total());
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub cart_id: i64,
}

/// Only the id of the order created by `POST /api/orders` is of interest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub id: i64,
}
