#[cfg(test)]
#[path = "order_history_test.rs"]
mod tests;

use std::fmt;

use chrono::TimeZone;

use crate::domain::models::Order;
use crate::domain::models::OrderItem;

/// One collapsible entry of the order history.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderEntry {
    pub id: i64,
    pub date: String,
    pub total: f64,
    pub lines: Vec<String>,
}

impl OrderEntry {
    pub fn header(&self) -> String {
        return format!(
            "Order #{} - {} - Total: ${:.2}",
            self.id, self.date, self.total
        );
    }
}

fn format_line(item: &OrderItem) -> String {
    return format!(
        "{} x Product ID {} at ${:.2}",
        item.quantity, item.product_id, item.price
    );
}

/// Display model for the orders a user placed, in the order the backend
/// returned them (newest first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrderHistory {
    pub entries: Vec<OrderEntry>,
}

impl OrderHistory {
    /// Dates are shown in the given time zone, usually `chrono::Local`.
    pub fn new<Tz: TimeZone>(orders: &[Order], tz: &Tz) -> OrderHistory
    where
        Tz::Offset: fmt::Display,
    {
        let entries = orders
            .iter()
            .map(|order| {
                return OrderEntry {
                    id: order.id,
                    date: order
                        .created_at
                        .with_timezone(tz)
                        .format("%Y-%m-%d")
                        .to_string(),
                    total: order.total(),
                    lines: order.items.iter().map(format_line).collect(),
                };
            })
            .collect();

        return OrderHistory { entries };
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }

    /// Renders every entry, with its lines when `expanded` is set.
    pub fn render(&self, expanded: bool) -> String {
        return self
            .entries
            .iter()
            .map(|entry| {
                if !expanded || entry.lines.is_empty() {
                    return entry.header();
                }

                let lines = entry
                    .lines
                    .iter()
                    .map(|line| return format!("  - {line}"))
                    .collect::<Vec<String>>()
                    .join("\n");

                return format!("{}\n{lines}", entry.header());
            })
            .collect::<Vec<String>>()
            .join("\n");
    }
}
