#[cfg(test)]
#[path = "product_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category_id: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Free text and category filter applied to the product list. Empty values
/// are still sent, the backend ignores them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub search: String,
    pub category: Option<i64>,
}

impl ProductFilter {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let category = self
            .category
            .map(|id| return id.to_string())
            .unwrap_or_default();

        return vec![("search", self.search.to_string()), ("category", category)];
    }
}
