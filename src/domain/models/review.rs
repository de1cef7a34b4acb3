#[cfg(test)]
#[path = "review_test.rs"]
mod tests;

use std::ops::RangeInclusive;

use chrono::DateTime;
use chrono::Utc;
use serde_derive::Deserialize;
use serde_derive::Serialize;

pub const RATINGS: RangeInclusive<i64> = 1..=5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub product_id: i64,
    pub user_id: i64,
    pub rating: i64,
    #[serde(default)]
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// Review form state. Serializes to the body of
/// `POST /api/products/{id}/reviews`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewDraft {
    pub rating: i64,
    pub comment: String,
}

impl Default for ReviewDraft {
    fn default() -> ReviewDraft {
        return ReviewDraft {
            rating: *RATINGS.end(),
            comment: "".to_string(),
        };
    }
}

impl ReviewDraft {
    pub fn new(rating: i64, comment: &str) -> ReviewDraft {
        return ReviewDraft {
            rating,
            comment: comment.to_string(),
        };
    }

    pub fn has_valid_rating(&self) -> bool {
        return RATINGS.contains(&self.rating);
    }
}
