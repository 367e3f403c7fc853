//! Review model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Review entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: i64,
    pub user_id: Option<String>,
    pub property_id: Option<i64>,
    /// Intended range 1-5; not enforced
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for both creating and updating a review
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub property_id: Option<i64>,
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

impl ReviewPayload {
    pub fn into_review(self, review_id: i64, created_at: DateTime<Utc>) -> Review {
        Review {
            review_id,
            user_id: self.user_id,
            property_id: self.property_id,
            rating: self.rating,
            comment: self.comment,
            created_at,
        }
    }

    /// Overwrite the mutable fields of `review`, keeping its id and timestamp
    pub fn apply_to(self, review: &mut Review) {
        review.rating = self.rating;
        review.comment = self.comment;
        review.user_id = self.user_id;
        review.property_id = self.property_id;
    }
}
