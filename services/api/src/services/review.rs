//! Review service

use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::{
    error::ServiceResult,
    models::{Review, ReviewPayload},
    repositories::ReviewRepository,
};

/// Review service
#[derive(Clone)]
pub struct ReviewService {
    repository: Arc<dyn ReviewRepository>,
}

impl ReviewService {
    pub fn new(repository: Arc<dyn ReviewRepository>) -> Self {
        Self { repository }
    }

    /// Create a review stamped with the current time
    pub async fn save(&self, review: ReviewPayload) -> ServiceResult<Review> {
        Ok(self.repository.create(&review, Utc::now()).await?)
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Review>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_by_id(&self, review_id: i64) -> ServiceResult<Option<Review>> {
        Ok(self.repository.find_by_id(review_id).await?)
    }

    pub async fn get_by_property(&self, property_id: i64) -> ServiceResult<Vec<Review>> {
        Ok(self.repository.find_by_property(property_id).await?)
    }

    /// Replace rating, comment, user and property of an existing review
    ///
    /// Returns `None` when no review has this id.
    pub async fn update(
        &self,
        review_id: i64,
        changes: ReviewPayload,
    ) -> ServiceResult<Option<Review>> {
        let Some(mut review) = self.repository.find_by_id(review_id).await? else {
            return Ok(None);
        };

        changes.apply_to(&mut review);
        info!("Updating review: {}", review_id);

        Ok(self.repository.update(&review).await?)
    }

    /// Delete a review, reporting whether it existed
    pub async fn delete(&self, review_id: i64) -> ServiceResult<bool> {
        Ok(self.repository.delete(review_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    fn service() -> ReviewService {
        ReviewService::new(Arc::new(MemoryStore::new()))
    }

    fn payload(rating: i32, comment: &str, property_id: i64) -> ReviewPayload {
        ReviewPayload {
            user_id: Some("u1".to_string()),
            property_id: Some(property_id),
            rating,
            comment: Some(comment.to_string()),
        }
    }

    #[tokio::test]
    async fn test_save_stamps_created_at() {
        let before = Utc::now();
        let review = service().save(payload(4, "Clean", 7)).await.unwrap();
        assert!(review.created_at >= before);
        assert!(review.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_update_missing_review_returns_none() {
        let updated = service().update(12, payload(1, "x", 1)).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_keeps_timestamp() {
        let service = service();
        let original = service.save(payload(2, "Noisy", 7)).await.unwrap();

        let changes = ReviewPayload {
            user_id: Some("u2".to_string()),
            property_id: Some(8),
            rating: 5,
            comment: Some("Quiet after all".to_string()),
        };
        let updated = service
            .update(original.review_id, changes)
            .await
            .unwrap()
            .expect("review exists");

        assert_eq!(updated.rating, 5);
        assert_eq!(updated.comment.as_deref(), Some("Quiet after all"));
        assert_eq!(updated.user_id.as_deref(), Some("u2"));
        assert_eq!(updated.property_id, Some(8));
        assert_eq!(updated.created_at, original.created_at);

        let stored = service.get_by_id(original.review_id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_delete_reports_existence_once() {
        let service = service();
        let review = service.save(payload(3, "Fine", 7)).await.unwrap();

        assert!(service.delete(review.review_id).await.unwrap());
        assert!(!service.delete(review.review_id).await.unwrap());
        assert!(!service.delete(review.review_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_listing_by_property_keeps_insertion_order() {
        let service = service();
        let a = service.save(payload(4, "a", 7)).await.unwrap();
        service.save(payload(4, "other", 9)).await.unwrap();
        let b = service.save(payload(2, "b", 7)).await.unwrap();

        let ids: Vec<i64> = service
            .get_by_property(7)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.review_id)
            .collect();
        assert_eq!(ids, vec![a.review_id, b.review_id]);
    }
}
