//! Review repository for PostgreSQL

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::info;

use super::ReviewRepository;
use crate::models::{Review, ReviewPayload};

/// Review repository
#[derive(Clone)]
pub struct PgReviewRepository {
    pool: PgPool,
}

impl PgReviewRepository {
    /// Create a new review repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create(&self, review: &ReviewPayload, created_at: DateTime<Utc>) -> Result<Review> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            INSERT INTO reviews (user_id, property_id, rating, comment, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING review_id, user_id, property_id, rating, comment, created_at
            "#,
        )
        .bind(&review.user_id)
        .bind(review.property_id)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(review)
    }

    async fn find_all(&self) -> Result<Vec<Review>> {
        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT review_id, user_id, property_id, rating, comment, created_at
            FROM reviews
            ORDER BY review_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    async fn find_by_id(&self, review_id: i64) -> Result<Option<Review>> {
        let review = sqlx::query_as::<_, Review>(
            r#"
            SELECT review_id, user_id, property_id, rating, comment, created_at
            FROM reviews
            WHERE review_id = $1
            "#,
        )
        .bind(review_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(review)
    }

    async fn find_by_property(&self, property_id: i64) -> Result<Vec<Review>> {
        info!("Finding reviews for property: {}", property_id);

        let reviews = sqlx::query_as::<_, Review>(
            r#"
            SELECT review_id, user_id, property_id, rating, comment, created_at
            FROM reviews
            WHERE property_id = $1
            ORDER BY review_id
            "#,
        )
        .bind(property_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reviews)
    }

    async fn update(&self, review: &Review) -> Result<Option<Review>> {
        let updated = sqlx::query_as::<_, Review>(
            r#"
            UPDATE reviews SET
            user_id = $2,
            property_id = $3,
            rating = $4,
            comment = $5
            WHERE review_id = $1
            RETURNING review_id, user_id, property_id, rating, comment, created_at
            "#,
        )
        .bind(review.review_id)
        .bind(&review.user_id)
        .bind(review.property_id)
        .bind(review.rating)
        .bind(&review.comment)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete(&self, review_id: i64) -> Result<bool> {
        info!("Deleting review: {}", review_id);

        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(review_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
