//! Payment repository for PostgreSQL

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::PaymentRepository;
use crate::models::{NewPayment, Payment};

/// Payment repository
#[derive(Clone)]
pub struct PgPaymentRepository {
    pool: PgPool,
}

impl PgPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    async fn create(&self, payment: &NewPayment) -> Result<Payment> {
        let payment = sqlx::query_as::<_, Payment>(
            r#"
            INSERT INTO payments (user_id, booking_id, amount, method, status, paid_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING payment_id, user_id, booking_id, amount, method, status, paid_at
            "#,
        )
        .bind(&payment.user_id)
        .bind(payment.booking_id)
        .bind(payment.amount)
        .bind(&payment.method)
        .bind(&payment.status)
        .bind(payment.paid_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(payment)
    }

    async fn find_all(&self) -> Result<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(
            r#"
            SELECT payment_id, user_id, booking_id, amount, method, status, paid_at
            FROM payments
            ORDER BY payment_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }
}
