//! Message repository for PostgreSQL

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use super::MessageRepository;
use crate::models::{Message, NewMessage};

/// Message repository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn create(&self, message: &NewMessage, sent_at: DateTime<Utc>) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (sender_id, receiver_id, content, sent_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, sender_id, receiver_id, content, sent_at
            "#,
        )
        .bind(&message.sender_id)
        .bind(&message.receiver_id)
        .bind(&message.content)
        .bind(sent_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    async fn find_conversation(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>> {
        debug!("Loading conversation between {} and {}", user_a, user_b);

        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, sender_id, receiver_id, content, sent_at
            FROM messages
            WHERE (sender_id = $1 AND receiver_id = $2)
               OR (sender_id = $2 AND receiver_id = $1)
            ORDER BY sent_at, id
            "#,
        )
        .bind(user_a)
        .bind(user_b)
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
