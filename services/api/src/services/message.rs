//! Message service

use chrono::Utc;
use std::sync::Arc;

use crate::{
    error::ServiceResult,
    models::{Message, NewMessage},
    repositories::MessageRepository,
};

#[derive(Clone)]
pub struct MessageService {
    repository: Arc<dyn MessageRepository>,
}

impl MessageService {
    pub fn new(repository: Arc<dyn MessageRepository>) -> Self {
        Self { repository }
    }

    /// Messages between two users in either direction, oldest first
    pub async fn get_conversation(
        &self,
        user_a: &str,
        user_b: &str,
    ) -> ServiceResult<Vec<Message>> {
        Ok(self.repository.find_conversation(user_a, user_b).await?)
    }

    /// Store a message; `sentAt` defaults to now
    pub async fn send(&self, message: NewMessage) -> ServiceResult<Message> {
        let sent_at = message.sent_at.unwrap_or_else(Utc::now);
        Ok(self.repository.create(&message, sent_at).await?)
    }
}
