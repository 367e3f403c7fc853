//! Message model and conversation query

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Message entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

/// New message payload; `sentAt` is stamped by the server when absent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

/// Query parameters for conversation retrieval
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationQuery {
    pub sender_id: String,
    pub receiver_id: String,
}

impl Message {
    /// True when this message was exchanged between `a` and `b`, in either direction
    pub fn is_between(&self, a: &str, b: &str) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sender: &str, receiver: &str) -> Message {
        Message {
            id: 1,
            sender_id: sender.to_string(),
            receiver_id: receiver.to_string(),
            content: "hi".to_string(),
            sent_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_between_ignores_direction() {
        let m = message("a", "b");
        assert!(m.is_between("a", "b"));
        assert!(m.is_between("b", "a"));
        assert!(!m.is_between("a", "c"));
        assert!(!m.is_between("a", "a"));
    }

    #[test]
    fn test_self_conversation() {
        let m = message("a", "a");
        assert!(m.is_between("a", "a"));
        assert!(!m.is_between("a", "b"));
    }
}
