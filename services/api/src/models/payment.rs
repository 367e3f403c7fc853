//! Payment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Payment entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i64,
    pub user_id: Option<String>,
    pub booking_id: Option<i64>,
    pub amount: f64,
    /// e.g. STRIPE
    pub method: Option<String>,
    /// PAID, FAILED or REFUNDED
    pub status: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// New payment creation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewPayment {
    pub user_id: Option<String>,
    pub booking_id: Option<i64>,
    pub amount: f64,
    pub method: Option<String>,
    pub status: Option<String>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl NewPayment {
    pub fn into_payment(self, payment_id: i64) -> Payment {
        Payment {
            payment_id,
            user_id: self.user_id,
            booking_id: self.booking_id,
            amount: self.amount,
            method: self.method,
            status: self.status,
            paid_at: self.paid_at,
        }
    }
}
