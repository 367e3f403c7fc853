//! Booking model and related functionality

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status written by a cancellation
pub const CANCELLED_STATUS: &str = "CANCELLED";

/// Booking entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: i64,
    pub user_id: Option<String>,
    pub total_amount: Option<f64>,
    pub booking_date: Option<NaiveDate>,
    pub check_in_date: Option<NaiveDate>,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_date: Option<NaiveDate>,
    pub check_out_time: Option<NaiveTime>,
    pub checked_by_owner: bool,
    pub confirmed_by_owner: bool,
    pub status: Option<String>,
}

impl Booking {
    pub fn is_cancelled(&self) -> bool {
        self.status.as_deref() == Some(CANCELLED_STATUS)
    }
}

/// New booking creation payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewBooking {
    pub user_id: Option<String>,
    pub total_amount: Option<f64>,
    pub booking_date: Option<NaiveDate>,
    pub check_in_date: Option<NaiveDate>,
    pub check_in_time: Option<NaiveTime>,
    pub check_out_date: Option<NaiveDate>,
    pub check_out_time: Option<NaiveTime>,
    pub checked_by_owner: bool,
    #[serde(alias = "conformedByOwner")]
    pub confirmed_by_owner: bool,
    pub status: Option<String>,
}

impl NewBooking {
    pub fn into_booking(self, booking_id: i64) -> Booking {
        Booking {
            booking_id,
            user_id: self.user_id,
            total_amount: self.total_amount,
            booking_date: self.booking_date,
            check_in_date: self.check_in_date,
            check_in_time: self.check_in_time,
            check_out_date: self.check_out_date,
            check_out_time: self.check_out_time,
            checked_by_owner: self.checked_by_owner,
            confirmed_by_owner: self.confirmed_by_owner,
            status: self.status,
        }
    }
}
