//! Repositories for database operations
//!
//! Each entity gets a data-access trait. Two backends implement them: the
//! PostgreSQL repositories in the entity submodules and [`memory::MemoryStore`],
//! which keeps everything in process.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::models::{
    Booking, Message, NewBooking, NewMessage, NewPayment, NewProperty, NewStore, Payment, Property,
    Review, ReviewPayload, Store, User,
};

pub mod booking;
pub mod memory;
pub mod message;
pub mod payment;
pub mod property;
pub mod review;
pub mod store;
pub mod user;

pub use booking::PgBookingRepository;
pub use memory::MemoryStore;
pub use message::PgMessageRepository;
pub use payment::PgPaymentRepository;
pub use property::PgPropertyRepository;
pub use review::PgReviewRepository;
pub use store::PgStoreRepository;
pub use user::PgUserRepository;

/// A write refused by a uniqueness or foreign-key rule
#[derive(Error, Debug)]
#[error("{0}")]
pub struct Conflict(pub String);

/// Turn constraint violations into [`Conflict`], passing other failures through
pub(crate) fn constraint_error(
    err: sqlx::Error,
    message: impl FnOnce() -> String,
) -> anyhow::Error {
    let violated = match &err {
        sqlx::Error::Database(db) => db.is_unique_violation() || db.is_foreign_key_violation(),
        _ => false,
    };

    if violated {
        Conflict(message()).into()
    } else {
        err.into()
    }
}

/// Data access for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>>;

    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Insert the user, or overwrite the record with the same identifier
    async fn save(&self, user: &User) -> Result<User>;

    /// Delete a user, returning whether a record existed
    async fn delete(&self, user_id: &str) -> Result<bool>;
}

/// Data access for properties
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn create(&self, property: &NewProperty) -> Result<Property>;

    async fn find_all(&self) -> Result<Vec<Property>>;

    async fn find_by_id(&self, property_id: i64) -> Result<Option<Property>>;

    async fn find_by_store(&self, store_id: i64) -> Result<Vec<Property>>;

    async fn delete(&self, property_id: i64) -> Result<bool>;
}

/// Data access for stores
#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn create(&self, store: &NewStore) -> Result<Store>;

    async fn find_all(&self) -> Result<Vec<Store>>;

    async fn find_by_id(&self, store_id: i64) -> Result<Option<Store>>;

    async fn delete(&self, store_id: i64) -> Result<bool>;
}

/// Data access for bookings
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &NewBooking) -> Result<Booking>;

    async fn find_all(&self) -> Result<Vec<Booking>>;

    async fn find_by_id(&self, booking_id: i64) -> Result<Option<Booking>>;

    /// Overwrite an existing booking; `None` when it no longer exists
    async fn update(&self, booking: &Booking) -> Result<Option<Booking>>;
}

/// Data access for payments
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &NewPayment) -> Result<Payment>;

    async fn find_all(&self) -> Result<Vec<Payment>>;
}

/// Data access for reviews
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &ReviewPayload, created_at: DateTime<Utc>) -> Result<Review>;

    async fn find_all(&self) -> Result<Vec<Review>>;

    async fn find_by_id(&self, review_id: i64) -> Result<Option<Review>>;

    /// Reviews of a property in insertion order
    async fn find_by_property(&self, property_id: i64) -> Result<Vec<Review>>;

    /// Overwrite an existing review; `None` when it no longer exists
    async fn update(&self, review: &Review) -> Result<Option<Review>>;

    async fn delete(&self, review_id: i64) -> Result<bool>;
}

/// Data access for messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: &NewMessage, sent_at: DateTime<Utc>) -> Result<Message>;

    /// Messages exchanged between two users in either direction, oldest first
    async fn find_conversation(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>>;
}
