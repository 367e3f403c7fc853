//! API models for persisted entities and their request payloads

pub mod booking;
pub mod message;
pub mod payment;
pub mod property;
pub mod review;
pub mod store;
pub mod user;

// Re-export for convenience
pub use booking::{Booking, CANCELLED_STATUS, NewBooking};
pub use message::{ConversationQuery, Message, NewMessage};
pub use payment::{NewPayment, Payment};
pub use property::{Location, NewProperty, Property, PropertyType};
pub use review::{Review, ReviewPayload};
pub use store::{NewStore, Store};
pub use user::{User, UserPayload, UserRole};
