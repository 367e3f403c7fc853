//! Service layer
//!
//! Each service wraps one repository and adds the small amount of logic the
//! routes need on top of plain persistence: identifier generation and password
//! hashing for users, timestamps for reviews and messages, and booking
//! cancellation.

pub mod booking;
pub mod message;
pub mod payment;
pub mod property;
pub mod review;
pub mod store;
pub mod user;

pub use booking::BookingService;
pub use message::MessageService;
pub use payment::PaymentService;
pub use property::PropertyService;
pub use review::ReviewService;
pub use store::StoreService;
pub use user::UserService;
