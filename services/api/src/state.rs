//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::{
    repositories::{
        MemoryStore, PgBookingRepository, PgMessageRepository, PgPaymentRepository,
        PgPropertyRepository, PgReviewRepository, PgStoreRepository, PgUserRepository,
    },
    services::{
        BookingService, MessageService, PaymentService, PropertyService, ReviewService,
        StoreService, UserService,
    },
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Present only for the PostgreSQL backend
    pub db_pool: Option<PgPool>,
    pub users: UserService,
    pub properties: PropertyService,
    pub stores: StoreService,
    pub bookings: BookingService,
    pub payments: PaymentService,
    pub reviews: ReviewService,
    pub messages: MessageService,
}

impl AppState {
    /// State backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: UserService::new(Arc::new(PgUserRepository::new(pool.clone()))),
            properties: PropertyService::new(Arc::new(PgPropertyRepository::new(pool.clone()))),
            stores: StoreService::new(Arc::new(PgStoreRepository::new(pool.clone()))),
            bookings: BookingService::new(Arc::new(PgBookingRepository::new(pool.clone()))),
            payments: PaymentService::new(Arc::new(PgPaymentRepository::new(pool.clone()))),
            reviews: ReviewService::new(Arc::new(PgReviewRepository::new(pool.clone()))),
            messages: MessageService::new(Arc::new(PgMessageRepository::new(pool.clone()))),
            db_pool: Some(pool),
        }
    }

    /// State backed by a single in-process store
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());

        Self {
            db_pool: None,
            users: UserService::new(store.clone()),
            properties: PropertyService::new(store.clone()),
            stores: StoreService::new(store.clone()),
            bookings: BookingService::new(store.clone()),
            payments: PaymentService::new(store.clone()),
            reviews: ReviewService::new(store.clone()),
            messages: MessageService::new(store),
        }
    }
}
