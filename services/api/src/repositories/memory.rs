//! In-process storage backend
//!
//! Mirrors the PostgreSQL repositories closely enough for local runs and the
//! router tests: per-table identifier sequences, insertion ordering, one booking
//! per user, and refusal to delete users, properties or stores that other rows
//! still point at. Foreign keys are not checked on insert.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{
    BookingRepository, Conflict, MessageRepository, PaymentRepository, PropertyRepository,
    ReviewRepository, StoreRepository, UserRepository,
};
use crate::models::{
    Booking, Message, NewBooking, NewMessage, NewPayment, NewProperty, NewStore, Payment, Property,
    Review, ReviewPayload, Store, User,
};

/// Rows keyed by a store-assigned identifier
#[derive(Debug)]
struct Table<T> {
    rows: BTreeMap<i64, T>,
    last_id: i64,
}

impl<T: Clone> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        self.last_id += 1;
        let row = build(self.last_id);
        self.rows.insert(self.last_id, row.clone());
        row
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn replace(&mut self, id: i64, row: T) -> Option<T> {
        let slot = self.rows.get_mut(&id)?;
        *slot = row.clone();
        Some(row)
    }

    fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<String, User>,
    properties: Table<Property>,
    stores: Table<Store>,
    bookings: Table<Booking>,
    payments: Table<Payment>,
    reviews: Table<Review>,
    messages: Table<Message>,
}

impl Tables {
    fn first_user(&self, matches: impl Fn(&User) -> bool) -> Option<User> {
        self.users.values().find(|u| matches(u)).cloned()
    }

    /// Whether a booking other than `except` belongs to `user_id`
    fn has_booking(&self, user_id: &str, except: Option<i64>) -> bool {
        self.bookings.rows.iter().any(|(id, b)| {
            Some(*id) != except && b.user_id.as_deref() == Some(user_id)
        })
    }

    fn references_user(&self, user_id: &str) -> bool {
        let owns = |owner: &Option<String>| owner.as_deref() == Some(user_id);

        self.has_booking(user_id, None)
            || self.properties.rows.values().any(|p| owns(&p.owner_id))
            || self.stores.rows.values().any(|s| owns(&s.owner_id))
            || self.payments.rows.values().any(|p| owns(&p.user_id))
            || self.reviews.rows.values().any(|r| owns(&r.user_id))
            || self
                .messages
                .rows
                .values()
                .any(|m| m.sender_id == user_id || m.receiver_id == user_id)
    }

    fn check_booking_owner(&self, user_id: &Option<String>, except: Option<i64>) -> Result<()> {
        match user_id {
            Some(id) if self.has_booking(id, except) => {
                Err(Conflict(format!("User {} already has a booking", id)).into())
            }
            _ => Ok(()),
        }
    }
}

/// Memory-backed implementation of every repository trait
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.tables.read().await.users.values().cloned().collect())
    }

    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        Ok(self.tables.read().await.users.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.tables.read().await.first_user(|u| u.email == email))
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>> {
        Ok(self
            .tables
            .read()
            .await
            .first_user(|u| u.phone.as_deref() == Some(phone)))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .tables
            .read()
            .await
            .first_user(|u| u.username == username))
    }

    async fn save(&self, user: &User) -> Result<User> {
        let mut tables = self.tables.write().await;
        tables.users.insert(user.user_id.clone(), user.clone());
        Ok(user.clone())
    }

    async fn delete(&self, user_id: &str) -> Result<bool> {
        let mut tables = self.tables.write().await;
        if tables.users.contains_key(user_id) && tables.references_user(user_id) {
            return Err(Conflict(super::user::still_referenced(user_id)).into());
        }
        Ok(tables.users.remove(user_id).is_some())
    }
}

#[async_trait]
impl PropertyRepository for MemoryStore {
    async fn create(&self, property: &NewProperty) -> Result<Property> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .properties
            .insert_with(|id| property.clone().into_property(id)))
    }

    async fn find_all(&self) -> Result<Vec<Property>> {
        Ok(self.tables.read().await.properties.all())
    }

    async fn find_by_id(&self, property_id: i64) -> Result<Option<Property>> {
        Ok(self.tables.read().await.properties.get(property_id))
    }

    async fn find_by_store(&self, store_id: i64) -> Result<Vec<Property>> {
        Ok(self
            .tables
            .read()
            .await
            .properties
            .rows
            .values()
            .filter(|p| p.store_id == Some(store_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, property_id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let reviewed = tables
            .reviews
            .rows
            .values()
            .any(|r| r.property_id == Some(property_id));
        if reviewed && tables.properties.rows.contains_key(&property_id) {
            let message = format!("Property {} is still referenced", property_id);
            return Err(Conflict(message).into());
        }
        Ok(tables.properties.remove(property_id))
    }
}

#[async_trait]
impl StoreRepository for MemoryStore {
    async fn create(&self, store: &NewStore) -> Result<Store> {
        let mut tables = self.tables.write().await;
        Ok(tables.stores.insert_with(|id| store.clone().into_store(id)))
    }

    async fn find_all(&self) -> Result<Vec<Store>> {
        Ok(self.tables.read().await.stores.all())
    }

    async fn find_by_id(&self, store_id: i64) -> Result<Option<Store>> {
        Ok(self.tables.read().await.stores.get(store_id))
    }

    async fn delete(&self, store_id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let listed = tables
            .properties
            .rows
            .values()
            .any(|p| p.store_id == Some(store_id));
        if listed && tables.stores.rows.contains_key(&store_id) {
            let message = format!("Store {} is still referenced", store_id);
            return Err(Conflict(message).into());
        }
        Ok(tables.stores.remove(store_id))
    }
}

#[async_trait]
impl BookingRepository for MemoryStore {
    async fn create(&self, booking: &NewBooking) -> Result<Booking> {
        let mut tables = self.tables.write().await;
        tables.check_booking_owner(&booking.user_id, None)?;
        Ok(tables
            .bookings
            .insert_with(|id| booking.clone().into_booking(id)))
    }

    async fn find_all(&self) -> Result<Vec<Booking>> {
        Ok(self.tables.read().await.bookings.all())
    }

    async fn find_by_id(&self, booking_id: i64) -> Result<Option<Booking>> {
        Ok(self.tables.read().await.bookings.get(booking_id))
    }

    async fn update(&self, booking: &Booking) -> Result<Option<Booking>> {
        let mut tables = self.tables.write().await;
        tables.check_booking_owner(&booking.user_id, Some(booking.booking_id))?;
        Ok(tables.bookings.replace(booking.booking_id, booking.clone()))
    }
}

#[async_trait]
impl PaymentRepository for MemoryStore {
    async fn create(&self, payment: &NewPayment) -> Result<Payment> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .payments
            .insert_with(|id| payment.clone().into_payment(id)))
    }

    async fn find_all(&self) -> Result<Vec<Payment>> {
        Ok(self.tables.read().await.payments.all())
    }
}

#[async_trait]
impl ReviewRepository for MemoryStore {
    async fn create(&self, review: &ReviewPayload, created_at: DateTime<Utc>) -> Result<Review> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .reviews
            .insert_with(|id| review.clone().into_review(id, created_at)))
    }

    async fn find_all(&self) -> Result<Vec<Review>> {
        Ok(self.tables.read().await.reviews.all())
    }

    async fn find_by_id(&self, review_id: i64) -> Result<Option<Review>> {
        Ok(self.tables.read().await.reviews.get(review_id))
    }

    async fn find_by_property(&self, property_id: i64) -> Result<Vec<Review>> {
        Ok(self
            .tables
            .read()
            .await
            .reviews
            .rows
            .values()
            .filter(|r| r.property_id == Some(property_id))
            .cloned()
            .collect())
    }

    async fn update(&self, review: &Review) -> Result<Option<Review>> {
        let mut tables = self.tables.write().await;
        Ok(tables.reviews.replace(review.review_id, review.clone()))
    }

    async fn delete(&self, review_id: i64) -> Result<bool> {
        Ok(self.tables.write().await.reviews.remove(review_id))
    }
}

#[async_trait]
impl MessageRepository for MemoryStore {
    async fn create(&self, message: &NewMessage, sent_at: DateTime<Utc>) -> Result<Message> {
        let mut tables = self.tables.write().await;
        Ok(tables.messages.insert_with(|id| Message {
            id,
            sender_id: message.sender_id.clone(),
            receiver_id: message.receiver_id.clone(),
            content: message.content.clone(),
            sent_at,
        }))
    }

    async fn find_conversation(&self, user_a: &str, user_b: &str) -> Result<Vec<Message>> {
        let tables = self.tables.read().await;
        let mut conversation: Vec<Message> = tables
            .messages
            .rows
            .values()
            .filter(|m| m.is_between(user_a, user_b))
            .cloned()
            .collect();

        conversation.sort_by(|a, b| a.sent_at.cmp(&b.sent_at).then(a.id.cmp(&b.id)));
        Ok(conversation)
    }
}
