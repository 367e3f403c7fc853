//! Booking repository for PostgreSQL

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use super::{BookingRepository, constraint_error};
use crate::models::{Booking, NewBooking};

/// Booking repository
#[derive(Clone)]
pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    /// Create a new booking repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn booked_message(user_id: &Option<String>) -> String {
    match user_id {
        Some(id) => format!("User {} already has a booking or does not exist", id),
        None => "Booking violates a constraint".to_string(),
    }
}

#[async_trait]
impl BookingRepository for PgBookingRepository {
    async fn create(&self, booking: &NewBooking) -> Result<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (user_id, total_amount, booking_date, check_in_date, check_in_time,
                                  check_out_date, check_out_time, checked_by_owner,
                                  confirmed_by_owner, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING booking_id, user_id, total_amount, booking_date, check_in_date, check_in_time,
                      check_out_date, check_out_time, checked_by_owner, confirmed_by_owner, status
            "#,
        )
        .bind(&booking.user_id)
        .bind(booking.total_amount)
        .bind(booking.booking_date)
        .bind(booking.check_in_date)
        .bind(booking.check_in_time)
        .bind(booking.check_out_date)
        .bind(booking.check_out_time)
        .bind(booking.checked_by_owner)
        .bind(booking.confirmed_by_owner)
        .bind(&booking.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| constraint_error(e, || booked_message(&booking.user_id)))?;

        info!("Created booking: {}", booking.booking_id);
        Ok(booking)
    }

    async fn find_all(&self) -> Result<Vec<Booking>> {
        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT booking_id, user_id, total_amount, booking_date, check_in_date, check_in_time,
                   check_out_date, check_out_time, checked_by_owner, confirmed_by_owner, status
            FROM bookings
            ORDER BY booking_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    async fn find_by_id(&self, booking_id: i64) -> Result<Option<Booking>> {
        info!("Finding booking by ID: {}", booking_id);

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT booking_id, user_id, total_amount, booking_date, check_in_date, check_in_time,
                   check_out_date, check_out_time, checked_by_owner, confirmed_by_owner, status
            FROM bookings
            WHERE booking_id = $1
            "#,
        )
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(booking)
    }

    async fn update(&self, booking: &Booking) -> Result<Option<Booking>> {
        let updated = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings SET
            user_id = $2,
            total_amount = $3,
            booking_date = $4,
            check_in_date = $5,
            check_in_time = $6,
            check_out_date = $7,
            check_out_time = $8,
            checked_by_owner = $9,
            confirmed_by_owner = $10,
            status = $11
            WHERE booking_id = $1
            RETURNING booking_id, user_id, total_amount, booking_date, check_in_date, check_in_time,
                      check_out_date, check_out_time, checked_by_owner, confirmed_by_owner, status
            "#,
        )
        .bind(booking.booking_id)
        .bind(&booking.user_id)
        .bind(booking.total_amount)
        .bind(booking.booking_date)
        .bind(booking.check_in_date)
        .bind(booking.check_in_time)
        .bind(booking.check_out_date)
        .bind(booking.check_out_time)
        .bind(booking.checked_by_owner)
        .bind(booking.confirmed_by_owner)
        .bind(&booking.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| constraint_error(e, || booked_message(&booking.user_id)))?;

        Ok(updated)
    }
}
