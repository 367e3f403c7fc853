//! Booking service

use std::sync::Arc;
use tracing::info;

use crate::{
    error::{ServiceError, ServiceResult},
    models::{Booking, CANCELLED_STATUS, NewBooking},
    repositories::BookingRepository,
};

/// Booking service
#[derive(Clone)]
pub struct BookingService {
    repository: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repository: Arc<dyn BookingRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Booking>> {
        Ok(self.repository.find_all().await?)
    }

    /// Load a booking, failing with `NotFound` when it does not exist
    pub async fn get_by_id(&self, booking_id: i64) -> ServiceResult<Booking> {
        self.repository
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Booking", booking_id))
    }

    pub async fn save(&self, booking: NewBooking) -> ServiceResult<Booking> {
        Ok(self.repository.create(&booking).await?)
    }

    /// Mark a booking cancelled
    ///
    /// Cancelling an already cancelled booking succeeds without a write.
    pub async fn cancel(&self, booking_id: i64) -> ServiceResult<Booking> {
        let mut booking = self.get_by_id(booking_id).await?;
        if booking.is_cancelled() {
            return Ok(booking);
        }

        booking.status = Some(CANCELLED_STATUS.to_string());

        info!("Cancelling booking: {}", booking_id);

        // The row can vanish between the load and the write
        self.repository
            .update(&booking)
            .await?
            .ok_or_else(|| ServiceError::not_found("Booking", booking_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MemoryStore;

    fn service() -> BookingService {
        BookingService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_cancel_missing_booking_fails() {
        let result = service().cancel(404).await;
        assert!(matches!(
            result,
            Err(ServiceError::NotFound { entity: "Booking", .. })
        ));
    }

    #[tokio::test]
    async fn test_cancel_is_idempotent() {
        let service = service();
        let booking = service
            .save(NewBooking {
                user_id: Some("u1".to_string()),
                total_amount: Some(250.0),
                status: Some("CONFIRMED".to_string()),
                ..NewBooking::default()
            })
            .await
            .unwrap();

        let once = service.cancel(booking.booking_id).await.unwrap();
        assert!(once.is_cancelled());

        let twice = service.cancel(booking.booking_id).await.unwrap();
        assert_eq!(once, twice);

        let stored = service.get_by_id(booking.booking_id).await.unwrap();
        assert_eq!(stored.status.as_deref(), Some(CANCELLED_STATUS));
        assert_eq!(stored.total_amount, Some(250.0));
    }

    #[tokio::test]
    async fn test_second_booking_for_user_conflicts() {
        let service = service();
        let booking = NewBooking {
            user_id: Some("u7".to_string()),
            ..NewBooking::default()
        };

        service.save(booking.clone()).await.unwrap();
        let again = service.save(booking).await;
        assert!(matches!(again, Err(ServiceError::Conflict(_))));
    }
}
