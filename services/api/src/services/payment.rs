//! Payment service

use std::sync::Arc;

use crate::{
    error::ServiceResult,
    models::{NewPayment, Payment},
    repositories::PaymentRepository,
};

#[derive(Clone)]
pub struct PaymentService {
    repository: Arc<dyn PaymentRepository>,
}

impl PaymentService {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Payment>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn save(&self, payment: NewPayment) -> ServiceResult<Payment> {
        Ok(self.repository.create(&payment).await?)
    }
}
