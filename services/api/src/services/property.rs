//! Property service

use std::sync::Arc;

use crate::{
    error::ServiceResult,
    models::{NewProperty, Property},
    repositories::PropertyRepository,
};

#[derive(Clone)]
pub struct PropertyService {
    repository: Arc<dyn PropertyRepository>,
}

impl PropertyService {
    pub fn new(repository: Arc<dyn PropertyRepository>) -> Self {
        Self { repository }
    }

    pub async fn add(&self, property: NewProperty) -> ServiceResult<Property> {
        Ok(self.repository.create(&property).await?)
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Property>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_by_id(&self, property_id: i64) -> ServiceResult<Option<Property>> {
        Ok(self.repository.find_by_id(property_id).await?)
    }

    pub async fn get_by_store(&self, store_id: i64) -> ServiceResult<Vec<Property>> {
        Ok(self.repository.find_by_store(store_id).await?)
    }

    /// Delete by id; deleting an absent property is not an error
    pub async fn delete(&self, property_id: i64) -> ServiceResult<()> {
        self.repository.delete(property_id).await?;
        Ok(())
    }
}
