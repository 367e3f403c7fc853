//! Store service

use std::sync::Arc;

use crate::{
    error::ServiceResult,
    models::{NewStore, Store},
    repositories::StoreRepository,
};

#[derive(Clone)]
pub struct StoreService {
    repository: Arc<dyn StoreRepository>,
}

impl StoreService {
    pub fn new(repository: Arc<dyn StoreRepository>) -> Self {
        Self { repository }
    }

    pub async fn add(&self, store: NewStore) -> ServiceResult<Store> {
        Ok(self.repository.create(&store).await?)
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<Store>> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn get_by_id(&self, store_id: i64) -> ServiceResult<Option<Store>> {
        Ok(self.repository.find_by_id(store_id).await?)
    }

    pub async fn delete(&self, store_id: i64) -> ServiceResult<()> {
        self.repository.delete(store_id).await?;
        Ok(())
    }
}
