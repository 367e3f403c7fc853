//! Store repository for PostgreSQL

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreRepository, constraint_error};
use crate::models::{NewStore, Store};

/// Store repository
#[derive(Clone)]
pub struct PgStoreRepository {
    pool: PgPool,
}

impl PgStoreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PgStoreRepository {
    async fn create(&self, store: &NewStore) -> Result<Store> {
        let store = sqlx::query_as::<_, Store>(
            r#"
            INSERT INTO stores (owner_id, name, address, phone, email, description,
                                latitude, longitude, feedback)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING store_id, owner_id, name, address, phone, email, description,
                      latitude, longitude, feedback
            "#,
        )
        .bind(&store.owner_id)
        .bind(&store.name)
        .bind(&store.address)
        .bind(&store.phone)
        .bind(&store.email)
        .bind(&store.description)
        .bind(store.latitude)
        .bind(store.longitude)
        .bind(&store.feedback)
        .fetch_one(&self.pool)
        .await?;

        Ok(store)
    }

    async fn find_all(&self) -> Result<Vec<Store>> {
        let stores = sqlx::query_as::<_, Store>(
            r#"
            SELECT store_id, owner_id, name, address, phone, email, description,
                   latitude, longitude, feedback
            FROM stores
            ORDER BY store_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stores)
    }

    async fn find_by_id(&self, store_id: i64) -> Result<Option<Store>> {
        let store = sqlx::query_as::<_, Store>(
            r#"
            SELECT store_id, owner_id, name, address, phone, email, description,
                   latitude, longitude, feedback
            FROM stores
            WHERE store_id = $1
            "#,
        )
        .bind(store_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(store)
    }

    async fn delete(&self, store_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM stores WHERE store_id = $1")
            .bind(store_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                constraint_error(e, || format!("Store {} is still referenced", store_id))
            })?;

        Ok(result.rows_affected() > 0)
    }
}
