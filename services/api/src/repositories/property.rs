//! Property repository for PostgreSQL

use anyhow::Result;
use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow, types::Json};
use tracing::info;

use super::{PropertyRepository, constraint_error};
use crate::models::{Location, NewProperty, Property, PropertyType};

/// Property repository
#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    /// Create a new property repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn property_from_row(row: &PgRow) -> Result<Property> {
    let property_type: Option<String> = row.try_get("property_type")?;
    let location: Option<Json<Location>> = row.try_get("location")?;

    Ok(Property {
        property_id: row.try_get("property_id")?,
        owner_id: row.try_get("owner_id")?,
        store_id: row.try_get("store_id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        property_type: property_type
            .map(|t| t.parse::<PropertyType>())
            .transpose()?,
        size: row.try_get("size")?,
        bedrooms: row.try_get("bedrooms")?,
        bathrooms: row.try_get("bathrooms")?,
        image_url: row.try_get("image_url")?,
        feedback: row.try_get("feedback")?,
        location: location.map(|l| l.0),
    })
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn create(&self, property: &NewProperty) -> Result<Property> {
        info!("Creating property: {}", property.name);

        let row = sqlx::query(
            r#"
            INSERT INTO properties (owner_id, store_id, name, description, price, property_type,
                                    size, bedrooms, bathrooms, image_url, feedback, location)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING property_id, owner_id, store_id, name, description, price, property_type,
                      size, bedrooms, bathrooms, image_url, feedback, location
            "#,
        )
        .bind(&property.owner_id)
        .bind(property.store_id)
        .bind(&property.name)
        .bind(&property.description)
        .bind(property.price)
        .bind(property.property_type.map(|t| t.as_str()))
        .bind(property.size)
        .bind(property.bedrooms)
        .bind(property.bathrooms)
        .bind(&property.image_url)
        .bind(&property.feedback)
        .bind(property.location.as_ref().map(Json))
        .fetch_one(&self.pool)
        .await?;

        property_from_row(&row)
    }

    async fn find_all(&self) -> Result<Vec<Property>> {
        let rows = sqlx::query(
            r#"
            SELECT property_id, owner_id, store_id, name, description, price, property_type,
                   size, bedrooms, bathrooms, image_url, feedback, location
            FROM properties
            ORDER BY property_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(property_from_row).collect()
    }

    async fn find_by_id(&self, property_id: i64) -> Result<Option<Property>> {
        info!("Finding property by ID: {}", property_id);

        let row = sqlx::query(
            r#"
            SELECT property_id, owner_id, store_id, name, description, price, property_type,
                   size, bedrooms, bathrooms, image_url, feedback, location
            FROM properties
            WHERE property_id = $1
            "#,
        )
        .bind(property_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(property_from_row).transpose()
    }

    async fn find_by_store(&self, store_id: i64) -> Result<Vec<Property>> {
        let rows = sqlx::query(
            r#"
            SELECT property_id, owner_id, store_id, name, description, price, property_type,
                   size, bedrooms, bathrooms, image_url, feedback, location
            FROM properties
            WHERE store_id = $1
            ORDER BY property_id
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(property_from_row).collect()
    }

    async fn delete(&self, property_id: i64) -> Result<bool> {
        info!("Deleting property: {}", property_id);

        let result = sqlx::query("DELETE FROM properties WHERE property_id = $1")
            .bind(property_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                constraint_error(e, || format!("Property {} is still referenced", property_id))
            })?;

        Ok(result.rows_affected() > 0)
    }
}
