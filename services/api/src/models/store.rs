//! Store model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Store entity, owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub store_id: i64,
    pub owner_id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub feedback: Option<String>,
}

/// New store creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStore {
    #[serde(default)]
    pub owner_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl NewStore {
    pub fn into_store(self, store_id: i64) -> Store {
        Store {
            store_id,
            owner_id: self.owner_id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
            description: self.description,
            latitude: self.latitude,
            longitude: self.longitude,
            feedback: self.feedback,
        }
    }
}
