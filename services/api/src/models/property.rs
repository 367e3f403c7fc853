//! Property model and its embedded location

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of rental unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    Apartment,
    House,
    Room,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "APARTMENT",
            PropertyType::House => "HOUSE",
            PropertyType::Room => "ROOM",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "APARTMENT" => Ok(PropertyType::Apartment),
            "HOUSE" => Ok(PropertyType::House),
            "ROOM" => Ok(PropertyType::Room),
            other => Err(anyhow::anyhow!("Unknown property type: {}", other)),
        }
    }
}

/// Location embedded in a property, stored as JSON
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub address: Option<String>,
    pub city: Option<String>,
    pub lat: f64,
    pub lng: f64,
}

/// Property entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub property_id: i64,
    pub owner_id: Option<String>,
    pub store_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    /// Non-negative by convention; not enforced
    pub price: f64,
    pub property_type: Option<PropertyType>,
    pub size: f64,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub image_url: Option<String>,
    pub feedback: Option<String>,
    pub location: Option<Location>,
}

/// New property creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub store_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub bedrooms: i32,
    #[serde(default)]
    pub bathrooms: i32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub location: Option<Location>,
}

impl NewProperty {
    /// Materialise the payload under a store-assigned identifier
    pub fn into_property(self, property_id: i64) -> Property {
        Property {
            property_id,
            owner_id: self.owner_id,
            store_id: self.store_id,
            name: self.name,
            description: self.description,
            price: self.price,
            property_type: self.property_type,
            size: self.size,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            image_url: self.image_url,
            feedback: self.feedback,
            location: self.location,
        }
    }
}
