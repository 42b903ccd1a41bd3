//! Market model and DTOs. Markets are standalone geo-indexed rows.

use campops_core::types::{DbId, GeoPoint, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `markets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Market {
    pub id: DbId,
    pub name: String,
    pub opening_hours: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub link: Option<String>,
    pub comments: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Market {
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.location_lat, self.location_lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

/// DTO for creating a market.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMarket {
    pub name: String,
    pub opening_hours: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub location: Option<GeoPoint>,
    pub link: Option<String>,
    pub comments: Option<String>,
}

/// DTO for updating a market.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateMarket {
    pub name: Option<String>,
    pub opening_hours: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub location: Option<GeoPoint>,
    pub link: Option<String>,
    pub comments: Option<String>,
}
