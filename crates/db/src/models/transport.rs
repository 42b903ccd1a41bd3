//! Transportation cluster models: vehicles, geocoded locations, and
//! scheduled movements.

use campops_core::types::{DbId, GeoPoint, LookupId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `available_vehicules` table. `code` is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AvailableVehicule {
    pub id: DbId,
    pub vehicule_type_id: Option<LookupId>,
    pub code: String,
    pub seats: Option<i32>,
    pub photo_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a vehicle.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAvailableVehicule {
    pub vehicule_type_id: Option<LookupId>,
    pub code: String,
    pub seats: Option<i32>,
    pub photo_path: Option<String>,
}

/// DTO for updating a vehicle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAvailableVehicule {
    pub vehicule_type_id: Option<LookupId>,
    pub code: Option<String>,
    pub seats: Option<i32>,
    pub photo_path: Option<String>,
}

/// A row from the `transport_locations` table. `code` is unique; the
/// coordinate is optional and geo-indexed when present.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TransportLocation {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TransportLocation {
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.location_lat, self.location_lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

/// DTO for creating a transport location.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransportLocation {
    pub code: String,
    pub name: String,
    pub location: Option<GeoPoint>,
    pub description: Option<String>,
}

/// DTO for updating a transport location.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTransportLocation {
    pub code: Option<String>,
    pub name: Option<String>,
    pub location: Option<GeoPoint>,
    pub description: Option<String>,
}

/// A row from the `transportations` table.
///
/// Both instants are required. The schema does not enforce
/// departure < arrival; that expectation belongs to the caller.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transportation {
    pub id: DbId,
    pub vehicule_id: Option<DbId>,
    pub origin_id: Option<DbId>,
    pub destination_id: Option<DbId>,
    pub pax: Option<i32>,
    pub departure_time: Timestamp,
    pub scheduled_arrival_time: Timestamp,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for scheduling a transportation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTransportation {
    pub vehicule_id: Option<DbId>,
    pub origin_id: Option<DbId>,
    pub destination_id: Option<DbId>,
    pub pax: Option<i32>,
    pub departure_time: Timestamp,
    pub scheduled_arrival_time: Timestamp,
}

/// DTO for updating a transportation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTransportation {
    pub vehicule_id: Option<DbId>,
    pub origin_id: Option<DbId>,
    pub destination_id: Option<DbId>,
    pub pax: Option<i32>,
    pub departure_time: Option<Timestamp>,
    pub scheduled_arrival_time: Option<Timestamp>,
}
