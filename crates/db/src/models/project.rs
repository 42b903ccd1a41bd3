//! Project entity model and DTOs.
//!
//! Projects are the aggregate root of the schema: camp people, checklist
//! tasks, children, camp products, requests and PSE material all hang off
//! `project_id` and are removed with their project.

use campops_core::types::{DbId, GeoPoint, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
///
/// `project_code` is a unique, exactly-three-character identifier.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub project_code: String,
    pub name: String,
    pub description: Option<String>,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub budget: Option<f64>,
    pub actual_spend: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Geographic site of the project, when recorded.
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.location_lat, self.location_lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub project_code: String,
    pub name: String,
    pub description: Option<String>,
    pub location: Option<GeoPoint>,
    pub budget: Option<f64>,
    pub actual_spend: Option<f64>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub project_code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<GeoPoint>,
    pub budget: Option<f64>,
    pub actual_spend: Option<f64>,
}
