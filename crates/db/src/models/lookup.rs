//! Taxonomy/lookup row models.
//!
//! The simple taxonomies (`unit_format`, `product_storage_types`,
//! `camp_product_types`, `vehicules_type`, `request_types`,
//! `purchase_group`, `purchase_drop_off_locations`) share one row shape;
//! `checklist_area` additionally carries a description.

use campops_core::types::{LookupId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A taxonomy row. For `vehicules_type` the underlying column is `label`,
/// aliased to `name` in queries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LookupRow {
    pub id: LookupId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a taxonomy row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLookup {
    pub name: String,
}

/// DTO for renaming a taxonomy row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLookup {
    pub name: Option<String>,
}

/// A row from the `checklist_area` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChecklistArea {
    pub id: LookupId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a checklist area.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChecklistArea {
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating a checklist area.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChecklistArea {
    pub name: Option<String>,
    pub description: Option<String>,
}
