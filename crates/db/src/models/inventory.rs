//! Inventory/purchasing models: the external product catalog, per-project
//! stock, purchase lifecycle, and traceable PSE material.

use campops_core::types::{DbId, LookupId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pse_odoo_products` catalog. `code` is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OdooProduct {
    pub id: DbId,
    pub code: String,
    pub product_name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a catalog product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOdooProduct {
    pub code: String,
    pub product_name: String,
    pub description: Option<String>,
}

/// DTO for updating a catalog product.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOdooProduct {
    pub code: Option<String>,
    pub product_name: Option<String>,
    pub description: Option<String>,
}

/// A row from the `camp_products` table: consumable stock held by a project.
///
/// `unit_format` and `storage_type` are the exact column names of the
/// taxonomy references; `storage_location_id` is an opaque identifier with
/// no foreign key target in this schema.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampProduct {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub odoo_product_id: Option<DbId>,
    pub product_name: String,
    pub quantity: Option<f64>,
    pub unit_format: Option<LookupId>,
    pub storage_type: Option<LookupId>,
    pub storage_location_id: Option<DbId>,
    pub comments: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a camp product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampProduct {
    pub project_id: Option<DbId>,
    pub odoo_product_id: Option<DbId>,
    pub product_name: String,
    pub quantity: Option<f64>,
    pub unit_format: Option<LookupId>,
    pub storage_type: Option<LookupId>,
    pub storage_location_id: Option<DbId>,
    pub comments: Option<String>,
}

/// DTO for updating a camp product.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCampProduct {
    pub odoo_product_id: Option<DbId>,
    pub product_name: Option<String>,
    pub quantity: Option<f64>,
    pub unit_format: Option<LookupId>,
    pub storage_type: Option<LookupId>,
    pub storage_location_id: Option<DbId>,
    pub comments: Option<String>,
}

/// A row from the `purchases` table: one procurement of a camp product,
/// from request through drop-off.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Purchase {
    pub id: DbId,
    pub camp_product_id: Option<DbId>,
    pub quantity_requested: Option<f64>,
    pub quantity_received: Option<f64>,
    pub unit_format: Option<LookupId>,
    pub requested_drop_off: Option<Timestamp>,
    pub actual_drop_off: Option<Timestamp>,
    pub drop_off_location_id: Option<LookupId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a purchase.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePurchase {
    pub camp_product_id: Option<DbId>,
    pub quantity_requested: Option<f64>,
    pub quantity_received: Option<f64>,
    pub unit_format: Option<LookupId>,
    pub requested_drop_off: Option<Timestamp>,
    pub actual_drop_off: Option<Timestamp>,
    pub drop_off_location_id: Option<LookupId>,
}

/// DTO for updating a purchase.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePurchase {
    pub quantity_requested: Option<f64>,
    pub quantity_received: Option<f64>,
    pub unit_format: Option<LookupId>,
    pub requested_drop_off: Option<Timestamp>,
    pub actual_drop_off: Option<Timestamp>,
    pub drop_off_location_id: Option<LookupId>,
}

/// A row from the `pse_material_used` table: durable equipment with a
/// responsible party at PSE, a responsible party at camp, and the current
/// holder. The three person pointers are plain foreign-key attributes
/// into `camp_people`, never an owning graph.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PseMaterial {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub code: Option<String>,
    pub name: String,
    pub image_path: Option<String>,
    pub pse_responsable_id: Option<DbId>,
    pub camp_responsable_id: Option<DbId>,
    pub current_holder_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering PSE material.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePseMaterial {
    pub project_id: Option<DbId>,
    pub code: Option<String>,
    pub name: String,
    pub image_path: Option<String>,
    pub pse_responsable_id: Option<DbId>,
    pub camp_responsable_id: Option<DbId>,
    pub current_holder_id: Option<DbId>,
}

/// DTO for updating PSE material.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePseMaterial {
    pub code: Option<String>,
    pub name: Option<String>,
    pub image_path: Option<String>,
    pub pse_responsable_id: Option<DbId>,
    pub camp_responsable_id: Option<DbId>,
    pub current_holder_id: Option<DbId>,
}
