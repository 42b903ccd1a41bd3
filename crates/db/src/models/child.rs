//! Beneficiary (child) model and DTOs.

use campops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `children` table. Age is required; gender is a
/// single-character code constrained to {M, F}.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Child {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub gender: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a child record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChild {
    pub project_id: Option<DbId>,
    pub name: String,
    pub surname: String,
    pub age: i32,
    pub gender: Option<String>,
}

/// DTO for updating a child record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChild {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}
