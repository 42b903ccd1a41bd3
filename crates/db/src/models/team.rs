//! Team and role entity models and DTOs.

use campops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `teams` table. `code` is unique, at most six characters.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new team.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing team.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeam {
    pub code: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A row from the `roles` table. Roles are owned by their team.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Role {
    pub id: DbId,
    pub team_id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new role.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRole {
    pub team_id: Option<DbId>,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing role.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRole {
    pub team_id: Option<DbId>,
    pub name: Option<String>,
    pub description: Option<String>,
}
