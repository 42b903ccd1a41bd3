//! Checklist task model and DTOs.
//!
//! Tasks cross-reference a project, a team and a checklist area; deleting
//! any of the three removes the task.

use campops_core::types::{DbId, LookupId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `checklist_tasks` table. `done` defaults to false.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChecklistTask {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub area_id: Option<LookupId>,
    pub name: String,
    pub short_description: Option<String>,
    pub priority: Option<i32>,
    pub done: bool,
    pub due_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a checklist task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChecklistTask {
    pub project_id: Option<DbId>,
    pub team_id: Option<DbId>,
    pub area_id: Option<LookupId>,
    pub name: String,
    pub short_description: Option<String>,
    pub priority: Option<i32>,
    pub due_date: Option<Timestamp>,
}

/// DTO for updating a checklist task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChecklistTask {
    pub team_id: Option<DbId>,
    pub area_id: Option<LookupId>,
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub priority: Option<i32>,
    pub done: Option<bool>,
    pub due_date: Option<Timestamp>,
}
