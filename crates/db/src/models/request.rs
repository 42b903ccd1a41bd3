//! Request model and DTOs.

use campops_core::types::{DbId, LookupId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `requests` table.
///
/// `requested_by` is a weak pointer into `camp_people`: request history
/// survives the requester's removal from the roster.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Request {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub requested_by: Option<DbId>,
    pub request_type_id: Option<LookupId>,
    pub priority: Option<i32>,
    pub status: Option<String>,
    pub requested_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRequest {
    pub project_id: Option<DbId>,
    pub requested_by: Option<DbId>,
    pub request_type_id: Option<LookupId>,
    pub priority: Option<i32>,
    pub status: Option<String>,
    pub requested_at: Option<Timestamp>,
}

/// DTO for updating a request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRequest {
    pub request_type_id: Option<LookupId>,
    pub priority: Option<i32>,
    pub status: Option<String>,
    pub requested_at: Option<Timestamp>,
}
