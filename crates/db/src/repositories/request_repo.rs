//! Repository for the `requests` table.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::request::{CreateRequest, Request, UpdateRequest};

const ENTITY: &str = "requests";

const COLUMNS: &str = "\
    id, project_id, requested_by, request_type_id, priority, status, \
    requested_at, created_at, updated_at";

/// Provides CRUD operations for prioritized requests.
pub struct RequestRepo;

impl RequestRepo {
    /// File a request, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRequest) -> DbResult<Request> {
        let query = format!(
            "INSERT INTO requests \
                 (project_id, requested_by, request_type_id, priority, status, requested_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(input.project_id)
            .bind(input.requested_by)
            .bind(input.request_type_id)
            .bind(input.priority)
            .bind(&input.status)
            .bind(input.requested_at)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a request by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Request>> {
        let query = format!("SELECT {COLUMNS} FROM requests WHERE id = $1");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the requests of a project, most urgent first.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> DbResult<Vec<Request>> {
        let query = format!(
            "SELECT {COLUMNS} FROM requests \
             WHERE project_id = $1 \
             ORDER BY priority DESC NULLS LAST, requested_at ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a request. Errors with `NotFound` if the ID does not exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateRequest) -> DbResult<Request> {
        let query = format!(
            "UPDATE requests SET \
                request_type_id = COALESCE($2, request_type_id), \
                priority = COALESCE($3, priority), \
                status = COALESCE($4, status), \
                requested_at = COALESCE($5, requested_at) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(input.request_type_id)
            .bind(input.priority)
            .bind(&input.status)
            .bind(input.requested_at)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Move a request to a new status. Errors with `NotFound` if the ID
    /// does not exist.
    pub async fn set_status(pool: &PgPool, id: DbId, status: &str) -> DbResult<Request> {
        let query = format!("UPDATE requests SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Request>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a request. Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(DbError::classify(ENTITY))?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { entity: ENTITY, id });
        }
        Ok(())
    }
}
