//! Repository for the `children` table.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::child::{Child, CreateChild, UpdateChild};

const ENTITY: &str = "children";

const COLUMNS: &str = "id, project_id, name, surname, age, gender, created_at, updated_at";

/// Provides CRUD operations for beneficiary records.
pub struct ChildRepo;

impl ChildRepo {
    /// Insert a new child record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateChild) -> DbResult<Child> {
        let query = format!(
            "INSERT INTO children (project_id, name, surname, age, gender) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(input.age)
            .bind(&input.gender)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a child record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Child>> {
        let query = format!("SELECT {COLUMNS} FROM children WHERE id = $1");
        sqlx::query_as::<_, Child>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the children of a project, ordered by surname.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> DbResult<Vec<Child>> {
        let query = format!(
            "SELECT {COLUMNS} FROM children \
             WHERE project_id = $1 ORDER BY surname ASC, name ASC"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a child record. Errors with `NotFound` if the ID does not
    /// exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateChild) -> DbResult<Child> {
        let query = format!(
            "UPDATE children SET \
                name = COALESCE($2, name), \
                surname = COALESCE($3, surname), \
                age = COALESCE($4, age), \
                gender = COALESCE($5, gender) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Child>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(input.age)
            .bind(&input.gender)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a child record. Errors with `NotFound` if the ID does not
    /// exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM children WHERE id = $1")
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
