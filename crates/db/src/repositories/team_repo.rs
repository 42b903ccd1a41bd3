//! Repository for the `teams` table.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::team::{CreateTeam, Team, UpdateTeam};

const ENTITY: &str = "teams";

const COLUMNS: &str = "id, code, name, description, created_at, updated_at";

/// Provides CRUD operations for teams.
pub struct TeamRepo;

impl TeamRepo {
    /// Insert a new team, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTeam) -> DbResult<Team> {
        let query = format!(
            "INSERT INTO teams (code, name, description) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a team by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Team>> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE id = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a team by its unique code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> DbResult<Option<Team>> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE code = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List all teams ordered by code.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Team>> {
        let query = format!("SELECT {COLUMNS} FROM teams ORDER BY code ASC");
        sqlx::query_as::<_, Team>(&query)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a team. Errors with `NotFound` if the ID does not exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateTeam) -> DbResult<Team> {
        let query = format!(
            "UPDATE teams SET \
                code = COALESCE($2, code), \
                name = COALESCE($3, name), \
                description = COALESCE($4, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a team, cascading to its roles and their camp people.
    ///
    /// Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
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
