//! Repository for the `roles` table.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::team::{CreateRole, Role, UpdateRole};

const ENTITY: &str = "roles";

const COLUMNS: &str = "id, team_id, name, description, created_at, updated_at";

/// Provides CRUD operations for team roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Insert a new role, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRole) -> DbResult<Role> {
        let query = format!(
            "INSERT INTO roles (team_id, name, description) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(input.team_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a role by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Role>> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE id = $1");
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the roles belonging to a team, ordered by name.
    pub async fn list_by_team(pool: &PgPool, team_id: DbId) -> DbResult<Vec<Role>> {
        let query = format!("SELECT {COLUMNS} FROM roles WHERE team_id = $1 ORDER BY name ASC");
        sqlx::query_as::<_, Role>(&query)
            .bind(team_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a role. Errors with `NotFound` if the ID does not exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateRole) -> DbResult<Role> {
        let query = format!(
            "UPDATE roles SET \
                team_id = COALESCE($2, team_id), \
                name = COALESCE($3, name), \
                description = COALESCE($4, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Role>(&query)
            .bind(id)
            .bind(input.team_id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a role, cascading to the camp people assigned to it.
    ///
    /// Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
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
