//! Repository for the `projects` table.

use campops_core::types::{DbId, GeoPoint};
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::project::{CreateProject, Project, UpdateProject};

const ENTITY: &str = "projects";

/// Column list shared across queries. The geography column decodes through
/// `ST_Y`/`ST_X` aliases.
const COLUMNS: &str = "\
    id, project_code, name, description, \
    ST_Y(project_location::geometry) AS location_lat, \
    ST_X(project_location::geometry) AS location_lng, \
    budget, actual_spend, created_at, updated_at";

/// Provides CRUD and spatial reads for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> DbResult<Project> {
        let query = format!(
            "INSERT INTO projects \
                 (project_code, name, description, project_location, budget, actual_spend) \
             VALUES ($1, $2, $3, ST_SetSRID(ST_MakePoint($4, $5), 4326)::geography, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.project_code)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.location.map(|p| p.lng))
            .bind(input.location.map(|p| p.lat))
            .bind(input.budget)
            .bind(input.actual_spend)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a project by its unique three-character code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> DbResult<Option<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE project_code = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List all projects ordered by code.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Project>> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY project_code ASC");
        sqlx::query_as::<_, Project>(&query)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// Errors with `NotFound` if no row with the given `id` exists.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateProject) -> DbResult<Project> {
        let query = format!(
            "UPDATE projects SET \
                project_code = COALESCE($2, project_code), \
                name = COALESCE($3, name), \
                description = COALESCE($4, description), \
                project_location = COALESCE(\
                    ST_SetSRID(ST_MakePoint($5, $6), 4326)::geography, project_location), \
                budget = COALESCE($7, budget), \
                actual_spend = COALESCE($8, actual_spend) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.project_code)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.location.map(|p| p.lng))
            .bind(input.location.map(|p| p.lat))
            .bind(input.budget)
            .bind(input.actual_spend)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a project by ID, cascading to everything it owns.
    ///
    /// Errors with `NotFound` if no row with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(DbError::classify(ENTITY))?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { entity: ENTITY, id });
        }
        Ok(())
    }

    /// Projects whose site lies within `radius_m` metres of `center`,
    /// nearest first. Distance is spheroidal; rows without a coordinate
    /// are excluded.
    pub async fn find_within_radius(
        pool: &PgPool,
        center: GeoPoint,
        radius_m: f64,
    ) -> DbResult<Vec<Project>> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE project_location IS NOT NULL \
               AND ST_DWithin(project_location, \
                              ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3) \
             ORDER BY project_location <-> ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(center.lng)
            .bind(center.lat)
            .bind(radius_m)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// The `limit` projects nearest to `center`, KNN-ordered over the
    /// GIST index.
    pub async fn find_nearest(
        pool: &PgPool,
        center: GeoPoint,
        limit: i64,
    ) -> DbResult<Vec<Project>> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects \
             WHERE project_location IS NOT NULL \
             ORDER BY project_location <-> ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography \
             LIMIT $3"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(center.lng)
            .bind(center.lat)
            .bind(limit)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }
}
