//! Repository for the `available_vehicules` table.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::transport::{
    AvailableVehicule, CreateAvailableVehicule, UpdateAvailableVehicule,
};

const ENTITY: &str = "available_vehicules";

const COLUMNS: &str = "\
    id, vehicule_type_id, code, seats, photo_path, created_at, updated_at";

/// Provides CRUD operations for the vehicle fleet.
pub struct AvailableVehiculeRepo;

impl AvailableVehiculeRepo {
    /// Register a vehicle, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAvailableVehicule,
    ) -> DbResult<AvailableVehicule> {
        let query = format!(
            "INSERT INTO available_vehicules (vehicule_type_id, code, seats, photo_path) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AvailableVehicule>(&query)
            .bind(input.vehicule_type_id)
            .bind(&input.code)
            .bind(input.seats)
            .bind(&input.photo_path)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a vehicle by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<AvailableVehicule>> {
        let query = format!("SELECT {COLUMNS} FROM available_vehicules WHERE id = $1");
        sqlx::query_as::<_, AvailableVehicule>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a vehicle by its unique code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> DbResult<Option<AvailableVehicule>> {
        let query = format!("SELECT {COLUMNS} FROM available_vehicules WHERE code = $1");
        sqlx::query_as::<_, AvailableVehicule>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the whole fleet ordered by code.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<AvailableVehicule>> {
        let query = format!("SELECT {COLUMNS} FROM available_vehicules ORDER BY code ASC");
        sqlx::query_as::<_, AvailableVehicule>(&query)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a vehicle. Errors with `NotFound` if the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAvailableVehicule,
    ) -> DbResult<AvailableVehicule> {
        let query = format!(
            "UPDATE available_vehicules SET \
                vehicule_type_id = COALESCE($2, vehicule_type_id), \
                code = COALESCE($3, code), \
                seats = COALESCE($4, seats), \
                photo_path = COALESCE($5, photo_path) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AvailableVehicule>(&query)
            .bind(id)
            .bind(input.vehicule_type_id)
            .bind(&input.code)
            .bind(input.seats)
            .bind(&input.photo_path)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a vehicle, cascading to its transportations.
    ///
    /// Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM available_vehicules WHERE id = $1")
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
