//! Repository for the `transportations` table.

use campops_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::transport::{CreateTransportation, Transportation, UpdateTransportation};

const ENTITY: &str = "transportations";

const COLUMNS: &str = "\
    id, vehicule_id, origin_id, destination_id, pax, \
    departure_time, scheduled_arrival_time, created_at, updated_at";

/// Provides CRUD operations for scheduled vehicle movements.
pub struct TransportationRepo;

impl TransportationRepo {
    /// Schedule a transportation, returning the created row. Both instants
    /// are required by the schema.
    pub async fn create(pool: &PgPool, input: &CreateTransportation) -> DbResult<Transportation> {
        let query = format!(
            "INSERT INTO transportations \
                 (vehicule_id, origin_id, destination_id, pax, \
                  departure_time, scheduled_arrival_time) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transportation>(&query)
            .bind(input.vehicule_id)
            .bind(input.origin_id)
            .bind(input.destination_id)
            .bind(input.pax)
            .bind(input.departure_time)
            .bind(input.scheduled_arrival_time)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a transportation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Transportation>> {
        let query = format!("SELECT {COLUMNS} FROM transportations WHERE id = $1");
        sqlx::query_as::<_, Transportation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the movements of a vehicle, earliest departure first.
    pub async fn list_by_vehicule(pool: &PgPool, vehicule_id: DbId) -> DbResult<Vec<Transportation>> {
        let query = format!(
            "SELECT {COLUMNS} FROM transportations \
             WHERE vehicule_id = $1 ORDER BY departure_time ASC"
        );
        sqlx::query_as::<_, Transportation>(&query)
            .bind(vehicule_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List movements departing in `[from, until)`, earliest first.
    /// Comparisons are in UTC.
    pub async fn list_departing_between(
        pool: &PgPool,
        from: Timestamp,
        until: Timestamp,
    ) -> DbResult<Vec<Transportation>> {
        let query = format!(
            "SELECT {COLUMNS} FROM transportations \
             WHERE departure_time >= $1 AND departure_time < $2 \
             ORDER BY departure_time ASC"
        );
        sqlx::query_as::<_, Transportation>(&query)
            .bind(from)
            .bind(until)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a transportation. Errors with `NotFound` if the ID does not
    /// exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTransportation,
    ) -> DbResult<Transportation> {
        let query = format!(
            "UPDATE transportations SET \
                vehicule_id = COALESCE($2, vehicule_id), \
                origin_id = COALESCE($3, origin_id), \
                destination_id = COALESCE($4, destination_id), \
                pax = COALESCE($5, pax), \
                departure_time = COALESCE($6, departure_time), \
                scheduled_arrival_time = COALESCE($7, scheduled_arrival_time) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transportation>(&query)
            .bind(id)
            .bind(input.vehicule_id)
            .bind(input.origin_id)
            .bind(input.destination_id)
            .bind(input.pax)
            .bind(input.departure_time)
            .bind(input.scheduled_arrival_time)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a transportation. Errors with `NotFound` if the ID does not
    /// exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM transportations WHERE id = $1")
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
