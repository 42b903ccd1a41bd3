//! Repository for the `transport_locations` table.

use campops_core::types::{DbId, GeoPoint};
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::transport::{
    CreateTransportLocation, TransportLocation, UpdateTransportLocation,
};

const ENTITY: &str = "transport_locations";

const COLUMNS: &str = "\
    id, code, name, \
    ST_Y(location::geometry) AS location_lat, \
    ST_X(location::geometry) AS location_lng, \
    description, created_at, updated_at";

/// Provides CRUD and spatial reads for transport locations.
pub struct TransportLocationRepo;

impl TransportLocationRepo {
    /// Insert a new location, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransportLocation,
    ) -> DbResult<TransportLocation> {
        let query = format!(
            "INSERT INTO transport_locations (code, name, location, description) \
             VALUES ($1, $2, ST_SetSRID(ST_MakePoint($3, $4), 4326)::geography, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TransportLocation>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.location.map(|p| p.lng))
            .bind(input.location.map(|p| p.lat))
            .bind(&input.description)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a location by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<TransportLocation>> {
        let query = format!("SELECT {COLUMNS} FROM transport_locations WHERE id = $1");
        sqlx::query_as::<_, TransportLocation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a location by its unique code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> DbResult<Option<TransportLocation>> {
        let query = format!("SELECT {COLUMNS} FROM transport_locations WHERE code = $1");
        sqlx::query_as::<_, TransportLocation>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List all locations ordered by code.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<TransportLocation>> {
        let query = format!("SELECT {COLUMNS} FROM transport_locations ORDER BY code ASC");
        sqlx::query_as::<_, TransportLocation>(&query)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a location. Errors with `NotFound` if the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTransportLocation,
    ) -> DbResult<TransportLocation> {
        let query = format!(
            "UPDATE transport_locations SET \
                code = COALESCE($2, code), \
                name = COALESCE($3, name), \
                location = COALESCE(\
                    ST_SetSRID(ST_MakePoint($4, $5), 4326)::geography, location), \
                description = COALESCE($6, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TransportLocation>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(input.location.map(|p| p.lng))
            .bind(input.location.map(|p| p.lat))
            .bind(&input.description)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a location, cascading to transportations that use it as
    /// origin or destination.
    ///
    /// Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM transport_locations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(DbError::classify(ENTITY))?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { entity: ENTITY, id });
        }
        Ok(())
    }

    /// Locations within `radius_m` metres of `center`, nearest first.
    /// Rows without a coordinate are excluded.
    pub async fn find_within_radius(
        pool: &PgPool,
        center: GeoPoint,
        radius_m: f64,
    ) -> DbResult<Vec<TransportLocation>> {
        let query = format!(
            "SELECT {COLUMNS} FROM transport_locations \
             WHERE location IS NOT NULL \
               AND ST_DWithin(location, \
                              ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3) \
             ORDER BY location <-> ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography"
        );
        sqlx::query_as::<_, TransportLocation>(&query)
            .bind(center.lng)
            .bind(center.lat)
            .bind(radius_m)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// The `limit` locations nearest to `center`.
    pub async fn find_nearest(
        pool: &PgPool,
        center: GeoPoint,
        limit: i64,
    ) -> DbResult<Vec<TransportLocation>> {
        let query = format!(
            "SELECT {COLUMNS} FROM transport_locations \
             WHERE location IS NOT NULL \
             ORDER BY location <-> ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography \
             LIMIT $3"
        );
        sqlx::query_as::<_, TransportLocation>(&query)
            .bind(center.lng)
            .bind(center.lat)
            .bind(limit)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }
}
