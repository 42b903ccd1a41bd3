//! Repository for the `markets` table.

use campops_core::types::{DbId, GeoPoint};
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::market::{CreateMarket, Market, UpdateMarket};

const ENTITY: &str = "markets";

const COLUMNS: &str = "\
    id, name, opening_hours, contact, address, \
    ST_Y(location::geometry) AS location_lat, \
    ST_X(location::geometry) AS location_lng, \
    link, comments, created_at, updated_at";

/// Provides CRUD and spatial reads for markets.
pub struct MarketRepo;

impl MarketRepo {
    /// Insert a new market, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMarket) -> DbResult<Market> {
        let query = format!(
            "INSERT INTO markets \
                 (name, opening_hours, contact, address, location, link, comments) \
             VALUES ($1, $2, $3, $4, ST_SetSRID(ST_MakePoint($5, $6), 4326)::geography, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Market>(&query)
            .bind(&input.name)
            .bind(&input.opening_hours)
            .bind(&input.contact)
            .bind(&input.address)
            .bind(input.location.map(|p| p.lng))
            .bind(input.location.map(|p| p.lat))
            .bind(&input.link)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a market by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Market>> {
        let query = format!("SELECT {COLUMNS} FROM markets WHERE id = $1");
        sqlx::query_as::<_, Market>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List all markets ordered by name.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<Market>> {
        let query = format!("SELECT {COLUMNS} FROM markets ORDER BY name ASC");
        sqlx::query_as::<_, Market>(&query)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a market. Errors with `NotFound` if the ID does not exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateMarket) -> DbResult<Market> {
        let query = format!(
            "UPDATE markets SET \
                name = COALESCE($2, name), \
                opening_hours = COALESCE($3, opening_hours), \
                contact = COALESCE($4, contact), \
                address = COALESCE($5, address), \
                location = COALESCE(\
                    ST_SetSRID(ST_MakePoint($6, $7), 4326)::geography, location), \
                link = COALESCE($8, link), \
                comments = COALESCE($9, comments) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Market>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.opening_hours)
            .bind(&input.contact)
            .bind(&input.address)
            .bind(input.location.map(|p| p.lng))
            .bind(input.location.map(|p| p.lat))
            .bind(&input.link)
            .bind(&input.comments)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a market. Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM markets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(DbError::classify(ENTITY))?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { entity: ENTITY, id });
        }
        Ok(())
    }

    /// Markets within `radius_m` metres of `center`, nearest first.
    /// Distance is great-circle over the spheroid; rows without a
    /// coordinate are excluded.
    pub async fn find_within_radius(
        pool: &PgPool,
        center: GeoPoint,
        radius_m: f64,
    ) -> DbResult<Vec<Market>> {
        let query = format!(
            "SELECT {COLUMNS} FROM markets \
             WHERE location IS NOT NULL \
               AND ST_DWithin(location, \
                              ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography, $3) \
             ORDER BY location <-> ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography"
        );
        sqlx::query_as::<_, Market>(&query)
            .bind(center.lng)
            .bind(center.lat)
            .bind(radius_m)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// The `limit` markets nearest to `center`.
    pub async fn find_nearest(pool: &PgPool, center: GeoPoint, limit: i64) -> DbResult<Vec<Market>> {
        let query = format!(
            "SELECT {COLUMNS} FROM markets \
             WHERE location IS NOT NULL \
             ORDER BY location <-> ST_SetSRID(ST_MakePoint($1, $2), 4326)::geography \
             LIMIT $3"
        );
        sqlx::query_as::<_, Market>(&query)
            .bind(center.lng)
            .bind(center.lat)
            .bind(limit)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }
}
