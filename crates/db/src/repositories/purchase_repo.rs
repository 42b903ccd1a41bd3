//! Repository for the `purchases` table.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::inventory::{CreatePurchase, Purchase, UpdatePurchase};

const ENTITY: &str = "purchases";

const COLUMNS: &str = "\
    id, camp_product_id, quantity_requested, quantity_received, unit_format, \
    requested_drop_off, actual_drop_off, drop_off_location_id, \
    created_at, updated_at";

/// Provides CRUD operations for the purchase lifecycle of a camp product.
pub struct PurchaseRepo;

impl PurchaseRepo {
    /// Record a purchase, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePurchase) -> DbResult<Purchase> {
        let query = format!(
            "INSERT INTO purchases \
                 (camp_product_id, quantity_requested, quantity_received, unit_format, \
                  requested_drop_off, actual_drop_off, drop_off_location_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Purchase>(&query)
            .bind(input.camp_product_id)
            .bind(input.quantity_requested)
            .bind(input.quantity_received)
            .bind(input.unit_format)
            .bind(input.requested_drop_off)
            .bind(input.actual_drop_off)
            .bind(input.drop_off_location_id)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a purchase by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<Purchase>> {
        let query = format!("SELECT {COLUMNS} FROM purchases WHERE id = $1");
        sqlx::query_as::<_, Purchase>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the purchases of a camp product, oldest request first.
    pub async fn list_by_product(pool: &PgPool, camp_product_id: DbId) -> DbResult<Vec<Purchase>> {
        let query = format!(
            "SELECT {COLUMNS} FROM purchases \
             WHERE camp_product_id = $1 \
             ORDER BY requested_drop_off ASC NULLS LAST, id ASC"
        );
        sqlx::query_as::<_, Purchase>(&query)
            .bind(camp_product_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a purchase. Errors with `NotFound` if the ID does not exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdatePurchase) -> DbResult<Purchase> {
        let query = format!(
            "UPDATE purchases SET \
                quantity_requested = COALESCE($2, quantity_requested), \
                quantity_received = COALESCE($3, quantity_received), \
                unit_format = COALESCE($4, unit_format), \
                requested_drop_off = COALESCE($5, requested_drop_off), \
                actual_drop_off = COALESCE($6, actual_drop_off), \
                drop_off_location_id = COALESCE($7, drop_off_location_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Purchase>(&query)
            .bind(id)
            .bind(input.quantity_requested)
            .bind(input.quantity_received)
            .bind(input.unit_format)
            .bind(input.requested_drop_off)
            .bind(input.actual_drop_off)
            .bind(input.drop_off_location_id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a purchase. Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM purchases WHERE id = $1")
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
