//! Repository for the `pse_odoo_products` catalog.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::inventory::{CreateOdooProduct, OdooProduct, UpdateOdooProduct};

const ENTITY: &str = "pse_odoo_products";

const COLUMNS: &str = "id, code, product_name, description, created_at, updated_at";

/// Provides CRUD operations for catalog products.
pub struct OdooProductRepo;

impl OdooProductRepo {
    /// Insert a new catalog product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateOdooProduct) -> DbResult<OdooProduct> {
        let query = format!(
            "INSERT INTO pse_odoo_products (code, product_name, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OdooProduct>(&query)
            .bind(&input.code)
            .bind(&input.product_name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a catalog product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<OdooProduct>> {
        let query = format!("SELECT {COLUMNS} FROM pse_odoo_products WHERE id = $1");
        sqlx::query_as::<_, OdooProduct>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a catalog product by its unique code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> DbResult<Option<OdooProduct>> {
        let query = format!("SELECT {COLUMNS} FROM pse_odoo_products WHERE code = $1");
        sqlx::query_as::<_, OdooProduct>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the whole catalog ordered by code.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<OdooProduct>> {
        let query = format!("SELECT {COLUMNS} FROM pse_odoo_products ORDER BY code ASC");
        sqlx::query_as::<_, OdooProduct>(&query)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a catalog product. Errors with `NotFound` if the ID does not
    /// exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateOdooProduct) -> DbResult<OdooProduct> {
        let query = format!(
            "UPDATE pse_odoo_products SET \
                code = COALESCE($2, code), \
                product_name = COALESCE($3, product_name), \
                description = COALESCE($4, description) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OdooProduct>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.product_name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a catalog product. Camp products still referencing it block
    /// the deletion with an integrity violation (RESTRICT).
    ///
    /// Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM pse_odoo_products WHERE id = $1")
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
