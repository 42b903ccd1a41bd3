//! Repository for the `camp_products` table.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::inventory::{CampProduct, CreateCampProduct, UpdateCampProduct};

const ENTITY: &str = "camp_products";

const COLUMNS: &str = "\
    id, project_id, odoo_product_id, product_name, quantity, unit_format, \
    storage_type, storage_location_id, comments, created_at, updated_at";

/// Provides CRUD operations for per-project consumable stock.
pub struct CampProductRepo;

impl CampProductRepo {
    /// Insert a new camp product, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCampProduct) -> DbResult<CampProduct> {
        let query = format!(
            "INSERT INTO camp_products \
                 (project_id, odoo_product_id, product_name, quantity, unit_format, \
                  storage_type, storage_location_id, comments) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CampProduct>(&query)
            .bind(input.project_id)
            .bind(input.odoo_product_id)
            .bind(&input.product_name)
            .bind(input.quantity)
            .bind(input.unit_format)
            .bind(input.storage_type)
            .bind(input.storage_location_id)
            .bind(&input.comments)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a camp product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<CampProduct>> {
        let query = format!("SELECT {COLUMNS} FROM camp_products WHERE id = $1");
        sqlx::query_as::<_, CampProduct>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the stock of a project, ordered by product name.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> DbResult<Vec<CampProduct>> {
        let query = format!(
            "SELECT {COLUMNS} FROM camp_products \
             WHERE project_id = $1 ORDER BY product_name ASC"
        );
        sqlx::query_as::<_, CampProduct>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a camp product. Errors with `NotFound` if the ID does not
    /// exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateCampProduct) -> DbResult<CampProduct> {
        let query = format!(
            "UPDATE camp_products SET \
                odoo_product_id = COALESCE($2, odoo_product_id), \
                product_name = COALESCE($3, product_name), \
                quantity = COALESCE($4, quantity), \
                unit_format = COALESCE($5, unit_format), \
                storage_type = COALESCE($6, storage_type), \
                storage_location_id = COALESCE($7, storage_location_id), \
                comments = COALESCE($8, comments) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CampProduct>(&query)
            .bind(id)
            .bind(input.odoo_product_id)
            .bind(&input.product_name)
            .bind(input.quantity)
            .bind(input.unit_format)
            .bind(input.storage_type)
            .bind(input.storage_location_id)
            .bind(&input.comments)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a camp product, cascading to its purchases.
    ///
    /// Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM camp_products WHERE id = $1")
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
