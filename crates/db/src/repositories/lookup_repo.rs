//! Repositories for the taxonomy/lookup tables.
//!
//! The single-name taxonomies share one implementation, generated per
//! table; `checklist_area` is written out because it also carries a
//! description. Deleting a row that entity tables still reference fails
//! with an integrity violation (RESTRICT references) or cascades, per the
//! schema.

use campops_core::types::{DbId, LookupId};
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::lookup::{
    ChecklistArea, CreateChecklistArea, CreateLookup, LookupRow, UpdateChecklistArea, UpdateLookup,
};

macro_rules! lookup_repo {
    (
        $(#[$meta:meta])*
        $repo:ident => table $table:literal, column $col:literal
    ) => {
        $(#[$meta])*
        pub struct $repo;

        impl $repo {
            /// Insert a new row, returning it.
            pub async fn create(pool: &PgPool, input: &CreateLookup) -> DbResult<LookupRow> {
                let query = concat!(
                    "INSERT INTO ", $table, " (", $col, ") VALUES ($1) ",
                    "RETURNING id, ", $col, " AS name, created_at, updated_at"
                );
                sqlx::query_as::<_, LookupRow>(query)
                    .bind(&input.name)
                    .fetch_one(pool)
                    .await
                    .map_err(DbError::classify($table))
            }

            /// Find a row by its ID.
            pub async fn find_by_id(pool: &PgPool, id: LookupId) -> DbResult<Option<LookupRow>> {
                let query = concat!(
                    "SELECT id, ", $col, " AS name, created_at, updated_at FROM ", $table,
                    " WHERE id = $1"
                );
                sqlx::query_as::<_, LookupRow>(query)
                    .bind(id)
                    .fetch_optional(pool)
                    .await
                    .map_err(DbError::classify($table))
            }

            /// List all rows ordered by ID.
            pub async fn list(pool: &PgPool) -> DbResult<Vec<LookupRow>> {
                let query = concat!(
                    "SELECT id, ", $col, " AS name, created_at, updated_at FROM ", $table,
                    " ORDER BY id ASC"
                );
                sqlx::query_as::<_, LookupRow>(query)
                    .fetch_all(pool)
                    .await
                    .map_err(DbError::classify($table))
            }

            /// Rename a row. Errors with `NotFound` if the ID does not exist.
            pub async fn update(
                pool: &PgPool,
                id: LookupId,
                input: &UpdateLookup,
            ) -> DbResult<LookupRow> {
                let query = concat!(
                    "UPDATE ", $table, " SET ", $col, " = COALESCE($2, ", $col, ") ",
                    "WHERE id = $1 ",
                    "RETURNING id, ", $col, " AS name, created_at, updated_at"
                );
                sqlx::query_as::<_, LookupRow>(query)
                    .bind(id)
                    .bind(&input.name)
                    .fetch_optional(pool)
                    .await
                    .map_err(DbError::classify($table))?
                    .ok_or(DbError::NotFound {
                        entity: $table,
                        id: DbId::from(id),
                    })
            }

            /// Delete a row. Errors with `NotFound` if the ID does not exist.
            pub async fn delete(pool: &PgPool, id: LookupId) -> DbResult<()> {
                let result = sqlx::query(concat!("DELETE FROM ", $table, " WHERE id = $1"))
                    .bind(id)
                    .execute(pool)
                    .await
                    .map_err(DbError::classify($table))?;
                if result.rows_affected() == 0 {
                    return Err(DbError::NotFound {
                        entity: $table,
                        id: DbId::from(id),
                    });
                }
                Ok(())
            }
        }
    };
}

lookup_repo! {
    /// `unit_format` taxonomy (pcs, kg, l, ...).
    UnitFormatRepo => table "unit_format", column "name"
}

lookup_repo! {
    /// `product_storage_types` taxonomy (dry, refrigerated, ...).
    ProductStorageTypeRepo => table "product_storage_types", column "name"
}

lookup_repo! {
    /// `camp_product_types` taxonomy (food, hygiene, ...).
    CampProductTypeRepo => table "camp_product_types", column "name"
}

lookup_repo! {
    /// `vehicules_type` taxonomy. The underlying column is `label`.
    VehiculeTypeRepo => table "vehicules_type", column "label"
}

lookup_repo! {
    /// `request_types` taxonomy (material, transport, ...).
    RequestTypeRepo => table "request_types", column "name"
}

lookup_repo! {
    /// `purchase_group` taxonomy (food, construction, ...).
    PurchaseGroupRepo => table "purchase_group", column "name"
}

lookup_repo! {
    /// `purchase_drop_off_locations` taxonomy (main warehouse, ...).
    DropOffLocationRepo => table "purchase_drop_off_locations", column "name"
}

const AREA_ENTITY: &str = "checklist_area";

const AREA_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Provides CRUD operations for checklist areas.
pub struct ChecklistAreaRepo;

impl ChecklistAreaRepo {
    /// Insert a new area, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateChecklistArea) -> DbResult<ChecklistArea> {
        let query = format!(
            "INSERT INTO checklist_area (name, description) VALUES ($1, $2) \
             RETURNING {AREA_COLUMNS}"
        );
        sqlx::query_as::<_, ChecklistArea>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(AREA_ENTITY))
    }

    /// Find an area by its ID.
    pub async fn find_by_id(pool: &PgPool, id: LookupId) -> DbResult<Option<ChecklistArea>> {
        let query = format!("SELECT {AREA_COLUMNS} FROM checklist_area WHERE id = $1");
        sqlx::query_as::<_, ChecklistArea>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(AREA_ENTITY))
    }

    /// List all areas ordered by ID.
    pub async fn list(pool: &PgPool) -> DbResult<Vec<ChecklistArea>> {
        let query = format!("SELECT {AREA_COLUMNS} FROM checklist_area ORDER BY id ASC");
        sqlx::query_as::<_, ChecklistArea>(&query)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(AREA_ENTITY))
    }

    /// Update an area. Errors with `NotFound` if the ID does not exist.
    pub async fn update(
        pool: &PgPool,
        id: LookupId,
        input: &UpdateChecklistArea,
    ) -> DbResult<ChecklistArea> {
        let query = format!(
            "UPDATE checklist_area SET \
                name = COALESCE($2, name), \
                description = COALESCE($3, description) \
             WHERE id = $1 \
             RETURNING {AREA_COLUMNS}"
        );
        sqlx::query_as::<_, ChecklistArea>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(AREA_ENTITY))?
            .ok_or(DbError::NotFound {
                entity: AREA_ENTITY,
                id: DbId::from(id),
            })
    }

    /// Delete an area, cascading to its checklist tasks.
    ///
    /// Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: LookupId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM checklist_area WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(DbError::classify(AREA_ENTITY))?;
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: AREA_ENTITY,
                id: DbId::from(id),
            });
        }
        Ok(())
    }
}
