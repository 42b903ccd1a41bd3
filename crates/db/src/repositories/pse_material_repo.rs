//! Repository for the `pse_material_used` table.
//!
//! Material rows carry three independent person pointers (responsible at
//! PSE, responsible at camp, current holder). The pointers are weak: they
//! null out when the person leaves the roster, and the material row stays.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::inventory::{CreatePseMaterial, PseMaterial, UpdatePseMaterial};

const ENTITY: &str = "pse_material_used";

const COLUMNS: &str = "\
    id, project_id, code, name, image_path, \
    pse_responsable_id, camp_responsable_id, current_holder_id, \
    created_at, updated_at";

/// Provides CRUD and custody operations for PSE material.
pub struct PseMaterialRepo;

impl PseMaterialRepo {
    /// Register material, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePseMaterial) -> DbResult<PseMaterial> {
        let query = format!(
            "INSERT INTO pse_material_used \
                 (project_id, code, name, image_path, \
                  pse_responsable_id, camp_responsable_id, current_holder_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PseMaterial>(&query)
            .bind(input.project_id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.image_path)
            .bind(input.pse_responsable_id)
            .bind(input.camp_responsable_id)
            .bind(input.current_holder_id)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find material by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<PseMaterial>> {
        let query = format!("SELECT {COLUMNS} FROM pse_material_used WHERE id = $1");
        sqlx::query_as::<_, PseMaterial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the material of a project, ordered by name.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> DbResult<Vec<PseMaterial>> {
        let query = format!(
            "SELECT {COLUMNS} FROM pse_material_used \
             WHERE project_id = $1 ORDER BY name ASC"
        );
        sqlx::query_as::<_, PseMaterial>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the material currently held by a person.
    pub async fn list_held_by(pool: &PgPool, camp_person_id: DbId) -> DbResult<Vec<PseMaterial>> {
        let query = format!(
            "SELECT {COLUMNS} FROM pse_material_used \
             WHERE current_holder_id = $1 ORDER BY name ASC"
        );
        sqlx::query_as::<_, PseMaterial>(&query)
            .bind(camp_person_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update material. Errors with `NotFound` if the ID does not exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdatePseMaterial) -> DbResult<PseMaterial> {
        let query = format!(
            "UPDATE pse_material_used SET \
                code = COALESCE($2, code), \
                name = COALESCE($3, name), \
                image_path = COALESCE($4, image_path), \
                pse_responsable_id = COALESCE($5, pse_responsable_id), \
                camp_responsable_id = COALESCE($6, camp_responsable_id), \
                current_holder_id = COALESCE($7, current_holder_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PseMaterial>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.image_path)
            .bind(input.pse_responsable_id)
            .bind(input.camp_responsable_id)
            .bind(input.current_holder_id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Hand the material to a new holder, or back to nobody with `None`.
    ///
    /// Errors with `NotFound` if the ID does not exist; a holder that is
    /// not on the roster fails with an integrity violation.
    pub async fn transfer_holder(
        pool: &PgPool,
        id: DbId,
        holder: Option<DbId>,
    ) -> DbResult<PseMaterial> {
        let query = format!(
            "UPDATE pse_material_used SET current_holder_id = $2 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PseMaterial>(&query)
            .bind(id)
            .bind(holder)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete material. Errors with `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM pse_material_used WHERE id = $1")
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
