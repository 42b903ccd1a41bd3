//! Repository for the `camp_people` table.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::camp_person::{CampPerson, CreateCampPerson, UpdateCampPerson};

const ENTITY: &str = "camp_people";

const COLUMNS: &str = "\
    id, role_id, project_id, name, surname, phone_1, phone_2, email, \
    gender, age, nationality, passport_number, photo_path, \
    created_at, updated_at";

/// Provides CRUD operations for camp people.
pub struct CampPersonRepo;

impl CampPersonRepo {
    /// Insert a new camp person, returning the created row.
    ///
    /// A gender outside {M, F} is rejected by the database check
    /// constraint and surfaces as a domain violation.
    pub async fn create(pool: &PgPool, input: &CreateCampPerson) -> DbResult<CampPerson> {
        let query = format!(
            "INSERT INTO camp_people \
                 (role_id, project_id, name, surname, phone_1, phone_2, email, \
                  gender, age, nationality, passport_number, photo_path) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CampPerson>(&query)
            .bind(input.role_id)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.phone_1)
            .bind(&input.phone_2)
            .bind(&input.email)
            .bind(&input.gender)
            .bind(input.age)
            .bind(&input.nationality)
            .bind(&input.passport_number)
            .bind(&input.photo_path)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a camp person by their internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<CampPerson>> {
        let query = format!("SELECT {COLUMNS} FROM camp_people WHERE id = $1");
        sqlx::query_as::<_, CampPerson>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the camp people attached to a project, ordered by surname.
    pub async fn list_by_project(pool: &PgPool, project_id: DbId) -> DbResult<Vec<CampPerson>> {
        let query = format!(
            "SELECT {COLUMNS} FROM camp_people \
             WHERE project_id = $1 ORDER BY surname ASC, name ASC"
        );
        sqlx::query_as::<_, CampPerson>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the camp people holding a role, ordered by surname.
    pub async fn list_by_role(pool: &PgPool, role_id: DbId) -> DbResult<Vec<CampPerson>> {
        let query = format!(
            "SELECT {COLUMNS} FROM camp_people \
             WHERE role_id = $1 ORDER BY surname ASC, name ASC"
        );
        sqlx::query_as::<_, CampPerson>(&query)
            .bind(role_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a camp person. Errors with `NotFound` if the ID does not
    /// exist.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateCampPerson) -> DbResult<CampPerson> {
        let query = format!(
            "UPDATE camp_people SET \
                role_id = COALESCE($2, role_id), \
                project_id = COALESCE($3, project_id), \
                name = COALESCE($4, name), \
                surname = COALESCE($5, surname), \
                phone_1 = COALESCE($6, phone_1), \
                phone_2 = COALESCE($7, phone_2), \
                email = COALESCE($8, email), \
                gender = COALESCE($9, gender), \
                age = COALESCE($10, age), \
                nationality = COALESCE($11, nationality), \
                passport_number = COALESCE($12, passport_number), \
                photo_path = COALESCE($13, photo_path) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CampPerson>(&query)
            .bind(id)
            .bind(input.role_id)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.surname)
            .bind(&input.phone_1)
            .bind(&input.phone_2)
            .bind(&input.email)
            .bind(&input.gender)
            .bind(input.age)
            .bind(&input.nationality)
            .bind(&input.passport_number)
            .bind(&input.photo_path)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a camp person, cascading to their compliance records.
    ///
    /// Material and request rows that point at the person through weak
    /// references survive with those pointers nulled. Errors with
    /// `NotFound` if the ID does not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM camp_people WHERE id = $1")
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
