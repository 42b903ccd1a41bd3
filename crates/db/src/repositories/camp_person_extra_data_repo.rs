//! Repository for the `camp_people_extra_data` table.
//!
//! One compliance record per person is the product intent, but the schema
//! allows several; reads therefore return lists, newest first.

use campops_core::types::DbId;
use sqlx::PgPool;

use crate::error::{DbError, DbResult};
use crate::models::camp_person::{
    CampPersonExtraData, CreateCampPersonExtraData, UpdateCampPersonExtraData,
};

const ENTITY: &str = "camp_people_extra_data";

const COLUMNS: &str = "\
    id, camp_person_id, arrival_flight_number, arrival_flight_time, \
    departure_flight_number, departure_flight_time, \
    has_tickets, has_insurance, has_vaccination, has_evisa, \
    has_background_check, has_payment_proof, accepted_rules, signed_contract, \
    insurance_doc_path, evisa_doc_path, created_at, updated_at";

/// Provides CRUD operations for pre-departure compliance records.
pub struct CampPersonExtraDataRepo;

impl CampPersonExtraDataRepo {
    /// Insert a new compliance record, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCampPersonExtraData,
    ) -> DbResult<CampPersonExtraData> {
        let query = format!(
            "INSERT INTO camp_people_extra_data \
                 (camp_person_id, arrival_flight_number, arrival_flight_time, \
                  departure_flight_number, departure_flight_time, \
                  has_tickets, has_insurance, has_vaccination, has_evisa, \
                  has_background_check, has_payment_proof, accepted_rules, \
                  signed_contract, insurance_doc_path, evisa_doc_path) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CampPersonExtraData>(&query)
            .bind(input.camp_person_id)
            .bind(&input.arrival_flight_number)
            .bind(input.arrival_flight_time)
            .bind(&input.departure_flight_number)
            .bind(input.departure_flight_time)
            .bind(input.has_tickets)
            .bind(input.has_insurance)
            .bind(input.has_vaccination)
            .bind(input.has_evisa)
            .bind(input.has_background_check)
            .bind(input.has_payment_proof)
            .bind(input.accepted_rules)
            .bind(input.signed_contract)
            .bind(&input.insurance_doc_path)
            .bind(&input.evisa_doc_path)
            .fetch_one(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Find a compliance record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> DbResult<Option<CampPersonExtraData>> {
        let query = format!("SELECT {COLUMNS} FROM camp_people_extra_data WHERE id = $1");
        sqlx::query_as::<_, CampPersonExtraData>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// List the compliance records of a camp person, newest first.
    pub async fn list_by_person(
        pool: &PgPool,
        camp_person_id: DbId,
    ) -> DbResult<Vec<CampPersonExtraData>> {
        let query = format!(
            "SELECT {COLUMNS} FROM camp_people_extra_data \
             WHERE camp_person_id = $1 ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, CampPersonExtraData>(&query)
            .bind(camp_person_id)
            .fetch_all(pool)
            .await
            .map_err(DbError::classify(ENTITY))
    }

    /// Update a compliance record. Errors with `NotFound` if the ID does
    /// not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCampPersonExtraData,
    ) -> DbResult<CampPersonExtraData> {
        let query = format!(
            "UPDATE camp_people_extra_data SET \
                arrival_flight_number = COALESCE($2, arrival_flight_number), \
                arrival_flight_time = COALESCE($3, arrival_flight_time), \
                departure_flight_number = COALESCE($4, departure_flight_number), \
                departure_flight_time = COALESCE($5, departure_flight_time), \
                has_tickets = COALESCE($6, has_tickets), \
                has_insurance = COALESCE($7, has_insurance), \
                has_vaccination = COALESCE($8, has_vaccination), \
                has_evisa = COALESCE($9, has_evisa), \
                has_background_check = COALESCE($10, has_background_check), \
                has_payment_proof = COALESCE($11, has_payment_proof), \
                accepted_rules = COALESCE($12, accepted_rules), \
                signed_contract = COALESCE($13, signed_contract), \
                insurance_doc_path = COALESCE($14, insurance_doc_path), \
                evisa_doc_path = COALESCE($15, evisa_doc_path) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CampPersonExtraData>(&query)
            .bind(id)
            .bind(&input.arrival_flight_number)
            .bind(input.arrival_flight_time)
            .bind(&input.departure_flight_number)
            .bind(input.departure_flight_time)
            .bind(input.has_tickets)
            .bind(input.has_insurance)
            .bind(input.has_vaccination)
            .bind(input.has_evisa)
            .bind(input.has_background_check)
            .bind(input.has_payment_proof)
            .bind(input.accepted_rules)
            .bind(input.signed_contract)
            .bind(&input.insurance_doc_path)
            .bind(&input.evisa_doc_path)
            .fetch_optional(pool)
            .await
            .map_err(DbError::classify(ENTITY))?
            .ok_or(DbError::NotFound { entity: ENTITY, id })
    }

    /// Delete a compliance record. Errors with `NotFound` if the ID does
    /// not exist.
    pub async fn delete(pool: &PgPool, id: DbId) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM camp_people_extra_data WHERE id = $1")
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
