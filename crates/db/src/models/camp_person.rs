//! Volunteer roster models: camp people and their pre-departure
//! compliance records.

use campops_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `camp_people` table.
///
/// `gender` is a single-character code constrained to {M, F} by the
/// database; it is carried as a plain string so the storage layer performs
/// no validation of its own.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampPerson {
    pub id: DbId,
    pub role_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub name: String,
    pub surname: String,
    pub phone_1: Option<String>,
    pub phone_2: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub photo_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new camp person.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampPerson {
    pub role_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub name: String,
    pub surname: String,
    pub phone_1: Option<String>,
    pub phone_2: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub photo_path: Option<String>,
}

/// DTO for updating an existing camp person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCampPerson {
    pub role_id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone_1: Option<String>,
    pub phone_2: Option<String>,
    pub email: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub nationality: Option<String>,
    pub passport_number: Option<String>,
    pub photo_path: Option<String>,
}

/// A row from the `camp_people_extra_data` table.
///
/// Compliance flags are tri-state: NULL means "not yet checked", distinct
/// from an explicit yes/no. The camp_person FK carries no unique
/// constraint, so several records per person are representable.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampPersonExtraData {
    pub id: DbId,
    pub camp_person_id: Option<DbId>,
    pub arrival_flight_number: Option<String>,
    pub arrival_flight_time: Option<Timestamp>,
    pub departure_flight_number: Option<String>,
    pub departure_flight_time: Option<Timestamp>,
    pub has_tickets: Option<bool>,
    pub has_insurance: Option<bool>,
    pub has_vaccination: Option<bool>,
    pub has_evisa: Option<bool>,
    pub has_background_check: Option<bool>,
    pub has_payment_proof: Option<bool>,
    pub accepted_rules: Option<bool>,
    pub signed_contract: Option<bool>,
    pub insurance_doc_path: Option<String>,
    pub evisa_doc_path: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a compliance record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCampPersonExtraData {
    pub camp_person_id: Option<DbId>,
    pub arrival_flight_number: Option<String>,
    pub arrival_flight_time: Option<Timestamp>,
    pub departure_flight_number: Option<String>,
    pub departure_flight_time: Option<Timestamp>,
    pub has_tickets: Option<bool>,
    pub has_insurance: Option<bool>,
    pub has_vaccination: Option<bool>,
    pub has_evisa: Option<bool>,
    pub has_background_check: Option<bool>,
    pub has_payment_proof: Option<bool>,
    pub accepted_rules: Option<bool>,
    pub signed_contract: Option<bool>,
    pub insurance_doc_path: Option<String>,
    pub evisa_doc_path: Option<String>,
}

/// DTO for updating a compliance record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCampPersonExtraData {
    pub arrival_flight_number: Option<String>,
    pub arrival_flight_time: Option<Timestamp>,
    pub departure_flight_number: Option<String>,
    pub departure_flight_time: Option<Timestamp>,
    pub has_tickets: Option<bool>,
    pub has_insurance: Option<bool>,
    pub has_vaccination: Option<bool>,
    pub has_evisa: Option<bool>,
    pub has_background_check: Option<bool>,
    pub has_payment_proof: Option<bool>,
    pub accepted_rules: Option<bool>,
    pub signed_contract: Option<bool>,
    pub insurance_doc_path: Option<String>,
    pub evisa_doc_path: Option<String>,
}
