//! Integration tests for the cascade/weak-reference deletion policy.
//!
//! The schema's central integrity decision: ownership edges cascade
//! (project -> people -> extra data, product -> purchases, ...), while
//! responsibility pointers into `camp_people` and taxonomy references are
//! weak (SET NULL) or immutable (RESTRICT).

use assert_matches::assert_matches;
use campops_db::error::DbError;
use campops_db::models::camp_person::{CreateCampPerson, CreateCampPersonExtraData};
use campops_db::models::checklist::CreateChecklistTask;
use campops_db::models::child::CreateChild;
use campops_db::models::inventory::{CreateCampProduct, CreatePseMaterial, CreatePurchase};
use campops_db::models::project::CreateProject;
use campops_db::models::request::CreateRequest;
use campops_db::models::team::{CreateRole, CreateTeam};
use campops_db::models::transport::{CreateAvailableVehicule, CreateTransportation};
use campops_db::repositories::{
    AvailableVehiculeRepo, CampPersonExtraDataRepo, CampPersonRepo, CampProductRepo,
    ChecklistTaskRepo, ChildRepo, ProjectRepo, PseMaterialRepo, PurchaseRepo, RequestRepo,
    RoleRepo, TeamRepo, TransportationRepo, UnitFormatRepo, VehiculeTypeRepo,
};
use chrono::{TimeZone, Utc};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_project(code: &str, name: &str) -> CreateProject {
    CreateProject {
        project_code: code.to_string(),
        name: name.to_string(),
        description: None,
        location: None,
        budget: None,
        actual_spend: None,
    }
}

fn new_person(project_id: Option<i64>, surname: &str) -> CreateCampPerson {
    CreateCampPerson {
        role_id: None,
        project_id,
        name: "Alex".to_string(),
        surname: surname.to_string(),
        phone_1: None,
        phone_2: None,
        email: None,
        gender: Some("M".to_string()),
        age: None,
        nationality: None,
        passport_number: None,
        photo_path: None,
    }
}

async fn count_where(pool: &PgPool, table: &str, column: &str, id: i64) -> i64 {
    let row: (i64,) =
        sqlx::query_as(&format!("SELECT COUNT(*) FROM {table} WHERE {column} = $1"))
            .bind(id)
            .fetch_one(pool)
            .await
            .unwrap();
    row.0
}

// ---------------------------------------------------------------------------
// Test: Project deletion sweeps the whole aggregate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_project_cascades_all_owned_rows(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("CAS", "Cascade"))
        .await
        .unwrap();

    let person = CampPersonRepo::create(&pool, &new_person(Some(project.id), "One"))
        .await
        .unwrap();
    CampPersonExtraDataRepo::create(
        &pool,
        &CreateCampPersonExtraData {
            camp_person_id: Some(person.id),
            has_tickets: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    ChecklistTaskRepo::create(
        &pool,
        &CreateChecklistTask {
            project_id: Some(project.id),
            team_id: None,
            area_id: Some(1),
            name: "Order tarpaulins".to_string(),
            short_description: None,
            priority: Some(2),
            due_date: None,
        },
    )
    .await
    .unwrap();

    ChildRepo::create(
        &pool,
        &CreateChild {
            project_id: Some(project.id),
            name: "Sok".to_string(),
            surname: "Chan".to_string(),
            age: 9,
            gender: Some("M".to_string()),
        },
    )
    .await
    .unwrap();

    let product = CampProductRepo::create(
        &pool,
        &CreateCampProduct {
            project_id: Some(project.id),
            odoo_product_id: None,
            product_name: "Rice".to_string(),
            quantity: Some(50.0),
            unit_format: Some(2),
            storage_type: Some(1),
            storage_location_id: None,
            comments: None,
        },
    )
    .await
    .unwrap();
    PurchaseRepo::create(
        &pool,
        &CreatePurchase {
            camp_product_id: Some(product.id),
            quantity_requested: Some(50.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    RequestRepo::create(
        &pool,
        &CreateRequest {
            project_id: Some(project.id),
            requested_by: Some(person.id),
            request_type_id: Some(1),
            priority: Some(3),
            status: Some("open".to_string()),
            requested_at: Some(Utc::now()),
        },
    )
    .await
    .unwrap();

    PseMaterialRepo::create(
        &pool,
        &CreatePseMaterial {
            project_id: Some(project.id),
            code: Some("MAT-1".to_string()),
            name: "Projector".to_string(),
            image_path: None,
            pse_responsable_id: Some(person.id),
            camp_responsable_id: None,
            current_holder_id: Some(person.id),
        },
    )
    .await
    .unwrap();

    ProjectRepo::delete(&pool, project.id).await.unwrap();

    for (table, column) in [
        ("camp_people", "project_id"),
        ("checklist_tasks", "project_id"),
        ("children", "project_id"),
        ("camp_products", "project_id"),
        ("requests", "project_id"),
        ("pse_material_used", "project_id"),
    ] {
        assert_eq!(
            count_where(&pool, table, column, project.id).await,
            0,
            "{table} rows should be gone with the project"
        );
    }

    // Transitive: extra data via the person, purchases via the product.
    assert_eq!(
        count_where(&pool, "camp_people_extra_data", "camp_person_id", person.id).await,
        0
    );
    assert_eq!(
        count_where(&pool, "purchases", "camp_product_id", product.id).await,
        0
    );
}

// ---------------------------------------------------------------------------
// Test: Team and role survive their project
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_team_and_role_survive_project_delete(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("ABC", "Site A"))
        .await
        .unwrap();
    let team = TeamRepo::create(
        &pool,
        &CreateTeam {
            code: "LOGIS1".to_string(),
            name: "Logistics".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let role = RoleRepo::create(
        &pool,
        &CreateRole {
            team_id: Some(team.id),
            name: "Driver".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();

    let mut person_input = new_person(Some(project.id), "Doe");
    person_input.name = "Jane".to_string();
    person_input.role_id = Some(role.id);
    person_input.gender = Some("F".to_string());
    let person = CampPersonRepo::create(&pool, &person_input).await.unwrap();

    ProjectRepo::delete(&pool, project.id).await.unwrap();

    assert!(CampPersonRepo::find_by_id(&pool, person.id)
        .await
        .unwrap()
        .is_none());
    assert!(TeamRepo::find_by_code(&pool, "LOGIS1")
        .await
        .unwrap()
        .is_some());
    assert!(RoleRepo::find_by_id(&pool, role.id)
        .await
        .unwrap()
        .is_some());
}

// ---------------------------------------------------------------------------
// Test: Weak person pointers null out, rows survive
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_person_delete_nulls_weak_references(pool: PgPool) {
    let project = ProjectRepo::create(&pool, &new_project("WKR", "Weak refs"))
        .await
        .unwrap();
    let keeper = CampPersonRepo::create(&pool, &new_person(Some(project.id), "Keeper"))
        .await
        .unwrap();

    let material = PseMaterialRepo::create(
        &pool,
        &CreatePseMaterial {
            project_id: Some(project.id),
            code: None,
            name: "First-aid kit".to_string(),
            image_path: None,
            pse_responsable_id: Some(keeper.id),
            camp_responsable_id: Some(keeper.id),
            current_holder_id: Some(keeper.id),
        },
    )
    .await
    .unwrap();

    let request = RequestRepo::create(
        &pool,
        &CreateRequest {
            project_id: Some(project.id),
            requested_by: Some(keeper.id),
            request_type_id: Some(1),
            priority: Some(1),
            status: Some("open".to_string()),
            requested_at: Some(Utc::now()),
        },
    )
    .await
    .unwrap();

    CampPersonRepo::delete(&pool, keeper.id).await.unwrap();

    // Material and request history survive with nulled pointers.
    let material = PseMaterialRepo::find_by_id(&pool, material.id)
        .await
        .unwrap()
        .expect("material must survive the person");
    assert_eq!(material.pse_responsable_id, None);
    assert_eq!(material.camp_responsable_id, None);
    assert_eq!(material.current_holder_id, None);

    let request = RequestRepo::find_by_id(&pool, request.id)
        .await
        .unwrap()
        .expect("request must survive the person");
    assert_eq!(request.requested_by, None);
}

// ---------------------------------------------------------------------------
// Test: Ownership chains below the project
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_team_cascades_roles_and_people(pool: PgPool) {
    let team = TeamRepo::create(
        &pool,
        &CreateTeam {
            code: "KITCH1".to_string(),
            name: "Kitchen".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let role = RoleRepo::create(
        &pool,
        &CreateRole {
            team_id: Some(team.id),
            name: "Cook".to_string(),
            description: None,
        },
    )
    .await
    .unwrap();
    let mut person_input = new_person(None, "Chef");
    person_input.role_id = Some(role.id);
    let person = CampPersonRepo::create(&pool, &person_input).await.unwrap();

    TeamRepo::delete(&pool, team.id).await.unwrap();

    assert!(RoleRepo::find_by_id(&pool, role.id).await.unwrap().is_none());
    assert!(CampPersonRepo::find_by_id(&pool, person.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_camp_product_cascades_purchases(pool: PgPool) {
    let product = CampProductRepo::create(
        &pool,
        &CreateCampProduct {
            project_id: None,
            odoo_product_id: None,
            product_name: "Soap".to_string(),
            quantity: Some(200.0),
            unit_format: Some(1),
            storage_type: Some(1),
            storage_location_id: None,
            comments: None,
        },
    )
    .await
    .unwrap();
    let purchase = PurchaseRepo::create(
        &pool,
        &CreatePurchase {
            camp_product_id: Some(product.id),
            quantity_requested: Some(200.0),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    CampProductRepo::delete(&pool, product.id).await.unwrap();

    assert!(PurchaseRepo::find_by_id(&pool, purchase.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_vehicule_type_cascades_fleet_and_trips(pool: PgPool) {
    let vehicule = AvailableVehiculeRepo::create(
        &pool,
        &CreateAvailableVehicule {
            vehicule_type_id: Some(2),
            code: "MV-03".to_string(),
            seats: Some(15),
            photo_path: None,
        },
    )
    .await
    .unwrap();
    let trip = TransportationRepo::create(
        &pool,
        &CreateTransportation {
            vehicule_id: Some(vehicule.id),
            origin_id: None,
            destination_id: None,
            pax: Some(10),
            departure_time: Utc.with_ymd_and_hms(2025, 8, 1, 7, 0, 0).unwrap(),
            scheduled_arrival_time: Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap(),
        },
    )
    .await
    .unwrap();

    VehiculeTypeRepo::delete(&pool, 2).await.unwrap();

    assert!(AvailableVehiculeRepo::find_by_id(&pool, vehicule.id)
        .await
        .unwrap()
        .is_none());
    assert!(TransportationRepo::find_by_id(&pool, trip.id)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: RESTRICT taxonomy references block deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_referenced_unit_format_restricted(pool: PgPool) {
    CampProductRepo::create(
        &pool,
        &CreateCampProduct {
            project_id: None,
            odoo_product_id: None,
            product_name: "Flour".to_string(),
            quantity: Some(10.0),
            unit_format: Some(2),
            storage_type: None,
            storage_location_id: None,
            comments: None,
        },
    )
    .await
    .unwrap();

    let err = UnitFormatRepo::delete(&pool, 2).await.unwrap_err();
    assert_matches!(
        err,
        DbError::IntegrityViolation { entity: "unit_format", .. }
    );
}

// ---------------------------------------------------------------------------
// Test: Custody transfer
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_transfer_holder_moves_custody(pool: PgPool) {
    let holder_a = CampPersonRepo::create(&pool, &new_person(None, "Alpha"))
        .await
        .unwrap();
    let holder_b = CampPersonRepo::create(&pool, &new_person(None, "Bravo"))
        .await
        .unwrap();

    let material = PseMaterialRepo::create(
        &pool,
        &CreatePseMaterial {
            project_id: None,
            code: Some("GEN-1".to_string()),
            name: "Generator".to_string(),
            image_path: None,
            pse_responsable_id: None,
            camp_responsable_id: None,
            current_holder_id: Some(holder_a.id),
        },
    )
    .await
    .unwrap();

    let moved = PseMaterialRepo::transfer_holder(&pool, material.id, Some(holder_b.id))
        .await
        .unwrap();
    assert_eq!(moved.current_holder_id, Some(holder_b.id));

    let held = PseMaterialRepo::list_held_by(&pool, holder_b.id).await.unwrap();
    assert_eq!(held.len(), 1);
    assert!(PseMaterialRepo::list_held_by(&pool, holder_a.id)
        .await
        .unwrap()
        .is_empty());

    // A holder that is not on the roster is an integrity violation.
    let err = PseMaterialRepo::transfer_holder(&pool, material.id, Some(999_999))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        DbError::IntegrityViolation { entity: "pse_material_used", .. }
    );
}
