//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Driver errors are classified
//! into the [`crate::error::DbError`] taxonomy at this boundary.

pub mod camp_person_extra_data_repo;
pub mod camp_person_repo;
pub mod camp_product_repo;
pub mod checklist_task_repo;
pub mod child_repo;
pub mod lookup_repo;
pub mod market_repo;
pub mod odoo_product_repo;
pub mod project_repo;
pub mod pse_material_repo;
pub mod purchase_repo;
pub mod request_repo;
pub mod role_repo;
pub mod team_repo;
pub mod transport_location_repo;
pub mod transportation_repo;
pub mod vehicule_repo;

pub use camp_person_extra_data_repo::CampPersonExtraDataRepo;
pub use camp_person_repo::CampPersonRepo;
pub use camp_product_repo::CampProductRepo;
pub use checklist_task_repo::ChecklistTaskRepo;
pub use child_repo::ChildRepo;
pub use lookup_repo::{
    CampProductTypeRepo, ChecklistAreaRepo, DropOffLocationRepo, ProductStorageTypeRepo,
    PurchaseGroupRepo, RequestTypeRepo, UnitFormatRepo, VehiculeTypeRepo,
};
pub use market_repo::MarketRepo;
pub use odoo_product_repo::OdooProductRepo;
pub use project_repo::ProjectRepo;
pub use pse_material_repo::PseMaterialRepo;
pub use purchase_repo::PurchaseRepo;
pub use request_repo::RequestRepo;
pub use role_repo::RoleRepo;
pub use team_repo::TeamRepo;
pub use transport_location_repo::TransportLocationRepo;
pub use transportation_repo::TransportationRepo;
pub use vehicule_repo::AvailableVehiculeRepo;
