//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Geo-located entities decode their `geography(Point, 4326)` column through
//! `ST_Y`/`ST_X` aliases (`location_lat`/`location_lng`) and expose a
//! [`campops_core::types::GeoPoint`] accessor.

pub mod camp_person;
pub mod checklist;
pub mod child;
pub mod inventory;
pub mod lookup;
pub mod market;
pub mod project;
pub mod request;
pub mod team;
pub mod transport;
