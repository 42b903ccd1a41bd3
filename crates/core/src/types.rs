use serde::{Deserialize, Serialize};

/// All entity-table primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Lookup/taxonomy-table primary keys are SMALLSERIAL.
pub type LookupId = i16;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A geographic point on the WGS84 ellipsoid, in decimal degrees.
///
/// Stored as `geography(Point, 4326)`, so distance queries run on the
/// spheroid rather than a planar projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Gender domain for `camp_people` and `children` rows.
///
/// The database enforces the same domain with a CHECK constraint; this enum
/// lets callers build rows from the closed set instead of raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Return the single-character database code.
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Parse a database code. Anything outside {M, F} is `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::Male),
            "F" => Some(Gender::Female),
            _ => None,
        }
    }
}
