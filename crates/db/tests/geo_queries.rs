//! Integration tests for the spatial read contract.
//!
//! Radius queries must return exactly the rows whose stored coordinate
//! lies within the great-circle distance, excluding rows with no
//! coordinate; nearest queries order by spheroid distance over the GIST
//! index.

use campops_core::types::GeoPoint;
use campops_db::models::market::CreateMarket;
use campops_db::models::project::CreateProject;
use campops_db::models::transport::CreateTransportLocation;
use campops_db::repositories::{MarketRepo, ProjectRepo, TransportLocationRepo};
use sqlx::PgPool;

// Central market, Phnom Penh.
const CENTER: GeoPoint = GeoPoint {
    lat: 11.5696,
    lng: 104.9190,
};

fn new_market(name: &str, location: Option<GeoPoint>) -> CreateMarket {
    CreateMarket {
        name: name.to_string(),
        opening_hours: Some("06:00-18:00".to_string()),
        contact: None,
        address: None,
        location,
        link: None,
        comments: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Radius query returns the exact in-range set
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_markets_within_radius_exact_set(pool: PgPool) {
    // ~0 m, ~3.3 km, ~37 km north of the centre, plus one with no
    // coordinate at all.
    MarketRepo::create(&pool, &new_market("Central", Some(CENTER)))
        .await
        .unwrap();
    MarketRepo::create(
        &pool,
        &new_market("Russian Market", Some(GeoPoint::new(11.5995, 104.9190))),
    )
    .await
    .unwrap();
    MarketRepo::create(
        &pool,
        &new_market("Oudong", Some(GeoPoint::new(11.9040, 104.9190))),
    )
    .await
    .unwrap();
    MarketRepo::create(&pool, &new_market("Unmapped", None))
        .await
        .unwrap();

    let within_10km = MarketRepo::find_within_radius(&pool, CENTER, 10_000.0)
        .await
        .unwrap();
    let names: Vec<&str> = within_10km.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Central", "Russian Market"], "nearest first");

    let within_50km = MarketRepo::find_within_radius(&pool, CENTER, 50_000.0)
        .await
        .unwrap();
    assert_eq!(within_50km.len(), 3, "null coordinates are never in range");

    let within_100m = MarketRepo::find_within_radius(&pool, CENTER, 100.0)
        .await
        .unwrap();
    assert_eq!(within_100m.len(), 1);
}

// ---------------------------------------------------------------------------
// Test: Nearest-N ordering and limit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_markets_nearest_ordering(pool: PgPool) {
    MarketRepo::create(
        &pool,
        &new_market("Far", Some(GeoPoint::new(12.5, 104.9190))),
    )
    .await
    .unwrap();
    MarketRepo::create(&pool, &new_market("Near", Some(CENTER)))
        .await
        .unwrap();
    MarketRepo::create(
        &pool,
        &new_market("Mid", Some(GeoPoint::new(11.8, 104.9190))),
    )
    .await
    .unwrap();
    MarketRepo::create(&pool, &new_market("Unmapped", None))
        .await
        .unwrap();

    let nearest = MarketRepo::find_nearest(&pool, CENTER, 2).await.unwrap();
    let names: Vec<&str> = nearest.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Near", "Mid"]);

    let all = MarketRepo::find_nearest(&pool, CENTER, 10).await.unwrap();
    assert_eq!(all.len(), 3, "rows without a coordinate are excluded");
}

// ---------------------------------------------------------------------------
// Test: The other two geo-indexed entities answer the same contract
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_spatial_reads(pool: PgPool) {
    ProjectRepo::create(
        &pool,
        &CreateProject {
            project_code: "PNH".to_string(),
            name: "Phnom Penh".to_string(),
            description: None,
            location: Some(CENTER),
            budget: None,
            actual_spend: None,
        },
    )
    .await
    .unwrap();
    ProjectRepo::create(
        &pool,
        &CreateProject {
            project_code: "SRP".to_string(),
            name: "Siem Reap".to_string(),
            description: None,
            // ~230 km away.
            location: Some(GeoPoint::new(13.3633, 103.8564)),
            budget: None,
            actual_spend: None,
        },
    )
    .await
    .unwrap();

    let near = ProjectRepo::find_within_radius(&pool, CENTER, 50_000.0)
        .await
        .unwrap();
    assert_eq!(near.len(), 1);
    assert_eq!(near[0].project_code, "PNH");

    let nearest = ProjectRepo::find_nearest(&pool, CENTER, 5).await.unwrap();
    assert_eq!(nearest.len(), 2);
    assert_eq!(nearest[0].project_code, "PNH");
    assert_eq!(nearest[1].project_code, "SRP");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_transport_location_spatial_reads(pool: PgPool) {
    TransportLocationRepo::create(
        &pool,
        &CreateTransportLocation {
            code: "PP-BUS".to_string(),
            name: "Phnom Penh bus station".to_string(),
            location: Some(GeoPoint::new(11.5713, 104.9176)),
            description: None,
        },
    )
    .await
    .unwrap();
    TransportLocationRepo::create(
        &pool,
        &CreateTransportLocation {
            code: "NOGEO".to_string(),
            name: "Unsurveyed stop".to_string(),
            location: None,
            description: None,
        },
    )
    .await
    .unwrap();

    let near = TransportLocationRepo::find_within_radius(&pool, CENTER, 1_000.0)
        .await
        .unwrap();
    assert_eq!(near.len(), 1);
    assert_eq!(near[0].code, "PP-BUS");

    let location = near[0].location().expect("coordinate should round-trip");
    assert!((location.lat - 11.5713).abs() < 1e-9);
    assert!((location.lng - 104.9176).abs() < 1e-9);
}
