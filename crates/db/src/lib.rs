//! Data-access layer for the field-camp operations schema.
//!
//! The schema itself is the external interface: table names, column domains,
//! nullability, defaults, unique constraints, foreign-key targets and cascade
//! behaviour are fixed by the migrations in `db/migrations`. This crate
//! exposes typed repositories over that schema; everything that consumes the
//! model (HTTP, auth, workflow, reporting) lives elsewhere.

pub mod error;
pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations embedded from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::info!("database migrations applied");
    Ok(())
}
