//! Migration/bootstrap binary.
//!
//! Connects to `DATABASE_URL`, verifies connectivity, and applies the
//! embedded schema migrations. Consumers of the data model run this once
//! before serving traffic.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "campops_migrate=info,campops_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let pool = campops_db::create_pool(&database_url).await?;
    tracing::info!("database connection pool created");

    campops_db::health_check(&pool).await?;
    tracing::info!("database health check passed");

    campops_db::run_migrations(&pool).await?;

    Ok(())
}
