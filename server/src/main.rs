//! Binary entry point: load settings, connect, initialize the schema, serve.

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

mod application;
mod error;
mod routes;
mod settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = settings::Settings::new().context("Failed to load settings")?;

    // DATABASE_URL takes precedence over the assembled settings URL.
    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| settings.database.url());
    let pool = api::db::connect(&database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    api::db::init_schema(&pool)
        .await
        .context("Failed to initialize the database schema")?;

    application::serve(&settings, pool).await
}
