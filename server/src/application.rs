//! Router assembly and the serve loop.

use std::net::SocketAddr;

use axum::Router;
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::settings::Settings;

/// Build the application router over a shared connection pool.
pub fn router(pool: PgPool) -> Router {
    Router::new()
        .merge(routes::developers::router())
        .merge(routes::projects::router())
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

/// Bind the configured address and serve until shutdown.
pub async fn serve(settings: &Settings, pool: PgPool) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, router(pool).into_make_service()).await?;
    Ok(())
}
