pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::ledger::Database;
use state::AppState;

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, db: Arc<Database>) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(db));

    let app = Router::new()
        .route("/api/webhook/bank", post(handlers::bank_webhook))
        .route(
            "/api/organizations/{inn}/balance",
            get(handlers::organization_balance),
        )
        .route("/api/v1/health", get(handlers::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {}: {} (hint: port {} may already be in use)",
            addr,
            e,
            port
        )
    })?;

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    tracing::info!("Gateway listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
