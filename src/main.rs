//! payment-ledger entry point
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌───────────────┐    ┌────────────┐
//! │  Config  │───▶│   Gateway    │───▶│   Processor   │───▶│  Postgres  │
//! │  (YAML)  │    │ (axum HTTP)  │    │ (atomic apply)│    │  (ledger)  │
//! └──────────┘    └──────────────┘    └───────────────┘    └────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;

use payment_ledger::config::AppConfig;
use payment_ledger::ledger::{Database, init_schema};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _log_guard = payment_ledger::logging::init_logging(&config);

    tracing::info!("Starting payment-ledger in {} mode", env);

    let db = Database::connect(&config.postgres_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    let db = Arc::new(db);

    init_schema(db.pool()).await?;

    let port = get_port_override().unwrap_or(config.gateway.port);
    payment_ledger::gateway::run_server(&config.gateway.host, port, db).await
}
