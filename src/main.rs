//! payflow - gateway entry point
//!
//! Loads the per-environment config, initializes logging, connects to
//! PostgreSQL (applying migrations), and serves the HTTP API.

use std::sync::Arc;

use anyhow::Context;

use payflow::config::AppConfig;
use payflow::customer::Database;
use payflow::{gateway, logging};

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
    let app_config = AppConfig::load(&env);
    let _log_guard = logging::init_logging(&app_config);

    tracing::info!("Starting payflow gateway in {} mode", env);

    let database_url = app_config
        .database_url()
        .context("No store configured: set postgres_url in config or DATABASE_URL in the env")?;

    let db = Database::connect(&database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;
    db.migrate().await.context("Failed to apply migrations")?;

    let port = get_port_override().unwrap_or(app_config.gateway.port);
    gateway::run_server(&app_config.gateway.host, port, Arc::new(db)).await
}
