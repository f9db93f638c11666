pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::customer::Database;
use state::AppState;

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, db: Arc<Database>) -> anyhow::Result<()> {
    let state = AppState::new(db);

    let api_routes = Router::new()
        .route(
            "/customers",
            post(handlers::create_customer).get(handlers::list_customers),
        )
        .route(
            "/transactions",
            post(handlers::create_transaction).get(handlers::list_transactions),
        )
        .route("/health", get(handlers::health_check));

    let app = Router::new()
        .nest("/api/v1", api_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {} (is the port in use?)", addr, e))?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API docs at http://{}/docs", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
