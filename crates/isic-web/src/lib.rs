//! ISIC Web Server
//!
//! Axum-based server for the classification form and JSON API.

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use isic_core::TextGenerator;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/classify", post(routes::api::classify))
        .layer(cors)
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::form::index))
        .route("/classify", post(routes::form::classify))
        .route("/download", post(routes::form::download))
        .route("/health", get(routes::api::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(generator: Arc<dyn TextGenerator>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(generator);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
