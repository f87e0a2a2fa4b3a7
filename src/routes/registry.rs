use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::{burger, topping};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: &'static str,
}

/// Assemble every module's routes behind the shared middleware stack.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(topping::handlers::routes())
        .merge(burger::handlers::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        storage: state.storage,
    })
}
