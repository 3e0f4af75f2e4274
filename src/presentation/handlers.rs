// HTTP request handlers
use crate::domain::aircraft::AircraftRecord;
use crate::presentation::app_state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/aircraft", get(list_aircraft))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Currently tracked aircraft, `[]` when upstream is unavailable
pub async fn list_aircraft(State(state): State<Arc<AppState>>) -> Json<Vec<AircraftRecord>> {
    Json(state.aircraft_service.list_aircraft().await)
}
