use axum::{
    extract::State,
    routing::get,
    Router,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::handlers::{translate_get, translate_post};
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Translation endpoint
        .route("/", get(translate_get).post(translate_post))
        .route("/translate", get(translate_get).post(translate_post))

        // Health check
        .route("/api/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let uptime = Utc::now() - state.started_at;
    Json(json!({
        "status": "ok",
        "translator": state.translator.name(),
        "started_at": state.started_at.to_rfc3339(),
        "uptime_seconds": uptime.num_seconds(),
    }))
}
