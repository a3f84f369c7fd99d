//! `GET /health` (spec §6: "returns 200 with a small JSON status").

use axum::{response::IntoResponse, Json};
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
