use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

/// Liveness probe: always returns 200 to indicate the process is running.
pub async fn live() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/live", get(live))
}
