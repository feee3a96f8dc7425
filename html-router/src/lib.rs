pub mod html_state;
pub mod middlewares;
pub mod router_factory;
pub mod routes;
pub mod utils;

#[cfg(test)]
mod test_utils;

use axum::{extract::FromRef, Router};
use html_state::HtmlState;
use router_factory::RouterFactory;

/// Html routes
pub fn html_routes<S>(app_state: &HtmlState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
    HtmlState: FromRef<S>,
{
    RouterFactory::new(app_state)
        .add_public_routes(routes::index::router())
        .add_public_routes(routes::branch::router())
        .add_public_routes(routes::health::router())
        .with_public_assets("/assets", "assets/")
        .with_compression()
        .build()
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{body_string, get, test_router, FakeDirectory};
    use axum::http::StatusCode;
    use common::utils::config::AppConfig;
    use std::sync::Arc;

    #[tokio::test]
    async fn liveness_probe_is_json() {
        let app = test_router(AppConfig::default(), Arc::new(FakeDirectory::not_found()));

        let response = get(&app, "/live").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"ok"}"#);
    }

    #[tokio::test]
    async fn unknown_route_renders_error_page() {
        let app = test_router(AppConfig::default(), Arc::new(FakeDirectory::not_found()));

        let response = get(&app, "/definitely/not/here").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Page Not Found"));
    }

    #[tokio::test]
    async fn serves_static_assets() {
        let app = test_router(AppConfig::default(), Arc::new(FakeDirectory::not_found()));

        for asset in ["/assets/search.js", "/assets/clipboard.js", "/assets/style.css"] {
            let response = get(&app, asset).await;
            assert_eq!(response.status(), StatusCode::OK, "{asset}");
        }
    }
}
