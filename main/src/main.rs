use axum::Router;
use common::utils::config::{get_config, AppConfig};
use html_router::{html_routes, html_state::HtmlState};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    // Get config
    let config = get_config()?;
    info!(
        api_base_url = %config.ifsc_api_base_url,
        upstream_timeout_secs = config.upstream_timeout_secs,
        copy_buttons = config.copy_buttons,
        "Configuration loaded"
    );

    let app = build_app(&config)?;

    info!("Starting server listening on 0.0.0.0:{}", config.http_port);
    let serve_address = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(serve_address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn build_app(config: &AppConfig) -> Result<Router, Box<dyn std::error::Error>> {
    let html_state = HtmlState::new(config.clone())?;
    Ok(Router::new()
        .merge(html_routes(&html_state))
        .with_state(html_state))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn smoke_test_config() -> AppConfig {
        AppConfig {
            http_port: 0,
            // Nothing listens here; lookups degrade to the not-found page.
            ifsc_api_base_url: "http://127.0.0.1:9".into(),
            upstream_timeout_secs: 1,
            ..Default::default()
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn smoke_startup_serves_pages() {
        let app = build_app(&smoke_test_config()).expect("app builds");

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/live").body(Body::empty()).expect("request"))
            .await
            .expect("router response");
        assert_eq!(response.status(), StatusCode::OK);

        let index_response = app
            .clone()
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("index response");
        assert_eq!(index_response.status(), StatusCode::OK);

        let detail_response = app
            .oneshot(
                Request::builder()
                    .uri("/ifsc/SBIN0000628")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("detail response");
        assert_eq!(detail_response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rejects_unusable_base_url() {
        let config = AppConfig {
            ifsc_api_base_url: "mailto:ops@example.com".into(),
            ..Default::default()
        };
        assert!(build_app(&config).is_err());
    }
}
