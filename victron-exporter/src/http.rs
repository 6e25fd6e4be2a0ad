//! HTTP server for the Prometheus metrics endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use tokio::sync::watch;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::health::ConnectionHealth;
use crate::registry::MetricRegistry;

const OPENMETRICS_CONTENT_TYPE: &str = "application/openmetrics-text; version=1.0.0; charset=utf-8";

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    registry: Arc<MetricRegistry>,
    health: Arc<ConnectionHealth>,
    /// Client id whose connection gates readiness.
    ready_client_id: Arc<str>,
}

/// Create the HTTP router.
fn create_router(state: AppState, metrics_path: &str) -> Router {
    Router::new()
        .route(metrics_path, get(metrics_handler))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.registry.render() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", OPENMETRICS_CONTENT_TYPE)],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "Failed to encode metrics");
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics\n").into_response()
        }
    }
}

async fn health_handler() -> Response {
    (StatusCode::OK, "healthy\n").into_response()
}

/// Ready once the telemetry subscription connection is up.
async fn ready_handler(State(state): State<AppState>) -> Response {
    if state.health.is_connected(&state.ready_client_id) {
        (StatusCode::OK, "ready\n").into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "not ready - MQTT subscription not connected\n",
        )
            .into_response()
    }
}

/// HTTP server configuration.
pub struct HttpServer {
    state: AppState,
    listen_addr: SocketAddr,
    metrics_path: String,
}

impl HttpServer {
    pub fn new(
        registry: Arc<MetricRegistry>,
        health: Arc<ConnectionHealth>,
        ready_client_id: &str,
        listen_addr: SocketAddr,
        metrics_path: String,
    ) -> Self {
        Self {
            state: AppState {
                registry,
                health,
                ready_client_id: Arc::from(ready_client_id),
            },
            listen_addr,
            metrics_path,
        }
    }

    /// Run the HTTP server until the shutdown signal is received.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) -> anyhow::Result<()> {
        let router = create_router(self.state, &self.metrics_path);

        let listener = tokio::net::TcpListener::bind(self.listen_addr)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", self.listen_addr, e))?;

        info!(
            addr = %self.listen_addr,
            path = %self.metrics_path,
            "HTTP server listening"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                loop {
                    if shutdown.changed().await.is_err() {
                        break;
                    }
                    if *shutdown.borrow() {
                        break;
                    }
                }
                info!("HTTP server shutting down");
            })
            .await
            .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::TopicRouter;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    const CLIENT_ID: &str = "victron_exporter_sub";

    fn make_state() -> AppState {
        let router = TopicRouter::victron();
        let registry = Arc::new(MetricRegistry::new(router.definitions()));
        let health = Arc::new(ConnectionHealth::new(registry.operational()));
        AppState {
            registry,
            health,
            ready_client_id: Arc::from(CLIENT_ID),
        }
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_metrics_endpoint() {
        let state = make_state();
        state.health.track(CLIENT_ID);
        let router = create_router(state, "/metrics");

        let response = router
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert!(
            content_type
                .to_str()
                .unwrap()
                .starts_with("application/openmetrics-text")
        );

        let body = body_string(response).await;
        assert!(body.contains("victron_mqtt_connection_state{client_id=\"victron_exporter_sub\"} 0"));
        assert!(body.ends_with("# EOF\n"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let router = create_router(make_state(), "/metrics");

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_follows_subscriber_connection() {
        let state = make_state();
        let health = state.health.clone();
        let router = create_router(state, "/metrics");

        let response = router
            .clone()
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        health.on_connected(CLIENT_ID);
        let response = router
            .clone()
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        health.on_disconnected(CLIENT_ID);
        let response = router
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_custom_metrics_path() {
        let router = create_router(make_state(), "/victron/metrics");

        let response = router
            .clone()
            .oneshot(
                Request::get("/victron/metrics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(Request::get("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
