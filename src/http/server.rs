//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID, security headers)
//! - Bind server to listener
//! - Stop serving when the shutdown signal fires

use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::CounterConfig;
use crate::counter::CounterService;
use crate::http::handlers;
use crate::http::request::with_request_id;
use crate::http::response::{handle_panic, not_found};
use crate::security::headers::apply_security_headers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CounterService>,
    pub config: Arc<CounterConfig>,
}

/// HTTP server for the view counter.
pub struct HttpServer {
    router: Router,
    config: Arc<CounterConfig>,
    service: Arc<CounterService>,
}

impl HttpServer {
    /// Create a new HTTP server with an empty in-memory counter.
    pub fn new(config: CounterConfig) -> Self {
        Self::with_service(config, Arc::new(CounterService::in_memory()))
    }

    /// Create a server around an existing counter service.
    pub fn with_service(config: CounterConfig, service: Arc<CounterService>) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            service: service.clone(),
            config: config.clone(),
        };

        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            service,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &CounterConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/", get(handlers::status))
            .route("/api/views", get(handlers::get_views).post(handlers::record_view))
            .route("/api/badge", get(handlers::badge))
            .route("/health", get(handlers::health))
            .fallback(not_found)
            .method_not_allowed_fallback(not_found)
            .with_state(state);

        Self::apply_layers(routes, config)
    }

    /// Wrap `routes` in the middleware stack shared by every endpoint.
    #[allow(deprecated)]
    fn apply_layers(routes: Router, config: &CounterConfig) -> Router {
        let router = routes.layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
                .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
        );

        let router = apply_security_headers(router, &config.security)
            .layer(TraceLayer::new_for_http());

        with_request_id(router)
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns as soon as `shutdown` fires; in-flight requests are not drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        tokio::select! {
            result = axum::serve(listener, app).into_future() => result?,
            _ = shutdown.recv() => {
                tracing::info!("Shutdown signal received");
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    /// Get the counter service backing the handlers.
    pub fn service(&self) -> &Arc<CounterService> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    async fn explode() -> &'static str {
        panic!("visitor set corrupted")
    }

    #[tokio::test]
    async fn test_handler_panic_becomes_500() {
        let routes = Router::new().route("/explode", get(explode)).fallback(not_found);
        let router = HttpServer::apply_layers(routes, &CounterConfig::default());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let res = client
            .get(format!("http://{}/explode", addr))
            .send()
            .await
            .unwrap();

        assert_eq!(res.status(), 500);
        assert!(res.headers().contains_key("x-request-id"));
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(
            body,
            json!({"error": "Something went wrong!", "message": "visitor set corrupted"})
        );

        // The server keeps serving after a panic.
        let res = client.get(format!("http://{}/nope", addr)).send().await.unwrap();
        assert_eq!(res.status(), 404);
    }
}
