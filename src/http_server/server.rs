//! # HTTP Server
//!
//! Combines the estimate and health routers behind one CORS layer.

use std::io;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::api::EstimateHandler;
use crate::estimator::{Clock, SystemClock};
use crate::observability::{Event, Logger};

use super::config::HttpServerConfig;
use super::observability_routes::health_routes;
use super::tod_routes::tod_routes;

/// HTTP Server for the time-of-death API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create a server whose estimates read `clock` for "now"
    pub fn with_clock<C>(config: HttpServerConfig, clock: C) -> Self
    where
        C: Clock + Send + Sync + 'static,
    {
        let router = Self::build_router(&config, Arc::new(EstimateHandler::with_clock(clock)));
        Self { config, router }
    }

    fn build_router<C>(config: &HttpServerConfig, handler: Arc<EstimateHandler<C>>) -> Router
    where
        C: Clock + Send + Sync + 'static,
    {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest("/api/tod", tod_routes(handler))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), io::Error> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        let bound = listener.local_addr()?.to_string();
        Logger::event(
            Event::ServerStart,
            &[
                ("addr", bound.as_str()),
                ("estimate", "POST /api/tod/estimate"),
                ("health", "GET /api/tod/health"),
            ],
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Logger::event(Event::ServerStop, &[("addr", bound.as_str())]);
        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    // If the handler cannot be installed, serve until killed
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new();
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9090);
        let server = HttpServer::with_config(config);
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds_with_permissive_cors() {
        let config = HttpServerConfig {
            cors_origins: Vec::new(),
            ..Default::default()
        };
        let _router = HttpServer::with_config(config).router();
    }
}
