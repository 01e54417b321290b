//! # todcalc HTTP Server Module
//!
//! Axum server exposing the estimator.
//!
//! # Endpoints
//!
//! - `GET /health` - JSON health check
//! - `POST /api/tod/estimate` - time-of-death estimate
//! - `GET /api/tod/health` - plain-text liveness probe

pub mod config;
pub mod observability_routes;
pub mod server;
pub mod tod_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use server::HttpServer;
pub use tod_routes::HEALTH_MESSAGE;
