//! Time-of-death HTTP Routes
//!
//! - `POST /estimate` - compute an estimate
//! - `GET /health` - plain-text liveness probe

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::api::{ApiError, EstimateHandler, EstimateRequest};
use crate::estimator::{Clock, EstimationResult};
use crate::observability::{Event, Logger};

/// Liveness text returned by `GET /health`
pub const HEALTH_MESSAGE: &str = "TOD Calculator API is running";

/// Estimate routes with shared handler
pub fn tod_routes<C>(handler: Arc<EstimateHandler<C>>) -> Router
where
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/estimate", post(estimate_handler::<C>))
        .route("/health", get(health_handler))
        .with_state(handler)
}

/// Estimate handler
async fn estimate_handler<C>(
    State(handler): State<Arc<EstimateHandler<C>>>,
    body: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<EstimationResult>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let request_id = Uuid::new_v4().to_string();

    let Json(request) = body.map_err(|rejection| {
        let err = ApiError::MalformedBody(rejection.body_text());
        Logger::event(
            Event::RequestInvalid,
            &[("request_id", request_id.as_str()), ("code", err.code())],
        );
        err
    })?;

    handler.handle(&request, &request_id).map(Json)
}

/// Health check handler
async fn health_handler() -> (StatusCode, &'static str) {
    (StatusCode::OK, HEALTH_MESSAGE)
}
