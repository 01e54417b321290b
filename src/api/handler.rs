//! Estimate handler
//!
//! Strict request handling flow:
//! 1. Parse (JSON bodies only)
//! 2. Validate fields
//! 3. Compute the estimate
//! 4. Log the outcome
//!
//! Shared by the HTTP routes and the CLI.

use crate::estimator::{
    compute_estimate_with_clock, Clock, CoolingConstantSource, EstimationResult, SystemClock,
};
use crate::observability::{Event, Logger};

use super::errors::{ApiError, ApiResult};
use super::request::EstimateRequest;

/// Stateless estimate handler over a clock
#[derive(Debug, Clone, Default)]
pub struct EstimateHandler<C = SystemClock> {
    clock: C,
}

impl EstimateHandler<SystemClock> {
    /// Handler on the local wall clock
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> EstimateHandler<C> {
    /// Handler on an explicit clock
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Handle a raw JSON request body
    pub fn handle_json(&self, body: &str, request_id: &str) -> ApiResult<EstimationResult> {
        let request = EstimateRequest::parse(body).inspect_err(|e| log_rejection(e, request_id))?;
        self.handle(&request, request_id)
    }

    /// Handle a decoded request
    pub fn handle(
        &self,
        request: &EstimateRequest,
        request_id: &str,
    ) -> ApiResult<EstimationResult> {
        let input = request
            .validate()
            .inspect_err(|e| log_rejection(e, request_id))?;

        if request.has_overridden_k() {
            Logger::event(Event::ProvidedKIgnored, &[("request_id", request_id)]);
        }
        if let Some(raw) = request.unparsable_scene_date_time() {
            Logger::event(
                Event::SceneTimeFallback,
                &[("request_id", request_id), ("scene_date_time", raw)],
            );
        }

        let result = compute_estimate_with_clock(&input, &self.clock)
            .map_err(ApiError::from)
            .inspect_err(|e| log_rejection(e, request_id))?;

        let source = match input.cooling {
            CoolingConstantSource::TwoReadings(_) => "two_readings",
            CoolingConstantSource::Provided(_) => "provided",
            CoolingConstantSource::Default => "default",
        };
        Logger::event(
            Event::EstimateComputed,
            &[
                ("request_id", request_id),
                ("k", format!("{:.4}", result.k).as_str()),
                ("k_source", source),
                ("hours", format!("{:.2}", result.time_since_death_hours).as_str()),
                ("warnings", result.warnings.len().to_string().as_str()),
            ],
        );

        Ok(result)
    }
}

fn log_rejection(err: &ApiError, request_id: &str) {
    let event = match err {
        ApiError::ValidationFailed(_) | ApiError::MalformedBody(_) => Event::RequestInvalid,
        ApiError::InvalidConditions(e) if e.is_internal() => Event::ModelInconsistent,
        ApiError::InvalidConditions(_) => Event::EstimateRejected,
        ApiError::Internal(_) => Event::ModelInconsistent,
    };
    Logger::event(
        event,
        &[
            ("request_id", request_id),
            ("code", err.code()),
            ("message", err.to_string().as_str()),
        ],
    );
}
