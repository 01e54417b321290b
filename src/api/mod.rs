//! API layer for todcalc
//!
//! The boundary in front of the estimator: request decoding, field
//! validation, error translation and request logging.
//!
//! # Design Principles
//!
//! - Every field error is reported, not just the first
//! - Plausibility failures from the estimator pass through unchanged
//! - Server-side failures never leak internal detail to clients
//! - Response bodies are the serialized [`EstimationResult`](crate::estimator::EstimationResult)

mod errors;
mod handler;
mod request;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use handler::EstimateHandler;
pub use request::{EstimateRequest, FieldErrors, SecondReadingRequest};
