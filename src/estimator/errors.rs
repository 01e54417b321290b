//! Estimator error types
//!
//! Every failure of the cooling model is a physical-plausibility failure.
//! Each variant names the check that rejected the inputs, so the same
//! inputs always produce the same error.

use thiserror::Error;

/// A physical-plausibility check failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidConditionsError {
    /// `|T0 - Te| < 0.1`: the baseline is indistinguishable from ambient
    #[error("Normal body temperature and ambient temperature too close")]
    BaselineNearAmbient,

    /// A reading at or below ambient cannot feed a logarithm
    #[error("Invalid temperature readings for k estimation")]
    ReadingNotAboveAmbient,

    /// The later reading is not cooler than the earlier one
    #[error("Second reading should be lower than first reading")]
    NotCooling,

    /// Estimated k fell outside `(0, 5.0]`
    #[error("Estimated k is unreasonable: {0}")]
    ImplausibleK(f64),

    /// `|Tt - Te| < 0.1`: elapsed time is unbounded
    #[error("Current body temperature too close to ambient temperature")]
    ReadingNearAmbient,

    /// Temperature ratio outside `(0, 1]`
    #[error("Invalid temperature ratio for time calculation: {0}")]
    RatioOutOfRange(f64),

    /// Solver produced a negative elapsed time
    #[error("Calculated time since death is negative")]
    NegativeElapsed,

    /// Reference time minus elapsed time is not a representable date-time
    #[error("Estimated time of death is out of range: {0} hours before reference time")]
    TimeOfDeathOutOfRange(f64),
}

impl InvalidConditionsError {
    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::BaselineNearAmbient => "TOD_BASELINE_NEAR_AMBIENT",
            Self::ReadingNotAboveAmbient => "TOD_READING_NOT_ABOVE_AMBIENT",
            Self::NotCooling => "TOD_NOT_COOLING",
            Self::ImplausibleK(_) => "TOD_IMPLAUSIBLE_K",
            Self::ReadingNearAmbient => "TOD_READING_NEAR_AMBIENT",
            Self::RatioOutOfRange(_) => "TOD_RATIO_OUT_OF_RANGE",
            Self::NegativeElapsed => "TOD_NEGATIVE_ELAPSED",
            Self::TimeOfDeathOutOfRange(_) => "TOD_TIME_OF_DEATH_OUT_OF_RANGE",
        }
    }

    /// Internal-consistency failures are not caused by caller input.
    ///
    /// The ratio bound makes a negative elapsed time unreachable, so if it
    /// ever fires the model itself is broken.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::NegativeElapsed)
    }
}

/// Result type for estimator operations
pub type EstimatorResult<T> = Result<T, InvalidConditionsError>;
