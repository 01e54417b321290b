//! Newton's Law of Cooling
//!
//! `T(t) = Te + (T0 - Te) * e^(-k*t)`
//!
//! Both operations here are pure functions of their numeric arguments.

use super::errors::{EstimatorResult, InvalidConditionsError};

/// Minimum separation (°C) between two temperatures for a ratio to be meaningful
pub const MIN_TEMPERATURE_SEPARATION: f64 = 0.1;

/// Largest cooling constant (per hour) the two-reading estimator accepts
pub const MAX_COOLING_CONSTANT: f64 = 5.0;

/// Default cooling constant (per hour) for a resting human body in still air
pub const DEFAULT_COOLING_CONSTANT: f64 = 0.1947;

/// Normalized temperature excess `(t - ambient) / (baseline - ambient)`
pub fn temperature_ratio(baseline: f64, ambient: f64, t: f64) -> f64 {
    (t - ambient) / (baseline - ambient)
}

fn check_baseline(baseline: f64, ambient: f64) -> EstimatorResult<()> {
    if (baseline - ambient).abs() < MIN_TEMPERATURE_SEPARATION {
        return Err(InvalidConditionsError::BaselineNearAmbient);
    }
    Ok(())
}

/// Estimate the cooling constant k from two readings taken `delta_hours` apart.
///
/// `k = -(1/Δt) * ln(R2/R1)` where `Rn = (Tn - Te) / (T0 - Te)`.
///
/// # Errors
///
/// - baseline within 0.1 °C of ambient
/// - either reading at or below ambient (`R1 <= 0` or `R2 <= 0`)
/// - second reading not cooler than the first (`R2 >= R1`)
/// - resulting k outside `(0, 5.0]`
pub fn estimate_k(
    baseline: f64,
    ambient: f64,
    first: f64,
    second: f64,
    delta_hours: f64,
) -> EstimatorResult<f64> {
    check_baseline(baseline, ambient)?;

    let r1 = temperature_ratio(baseline, ambient, first);
    let r2 = temperature_ratio(baseline, ambient, second);

    if r1 <= 0.0 || r2 <= 0.0 {
        return Err(InvalidConditionsError::ReadingNotAboveAmbient);
    }
    if r2 >= r1 {
        return Err(InvalidConditionsError::NotCooling);
    }

    let k = -(1.0 / delta_hours) * (r2 / r1).ln();

    if !(k > 0.0 && k <= MAX_COOLING_CONSTANT) {
        return Err(InvalidConditionsError::ImplausibleK(k));
    }

    Ok(k)
}

/// Invert the cooling equation: hours for a body to cool from `baseline` to `current`.
///
/// `t = -(1/k) * ln((Tt - Te) / (T0 - Te))`
///
/// # Errors
///
/// - baseline or current reading within 0.1 °C of ambient
/// - ratio outside `(0, 1]`
/// - negative result (internal-consistency failure)
pub fn estimate_time_since_death(
    baseline: f64,
    ambient: f64,
    current: f64,
    k: f64,
) -> EstimatorResult<f64> {
    check_baseline(baseline, ambient)?;

    if (current - ambient).abs() < MIN_TEMPERATURE_SEPARATION {
        return Err(InvalidConditionsError::ReadingNearAmbient);
    }

    let ratio = temperature_ratio(baseline, ambient, current);

    if ratio <= 0.0 || ratio > 1.0 {
        return Err(InvalidConditionsError::RatioOutOfRange(ratio));
    }

    let t = -(1.0 / k) * ratio.ln();

    if t.is_nan() || t < 0.0 {
        return Err(InvalidConditionsError::NegativeElapsed);
    }

    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_k_valid_inputs() {
        let k = estimate_k(37.0, 20.0, 34.0, 32.0, 1.0).unwrap();
        assert!(k > 0.0 && k < MAX_COOLING_CONSTANT);

        // ln(14/12)
        assert!((k - (14.0_f64 / 12.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_estimate_k_baseline_near_ambient() {
        let err = estimate_k(20.0, 20.0, 20.0, 19.0, 1.0).unwrap_err();
        assert_eq!(err, InvalidConditionsError::BaselineNearAmbient);

        let err = estimate_k(20.05, 20.0, 34.0, 32.0, 1.0).unwrap_err();
        assert_eq!(err, InvalidConditionsError::BaselineNearAmbient);
    }

    #[test]
    fn test_estimate_k_reading_below_ambient() {
        let err = estimate_k(37.0, 20.0, 34.0, 19.0, 1.0).unwrap_err();
        assert_eq!(err, InvalidConditionsError::ReadingNotAboveAmbient);

        let err = estimate_k(37.0, 20.0, 20.0, 19.0, 1.0).unwrap_err();
        assert_eq!(err, InvalidConditionsError::ReadingNotAboveAmbient);
    }

    #[test]
    fn test_estimate_k_requires_cooling() {
        let err = estimate_k(37.0, 20.0, 32.0, 32.0, 1.0).unwrap_err();
        assert_eq!(err, InvalidConditionsError::NotCooling);

        let err = estimate_k(37.0, 20.0, 32.0, 33.0, 1.0).unwrap_err();
        assert_eq!(err, InvalidConditionsError::NotCooling);
    }

    #[test]
    fn test_estimate_k_implausibly_fast() {
        // ln(16/0.5) / 0.5h ≈ 6.9 per hour
        let err = estimate_k(37.0, 20.0, 36.0, 20.5, 0.5).unwrap_err();
        assert!(matches!(err, InvalidConditionsError::ImplausibleK(k) if k > MAX_COOLING_CONSTANT));
    }

    #[test]
    fn test_estimate_k_below_ambient_baseline() {
        // Body warming toward a hot environment: ratios are still positive and decreasing
        let k = estimate_k(37.0, 45.0, 39.0, 41.0, 1.0).unwrap();
        assert!((k - (6.0_f64 / 4.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn test_time_since_death_valid_inputs() {
        let t = estimate_time_since_death(37.0, 20.0, 32.0, 0.1947).unwrap();
        assert!(t > 0.0);
        assert!((t - (-(12.0_f64 / 17.0).ln() / 0.1947)).abs() < 1e-12);
    }

    #[test]
    fn test_time_since_death_at_baseline_is_zero() {
        let t = estimate_time_since_death(37.0, 20.0, 37.0, 0.1947).unwrap();
        assert_eq!(t, 0.0);
    }

    #[test]
    fn test_time_since_death_body_below_ambient() {
        let err = estimate_time_since_death(37.0, 25.0, 20.0, 0.1947).unwrap_err();
        assert!(matches!(err, InvalidConditionsError::RatioOutOfRange(r) if r < 0.0));
    }

    #[test]
    fn test_time_since_death_body_warmer_than_baseline() {
        let err = estimate_time_since_death(37.0, 20.0, 38.0, 0.1947).unwrap_err();
        assert!(matches!(err, InvalidConditionsError::RatioOutOfRange(r) if r > 1.0));
    }

    #[test]
    fn test_time_since_death_reading_near_ambient() {
        let err = estimate_time_since_death(37.0, 20.0, 20.05, 0.1947).unwrap_err();
        assert_eq!(err, InvalidConditionsError::ReadingNearAmbient);
    }

    #[test]
    fn test_time_since_death_baseline_near_ambient() {
        let err = estimate_time_since_death(20.0, 20.0, 32.0, 0.1947).unwrap_err();
        assert_eq!(err, InvalidConditionsError::BaselineNearAmbient);
    }

    #[test]
    fn test_time_since_death_zero_k_at_baseline() {
        let err = estimate_time_since_death(37.0, 20.0, 37.0, 0.0).unwrap_err();
        assert_eq!(err, InvalidConditionsError::NegativeElapsed);
    }
}
