//! Estimation pipeline
//!
//! resolve k -> solve elapsed time -> resolve time of death -> assemble,
//! recording steps and warnings along the way.

use super::clock::{Clock, SystemClock};
use super::cooling::estimate_time_since_death;
use super::cooling_constant::resolve_k;
use super::errors::{EstimatorResult, InvalidConditionsError};
use super::input::{EstimationInput, STANDARD_BODY_TEMP_C};
use super::result::EstimationResult;
use super::time_of_death::{reference_time, time_of_death};
use super::trace::{num, warnings, Trace};

/// Below this excess over ambient (°C) the first reading is flagged as unreliable
const NEAR_AMBIENT_THRESHOLD: f64 = 2.0;

/// Beyond this many hours the cooling model is flagged as degrading
const LONG_INTERVAL_HOURS: f64 = 24.0;

/// Allowed deviation (°C) of the baseline from 37 °C before it is flagged
const BASELINE_TOLERANCE: f64 = 1.0;

/// Estimate time since death, reading the wall clock if `input` has no scene time.
pub fn compute_estimate(input: &EstimationInput) -> EstimatorResult<EstimationResult> {
    compute_estimate_with_clock(input, &SystemClock)
}

/// Estimate time since death against an explicit clock.
///
/// Fails only with [`InvalidConditionsError`](super::InvalidConditionsError);
/// there are no partial results.
pub fn compute_estimate_with_clock<C: Clock + ?Sized>(
    input: &EstimationInput,
    clock: &C,
) -> EstimatorResult<EstimationResult> {
    let t0 = input.normal_body_temp_c;
    let te = input.ambient_temp_c;
    let t1 = input.body_temp_c;
    let since_first = input.time_since_first_reading_hours;

    let mut trace = Trace::new();
    trace.step("Newton's Law of Cooling: T(t) = Te + (T0 - Te) * e^(-k*t)");
    trace.step(format!(
        "Where: T0 = {}°C (normal body temp), Te = {}°C (ambient temp)",
        num(t0),
        num(te)
    ));

    let k = resolve_k(input, &mut trace)?;

    let hours = estimate_time_since_death(t0, te, t1, k)? + since_first;
    // NaN counts as negative
    if hours.is_nan() || hours < 0.0 {
        return Err(InvalidConditionsError::NegativeElapsed);
    }

    trace.step("Time since death calculation:");
    trace.step("t = -(1/k) * ln((T1 - Te)/(T0 - Te)) + time_to_first_reading");
    trace.step(format!(
        "t = -(1/{:.4}) * ln(({} - {})/({} - {})) + {}",
        k,
        num(t1),
        num(te),
        num(t0),
        num(te),
        num(since_first)
    ));
    trace.step(format!("t = {:.2} hours", hours));

    let reference = reference_time(input.scene_date_time, clock);
    let estimated_time_of_death = time_of_death(reference, hours)?;

    if (t1 - te).abs() < NEAR_AMBIENT_THRESHOLD {
        trace.warn(warnings::NEAR_AMBIENT);
    }
    if hours > LONG_INTERVAL_HOURS {
        trace.warn(warnings::LONG_INTERVAL);
    }
    if (t0 - STANDARD_BODY_TEMP_C).abs() > BASELINE_TOLERANCE {
        trace.warn(warnings::NON_STANDARD_BASELINE);
    }
    trace.warn(warnings::ASSUMPTIONS);
    trace.warn(warnings::LEGAL_DISCLAIMER);

    Ok(EstimationResult::assemble(
        k,
        hours,
        estimated_time_of_death,
        trace,
    ))
}
