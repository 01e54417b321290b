//! Estimator Property Tests
//!
//! Tests for cooling-model invariants:
//! - Elapsed time is never negative
//! - k estimation rejects non-cooling readings
//! - Solving the cooling equation recovers the elapsed time it was built from
//! - End-to-end estimates carry the standing caveats

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::*;
use todcalc::estimator::{
    compute_estimate, compute_estimate_with_clock, estimate_k, estimate_time_since_death,
    temperature_ratio, CoolingConstantSource, EstimationInput, FixedClock,
    InvalidConditionsError, SecondReading, ISO_LOCAL_DATE_TIME, MAX_COOLING_CONSTANT,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn reading_at(baseline: f64, ambient: f64, ratio: f64) -> f64 {
    ambient + ratio * (baseline - ambient)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// Any ratio in (0, 1] yields a non-negative elapsed time.
    #[test]
    fn prop_elapsed_time_non_negative(
        baseline in 35.0f64..42.0,
        ambient in -30.0f64..50.0,
        ratio in 0.001f64..=1.0,
        k in 0.001f64..5.0,
    ) {
        prop_assume!((baseline - ambient).abs() >= 0.1);
        let current = reading_at(baseline, ambient, ratio);
        prop_assume!((current - ambient).abs() >= 0.1);

        match estimate_time_since_death(baseline, ambient, current, k) {
            Ok(t) => prop_assert!(t >= 0.0),
            // Rounding can push a ratio of exactly 1 just above it
            Err(InvalidConditionsError::RatioOutOfRange(r)) => prop_assert!(r > 1.0 && r < 1.0 + 1e-9),
            Err(e) => prop_assert!(false, "unexpected error: {}", e),
        }
    }

    /// Readings that do not cool are always rejected; cooling readings yield k in (0, 5].
    #[test]
    fn prop_estimate_k_requires_monotone_cooling(
        baseline in 35.0f64..42.0,
        ambient in -30.0f64..30.0,
        r1 in 0.01f64..=1.0,
        r2 in 0.01f64..=1.0,
        delta in 0.1f64..12.0,
    ) {
        let first = reading_at(baseline, ambient, r1);
        let second = reading_at(baseline, ambient, r2);
        let actual_r1 = temperature_ratio(baseline, ambient, first);
        let actual_r2 = temperature_ratio(baseline, ambient, second);

        let result = estimate_k(baseline, ambient, first, second, delta);

        if actual_r2 >= actual_r1 {
            prop_assert_eq!(result, Err(InvalidConditionsError::NotCooling));
        } else {
            match result {
                Ok(k) => prop_assert!(k > 0.0 && k <= MAX_COOLING_CONSTANT),
                Err(InvalidConditionsError::ImplausibleK(k)) => {
                    prop_assert!(k <= 0.0 || k > MAX_COOLING_CONSTANT)
                }
                Err(e) => prop_assert!(false, "unexpected error: {}", e),
            }
        }
    }

    /// `Tt = Te + (T0 - Te) * e^(-k*t)` solves back to `t`.
    #[test]
    fn prop_round_trip(
        baseline in 35.0f64..42.0,
        ambient in -30.0f64..30.0,
        k in 0.01f64..1.0,
        t in 0.1f64..48.0,
    ) {
        let current = ambient + (baseline - ambient) * (-k * t).exp();
        prop_assume!((current - ambient).abs() >= 0.1);

        let solved = estimate_time_since_death(baseline, ambient, current, k).unwrap();
        prop_assert!(((solved - t) / t).abs() < 1e-6, "solved {} for {}", solved, t);
    }

    /// Estimates are deterministic for a pinned reference time.
    #[test]
    fn prop_pinned_estimates_are_deterministic(
        body in 21.0f64..37.0,
        since_first in 0.0f64..6.0,
    ) {
        let input = EstimationInput::new(20.0, body, since_first)
            .with_scene_date_time(noon());
        let a = compute_estimate(&input);
        let b = compute_estimate(&input);
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// End-to-end examples
// =============================================================================

#[test]
fn test_single_reading_with_provided_k() {
    let input = EstimationInput::new(20.0, 32.0, 0.0)
        .with_normal_body_temp(37.0)
        .with_cooling(CoolingConstantSource::Provided(0.1947));

    let result = compute_estimate(&input).unwrap();

    assert_eq!(result.k, 0.1947);
    assert!(result.time_since_death_hours > 0.0);
    assert!(!result.steps.is_empty());
    assert!(!result.warnings.is_empty());
}

#[test]
fn test_non_monotone_second_reading_fails() {
    let input = EstimationInput::new(20.0, 32.0, 0.0).with_cooling(
        CoolingConstantSource::TwoReadings(SecondReading {
            body_temp_c: 32.5,
            delta_hours_from_first: 1.0,
        }),
    );

    assert_eq!(
        compute_estimate(&input).unwrap_err(),
        InvalidConditionsError::NotCooling
    );
}

#[test]
fn test_near_ambient_warning() {
    let input = EstimationInput::new(20.0, 21.5, 0.0);
    let result = compute_estimate(&input).unwrap();

    assert!(result.warnings.iter().any(|w| w.contains("close to ambient")));
}

#[test]
fn test_standing_caveats_always_last() {
    let result = compute_estimate(&EstimationInput::new(20.0, 30.0, 2.0)).unwrap();
    let n = result.warnings.len();

    assert!(n >= 2);
    assert!(result.warnings[n - 2].starts_with("Assumptions:"));
    assert!(result.warnings[n - 1].contains("not suitable for legal determinations"));
}

#[test]
fn test_time_of_death_against_fixed_clock() {
    // Body still at baseline: solver contributes 0h, elapsed is exactly 1.5h
    let input = EstimationInput::new(20.0, 37.0, 1.5);
    let result = compute_estimate_with_clock(&input, &FixedClock(noon())).unwrap();

    assert_eq!(result.time_since_death_hours, 1.5);
    assert_eq!(result.estimated_time_of_death, "2024-01-15T10:30:00");
}

#[test]
fn test_time_of_death_against_wall_clock() {
    let input = EstimationInput::new(20.0, 37.0, 1.5);

    let before = Local::now().naive_local();
    let result = compute_estimate(&input).unwrap();
    let after = Local::now().naive_local();

    let tod =
        NaiveDateTime::parse_from_str(&result.estimated_time_of_death, ISO_LOCAL_DATE_TIME).unwrap();
    let elapsed = TimeDelta::minutes(90);
    assert!(tod >= before - elapsed);
    assert!(tod <= after - elapsed);
}
