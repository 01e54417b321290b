//! Cooling-constant resolution

use super::cooling::{estimate_k, temperature_ratio, DEFAULT_COOLING_CONSTANT};
use super::errors::EstimatorResult;
use super::input::{CoolingConstantSource, EstimationInput};
use super::trace::{num, warnings, Trace};

/// Resolve k for `input` and record how it was obtained.
pub fn resolve_k(input: &EstimationInput, trace: &mut Trace) -> EstimatorResult<f64> {
    let t0 = input.normal_body_temp_c;
    let te = input.ambient_temp_c;
    let t1 = input.body_temp_c;

    match input.cooling {
        CoolingConstantSource::TwoReadings(reading) => {
            let t2 = reading.body_temp_c;
            let dt = reading.delta_hours_from_first;
            let k = estimate_k(t0, te, t1, t2, dt)?;

            trace.step("Using two readings to estimate k:");
            trace.step(format!(
                "T1 = {}°C at t1, T2 = {}°C at t2 (Δt = {} hours)",
                num(t1),
                num(t2),
                num(dt)
            ));
            trace.step(format!(
                "R1 = (T1 - Te)/(T0 - Te) = {:.4}",
                temperature_ratio(t0, te, t1)
            ));
            trace.step(format!(
                "R2 = (T2 - Te)/(T0 - Te) = {:.4}",
                temperature_ratio(t0, te, t2)
            ));
            trace.step(format!("k = -(1/Δt) * ln(R2/R1) = {:.4} h⁻¹", k));
            trace.warn(warnings::TWO_READING_K);
            Ok(k)
        }
        CoolingConstantSource::Provided(k) => {
            trace.step(format!("Using provided cooling constant k = {} h⁻¹", num(k)));
            trace.warn(warnings::PROVIDED_K);
            Ok(k)
        }
        CoolingConstantSource::Default => {
            let k = DEFAULT_COOLING_CONSTANT;
            trace.step(format!("Using default cooling constant k = {} h⁻¹", num(k)));
            trace.warn(warnings::DEFAULT_K);
            Ok(k)
        }
    }
}
