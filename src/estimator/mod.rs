//! Time-since-death estimator
//!
//! Newton's Law of Cooling, `T(t) = Te + (T0 - Te) * e^(-k*t)`, applied to
//! one or two body-temperature readings.
//!
//! # Pipeline (strict order)
//!
//! 1. Resolve the cooling constant k: two-reading estimate, else caller
//!    value, else 0.1947 per hour
//! 2. Invert the cooling equation for elapsed hours, then add the hours
//!    between the first reading and the reference time
//! 3. Subtract from the reference time (scene time, else wall clock)
//! 4. Assemble k, rounded hours, time of death, steps and warnings
//!
//! # Guarantees
//!
//! - Pure and synchronous; the clock is read at most once, and only when
//!   no scene time is given
//! - `k > 0`, every logarithm sees a ratio in `(0, 1]`, elapsed hours `>= 0`
//! - Either a full result or an [`InvalidConditionsError`]; nothing partial

mod clock;
mod cooling;
mod cooling_constant;
mod errors;
mod estimate;
mod input;
mod result;
mod time_of_death;
mod trace;

pub use clock::{Clock, FixedClock, SystemClock};
pub use cooling::{
    estimate_k, estimate_time_since_death, temperature_ratio, DEFAULT_COOLING_CONSTANT,
    MAX_COOLING_CONSTANT, MIN_TEMPERATURE_SEPARATION,
};
pub use cooling_constant::resolve_k;
pub use errors::{EstimatorResult, InvalidConditionsError};
pub use estimate::{compute_estimate, compute_estimate_with_clock};
pub use input::{CoolingConstantSource, EstimationInput, SecondReading, STANDARD_BODY_TEMP_C};
pub use result::{round_half_up, EstimationResult};
pub use time_of_death::{
    format_local, parse_scene_date_time, reference_time, time_of_death, ISO_LOCAL_DATE_TIME,
};
pub use trace::{warnings, Trace};
