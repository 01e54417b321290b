//! Absolute time-of-death resolution
//!
//! All date-times are local and naive; no time zone conversion happens here.

use chrono::{NaiveDateTime, TimeDelta};

use super::clock::Clock;
use super::errors::{EstimatorResult, InvalidConditionsError};

/// ISO-8601 local date-time; fractional seconds only when non-zero
pub const ISO_LOCAL_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S%.f";

const ISO_LOCAL_DATE_TIME_NO_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// Timestamp the elapsed time is subtracted from: the scene time when
/// present, otherwise the clock read once.
pub fn reference_time<C: Clock + ?Sized>(scene: Option<NaiveDateTime>, clock: &C) -> NaiveDateTime {
    scene.unwrap_or_else(|| clock.now())
}

/// Parse an ISO-8601 local date-time such as `2024-01-15T22:30` or
/// `2024-01-15T22:30:05.250`.
///
/// Blank or malformed input yields `None`; callers fall back to the clock.
pub fn parse_scene_date_time(raw: &str) -> Option<NaiveDateTime> {
    if raw.trim().is_empty() {
        return None;
    }

    NaiveDateTime::parse_from_str(raw, ISO_LOCAL_DATE_TIME)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, ISO_LOCAL_DATE_TIME_NO_SECONDS))
        .ok()
}

/// Subtract `hours_ago` from `reference`.
///
/// Elapsed time is truncated to whole hours plus whole minutes; anything
/// finer than a minute is dropped.
pub fn time_of_death(reference: NaiveDateTime, hours_ago: f64) -> EstimatorResult<NaiveDateTime> {
    let whole_hours = hours_ago.trunc();
    let minutes = ((hours_ago - whole_hours) * 60.0) as i64;

    TimeDelta::try_hours(whole_hours as i64)
        .zip(TimeDelta::try_minutes(minutes))
        .and_then(|(h, m)| reference.checked_sub_signed(h)?.checked_sub_signed(m))
        .ok_or(InvalidConditionsError::TimeOfDeathOutOfRange(hours_ago))
}

/// Render a date-time as ISO-8601 local date-time
pub fn format_local(at: NaiveDateTime) -> String {
    at.format(ISO_LOCAL_DATE_TIME).to_string()
}
