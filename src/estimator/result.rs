//! Estimation result

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::time_of_death::format_local;
use super::trace::Trace;

/// Complete estimate with its derivation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    /// Cooling constant actually used (per hour)
    pub k: f64,
    /// Elapsed hours at the reference time, 2 decimal places
    pub time_since_death_hours: f64,
    /// ISO-8601 local date-time
    pub estimated_time_of_death: String,
    pub steps: Vec<String>,
    pub warnings: Vec<String>,
}

impl EstimationResult {
    /// Package final values. Performs no validation.
    pub fn assemble(
        k: f64,
        time_since_death_hours: f64,
        estimated_time_of_death: NaiveDateTime,
        trace: Trace,
    ) -> Self {
        let (steps, warnings) = trace.into_parts();
        Self {
            k,
            time_since_death_hours: round_half_up(time_since_death_hours),
            estimated_time_of_death: format_local(estimated_time_of_death),
            steps,
            warnings,
        }
    }
}

/// Round to 2 decimal places, halves rounding up
pub fn round_half_up(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(1.794), 1.79);
        assert_eq!(round_half_up(1.796), 1.8);
        assert_eq!(round_half_up(2.125), 2.13);
        assert_eq!(round_half_up(0.0), 0.0);
        assert_eq!(round_half_up(-0.0), 0.0);
    }

    #[test]
    fn test_assemble_serializes_camel_case() {
        let mut trace = Trace::new();
        trace.step("s");
        trace.warn("w");
        let at = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();

        let result = EstimationResult::assemble(0.1947, 1.7876, at, trace);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["k"], 0.1947);
        assert_eq!(json["timeSinceDeathHours"], 1.79);
        assert_eq!(json["estimatedTimeOfDeath"], "2024-01-15T10:30:00");
        assert_eq!(json["steps"][0], "s");
        assert_eq!(json["warnings"][0], "w");
    }
}
