//! Estimation inputs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Assumed body temperature at death (°C) when none is given
pub const STANDARD_BODY_TEMP_C: f64 = 37.0;

/// A later body-temperature reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondReading {
    pub body_temp_c: f64,
    /// Hours after the first reading, > 0
    pub delta_hours_from_first: f64,
}

/// Where the cooling constant comes from, highest priority first
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoolingConstantSource {
    /// Estimate k from the first reading and this one
    TwoReadings(SecondReading),
    /// Caller-supplied k, used as-is
    Provided(f64),
    /// `DEFAULT_COOLING_CONSTANT`
    Default,
}

impl CoolingConstantSource {
    /// Pick a source from optional caller fields.
    ///
    /// A second reading wins over a provided k, which wins over the default.
    pub fn select(provided_k: Option<f64>, second_reading: Option<SecondReading>) -> Self {
        match (second_reading, provided_k) {
            (Some(reading), _) => Self::TwoReadings(reading),
            (None, Some(k)) => Self::Provided(k),
            (None, None) => Self::Default,
        }
    }
}

/// One estimation request, after boundary validation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimationInput {
    pub ambient_temp_c: f64,
    /// First (or only) body-temperature reading
    pub body_temp_c: f64,
    /// Hours from the first reading to the reference time, >= 0
    pub time_since_first_reading_hours: f64,
    pub normal_body_temp_c: f64,
    pub cooling: CoolingConstantSource,
    /// Reference time; `None` means "now"
    pub scene_date_time: Option<NaiveDateTime>,
}

impl EstimationInput {
    /// Single reading, standard baseline, default k, reference time "now"
    pub fn new(ambient_temp_c: f64, body_temp_c: f64, time_since_first_reading_hours: f64) -> Self {
        Self {
            ambient_temp_c,
            body_temp_c,
            time_since_first_reading_hours,
            normal_body_temp_c: STANDARD_BODY_TEMP_C,
            cooling: CoolingConstantSource::Default,
            scene_date_time: None,
        }
    }

    pub fn with_normal_body_temp(mut self, normal_body_temp_c: f64) -> Self {
        self.normal_body_temp_c = normal_body_temp_c;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingConstantSource) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_scene_date_time(mut self, scene_date_time: NaiveDateTime) -> Self {
        self.scene_date_time = Some(scene_date_time);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const READING: SecondReading = SecondReading {
        body_temp_c: 32.0,
        delta_hours_from_first: 1.0,
    };

    #[test]
    fn test_second_reading_takes_precedence() {
        assert_eq!(
            CoolingConstantSource::select(Some(0.3), Some(READING)),
            CoolingConstantSource::TwoReadings(READING)
        );
    }

    #[test]
    fn test_provided_k_over_default() {
        assert_eq!(
            CoolingConstantSource::select(Some(0.3), None),
            CoolingConstantSource::Provided(0.3)
        );
        assert_eq!(
            CoolingConstantSource::select(None, None),
            CoolingConstantSource::Default
        );
    }

    #[test]
    fn test_new_uses_defaults() {
        let input = EstimationInput::new(20.0, 32.0, 0.0);
        assert_eq!(input.normal_body_temp_c, STANDARD_BODY_TEMP_C);
        assert_eq!(input.cooling, CoolingConstantSource::Default);
        assert!(input.scene_date_time.is_none());
    }

    #[test]
    fn test_second_reading_json_is_camel_case() {
        let reading: SecondReading =
            serde_json::from_str(r#"{"bodyTempC":30.5,"deltaHoursFromFirst":2.0}"#).unwrap();
        assert_eq!(reading.body_temp_c, 30.5);
        assert_eq!(reading.delta_hours_from_first, 2.0);
    }
}
