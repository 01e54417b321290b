//! Estimate request
//!
//! JSON body as posted by clients, and its field validation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::estimator::{
    parse_scene_date_time, CoolingConstantSource, EstimationInput, SecondReading,
    STANDARD_BODY_TEMP_C,
};

use super::errors::{ApiError, ApiResult};

/// Declared range of a numeric field
struct Bound {
    min: f64,
    max: f64,
    message: &'static str,
}

const AMBIENT_TEMP: Bound = Bound {
    min: -30.0,
    max: 50.0,
    message: "Ambient temperature must be between -30°C and 50°C",
};

const BODY_TEMP: Bound = Bound {
    min: 0.0,
    max: 45.0,
    message: "Body temperature must be between 0°C and 45°C",
};

const NORMAL_BODY_TEMP: Bound = Bound {
    min: 35.0,
    max: 42.0,
    message: "Normal body temperature must be between 35°C and 42°C",
};

const COOLING_CONSTANT: Bound = Bound {
    min: 0.001,
    max: 5.0,
    message: "Cooling constant k must be between 0.001 and 5.0",
};

/// Second reading as received; both fields are required when present
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondReadingRequest {
    #[serde(default)]
    pub body_temp_c: Option<f64>,
    #[serde(default)]
    pub delta_hours_from_first: Option<f64>,
}

/// Estimate request body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[serde(default)]
    pub ambient_temp_c: Option<f64>,
    #[serde(default)]
    pub body_temp_c: Option<f64>,
    #[serde(default)]
    pub time_since_first_reading_hours: Option<f64>,
    /// Defaults to 37 °C
    #[serde(default)]
    pub normal_body_temp_c: Option<f64>,
    #[serde(default)]
    pub k: Option<f64>,
    #[serde(default)]
    pub second_reading: Option<SecondReadingRequest>,
    /// ISO-8601 local date-time
    #[serde(default)]
    pub scene_date_time: Option<String>,
}

/// Field path -> message, in field-name order
pub type FieldErrors = BTreeMap<String, String>;

impl EstimateRequest {
    /// Parse a JSON request body
    pub fn parse(json: &str) -> ApiResult<Self> {
        serde_json::from_str(json).map_err(|e| ApiError::MalformedBody(e.to_string()))
    }

    /// Check presence and declared ranges of every field, collecting all failures.
    ///
    /// An unparsable `sceneDateTime` is not an error; the estimate then
    /// uses the wall clock.
    pub fn validate(&self) -> ApiResult<EstimationInput> {
        let mut errors = FieldErrors::new();

        let ambient = require(
            &mut errors,
            "ambientTempC",
            self.ambient_temp_c,
            "Ambient temperature is required",
        )
        .and_then(|v| within(&mut errors, "ambientTempC", v, &AMBIENT_TEMP));

        let body = require(
            &mut errors,
            "bodyTempC",
            self.body_temp_c,
            "Body temperature is required",
        )
        .and_then(|v| within(&mut errors, "bodyTempC", v, &BODY_TEMP));

        let since_first = require(
            &mut errors,
            "timeSinceFirstReadingHours",
            self.time_since_first_reading_hours,
            "Time since first reading is required",
        )
        .and_then(|v| {
            check(
                &mut errors,
                "timeSinceFirstReadingHours",
                v,
                v >= 0.0,
                "Time since first reading must be zero or positive",
            )
        });

        let normal = within(
            &mut errors,
            "normalBodyTempC",
            self.normal_body_temp_c.unwrap_or(STANDARD_BODY_TEMP_C),
            &NORMAL_BODY_TEMP,
        );

        let k = self
            .k
            .and_then(|v| within(&mut errors, "k", v, &COOLING_CONSTANT));

        let second_reading = self
            .second_reading
            .as_ref()
            .and_then(|reading| reading.validate(&mut errors));

        match (ambient, body, since_first, normal) {
            (Some(ambient), Some(body), Some(since_first), Some(normal)) if errors.is_empty() => {
                let input = EstimationInput::new(ambient, body, since_first)
                    .with_normal_body_temp(normal)
                    .with_cooling(CoolingConstantSource::select(k, second_reading));

                Ok(match self.scene_date_time.as_deref().and_then(parse_scene_date_time) {
                    Some(scene) => input.with_scene_date_time(scene),
                    None => input,
                })
            }
            _ => Err(ApiError::ValidationFailed(errors)),
        }
    }

    /// A non-blank scene date-time that will be ignored because it does not parse
    pub fn unparsable_scene_date_time(&self) -> Option<&str> {
        self.scene_date_time
            .as_deref()
            .filter(|raw| !raw.trim().is_empty() && parse_scene_date_time(raw).is_none())
    }

    /// Both k and a second reading supplied; the second reading wins
    pub fn has_overridden_k(&self) -> bool {
        self.k.is_some() && self.second_reading.is_some()
    }
}

impl SecondReadingRequest {
    fn validate(&self, errors: &mut FieldErrors) -> Option<SecondReading> {
        let body_temp_c = require(
            errors,
            "secondReading.bodyTempC",
            self.body_temp_c,
            "Body temperature for second reading is required",
        )
        .and_then(|v| within(errors, "secondReading.bodyTempC", v, &BODY_TEMP));

        let delta_hours_from_first = require(
            errors,
            "secondReading.deltaHoursFromFirst",
            self.delta_hours_from_first,
            "Delta hours from first reading is required",
        )
        .and_then(|v| {
            check(
                errors,
                "secondReading.deltaHoursFromFirst",
                v,
                v > 0.0,
                "Delta hours must be positive",
            )
        });

        Some(SecondReading {
            body_temp_c: body_temp_c?,
            delta_hours_from_first: delta_hours_from_first?,
        })
    }
}

fn require(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<f64>,
    message: &str,
) -> Option<f64> {
    if value.is_none() {
        errors.insert(field.to_string(), message.to_string());
    }
    value
}

fn check(errors: &mut FieldErrors, field: &str, value: f64, ok: bool, message: &str) -> Option<f64> {
    if !value.is_finite() {
        errors.insert(field.to_string(), "Value must be a finite number".to_string());
        return None;
    }
    if !ok {
        errors.insert(field.to_string(), message.to_string());
        return None;
    }
    Some(value)
}

fn within(errors: &mut FieldErrors, field: &str, value: f64, bound: &Bound) -> Option<f64> {
    check(
        errors,
        field,
        value,
        (bound.min..=bound.max).contains(&value),
        bound.message,
    )
}
