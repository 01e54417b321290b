//! Derivation narrative
//!
//! Steps and warnings are append-only and keep insertion order.

/// Warning texts. Stable substrings of these are part of the public contract.
pub mod warnings {
    pub const TWO_READING_K: &str =
        "K estimation assumes constant ambient temperature between readings";
    pub const PROVIDED_K: &str = "Using provided k value - ensure it's appropriate for conditions";
    pub const DEFAULT_K: &str =
        "Using default k value - results may be inaccurate without proper k estimation";
    pub const NEAR_AMBIENT: &str =
        "Body temperature very close to ambient - high uncertainty in estimate";
    pub const LONG_INTERVAL: &str =
        "Estimate is for >24 hours - Newton's cooling becomes less accurate";
    pub const NON_STANDARD_BASELINE: &str =
        "Non-standard normal body temperature used - verify accuracy";
    pub const ASSUMPTIONS: &str =
        "Assumptions: constant ambient temperature, no clothing/covering effects, standard body mass";
    pub const LEGAL_DISCLAIMER: &str =
        "This is an estimation tool - not suitable for legal determinations without expert validation";
}

/// Ordered steps and warnings accumulated during one estimate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<String>,
    warnings: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a derivation step
    pub fn step(&mut self, text: impl Into<String>) {
        self.steps.push(text.into());
    }

    /// Append a caveat
    pub fn warn(&mut self, text: impl Into<String>) {
        self.warnings.push(text.into());
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.steps, self.warnings)
    }
}

/// Restate a measured value the way it was supplied, always with a decimal point (`37.0`)
pub(crate) fn num(v: f64) -> String {
    format!("{v:?}")
}
