//! Observable events
//!
//! Events are explicit and typed. The estimator core emits none; the CLI
//! and HTTP layers log around it.

use std::fmt;

use super::logger::Severity;

/// Observable events in todcalc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Server bound and accepting requests
    ServerStart,
    /// Server finished graceful shutdown
    ServerStop,
    /// Server failed to bind or serve
    ServerFailed,

    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // Estimates
    /// Estimate produced
    EstimateComputed,
    /// Estimate refused by a plausibility check
    EstimateRejected,
    /// Request failed field validation or could not be parsed
    RequestInvalid,
    /// Scene date-time present but unparsable; wall clock used instead
    SceneTimeFallback,
    /// Both k and a second reading supplied; k was ignored
    ProvidedKIgnored,
    /// Internal-consistency failure inside the model
    ModelInconsistent,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::ServerStop => "SERVER_STOP",
            Event::ServerFailed => "SERVER_FAILED",

            Event::ConfigLoaded => "CONFIG_LOADED",

            Event::EstimateComputed => "ESTIMATE_COMPUTED",
            Event::EstimateRejected => "ESTIMATE_REJECTED",
            Event::RequestInvalid => "REQUEST_INVALID",
            Event::SceneTimeFallback => "SCENE_TIME_FALLBACK",
            Event::ProvidedKIgnored => "PROVIDED_K_IGNORED",
            Event::ModelInconsistent => "MODEL_INCONSISTENT",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ServerFailed | Event::ModelInconsistent => Severity::Error,
            Event::SceneTimeFallback | Event::ProvidedKIgnored => Severity::Warn,
            Event::EstimateRejected | Event::RequestInvalid => Severity::Info,
            Event::ServerStart | Event::ServerStop | Event::ConfigLoaded => Severity::Info,
            Event::EstimateComputed => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Event; 10] = [
        Event::ServerStart,
        Event::ServerStop,
        Event::ServerFailed,
        Event::ConfigLoaded,
        Event::EstimateComputed,
        Event::EstimateRejected,
        Event::RequestInvalid,
        Event::SceneTimeFallback,
        Event::ProvidedKIgnored,
        Event::ModelInconsistent,
    ];

    #[test]
    fn test_all_events_have_string_representation() {
        for event in ALL {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_severities() {
        assert_eq!(Event::ModelInconsistent.severity(), Severity::Error);
        assert_eq!(Event::SceneTimeFallback.severity(), Severity::Warn);
        assert_eq!(Event::EstimateComputed.severity(), Severity::Info);
    }

    #[test]
    fn test_event_display() {
        assert_eq!(format!("{}", Event::EstimateComputed), "ESTIMATE_COMPUTED");
    }
}
