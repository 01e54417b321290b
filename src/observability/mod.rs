//! Observability for todcalc
//!
//! Structured JSON logging of lifecycle and request events.
//!
//! # Principles
//!
//! 1. Observability is read-only and never changes an estimate
//! 2. Logging failures are swallowed
//! 3. No async or background threads
//! 4. Deterministic field order
//!
//! # Usage
//!
//! ```ignore
//! use todcalc::observability::{Event, Logger};
//!
//! Logger::event(Event::EstimateComputed, &[("k", "0.1947")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};
