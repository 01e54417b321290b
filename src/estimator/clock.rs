//! Wall-clock access
//!
//! The estimator reads the clock at most once per estimate, and only when
//! the caller gives no usable reference timestamp.

use chrono::{Local, NaiveDateTime};

/// Source of the current local time
pub trait Clock {
    /// Current local (naive) date-time
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
