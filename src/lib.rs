//! todcalc - time-of-death estimation by Newton's Law of Cooling
//!
//! The [`estimator`] is a pure, synchronous core. [`api`], [`http_server`]
//! and [`cli`] are the boundary around it.

pub mod api;
pub mod cli;
pub mod estimator;
pub mod http_server;
pub mod observability;
