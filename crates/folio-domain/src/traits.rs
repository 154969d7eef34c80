//! Trait definitions for external interactions
//!
//! The layout engine never reads the system clock itself; "now" comes in
//! through [`Clock`] so layouts are reproducible in tests.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current instant
pub trait Clock {
    /// Current time in epoch seconds
    fn now(&self) -> i64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_secs() as i64,
            // Clock set before 1970
            Err(e) => -(e.duration().as_secs() as i64),
        }
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}
