//! Constant learning rate scheduler

use super::Scheduler;
use std::fmt;

/// Always uses the same learning rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    learning_rate: f64,
}

impl Constant {
    /// Create a new constant scheduler
    pub fn new(learning_rate: f64) -> Self {
        tracing::debug!(learning_rate, "constant schedule");
        Self { learning_rate }
    }

    /// Rate returned at every iteration
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl Scheduler for Constant {
    fn get(&self, _t: u64) -> f64 {
        self.learning_rate
    }

    fn name(&self) -> &'static str {
        "Constant"
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Constant(learning_rate={})", self.learning_rate)
    }
}
