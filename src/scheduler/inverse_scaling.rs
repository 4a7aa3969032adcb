//! Inverse scaling (power decay) learning rate scheduler

use super::Scheduler;
use std::fmt;

/// Default exponent of the power schedule
pub const DEFAULT_POWER: f64 = 0.5;

/// Inverse Scaling Learning Rate Scheduler
///
/// Reduces the learning rate with a power schedule, counting iterations from 0.
///
/// Formula: lr_t = learning_rate / (t + 1)^power
///
/// `power = 0` keeps the rate constant; a negative power makes it grow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseScaling {
    learning_rate: f64,
    power: f64,
}

impl InverseScaling {
    /// Create a new inverse scaling scheduler
    ///
    /// # Arguments
    /// * `learning_rate` - Rate at t = 0
    /// * `power` - Decay exponent (default 0.5)
    pub fn new(learning_rate: f64, power: f64) -> Self {
        tracing::debug!(learning_rate, power, "inverse scaling schedule");
        Self { learning_rate, power }
    }

    /// Create scheduler with power = 0.5
    pub fn default_power(learning_rate: f64) -> Self {
        Self::new(learning_rate, DEFAULT_POWER)
    }

    /// Rate at t = 0
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Decay exponent
    pub fn power(&self) -> f64 {
        self.power
    }
}

impl Scheduler for InverseScaling {
    fn get(&self, t: u64) -> f64 {
        self.learning_rate / (t as f64 + 1.0).powf(self.power)
    }

    fn name(&self) -> &'static str {
        "InverseScaling"
    }
}

impl fmt::Display for InverseScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InverseScaling(learning_rate={}, power={})",
            self.learning_rate, self.power
        )
    }
}
