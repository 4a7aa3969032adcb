//! Cyclic learning rate scheduler

use super::Scheduler;
use crate::error::{Result, ScheduleError};
use std::cmp::Ordering;
use std::fmt;

/// Cyclic Learning Rate Scheduler
///
/// Within each cycle of `c` iterations the learning rate decreases linearly
/// from `lr1` to `lr2`, then restarts. Iterations are counted from 1.
///
/// Formula: ti = (((t - 1) mod c) + 1) / c,  lr_t = (1 - ti) * lr1 + ti * lr2
///
/// Since ti lies in (0, 1], the rate stays in [lr2, lr1) and hits exactly
/// `lr2` on the last step of every cycle (t = c, 2c, ...). `t = 0` is treated
/// as the last step of the cycle before the first.
///
/// Reference: Izmailov et al., "Averaging Weights Leads to Wider Optima and
/// Better Generalization" (<https://arxiv.org/abs/1803.05407>)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cyclic {
    lr1: f64,
    lr2: f64,
    c: u64,
}

impl Cyclic {
    /// Create a new cyclic scheduler
    ///
    /// # Arguments
    /// * `lr1` - Starting learning rate of each cycle
    /// * `lr2` - Ending learning rate of each cycle, `lr2 <= lr1`
    /// * `c` - Cycle length in iterations, `c >= 1`
    pub fn new(lr1: f64, lr2: f64, c: u64) -> Result<Self> {
        match lr1.partial_cmp(&lr2) {
            Some(Ordering::Greater | Ordering::Equal) => {}
            Some(Ordering::Less) => {
                return Err(ScheduleError::invalid(
                    "lr1",
                    format!("lr1 ({lr1}) must be greater than or equal to lr2 ({lr2})"),
                    "Use the larger rate for lr1; each cycle decreases from lr1 to lr2",
                ));
            }
            None => {
                return Err(ScheduleError::invalid(
                    "lr1",
                    format!("lr1 ({lr1}) and lr2 ({lr2}) must be comparable numbers"),
                    "Replace NaN learning rates with finite values",
                ));
            }
        }
        if c == 0 {
            return Err(ScheduleError::invalid(
                "c",
                "cycle length must be an integer greater than 0",
                "Use a cycle length of at least 1 iteration",
            ));
        }

        tracing::debug!(lr1, lr2, c, "cyclic schedule");
        Ok(Self { lr1, lr2, c })
    }

    /// Rate at the start of each cycle
    pub fn lr1(&self) -> f64 {
        self.lr1
    }

    /// Rate at the end of each cycle
    pub fn lr2(&self) -> f64 {
        self.lr2
    }

    /// Cycle length in iterations
    pub fn cycle_length(&self) -> u64 {
        self.c
    }

    /// Fractional position of `t` within its cycle, in (0, 1]
    fn cycle_position(&self, t: u64) -> f64 {
        // ((t - 1) mod c) + 1 with a non-negative modulo; t = 0 wraps to c
        let m = t.checked_sub(1).map_or(self.c, |prev| prev % self.c + 1);
        m as f64 / self.c as f64
    }
}

impl Scheduler for Cyclic {
    fn get(&self, t: u64) -> f64 {
        let ti = self.cycle_position(t);
        (1.0 - ti) * self.lr1 + ti * self.lr2
    }

    fn name(&self) -> &'static str {
        "Cyclic"
    }
}

impl fmt::Display for Cyclic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cyclic(lr1={}, lr2={}, c={})", self.lr1, self.lr2, self.c)
    }
}
