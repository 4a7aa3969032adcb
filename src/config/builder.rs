//! Build schedulers from configuration

use super::schema::SchedulerSpec;
use crate::error::{Result, ScheduleError};
use crate::loss::Loss;
use crate::scheduler::{Constant, Cyclic, InverseScaling, Optimal, Schedule};
use std::sync::Arc;

/// Build a scheduler from its specification
///
/// `loss` is required by `optimal` and ignored by every other kind.
pub fn build_scheduler(spec: &SchedulerSpec, loss: Option<Arc<dyn Loss>>) -> Result<Schedule> {
    let schedule: Schedule = match *spec {
        SchedulerSpec::Constant { learning_rate } => Constant::new(learning_rate).into(),
        SchedulerSpec::Cyclic { lr1, lr2, c } => Cyclic::new(lr1, lr2, cycle_length(c)?)?.into(),
        SchedulerSpec::InverseScaling { learning_rate, power } => {
            InverseScaling::new(learning_rate, power).into()
        }
        SchedulerSpec::Optimal { alpha } => {
            let loss = loss.ok_or_else(|| {
                ScheduleError::invalid(
                    "loss",
                    "the optimal schedule needs a loss function to size its first step",
                    "Pass the training loss when building an `optimal` schedule",
                )
            })?;
            Optimal::new(loss, alpha)?.into()
        }
    };

    tracing::debug!(kind = spec.kind(), schedule = %schedule, "built scheduler");
    Ok(schedule)
}

/// Cycle lengths arrive as plain numbers; only positive integers are valid.
fn cycle_length(c: f64) -> Result<u64> {
    if !(c.is_finite() && c >= 1.0 && c.fract() == 0.0 && c < u64::MAX as f64) {
        return Err(ScheduleError::invalid(
            "c",
            format!("cycle length ({c}) must be an integer greater than 0"),
            "Use a whole number of iterations, e.g. c: 10",
        ));
    }
    Ok(c as u64)
}

impl SchedulerSpec {
    /// Validate and build the scheduler this specification describes
    pub fn build(&self, loss: Option<Arc<dyn Loss>>) -> Result<Schedule> {
        build_scheduler(self, loss)
    }
}
