//! Closed set of schedulers evaluated with a single `match`

use super::{Constant, Cyclic, InverseScaling, Optimal, Scheduler};
use crate::config::SchedulerSpec;
use std::fmt;

/// Any of the built-in schedulers
///
/// Produced by [`SchedulerSpec::build`] when the policy is chosen at runtime.
#[derive(Debug, Clone)]
pub enum Schedule {
    Constant(Constant),
    Cyclic(Cyclic),
    InverseScaling(InverseScaling),
    Optimal(Optimal),
}

impl Schedule {
    /// Declarative description of this schedule
    ///
    /// The loss behind an `Optimal` schedule is not part of the description;
    /// it has to be supplied again when rebuilding. Cycle lengths above 2^53
    /// are rounded to the nearest representable `f64`.
    pub fn spec(&self) -> SchedulerSpec {
        match self {
            Self::Constant(s) => SchedulerSpec::Constant { learning_rate: s.learning_rate() },
            Self::Cyclic(s) => {
                SchedulerSpec::Cyclic { lr1: s.lr1(), lr2: s.lr2(), c: s.cycle_length() as f64 }
            }
            Self::InverseScaling(s) => SchedulerSpec::InverseScaling {
                learning_rate: s.learning_rate(),
                power: s.power(),
            },
            Self::Optimal(s) => SchedulerSpec::Optimal { alpha: s.alpha() },
        }
    }
}

impl Scheduler for Schedule {
    fn get(&self, t: u64) -> f64 {
        match self {
            Self::Constant(s) => s.get(t),
            Self::Cyclic(s) => s.get(t),
            Self::InverseScaling(s) => s.get(t),
            Self::Optimal(s) => s.get(t),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Constant(s) => s.name(),
            Self::Cyclic(s) => s.name(),
            Self::InverseScaling(s) => s.name(),
            Self::Optimal(s) => s.name(),
        }
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(s) => fmt::Display::fmt(s, f),
            Self::Cyclic(s) => fmt::Display::fmt(s, f),
            Self::InverseScaling(s) => fmt::Display::fmt(s, f),
            Self::Optimal(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<Constant> for Schedule {
    fn from(s: Constant) -> Self {
        Self::Constant(s)
    }
}

impl From<Cyclic> for Schedule {
    fn from(s: Cyclic) -> Self {
        Self::Cyclic(s)
    }
}

impl From<InverseScaling> for Schedule {
    fn from(s: InverseScaling) -> Self {
        Self::InverseScaling(s)
    }
}

impl From<Optimal> for Schedule {
    fn from(s: Optimal) -> Self {
        Self::Optimal(s)
    }
}
