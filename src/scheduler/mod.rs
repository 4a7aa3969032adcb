//! Learning rate schedulers
//!
//! Provides learning rate scheduling strategies for online training:
//! - `Constant` - Same rate at every iteration
//! - `Cyclic` - Linear sawtooth from lr1 down to lr2, restarting every c steps
//! - `InverseScaling` - Power decay lr / (t + 1)^p
//! - `Optimal` - Bottou's schedule, scaled from the loss gradient
//!
//! `Schedule` wraps all four behind one `match` for configuration-driven use.

mod constant;
mod cyclic;
mod inverse_scaling;
mod optimal;
mod schedule;

#[cfg(test)]
mod proptests;

use std::fmt;

pub use constant::Constant;
pub use cyclic::Cyclic;
pub use inverse_scaling::{InverseScaling, DEFAULT_POWER};
pub use optimal::{Optimal, DEFAULT_ALPHA};
pub use schedule::Schedule;

/// Learning rate scheduler trait
///
/// Schedulers are immutable once built: `get` is a pure function of `t`, so a
/// single instance can be queried from several threads at once.
/// `Display` renders the variant name with its parameters.
pub trait Scheduler: fmt::Display + Send + Sync {
    /// Get the learning rate at iteration `t`
    fn get(&self, t: u64) -> f64;

    /// Variant name used in logs and configuration
    fn name(&self) -> &'static str;
}
