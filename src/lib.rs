//! Learning rate schedules for online gradient descent.
//!
//! An optimizer asks its scheduler for a rate once per step:
//!
//! ```
//! use entrenar_schedule::{InverseScaling, Scheduler};
//!
//! let scheduler = InverseScaling::new(1.0, 0.5);
//! assert_eq!(scheduler.get(0), 1.0);
//! assert!((scheduler.get(3) - 0.5).abs() < 1e-12);
//! ```
//!
//! Provided schedules:
//! - **Constant**: same rate at every step
//! - **Cyclic**: linear decrease from `lr1` to `lr2`, restarting every `c` steps
//! - **InverseScaling**: `lr / (t + 1)^power`
//! - **Optimal**: Bottou's `1 / (alpha * (t0 + t))`, with `t0` sized from the loss
//!
//! Schedules are validated when built (Jidoka): a malformed schedule is an
//! error before the first step, never a bad rate in the middle of training.

pub mod config;
pub mod error;
pub mod loss;
pub mod scheduler;

pub use config::{build_scheduler, SchedulerSpec};
pub use error::{Result, ScheduleError};
pub use loss::Loss;
pub use scheduler::{
    Constant, Cyclic, InverseScaling, Optimal, Schedule, Scheduler, DEFAULT_ALPHA, DEFAULT_POWER,
};
