//! Declarative scheduler configuration
//!
//! A schedule can be described in YAML or JSON and built once the optimizer
//! is configured:
//!
//! ```yaml
//! kind: cyclic
//! lr1: 0.1
//! lr2: 0.01
//! c: 10
//! ```

mod builder;
mod schema;

#[cfg(test)]
mod proptests;

pub use builder::build_scheduler;
pub use schema::SchedulerSpec;
