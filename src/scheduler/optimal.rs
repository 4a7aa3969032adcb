//! Optimal learning rate scheduler (Bottou)

use super::Scheduler;
use crate::error::{Result, ScheduleError};
use crate::loss::Loss;
use std::fmt;
use std::sync::Arc;

/// Default regularization strength
pub const DEFAULT_ALPHA: f64 = 1e-4;

/// Optimal Learning Rate Scheduler
///
/// The schedule proposed by Léon Bottou for SGD on regularized linear models.
/// The offset `t0` is fixed once, at construction, from a single probe of the
/// loss gradient at a typical weight magnitude:
///
/// ```text
/// typw         = sqrt(1 / sqrt(alpha))
/// initial_eta0 = typw / max(1, loss.gradient(-typw, 1))
/// t0           = 1 / (initial_eta0 * alpha)
/// lr_t         = 1 / (alpha * (t0 + t))
/// ```
///
/// Construction rejects inputs for which `t0` is not a finite positive number,
/// so `alpha * (t0 + t)` is strictly positive for every `t` and `get` never
/// divides by zero.
///
/// References:
/// - <https://leon.bottou.org/projects/sgd>
/// - Bottou, "Stochastic Gradient Descent Tricks" (2012)
#[derive(Clone)]
pub struct Optimal {
    loss: Arc<dyn Loss>,
    alpha: f64,
    t0: f64,
}

impl Optimal {
    /// Create a new optimal scheduler
    ///
    /// # Arguments
    /// * `loss` - Loss whose gradient sizes the initial step
    /// * `alpha` - Regularization strength, must be finite and > 0 (default 1e-4)
    pub fn new(loss: Arc<dyn Loss>, alpha: f64) -> Result<Self> {
        if !(alpha.is_finite() && alpha > 0.0) {
            return Err(ScheduleError::domain(
                "alpha",
                format!(
                    "alpha ({alpha}) must be finite and > 0: sqrt(1 / sqrt(alpha)) is undefined otherwise"
                ),
            ));
        }

        let typw = (1.0 / alpha.sqrt()).sqrt();
        let gradient = loss.gradient(-typw, 1.0);
        if !gradient.is_finite() {
            tracing::warn!(loss = loss.name(), gradient, "non-finite gradient probe");
        }
        // f64::max ignores NaN, so a NaN probe falls back to 1.0
        let initial_eta0 = typw / gradient.max(1.0);
        let t0 = 1.0 / (initial_eta0 * alpha);

        if !(t0.is_finite() && t0 > 0.0) {
            return Err(ScheduleError::domain(
                "t0",
                format!(
                    "initial step size {initial_eta0} from loss '{}' (gradient {gradient}) gives t0 = {t0}",
                    loss.name()
                ),
            ));
        }

        tracing::debug!(loss = loss.name(), alpha, typw, initial_eta0, t0, "optimal schedule");
        Ok(Self { loss, alpha, t0 })
    }

    /// Create scheduler with alpha = 1e-4
    pub fn default_alpha(loss: Arc<dyn Loss>) -> Result<Self> {
        Self::new(loss, DEFAULT_ALPHA)
    }

    /// Regularization strength
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Iteration offset derived at construction
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Loss probed at construction
    pub fn loss(&self) -> &Arc<dyn Loss> {
        &self.loss
    }
}

impl Scheduler for Optimal {
    fn get(&self, t: u64) -> f64 {
        1.0 / (self.alpha * (self.t0 + t as f64))
    }

    fn name(&self) -> &'static str {
        "Optimal"
    }
}

impl fmt::Display for Optimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Optimal(loss={}, alpha={}, t0={})",
            self.loss.name(),
            self.alpha,
            self.t0
        )
    }
}

impl fmt::Debug for Optimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Optimal")
            .field("loss", &self.loss.name())
            .field("alpha", &self.alpha)
            .field("t0", &self.t0)
            .finish()
    }
}
