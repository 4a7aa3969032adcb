//! Loss capability consulted by adaptive schedules

/// Trait for loss functions
///
/// Only the derivative with respect to the prediction is needed here:
/// [`Optimal`](crate::Optimal) probes it once to size its initial step.
pub trait Loss: Send + Sync {
    /// Derivative of the loss with respect to `y_pred`
    fn gradient(&self, y_pred: f64, y_true: f64) -> f64;

    /// Name of the loss function
    fn name(&self) -> &str;
}
