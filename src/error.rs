//! Error types with actionable diagnostics (Andon principle).
//!
//! Every construction failure names the offending parameter and the violated
//! constraint, so a malformed schedule stops the optimizer before it starts.

use thiserror::Error;

/// Result type alias for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised while building a learning rate schedule.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A constructor argument violates its constraint.
    #[error("Invalid parameter '{param}': {message}\n  → {suggestion}")]
    InvalidParameter { param: String, message: String, suggestion: String },

    /// A real-valued computation is undefined for the given inputs.
    #[error("Domain error in '{param}': {message}")]
    DomainError { param: String, message: String },

    /// Scheduler configuration could not be parsed.
    #[error("Invalid scheduler configuration:\n  {message}\n  → Check the `kind` field and parameter names")]
    ConfigParsing { message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScheduleError {
    /// Create an invalid parameter error.
    pub fn invalid(
        param: impl Into<String>,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            param: param.into(),
            message: message.into(),
            suggestion: suggestion.into(),
        }
    }

    /// Create a domain error.
    pub fn domain(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DomainError { param: param.into(), message: message.into() }
    }

    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::DomainError { .. } | Self::ConfigParsing { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigParsing { .. } => "E002",
            Self::InvalidParameter { .. } => "E003",
            Self::DomainError { .. } => "E031",
            Self::Io { .. } => "E050",
        }
    }

    /// Name of the parameter this error refers to, if any.
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::InvalidParameter { param, .. } | Self::DomainError { param, .. } => {
                Some(param.as_str())
            }
            Self::ConfigParsing { .. } | Self::Io { .. } => None,
        }
    }
}
