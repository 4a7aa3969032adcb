//! Schema for declarative scheduler configuration

use crate::error::{Result, ScheduleError};
use crate::scheduler::{DEFAULT_ALPHA, DEFAULT_POWER};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Scheduler specification, tagged by `kind`
///
/// `power` and `alpha` take their usual defaults when omitted. The cycle
/// length `c` is read as a number and checked for integrality when building,
/// so `c: 2.5` is reported as an invalid parameter rather than a parse error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum SchedulerSpec {
    /// Fixed learning rate
    Constant { learning_rate: f64 },

    /// Sawtooth from `lr1` down to `lr2` every `c` iterations
    Cyclic { lr1: f64, lr2: f64, c: f64 },

    /// `learning_rate / (t + 1)^power`
    InverseScaling {
        learning_rate: f64,
        #[serde(default = "default_power")]
        power: f64,
    },

    /// Bottou's schedule; the loss is supplied at build time
    Optimal {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
}

fn default_power() -> f64 {
    DEFAULT_POWER
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

impl SchedulerSpec {
    /// The `kind` tag of this specification
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::Cyclic { .. } => "cyclic",
            Self::InverseScaling { .. } => "inverse_scaling",
            Self::Optimal { .. } => "optimal",
        }
    }

    /// Parse a specification from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ScheduleError::ConfigParsing { message: e.to_string() })
    }

    /// Parse a specification from JSON
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| ScheduleError::ConfigParsing { message: e.to_string() })
    }

    /// Load a specification from a file
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| ScheduleError::io(format!("reading {}", path.display()), e))?;

        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let spec = if is_json { Self::from_json(&content)? } else { Self::from_yaml(&content)? };

        tracing::debug!(path = %path.display(), kind = spec.kind(), "loaded scheduler spec");
        Ok(spec)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ScheduleError::ConfigParsing { message: e.to_string() })
    }
}
