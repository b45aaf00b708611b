//! Session configuration
//!
//! Loaded from YAML. Every field is optional and falls back to its default:
//!
//! ```yaml
//! history_capacity: 100
//! input_policy: strict     # or lenient
//! division_policy: ieee    # or reject
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::core::evaluator::{Evaluator, InputPolicy};
use crate::core::history::History;
use crate::core::DivisionPolicy;

/// Errors from loading or validating a [`SessionConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The YAML did not parse
    #[error("invalid config YAML: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A value parsed but is not allowed
    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Evaluation and history settings for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Maximum number of history entries kept
    pub history_capacity: usize,
    /// Handling of unrecognized characters
    pub input_policy: InputPolicy,
    /// Handling of zero divisors
    pub division_policy: DivisionPolicy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_capacity: History::DEFAULT_CAPACITY,
            input_policy: InputPolicy::default(),
            division_policy: DivisionPolicy::default(),
        }
    }
}

impl SessionConfig {
    /// Parses and validates a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document means "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_yaml_str(&text)?;
        info!(path = %path.display(), ?config, "loaded session config");
        Ok(config)
    }

    /// Checks value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "history_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Sets the history capacity
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets the input policy
    #[must_use]
    pub const fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    /// Sets the division policy
    #[must_use]
    pub const fn with_division_policy(mut self, policy: DivisionPolicy) -> Self {
        self.division_policy = policy;
        self
    }

    /// Builds the evaluator these settings describe
    #[must_use]
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new()
            .with_input_policy(self.input_policy)
            .with_division_policy(self.division_policy)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    // ===== Default tests =====

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.history_capacity, 100);
        assert_eq!(config.input_policy, InputPolicy::Strict);
        assert_eq!(config.division_policy, DivisionPolicy::Ieee);
    }

    #[test]
    fn test_evaluator_from_config() {
        let evaluator = SessionConfig::default()
            .with_division_policy(DivisionPolicy::Reject)
            .evaluator();
        assert_eq!(evaluator.division_policy(), DivisionPolicy::Reject);
        assert_eq!(evaluator.input_policy(), InputPolicy::Strict);
    }

    // ===== YAML tests =====

    #[test]
    fn test_from_yaml_full() {
        let yaml = "history_capacity: 5\ninput_policy: lenient\ndivision_policy: reject\n";
        let config = SessionConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.input_policy, InputPolicy::Lenient);
        assert_eq!(config.division_policy, DivisionPolicy::Reject);
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = SessionConfig::from_yaml_str("input_policy: lenient").unwrap();
        assert_eq!(config.history_capacity, 100);
        assert_eq!(config.input_policy, InputPolicy::Lenient);
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(
            SessionConfig::from_yaml_str("").unwrap(),
            SessionConfig::default()
        );
    }

    #[test]
    fn test_from_yaml_zero_capacity_rejected() {
        let err = SessionConfig::from_yaml_str("history_capacity: 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_yaml_unknown_policy_rejected() {
        let err = SessionConfig::from_yaml_str("division_policy: panic").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_yaml_unknown_field_rejected() {
        assert!(SessionConfig::from_yaml_str("colour: red").is_err());
    }

    // ===== File tests =====

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history_capacity: 7").unwrap();

        let config = SessionConfig::load(file.path()).unwrap();
        assert_eq!(config.history_capacity, 7);
    }

    #[test]
    fn test_load_missing_file() {
        let err = SessionConfig::load("/nonexistent/noodle.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/noodle.yaml"));
    }
}
