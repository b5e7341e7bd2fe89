//! Bootstrap parameters for the staking contract predeploy.
//!
//! Parameters are read from JSON so they can live next to (or inside) the
//! document a network launcher already maintains.
//!
//! # Example
//!
//! ```json
//! {
//!   "minValidatorCount": 4,
//!   "maxValidatorCount": 100
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest integer a JSON number can carry without losing precision (2^53 - 1).
pub const MAX_SAFE_JS_INT: u64 = 9_007_199_254_740_991;

/// Default minimum number of validators.
pub const DEFAULT_MIN_VALIDATOR_COUNT: u64 = 1;

/// Default maximum number of validators.
pub const DEFAULT_MAX_VALIDATOR_COUNT: u64 = MAX_SAFE_JS_INT;

/// Values used to predeploy the PoS staking contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredeployParams {
    /// Minimum validator count enforced by the contract.
    #[serde(default = "default_min_validator_count")]
    pub min_validator_count: u64,

    /// Maximum validator count enforced by the contract.
    #[serde(default = "default_max_validator_count")]
    pub max_validator_count: u64,
}

fn default_min_validator_count() -> u64 {
    DEFAULT_MIN_VALIDATOR_COUNT
}

fn default_max_validator_count() -> u64 {
    DEFAULT_MAX_VALIDATOR_COUNT
}

impl Default for PredeployParams {
    fn default() -> Self {
        Self {
            min_validator_count: DEFAULT_MIN_VALIDATOR_COUNT,
            max_validator_count: DEFAULT_MAX_VALIDATOR_COUNT,
        }
    }
}

impl PredeployParams {
    /// Create parameters with explicit bounds.
    pub fn new(min_validator_count: u64, max_validator_count: u64) -> Self {
        Self {
            min_validator_count,
            max_validator_count,
        }
    }

    /// Load and validate parameters from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse and validate parameters from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check that the bounds are consistent with each other.
    ///
    /// The bounds are not compared against any validator set here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_validator_count < 1 {
            return Err(ConfigError::Validation(
                "minValidatorCount must be at least 1".into(),
            ));
        }

        if self.max_validator_count > MAX_SAFE_JS_INT {
            return Err(ConfigError::Validation(format!(
                "maxValidatorCount {} exceeds {}",
                self.max_validator_count, MAX_SAFE_JS_INT
            )));
        }

        if self.min_validator_count > self.max_validator_count {
            return Err(ConfigError::Validation(format!(
                "minValidatorCount {} is greater than maxValidatorCount {}",
                self.min_validator_count, self.max_validator_count
            )));
        }

        Ok(())
    }

    /// Returns true if `count` validators satisfy the configured bounds.
    pub fn admits(&self, count: u64) -> bool {
        (self.min_validator_count..=self.max_validator_count).contains(&count)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading the file.
    #[error("I/O error: {0}")]
    Io(String),
    /// JSON parsing error.
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_params() {
        let params = PredeployParams::default();
        assert_eq!(params.min_validator_count, 1);
        assert_eq!(params.max_validator_count, 9_007_199_254_740_991);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let params = PredeployParams::from_json("{}").unwrap();
        assert_eq!(params, PredeployParams::default());

        let params = PredeployParams::from_json(r#"{ "minValidatorCount": 4 }"#).unwrap();
        assert_eq!(params.min_validator_count, 4);
        assert_eq!(params.max_validator_count, MAX_SAFE_JS_INT);
    }

    #[test]
    fn test_validation_min_zero() {
        let err = PredeployParams::new(0, 10).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validation_min_above_max() {
        let err = PredeployParams::from_json(
            r#"{ "minValidatorCount": 11, "maxValidatorCount": 10 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_validation_max_above_safe_int() {
        let err = PredeployParams::new(1, MAX_SAFE_JS_INT + 1)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_parse_error() {
        let err = PredeployParams::from_json(r#"{ "minValidatorCount": "four" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_admits() {
        let params = PredeployParams::new(1, 10);
        assert!(!params.admits(0));
        assert!(params.admits(1));
        assert!(params.admits(10));
        assert!(!params.admits(11));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "minValidatorCount": 1, "maxValidatorCount": 100 }}"#
        )
        .unwrap();

        let params = PredeployParams::load(file.path()).unwrap();
        assert_eq!(params, PredeployParams::new(1, 100));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = PredeployParams::load(&dir.path().join("params.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let params = PredeployParams::new(4, 50);
        let json = params.to_json().unwrap();
        assert!(json.contains("\"minValidatorCount\": 4"));
        assert_eq!(PredeployParams::from_json(&json).unwrap(), params);
    }
}
