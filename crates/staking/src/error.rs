//! Error types for the staking predeploy.

/// Result type alias for predeploy operations.
pub type Result<T> = std::result::Result<T, PredeployError>;

/// Main error type for building the staking predeploy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredeployError {
    /// The per-validator staked balance literal is not a valid 256-bit integer.
    #[error("unable to parse default staked balance {value:?}: {reason}")]
    InvalidStakedBalance {
        /// The literal that failed to parse.
        value: String,
        /// Parser message.
        reason: String,
    },
}

impl PredeployError {
    /// Create an invalid staked balance error.
    pub fn invalid_staked_balance(value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidStakedBalance {
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
