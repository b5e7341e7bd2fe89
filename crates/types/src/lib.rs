//! Core types for genesis contract predeploys.
//!
//! This crate provides the inputs (validators, bootstrap parameters) and the
//! output record (genesis account with code, storage and balance) shared by
//! the predeploy builders.

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod account;
pub mod params;
pub mod validator;

pub use account::{GenesisAccount, StorageMap};
pub use params::{ConfigError, PredeployParams, MAX_SAFE_JS_INT};
pub use validator::{
    BlsKeyed, BlsValidator, EcdsaValidator, GenesisValidator, Validator, ValidatorSet,
};

// Re-export commonly used external types
pub use alloy_primitives::{Address, Bytes, B256, U256};
