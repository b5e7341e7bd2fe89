//! Genesis predeploy of the PoS staking contract.
//!
//! This crate computes the storage a compiled staking contract would hold if
//! the genesis validators had registered through regular transactions, so the
//! contract can be baked into the genesis `alloc` without executing it.
//!
//! # Architecture
//!
//! - [`storage`]: mapping and dynamic array key derivation (Solidity layout)
//! - [`bytes`]: short/long encoding of `bytes` values across slots
//! - [`slots`]: declared slot numbers of the staking contract
//! - [`predeploy`]: walks the validator set and assembles the account
//!
//! Every node must derive a byte-identical account from the same inputs, so
//! nothing here depends on iteration order other than the validator order.
//!
//! # Example
//!
//! ```rust,ignore
//! use predeploy_staking::predeploy_staking_contract;
//! use predeploy_types::{BlsValidator, PredeployParams};
//!
//! let validators = vec![BlsValidator::new(address, bls_public_key)];
//! let account = predeploy_staking_contract(Some(&validators), &PredeployParams::new(1, 10))?;
//!
//! println!("Staked: {}", account.balance);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bytes;
pub mod error;
pub mod predeploy;
pub mod slots;
pub mod storage;

pub use bytes::{encode_bytes, write_bytes};
pub use error::{PredeployError, Result};
pub use predeploy::{
    predeploy_staking_contract, StakingPredeploy, DEFAULT_STAKED_BALANCE, STAKING_BYTECODE,
    STAKING_CONTRACT_ADDRESS,
};
pub use slots::staking_slots;
pub use storage::{array_base_key, mapping_key, with_offset, StorageIndexes};
