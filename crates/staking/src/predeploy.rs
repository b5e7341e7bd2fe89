//! Genesis state of the PoS staking contract.
//!
//! Builds the account a compiled staking contract would have if every genesis
//! validator had called `stake()` through a regular transaction, without
//! running an EVM.
//!
//! # Staking Contract Storage Layout
//!
//! ```text
//! Slot 0: validators.length
//! Slot 1: addressToIsValidator      mapping(address => bool)
//! Slot 2: addressToStakedAmount     mapping(address => uint256)
//! Slot 3: addressToValidatorIndex   mapping(address => uint256)
//! Slot 4: stakedAmount              (uint256)
//! Slot 5: minNumValidators          (uint256)
//! Slot 6: maxNumValidators          (uint256)
//! Slot 7: addressToBLSPublicKey     mapping(address => bytes)
//! keccak256(0) + i: validators[i]
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use predeploy_staking::{StakingPredeploy, STAKING_CONTRACT_ADDRESS};
//! use predeploy_types::{EcdsaValidator, PredeployParams};
//!
//! let validators = vec![EcdsaValidator::new(address)];
//! let params = PredeployParams::new(1, 10);
//!
//! let account = StakingPredeploy::default().build(Some(&validators), &params)?;
//! alloc.insert(STAKING_CONTRACT_ADDRESS, account);
//! ```

use crate::bytes::write_bytes;
use crate::error::{PredeployError, Result};
use crate::slots::staking_slots;
use crate::storage::{address_word, bool_word, slot_key, u256_word, StorageIndexes};
use alloy_primitives::{address, Address, Bytes, U256};
use predeploy_types::{GenesisAccount, PredeployParams, StorageMap, ValidatorSet};

/// Runtime bytecode of the staking contract.
pub static STAKING_BYTECODE: &[u8] = include_bytes!("../bytecodes/staking.bin");

/// Address the staking contract is deployed at.
pub const STAKING_CONTRACT_ADDRESS: Address = address!("0000000000000000000000000000000000001001");

/// Amount staked by each genesis validator, in wei.
pub const DEFAULT_STAKED_BALANCE: &str = "0x0";

/// Builder for the staking contract's genesis account.
#[derive(Debug, Clone)]
pub struct StakingPredeploy {
    code: Bytes,
    default_staked_balance: String,
}

impl Default for StakingPredeploy {
    fn default() -> Self {
        Self {
            code: Bytes::from_static(STAKING_BYTECODE),
            default_staked_balance: DEFAULT_STAKED_BALANCE.to_string(),
        }
    }
}

impl StakingPredeploy {
    /// Create a builder with the embedded bytecode and default stake.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different per-validator stake literal (decimal, or hex with `0x`).
    ///
    /// The literal is parsed by [`Self::build`].
    pub fn with_default_staked_balance(mut self, value: impl Into<String>) -> Self {
        self.default_staked_balance = value.into();
        self
    }

    /// Use different contract bytecode with the same storage layout.
    pub fn with_code(mut self, code: Bytes) -> Self {
        self.code = code;
        self
    }

    /// Build the genesis account with `validators` pre-staked.
    ///
    /// An absent or empty validator set yields an account with zero validators.
    ///
    /// # Errors
    ///
    /// Returns [`PredeployError::InvalidStakedBalance`] if the stake literal
    /// does not parse. No storage is produced in that case.
    pub fn build<V>(
        &self,
        validators: Option<&V>,
        params: &PredeployParams,
    ) -> Result<GenesisAccount>
    where
        V: ValidatorSet + ?Sized,
    {
        let default_staked_balance = parse_staked_balance(&self.default_staked_balance)?;

        let mut storage = StorageMap::new();
        let mut staked_amount = U256::ZERO;
        let validator_count = validators.map_or(0, |set| set.len());

        if warn_on_bounds(validator_count, params) {
            tracing::warn!(
                validator_count,
                min = params.min_validator_count,
                max = params.max_validator_count,
                "Genesis validator count outside configured bounds"
            );
        } else if validator_count == 0 {
            tracing::debug!(
                min = params.min_validator_count,
                "No genesis validators, staking contract starts empty"
            );
        }

        if let Some(set) = validators {
            for index in 0..set.len() {
                let validator = set.at(index);
                let address = validator.address();
                let indexes = StorageIndexes::new(address, index as u64);

                staked_amount += default_staked_balance;

                storage.insert(indexes.validators_index, address_word(address));

                let bls = validator.as_bls();
                if let Some(bls) = bls {
                    write_bytes(
                        &mut storage,
                        indexes.validator_bls_public_key_index,
                        bls.bls_public_key(),
                    );
                }

                storage.insert(indexes.address_to_is_validator_index, bool_word(true));
                storage.insert(
                    indexes.address_to_staked_amount_index,
                    u256_word(default_staked_balance),
                );
                storage.insert(
                    indexes.address_to_validator_index_index,
                    u256_word(U256::from(index)),
                );

                tracing::debug!(
                    index,
                    address = %address,
                    bls_key = bls.is_some(),
                    "Pre-staked genesis validator"
                );
            }
        }

        storage.insert(
            slot_key(staking_slots::STAKED_AMOUNT),
            u256_word(staked_amount),
        );
        storage.insert(
            slot_key(staking_slots::VALIDATORS),
            u256_word(U256::from(validator_count)),
        );
        storage.insert(
            slot_key(staking_slots::MIN_NUM_VALIDATORS),
            u256_word(U256::from(params.min_validator_count)),
        );
        storage.insert(
            slot_key(staking_slots::MAX_NUM_VALIDATORS),
            u256_word(U256::from(params.max_validator_count)),
        );

        tracing::info!(
            validator_count,
            total_staked = %staked_amount,
            slots = storage.len(),
            "Staking contract genesis state built"
        );

        Ok(GenesisAccount::contract(self.code.clone())
            .with_storage(storage)
            .with_balance(staked_amount))
    }

    /// Build the account and pair it with [`STAKING_CONTRACT_ADDRESS`].
    pub fn alloc_entry<V>(
        &self,
        validators: Option<&V>,
        params: &PredeployParams,
    ) -> Result<(Address, GenesisAccount)>
    where
        V: ValidatorSet + ?Sized,
    {
        Ok((STAKING_CONTRACT_ADDRESS, self.build(validators, params)?))
    }
}

/// Build the staking contract's genesis account with the default bytecode and stake.
pub fn predeploy_staking_contract<V>(
    validators: Option<&V>,
    params: &PredeployParams,
) -> Result<GenesisAccount>
where
    V: ValidatorSet + ?Sized,
{
    StakingPredeploy::default().build(validators, params)
}

/// Parse a decimal or `0x`-prefixed hex amount.
///
/// The digits must be non-empty and contain nothing but digits of the radix.
fn parse_staked_balance(value: &str) -> Result<U256> {
    let (digits, radix) = match value.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };

    if digits.is_empty() {
        return Err(PredeployError::invalid_staked_balance(value, "no digits"));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_digit(radix)) {
        return Err(PredeployError::invalid_staked_balance(
            value,
            format!("invalid digit {c:?}"),
        ));
    }

    U256::from_str_radix(digits, radix as u64)
        .map_err(|e| PredeployError::invalid_staked_balance(value, e))
}

/// Returns true if a validator count outside the bounds deserves a warning.
///
/// An empty set is a valid genesis and is only logged at debug level.
fn warn_on_bounds(validator_count: usize, params: &PredeployParams) -> bool {
    validator_count > 0 && !params.admits(validator_count as u64)
}
