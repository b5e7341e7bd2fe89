//! Storage key derivation for Solidity state variables.
//!
//! ```text
//! mapping(K => V) at slot p:   value of key k lives at keccak256(pad32(k) . pad32(p))
//! T[] at slot p:               length lives at p
//!                              element i lives at keccak256(pad32(p)) + i
//! ```
//!
//! `.` is byte concatenation and `pad32` left-pads to 32 bytes.
//! See <https://docs.soliditylang.org/en/latest/internals/layout_in_storage.html>.

use crate::slots::staking_slots;
use alloy_primitives::{keccak256, Address, B256, U256};

/// Storage key of `mapping[address]` for a mapping declared at `slot`.
pub fn mapping_key(address: Address, slot: U256) -> B256 {
    let mut preimage = [0u8; 64];
    preimage[12..32].copy_from_slice(address.as_slice());
    preimage[32..].copy_from_slice(&slot.to_be_bytes::<32>());
    keccak256(preimage)
}

/// Storage key of element 0 of a dynamic array declared at `slot`.
pub fn array_base_key(slot: U256) -> B256 {
    keccak256(slot.to_be_bytes::<32>())
}

/// Add `offset` to a hash-derived key, treating both as big-endian integers.
///
/// A sum wider than 256 bits keeps its low 256 bits. Offsets are array indices
/// and chunk counts, so this does not happen for real inputs.
pub fn with_offset(base: B256, offset: u64) -> B256 {
    let sum = U256::from_be_bytes(base.0).wrapping_add(U256::from(offset));
    B256::from(sum.to_be_bytes::<32>())
}

/// Storage word of a literal slot number.
pub fn slot_key(slot: U256) -> B256 {
    u256_word(slot)
}

/// Storage word holding an integer.
pub fn u256_word(value: U256) -> B256 {
    B256::from(value.to_be_bytes::<32>())
}

/// Storage word holding an address (left-padded to 32 bytes).
pub fn address_word(address: Address) -> B256 {
    address.into_word()
}

/// Storage word holding a boolean.
pub fn bool_word(value: bool) -> B256 {
    u256_word(U256::from(value as u8))
}

/// Keys the predeploy writes for one validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageIndexes {
    /// `validators[index]`
    pub validators_index: B256,
    /// `addressToBLSPublicKey[address]`, base slot of the encoded bytes
    pub validator_bls_public_key_index: B256,
    /// `addressToIsValidator[address]`
    pub address_to_is_validator_index: B256,
    /// `addressToStakedAmount[address]`
    pub address_to_staked_amount_index: B256,
    /// `addressToValidatorIndex[address]`
    pub address_to_validator_index_index: B256,
}

impl StorageIndexes {
    /// Compute every key for the validator at `address` and position `index`.
    pub fn new(address: Address, index: u64) -> Self {
        Self {
            validators_index: with_offset(
                array_base_key(staking_slots::VALIDATORS),
                index,
            ),
            validator_bls_public_key_index: mapping_key(
                address,
                staking_slots::ADDRESS_TO_BLS_PUBLIC_KEY,
            ),
            address_to_is_validator_index: mapping_key(
                address,
                staking_slots::ADDRESS_TO_IS_VALIDATOR,
            ),
            address_to_staked_amount_index: mapping_key(
                address,
                staking_slots::ADDRESS_TO_STAKED_AMOUNT,
            ),
            address_to_validator_index_index: mapping_key(
                address,
                staking_slots::ADDRESS_TO_VALIDATOR_INDEX,
            ),
        }
    }
}
