//! Genesis account record produced for a pre-deployed contract.
//!
//! The record is shaped like an entry of the Geth genesis `alloc` section so it
//! can be dropped straight into a genesis document by whichever tool writes it.
//!
//! # Example
//!
//! ```json
//! {
//!   "balance": "0x0",
//!   "code": "0x6080...",
//!   "storage": {
//!     "0x0000000000000000000000000000000000000000000000000000000000000000": "0x0000000000000000000000000000000000000000000000000000000000000001"
//!   }
//! }
//! ```

use alloy_primitives::{Bytes, B256, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Contract storage: 32-byte slot keys to 32-byte words.
///
/// Ordered so that serializing the same storage twice yields identical output.
/// A slot that is absent reads as zero.
pub type StorageMap = BTreeMap<B256, B256>;

// Custom serde module for U256 as hex quantity (Geth-compatible format)
mod u256_quantity {
    use alloy_primitives::U256;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Serialize as "0x..." hex string without leading zeros
        let hex = format!("{:#x}", value);
        serializer.serialize_str(&hex)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        // "0x"-prefixed hex quantity, otherwise a decimal string
        let s = String::deserialize(deserializer)?;
        let parsed = match s.strip_prefix("0x") {
            Some(hex) => U256::from_str_radix(hex, 16),
            None => U256::from_str_radix(&s, 10),
        };
        parsed.map_err(serde::de::Error::custom)
    }
}

/// Bootstrap state assigned to an address before any transaction executes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenesisAccount {
    /// Account balance in wei.
    #[serde(with = "u256_quantity")]
    pub balance: U256,

    /// Runtime bytecode, copied verbatim.
    #[serde(default)]
    pub code: Bytes,

    /// Initial contract storage.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub storage: StorageMap,
}

impl GenesisAccount {
    /// Create a contract account with the given code and no storage.
    pub fn contract(code: Bytes) -> Self {
        Self {
            balance: U256::ZERO,
            code,
            storage: StorageMap::new(),
        }
    }

    /// Replace the storage of this account.
    pub fn with_storage(mut self, storage: StorageMap) -> Self {
        self.storage = storage;
        self
    }

    /// Set the balance of this account.
    pub fn with_balance(mut self, balance: U256) -> Self {
        self.balance = balance;
        self
    }

    /// Read a storage slot, treating an absent slot as zero.
    pub fn storage_word(&self, slot: &B256) -> B256 {
        self.storage.get(slot).copied().unwrap_or_default()
    }

    /// Check if this is a contract account (has code).
    pub fn is_contract(&self) -> bool {
        !self.code.is_empty()
    }
}
