//! Validator types consumed by genesis predeploys.
//!
//! A validator is anything with an address. Validators that also carry a BLS
//! public key expose it through [`Validator::as_bls`], so callers probe for the
//! capability instead of matching on a concrete type.

use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

/// A validator registered at genesis.
pub trait Validator {
    /// Validator's Ethereum-style address.
    fn address(&self) -> Address;

    /// BLS key capability, if this validator has one.
    fn as_bls(&self) -> Option<&dyn BlsKeyed> {
        None
    }
}

/// Capability of validators that carry BLS public key material.
pub trait BlsKeyed {
    /// Raw BLS public key bytes.
    fn bls_public_key(&self) -> &[u8];
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn address(&self) -> Address {
        (**self).address()
    }

    fn as_bls(&self) -> Option<&dyn BlsKeyed> {
        (**self).as_bls()
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn address(&self) -> Address {
        (**self).address()
    }

    fn as_bls(&self) -> Option<&dyn BlsKeyed> {
        (**self).as_bls()
    }
}

/// Ordered collection of validators. Position is the validator index.
pub trait ValidatorSet {
    /// Number of validators in the set.
    fn len(&self) -> usize;

    /// Validator at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn at(&self, index: usize) -> &dyn Validator;

    /// Returns true if the set has no validators.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Validator> ValidatorSet for [V] {
    fn len(&self) -> usize {
        <[V]>::len(self)
    }

    fn at(&self, index: usize) -> &dyn Validator {
        &self[index]
    }
}

impl<V: Validator> ValidatorSet for Vec<V> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> &dyn Validator {
        &self[index]
    }
}

/// Validator identified by its ECDSA address only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EcdsaValidator {
    /// Validator address.
    pub address: Address,
}

impl EcdsaValidator {
    /// Create a new ECDSA validator.
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

impl Validator for EcdsaValidator {
    fn address(&self) -> Address {
        self.address
    }
}

/// Validator with an address and a BLS public key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlsValidator {
    /// Validator address.
    pub address: Address,
    /// BLS12-381 public key (48 bytes compressed in practice, not enforced).
    pub bls_public_key: Bytes,
}

impl BlsValidator {
    /// Create a new BLS validator.
    pub fn new(address: Address, bls_public_key: impl Into<Bytes>) -> Self {
        Self {
            address,
            bls_public_key: bls_public_key.into(),
        }
    }
}

impl Validator for BlsValidator {
    fn address(&self) -> Address {
        self.address
    }

    fn as_bls(&self) -> Option<&dyn BlsKeyed> {
        Some(self)
    }
}

impl BlsKeyed for BlsValidator {
    fn bls_public_key(&self) -> &[u8] {
        &self.bls_public_key
    }
}

/// Either kind of validator, as read from a genesis document.
///
/// Objects carrying a `blsPublicKey` field deserialize as [`BlsValidator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenesisValidator {
    /// Validator with a BLS public key.
    Bls(BlsValidator),
    /// Address-only validator.
    Ecdsa(EcdsaValidator),
}

impl Validator for GenesisValidator {
    fn address(&self) -> Address {
        match self {
            Self::Bls(v) => v.address,
            Self::Ecdsa(v) => v.address,
        }
    }

    fn as_bls(&self) -> Option<&dyn BlsKeyed> {
        match self {
            Self::Bls(v) => Some(v),
            Self::Ecdsa(_) => None,
        }
    }
}

impl From<EcdsaValidator> for GenesisValidator {
    fn from(v: EcdsaValidator) -> Self {
        Self::Ecdsa(v)
    }
}

impl From<BlsValidator> for GenesisValidator {
    fn from(v: BlsValidator) -> Self {
        Self::Bls(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_ecdsa_validator_has_no_bls_key() {
        let v = EcdsaValidator::new(address!("1111111111111111111111111111111111111111"));
        assert!(v.as_bls().is_none());
    }

    #[test]
    fn test_bls_validator_exposes_key() {
        let v = BlsValidator::new(
            address!("2222222222222222222222222222222222222222"),
            vec![0xb0; 48],
        );
        let key = v.as_bls().map(|b| b.bls_public_key().to_vec());
        assert_eq!(key, Some(vec![0xb0; 48]));
    }

    #[test]
    fn test_boxed_set_preserves_capability() {
        let set: Vec<Box<dyn Validator>> = vec![
            Box::new(EcdsaValidator::new(Address::repeat_byte(0x01))),
            Box::new(BlsValidator::new(Address::repeat_byte(0x02), vec![0x01])),
        ];

        assert_eq!(ValidatorSet::len(&set), 2);
        assert_eq!(set.at(0).address(), Address::repeat_byte(0x01));
        assert!(set.at(0).as_bls().is_none());
        assert!(set.at(1).as_bls().is_some());
    }

    #[test]
    fn test_slice_set() {
        let validators = [
            EcdsaValidator::new(Address::repeat_byte(0x0a)),
            EcdsaValidator::new(Address::repeat_byte(0x0b)),
        ];
        let set: &[EcdsaValidator] = &validators;
        assert!(!ValidatorSet::is_empty(set));
        assert_eq!(set.at(1).address(), Address::repeat_byte(0x0b));
    }

    #[test]
    fn test_genesis_validator_deserialization() {
        let json = r#"[
            { "address": "0x1111111111111111111111111111111111111111" },
            {
                "address": "0x2222222222222222222222222222222222222222",
                "blsPublicKey": "0xb0b1"
            }
        ]"#;
        let validators: Vec<GenesisValidator> = serde_json::from_str(json).unwrap();

        assert!(matches!(validators[0], GenesisValidator::Ecdsa(_)));
        assert!(validators[0].as_bls().is_none());
        assert_eq!(
            validators[1].as_bls().map(|b| b.bls_public_key().to_vec()),
            Some(vec![0xb0, 0xb1])
        );
    }
}
