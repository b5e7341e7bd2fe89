//! Storage layout of the staking contract.
//!
//! Slot numbers follow the declaration order of the contract's state
//! variables and must not change while deployed networks use the bytecode.

/// Declared storage slots of the staking contract.
pub mod staking_slots {
    use alloy_primitives::U256;

    /// slot 0: validators (address[]); holds the array length
    pub const VALIDATORS: U256 = U256::from_limbs([0, 0, 0, 0]);
    /// slot 1: addressToIsValidator (mapping(address => bool))
    pub const ADDRESS_TO_IS_VALIDATOR: U256 = U256::from_limbs([1, 0, 0, 0]);
    /// slot 2: addressToStakedAmount (mapping(address => uint256))
    pub const ADDRESS_TO_STAKED_AMOUNT: U256 = U256::from_limbs([2, 0, 0, 0]);
    /// slot 3: addressToValidatorIndex (mapping(address => uint256))
    pub const ADDRESS_TO_VALIDATOR_INDEX: U256 = U256::from_limbs([3, 0, 0, 0]);
    /// slot 4: stakedAmount (uint256)
    pub const STAKED_AMOUNT: U256 = U256::from_limbs([4, 0, 0, 0]);
    /// slot 5: minNumValidators (uint256)
    pub const MIN_NUM_VALIDATORS: U256 = U256::from_limbs([5, 0, 0, 0]);
    /// slot 6: maxNumValidators (uint256)
    pub const MAX_NUM_VALIDATORS: U256 = U256::from_limbs([6, 0, 0, 0]);
    /// slot 7: addressToBLSPublicKey (mapping(address => bytes))
    pub const ADDRESS_TO_BLS_PUBLIC_KEY: U256 = U256::from_limbs([7, 0, 0, 0]);
}

#[cfg(test)]
mod tests {
    use super::staking_slots::*;
    use alloy_primitives::U256;

    #[test]
    fn test_slots_are_distinct_and_sequential() {
        let slots = [
            VALIDATORS,
            ADDRESS_TO_IS_VALIDATOR,
            ADDRESS_TO_STAKED_AMOUNT,
            ADDRESS_TO_VALIDATOR_INDEX,
            STAKED_AMOUNT,
            MIN_NUM_VALIDATORS,
            MAX_NUM_VALIDATORS,
            ADDRESS_TO_BLS_PUBLIC_KEY,
        ];
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(*slot, U256::from(i));
        }
    }
}
