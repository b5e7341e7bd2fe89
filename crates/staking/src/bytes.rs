//! Storage encoding of `bytes` and `string` values.
//!
//! Short values (at most 31 bytes) share one slot with their length:
//!
//! ```text
//! base:        data[0..len] | zero padding | 2 * len   (last byte)
//! ```
//!
//! Long values put an odd length marker in the base slot and the data in
//! consecutive slots starting at `keccak256(base)`:
//!
//! ```text
//! base:                2 * len + 1
//! keccak256(base) + k: data[32k..32k + 32], zero padded on the right
//! ```

use crate::storage::{u256_word, with_offset};
use alloy_primitives::{keccak256, B256, U256};
use predeploy_types::StorageMap;

/// Longest value stored inline in its base slot.
pub const MAX_INLINE_LEN: usize = 31;

const WORD: usize = 32;

/// Encode `data` as the value of the `bytes` variable whose slot is `base`.
///
/// Pairs are returned in slot order: the base slot, then every data slot.
pub fn encode_bytes(base: B256, data: &[u8]) -> Vec<(B256, B256)> {
    let len = data.len();

    if len <= MAX_INLINE_LEN {
        let mut word = B256::ZERO;
        word[..len].copy_from_slice(data);
        word[WORD - 1] = (len * 2) as u8;
        return vec![(base, word)];
    }

    let mut pairs = Vec::with_capacity(1 + len.div_ceil(WORD));
    pairs.push((base, u256_word(U256::from(len) * U256::from(2) + U256::from(1))));

    let data_start = keccak256(base);
    for (chunk_index, chunk) in data.chunks(WORD).enumerate() {
        pairs.push((
            with_offset(data_start, chunk_index as u64),
            B256::right_padding_from(chunk),
        ));
    }

    pairs
}

/// Write the encoding of `data` at `base` into `storage`.
pub fn write_bytes(storage: &mut StorageMap, base: B256, data: &[u8]) {
    storage.extend(encode_bytes(base, data));
}
