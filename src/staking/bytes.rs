//! Solidity `bytes` storage encoding.
//!
//! Up to 31 bytes are stored inline in the base slot with `2 * len` in the
//! last byte. Longer values store `2 * len + 1` in the base slot and the data
//! itself in consecutive slots starting at `keccak256(base_slot)`.

use alloy_primitives::{keccak256, B256, U256};

use super::{
    slots::{index_with_offset, left_pad_32},
    StorageMap,
};

/// Number of data bytes stored per slot.
const BYTES_PER_SLOT: usize = 32;

/// Writes `data` into `storage` as the `bytes` value rooted at `base_key`.
///
/// Empty data still writes the (all-zero) base slot.
pub fn set_bytes(storage: &mut StorageMap, base_key: B256, data: &[u8]) {
    if data.len() < BYTES_PER_SLOT {
        let mut word = B256::ZERO;
        word[..data.len()].copy_from_slice(data);
        word[BYTES_PER_SLOT - 1] = (data.len() * 2) as u8;
        storage.insert(base_key, word);
        return;
    }

    let length_flag = U256::from(data.len()) * U256::from(2) + U256::from(1);
    storage.insert(base_key, B256::from(length_flag.to_be_bytes::<32>()));

    let data_start = keccak256(base_key);
    for (offset, chunk) in data.chunks(BYTES_PER_SLOT).enumerate() {
        let key = left_pad_32(&index_with_offset(data_start, offset as u64));
        let mut word = B256::ZERO;
        word[..chunk.len()].copy_from_slice(chunk);
        storage.insert(key, word);
    }
}
