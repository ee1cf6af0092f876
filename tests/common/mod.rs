use alloy_primitives::{Address, B256, U256};
use stake_reth::{
    staking::slots::{left_pad_32, mapping_slot},
    StorageMap, Validator, ValidatorSet,
};

/// Stake credited to each genesis validator (8 ether).
#[allow(dead_code)]
pub(crate) const DEFAULT_STAKE_WEI: u128 = 8_000_000_000_000_000_000;

/// Returns `count` address-only validators `0x..01`, `0x..02`, ...
#[allow(dead_code)]
pub(crate) fn plain_validators(count: u8) -> ValidatorSet {
    (1..=count).map(|n| Validator::ecdsa(Address::with_last_byte(n))).collect()
}

/// Returns `count` BLS validators with a deterministic 48-byte key each.
#[allow(dead_code)]
pub(crate) fn bls_validators(count: u8) -> ValidatorSet {
    (1..=count)
        .map(|n| Validator::bls(Address::with_last_byte(0x10 + n), vec![n; 48]))
        .collect()
}

/// Reads a storage word as an integer; missing keys read as zero.
#[allow(dead_code)]
pub(crate) fn read_uint(storage: &StorageMap, key: B256) -> U256 {
    storage.get(&key).map(|value| U256::from_be_bytes(value.0)).unwrap_or_default()
}

/// Reads the `mapping(address => ..)` entry declared at `slot`.
#[allow(dead_code)]
pub(crate) fn read_mapping(storage: &StorageMap, address: Address, slot: u64) -> U256 {
    read_uint(storage, mapping_slot(address.as_slice(), slot))
}

/// Storage key of a fixed slot.
#[allow(dead_code)]
pub(crate) fn slot_key(slot: u64) -> B256 {
    left_pad_32(&slot.to_be_bytes())
}
