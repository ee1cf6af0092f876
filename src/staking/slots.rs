//! Storage slot addressing for the staking contract.
//!
//! Keys follow the Solidity storage layout rules: a `mapping` entry lives at
//! `keccak256(pad32(key) . pad32(slot))`, a dynamic array element at
//! `keccak256(pad32(slot)) + index`. The slot numbers below are tied to the
//! compiled staking contract; a change to its source means re-deriving them
//! by hand.
//!
//! See <https://docs.soliditylang.org/en/latest/internals/layout_in_storage.html>.

use alloy_primitives::{keccak256, Address, B256, U256, U512};

/// `address[] validators`
pub const VALIDATORS_SLOT: u64 = 0;
/// `mapping(address => bool) addressToIsValidator`
pub const ADDRESS_TO_IS_VALIDATOR_SLOT: u64 = 1;
/// `mapping(address => uint256) addressToStakedAmount`
pub const ADDRESS_TO_STAKED_AMOUNT_SLOT: u64 = 2;
/// `mapping(address => uint256) addressToValidatorIndex`
pub const ADDRESS_TO_VALIDATOR_INDEX_SLOT: u64 = 3;
/// `uint256 stakedAmount`
pub const STAKED_AMOUNT_SLOT: u64 = 4;
/// `uint256 minNumValidators`
pub const MIN_NUM_VALIDATORS_SLOT: u64 = 5;
/// `uint256 maxNumValidators`
pub const MAX_NUM_VALIDATORS_SLOT: u64 = 6;
/// `mapping(address => bytes) addressToBLSPublicKey`
pub const ADDRESS_TO_BLS_PUBLIC_KEY_SLOT: u64 = 7;

/// Left-pads `bytes` to a 32-byte word, keeping only the trailing 32 bytes of longer input.
pub fn left_pad_32(bytes: &[u8]) -> B256 {
    let mut word = B256::ZERO;
    if bytes.len() >= 32 {
        word.copy_from_slice(&bytes[bytes.len() - 32..]);
    } else {
        word[32 - bytes.len()..].copy_from_slice(bytes);
    }
    word
}

/// Returns the 32-byte word holding `slot` as a big-endian integer.
pub fn slot_word(slot: u64) -> B256 {
    B256::from(U256::from(slot).to_be_bytes::<32>())
}

/// Storage key of a `mapping` entry: `keccak256(pad32(key) . pad32(base_slot))`.
pub fn mapping_slot(key: &[u8], base_slot: u64) -> B256 {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(left_pad_32(key).as_slice());
    preimage[32..].copy_from_slice(slot_word(base_slot).as_slice());
    keccak256(preimage)
}

/// Adds `offset` to `hash` read as a big-endian integer.
///
/// The result is the minimal big-endian encoding of the sum: it is shorter than
/// 32 bytes when the sum has leading zero bytes and is never re-padded here.
/// Callers turn it into a storage key with [`left_pad_32`].
pub fn index_with_offset(hash: B256, offset: u64) -> Vec<u8> {
    let sum = U512::from_be_slice(hash.as_slice()) + U512::from(offset);
    sum.to_be_bytes_trimmed_vec()
}

/// Offset of element `index` of the dynamic array declared at `base_slot`.
///
/// Same contract as [`index_with_offset`]: the result is variable-length.
pub fn array_element_offset(base_slot: u64, index: u64) -> Vec<u8> {
    index_with_offset(keccak256(slot_word(base_slot)), index)
}

/// Storage keys touched for a single validator during bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageIndexes {
    /// `validators[index]`, unpadded.
    pub validators_index: Vec<u8>,
    /// `addressToBLSPublicKey[address]`
    pub bls_public_key_index: B256,
    /// `addressToIsValidator[address]`
    pub is_validator_index: B256,
    /// `addressToStakedAmount[address]`
    pub staked_amount_index: B256,
    /// `addressToValidatorIndex[address]`
    pub validator_index_index: B256,
}

impl StorageIndexes {
    /// Derives every key for the validator at position `index`.
    pub fn new(address: Address, index: u64) -> Self {
        Self {
            validators_index: array_element_offset(VALIDATORS_SLOT, index),
            bls_public_key_index: mapping_slot(address.as_slice(), ADDRESS_TO_BLS_PUBLIC_KEY_SLOT),
            is_validator_index: mapping_slot(address.as_slice(), ADDRESS_TO_IS_VALIDATOR_SLOT),
            staked_amount_index: mapping_slot(address.as_slice(), ADDRESS_TO_STAKED_AMOUNT_SLOT),
            validator_index_index: mapping_slot(
                address.as_slice(),
                ADDRESS_TO_VALIDATOR_INDEX_SLOT,
            ),
        }
    }

    /// Storage key of `validators[index]`.
    pub fn validators_key(&self) -> B256 {
        left_pad_32(&self.validators_index)
    }
}
