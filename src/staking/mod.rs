//! Genesis predeploy of the PoS staking contract.
//!
//! The staking contract is placed in the genesis alloc with its storage already
//! populated, so the initial validators appear staked before any transaction
//! runs. Storage is computed by hand following the contract's compiled layout
//! (see [`slots`] and [`bytes`]); nothing here executes EVM code.
//!
//! Storage written per validator at position `i`:
//! - `validators[i] = address`
//! - `addressToBLSPublicKey[address] = bls_public_key` (BLS validators only)
//! - `addressToIsValidator[address] = true`
//! - `addressToStakedAmount[address] = DEFAULT_STAKED_BALANCE`
//! - `addressToValidatorIndex[address] = i`
//!
//! followed by the aggregates `stakedAmount`, `validators.length`,
//! `minNumValidators` and `maxNumValidators`.

use std::collections::BTreeMap;

use alloy_genesis::GenesisAccount;
use alloy_primitives::{address, ruint::ParseError, Address, B256, U256};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::validators::Validator;

pub mod bytecode;
pub mod bytes;
pub mod slots;

pub use bytecode::staking_contract_code;
use slots::{
    slot_word, StorageIndexes, MAX_NUM_VALIDATORS_SLOT, MIN_NUM_VALIDATORS_SLOT,
    STAKED_AMOUNT_SLOT, VALIDATORS_SLOT,
};

/// Contract storage: 32-byte key to 32-byte value. Missing keys read as zero.
pub type StorageMap = BTreeMap<B256, B256>;

/// Well-known address of the staking contract.
pub const STAKING_CONTRACT_ADDRESS: Address = address!("0000000000000000000000000000000000001001");

/// Stake credited to every genesis validator (8 ether), as a hex or decimal literal.
pub const DEFAULT_STAKED_BALANCE: &str = "0x6F05B59D3B200000";

pub const DEFAULT_MIN_VALIDATOR_COUNT: u64 = 1;

/// Largest integer JSON consumers can represent exactly (`2^53 - 1`).
pub const DEFAULT_MAX_VALIDATOR_COUNT: u64 = (1 << 53) - 1;

/// Bounds on the validator set size enforced by the staking contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredeployParams {
    pub min_validator_count: u64,
    pub max_validator_count: u64,
}

impl Default for PredeployParams {
    fn default() -> Self {
        Self {
            min_validator_count: DEFAULT_MIN_VALIDATOR_COUNT,
            max_validator_count: DEFAULT_MAX_VALIDATOR_COUNT,
        }
    }
}

/// Errors raised while building the staking predeploy.
#[derive(Debug, Error)]
pub enum StakingError {
    #[error("unable to parse default staked balance {value:?}: {source}")]
    Configuration {
        value: String,
        #[source]
        source: ParseError,
    },
}

/// Builds the staking contract genesis account with `validators` pre-staked.
pub fn predeploy_staking_account(
    validators: &[Validator],
    params: PredeployParams,
) -> Result<GenesisAccount, StakingError> {
    predeploy_staking_account_with_stake(validators, params, DEFAULT_STAKED_BALANCE)
}

/// Same as [`predeploy_staking_account`], crediting each validator `default_stake`.
pub fn predeploy_staking_account_with_stake(
    validators: &[Validator],
    params: PredeployParams,
    default_stake: &str,
) -> Result<GenesisAccount, StakingError> {
    let stake = default_stake.parse::<U256>().map_err(|source| StakingError::Configuration {
        value: default_stake.to_string(),
        source,
    })?;

    let mut storage = StorageMap::new();
    let mut total_staked = U256::ZERO;

    for (index, validator) in validators.iter().enumerate() {
        let address = validator.address();
        let indexes = StorageIndexes::new(address, index as u64);
        debug!(target: "stake_reth::staking", index, %address, "Predeploying validator stake");

        storage.insert(indexes.validators_key(), address.into_word());

        if let Some(bls_public_key) = validator.bls_public_key() {
            bytes::set_bytes(&mut storage, indexes.bls_public_key_index, bls_public_key);
        }

        storage.insert(indexes.is_validator_index, word(U256::from(1)));
        storage.insert(indexes.staked_amount_index, word(stake));
        storage.insert(indexes.validator_index_index, word(U256::from(index)));

        total_staked += stake;
    }

    storage.insert(slot_word(STAKED_AMOUNT_SLOT), word(total_staked));
    storage.insert(slot_word(VALIDATORS_SLOT), word(U256::from(validators.len())));
    storage.insert(slot_word(MIN_NUM_VALIDATORS_SLOT), word(U256::from(params.min_validator_count)));
    storage.insert(slot_word(MAX_NUM_VALIDATORS_SLOT), word(U256::from(params.max_validator_count)));

    info!(
        target: "stake_reth::staking",
        validators = validators.len(),
        %total_staked,
        slots = storage.len(),
        "Staking contract predeploy built"
    );

    Ok(GenesisAccount {
        nonce: None,
        balance: total_staked,
        code: Some(staking_contract_code()),
        storage: Some(storage),
        private_key: None,
    })
}

/// Big-endian 32-byte storage word.
pub(crate) fn word(value: U256) -> B256 {
    B256::from(value.to_be_bytes::<32>())
}
