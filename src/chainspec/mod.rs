//! Chain specification for PoS networks with a predeployed staking contract.
//!
//! We wrap `reth`'s `ChainSpec` so the genesis document is checked before use:
//! if the staking contract is present in the alloc, its storage must describe
//! a consistent validator set. The genesis hash is what operators compare
//! after generating the document independently.

use alloy_genesis::{Genesis, GenesisAccount};
use alloy_primitives::{Address, B256, U256};
use derive_more::{Constructor, Into};
use eyre::{bail, eyre, Context};
use reth_chainspec::ChainSpec;
use tracing::{debug, info};

use crate::staking::{
    slots::{
        array_element_offset, left_pad_32, mapping_slot, slot_word,
        ADDRESS_TO_IS_VALIDATOR_SLOT, ADDRESS_TO_STAKED_AMOUNT_SLOT,
        ADDRESS_TO_VALIDATOR_INDEX_SLOT, MAX_NUM_VALIDATORS_SLOT, MIN_NUM_VALIDATORS_SLOT,
        STAKED_AMOUNT_SLOT, VALIDATORS_SLOT,
    },
    staking_contract_code, word, StorageMap, STAKING_CONTRACT_ADDRESS,
};

/// Chain specification wrapping reth's `ChainSpec`.
#[derive(Debug, Clone, Into, Constructor, PartialEq, Eq)]
pub struct StakeChainSpec {
    /// The underlying reth chain specification.
    pub inner: ChainSpec,
}

impl StakeChainSpec {
    /// Create the chain spec from a genesis document.
    pub fn from_genesis(genesis: Genesis) -> eyre::Result<Self> {
        info!(chain_id = genesis.config.chain_id, "Creating chain spec from genesis");

        Self::validate_genesis(&genesis).context("Genesis validation failed")?;

        let inner: ChainSpec = genesis.into();

        info!(
            chain_id = inner.chain.id(),
            genesis_hash = ?inner.genesis_hash(),
            "Chain spec created successfully"
        );

        Ok(Self { inner })
    }

    /// Hash of the genesis block header.
    pub fn genesis_hash(&self) -> B256 {
        self.inner.genesis_hash()
    }

    /// Addresses of the genesis validators, in index order.
    pub fn genesis_validators(&self) -> Vec<Address> {
        self.inner
            .genesis
            .alloc
            .get(&STAKING_CONTRACT_ADDRESS)
            .and_then(|account| account.storage.as_ref())
            .map(|storage| {
                let count = u64::try_from(read_uint(storage, slot_word(VALIDATORS_SLOT)))
                    .unwrap_or_default();
                (0..count).map(|index| validator_at(storage, index)).collect()
            })
            .unwrap_or_default()
    }

    fn validate_genesis(genesis: &Genesis) -> eyre::Result<()> {
        if genesis.config.chain_id == 0 {
            bail!("Chain ID must be non-zero");
        }

        match genesis.alloc.get(&STAKING_CONTRACT_ADDRESS) {
            Some(account) => validate_staking_predeploy(account)?,
            None => debug!("No staking contract in genesis alloc"),
        }

        debug!("Genesis validation passed");
        Ok(())
    }
}

/// Checks that the staking contract storage describes a consistent validator set.
///
/// A validator listed twice fails the index check: the second write of its
/// index mapping overwrites the first.
fn validate_staking_predeploy(account: &GenesisAccount) -> eyre::Result<()> {
    if account.code.as_ref() != Some(&staking_contract_code()) {
        bail!("Staking contract at {STAKING_CONTRACT_ADDRESS} does not carry the expected bytecode");
    }

    let empty = StorageMap::new();
    let storage = account.storage.as_ref().unwrap_or(&empty);

    let total_staked = read_uint(storage, slot_word(STAKED_AMOUNT_SLOT));
    if total_staked != account.balance {
        bail!(
            "Staking contract balance {} does not match total staked amount {total_staked}",
            account.balance
        );
    }

    let min = read_uint(storage, slot_word(MIN_NUM_VALIDATORS_SLOT));
    let max = read_uint(storage, slot_word(MAX_NUM_VALIDATORS_SLOT));
    if min > max {
        bail!("Staking contract minimum validator count {min} exceeds maximum {max}");
    }

    let count = u64::try_from(read_uint(storage, slot_word(VALIDATORS_SLOT)))
        .map_err(|_| eyre!("Staking contract validator count does not fit in u64"))?;

    let mut staked_sum = U256::ZERO;
    for index in 0..count {
        let address = validator_at(storage, index);

        if storage.get(&mapping_slot(address.as_slice(), ADDRESS_TO_IS_VALIDATOR_SLOT))
            != Some(&word(U256::from(1)))
        {
            bail!("Validator {address} at index {index} is not flagged as a validator");
        }

        let recorded = read_uint(
            storage,
            mapping_slot(address.as_slice(), ADDRESS_TO_VALIDATOR_INDEX_SLOT),
        );
        if recorded != U256::from(index) {
            bail!("Validator {address} at index {index} records index {recorded}");
        }

        staked_sum += read_uint(
            storage,
            mapping_slot(address.as_slice(), ADDRESS_TO_STAKED_AMOUNT_SLOT),
        );
    }

    if staked_sum != total_staked {
        bail!("Validator stakes sum to {staked_sum}, total staked amount is {total_staked}");
    }

    debug!(validators = count, %total_staked, "Staking contract predeploy is consistent");
    Ok(())
}

/// Reads a storage word as an integer; missing keys read as zero.
fn read_uint(storage: &StorageMap, key: B256) -> U256 {
    storage.get(&key).map(|value| U256::from_be_bytes(value.0)).unwrap_or_default()
}

fn validator_at(storage: &StorageMap, index: u64) -> Address {
    let key = left_pad_32(&array_element_offset(VALIDATORS_SLOT, index));
    Address::from_word(storage.get(&key).copied().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        genesis::GenesisConfig,
        staking::PredeployParams,
        validators::{Validator, ValidatorSet},
    };

    fn pos_genesis(count: u8) -> Genesis {
        let validators: ValidatorSet =
            (1..=count).map(|n| Validator::ecdsa(Address::with_last_byte(n))).collect();
        GenesisConfig::default()
            .with_validators(validators)
            .with_staking(PredeployParams::default())
            .build()
            .expect("valid genesis config")
    }

    fn staking_account(genesis: &mut Genesis) -> &mut GenesisAccount {
        genesis.alloc.get_mut(&STAKING_CONTRACT_ADDRESS).expect("staking predeploy")
    }

    #[test]
    fn accepts_generated_pos_genesis() {
        let spec = StakeChainSpec::from_genesis(pos_genesis(3)).unwrap();

        assert_eq!(spec.inner.chain.id(), crate::genesis::DEFAULT_CHAIN_ID);
        assert_eq!(
            spec.genesis_validators(),
            vec![Address::with_last_byte(1), Address::with_last_byte(2), Address::with_last_byte(3)]
        );
    }

    #[test]
    fn accepts_genesis_without_staking_contract() {
        let genesis = GenesisConfig::default().build().unwrap();
        let spec = StakeChainSpec::from_genesis(genesis).unwrap();
        assert!(spec.genesis_validators().is_empty());
    }

    #[test]
    fn rejects_zero_chain_id() {
        let mut genesis = pos_genesis(1);
        genesis.config.chain_id = 0;
        assert!(StakeChainSpec::from_genesis(genesis).is_err());
    }

    #[test]
    fn rejects_balance_mismatch() {
        let mut genesis = pos_genesis(2);
        staking_account(&mut genesis).balance += U256::from(1);
        assert!(StakeChainSpec::from_genesis(genesis).is_err());
    }

    #[test]
    fn rejects_foreign_bytecode() {
        let mut genesis = pos_genesis(1);
        staking_account(&mut genesis).code = Some(vec![0x00].into());
        assert!(StakeChainSpec::from_genesis(genesis).is_err());
    }

    #[test]
    fn rejects_tampered_validator_index() {
        let mut genesis = pos_genesis(2);
        let key = mapping_slot(Address::with_last_byte(2).as_slice(), ADDRESS_TO_VALIDATOR_INDEX_SLOT);
        staking_account(&mut genesis)
            .storage
            .as_mut()
            .unwrap()
            .insert(key, word(U256::from(7)));

        let err = StakeChainSpec::from_genesis(genesis).unwrap_err();
        assert!(format!("{err:?}").contains("records index 7"));
    }

    #[test]
    fn rejects_duplicate_validators() {
        let validator = Validator::ecdsa(Address::with_last_byte(5));
        let genesis = GenesisConfig::default()
            .with_validators(vec![validator.clone(), validator].into())
            .with_staking(PredeployParams::default())
            .build()
            .unwrap();

        assert!(StakeChainSpec::from_genesis(genesis).is_err());
    }

    #[test]
    fn genesis_hash_is_deterministic() {
        let first = StakeChainSpec::from_genesis(pos_genesis(4)).unwrap();
        let second = StakeChainSpec::from_genesis(pos_genesis(4)).unwrap();
        let other = StakeChainSpec::from_genesis(pos_genesis(5)).unwrap();

        assert_eq!(first.genesis_hash(), second.genesis_hash());
        assert_ne!(first.genesis_hash(), other.genesis_hash());
    }
}
