//! Genesis document construction.
//!
//! Merges premined accounts and, for PoS chains, the staking contract predeploy
//! into an [`alloy_genesis::Genesis`]. The result is what every operator of a
//! new network generates independently and compares by genesis hash.

use std::{collections::BTreeMap, path::Path, str::FromStr};

use alloy_genesis::{Genesis, GenesisAccount};
use alloy_primitives::{ruint::ParseError, Address, U256};
use eyre::WrapErr;
use serde_json::json;
use thiserror::Error;
use tracing::info;

use crate::{
    registry::ConsensusType,
    staking::{
        predeploy_staking_account, PredeployParams, StakingError, DEFAULT_MAX_VALIDATOR_COUNT,
        STAKING_CONTRACT_ADDRESS,
    },
    validators::ValidatorSet,
};

pub const DEFAULT_CHAIN_ID: u64 = 1143;
pub const DEFAULT_GENESIS_GAS_LIMIT: u64 = 30_000_000;
/// One billion units of the native currency.
pub const DEFAULT_PREMINE_BALANCE: &str = "0x33B2E3C9FD0803CE8000000";
pub const DEFAULT_CONSENSUS: ConsensusType = ConsensusType::Ibft;

/// Errors raised while assembling a genesis document.
#[derive(Debug, Error)]
pub enum GenesisError {
    #[error(transparent)]
    Staking(#[from] StakingError),
    #[error("minimum validator count must be at least 1")]
    MinValidatorCountZero,
    #[error("minimum validator count {min} is greater than maximum {max}")]
    MinAboveMax { min: u64, max: u64 },
    #[error("maximum validator count {0} exceeds 2^53 - 1")]
    MaxAboveLimit(u64),
    #[error("{count} genesis validators outside of allowed range [{min}, {max}]")]
    ValidatorCountOutOfRange { count: usize, min: u64, max: u64 },
    #[error("premine for {0} collides with the staking contract predeploy")]
    PremineOnStakingContract(Address),
}

/// A premined account, parsed from `0x<address>[:<balance>]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Premine {
    pub address: Address,
    pub balance: U256,
}

/// Errors produced when parsing a [`Premine`].
#[derive(Debug, Error)]
pub enum PremineParseError {
    #[error("invalid premine address {0:?}: {1}")]
    Address(String, alloy_primitives::hex::FromHexError),
    #[error("invalid premine balance {0:?}: {1}")]
    Balance(String, ParseError),
}

impl FromStr for Premine {
    type Err = PremineParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, balance) = s.split_once(':').unwrap_or((s, DEFAULT_PREMINE_BALANCE));

        Ok(Self {
            address: address
                .parse()
                .map_err(|err| PremineParseError::Address(address.to_string(), err))?,
            balance: balance
                .parse()
                .map_err(|err| PremineParseError::Balance(balance.to_string(), err))?,
        })
    }
}

/// Inputs of a genesis document.
#[derive(Debug, Clone)]
pub struct GenesisConfig {
    pub chain_id: u64,
    pub gas_limit: u64,
    pub consensus: ConsensusType,
    pub premine: BTreeMap<Address, U256>,
    pub validators: ValidatorSet,
    /// Present for PoS chains: the staking contract is predeployed with `validators`.
    pub staking: Option<PredeployParams>,
}

impl Default for GenesisConfig {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            gas_limit: DEFAULT_GENESIS_GAS_LIMIT,
            consensus: DEFAULT_CONSENSUS,
            premine: BTreeMap::new(),
            validators: ValidatorSet::default(),
            staking: None,
        }
    }
}

impl GenesisConfig {
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn with_consensus(mut self, consensus: ConsensusType) -> Self {
        self.consensus = consensus;
        self
    }

    /// Adds a premined account; a later entry for the same address wins.
    pub fn with_premine(mut self, premine: Premine) -> Self {
        self.premine.insert(premine.address, premine.balance);
        self
    }

    pub fn with_validators(mut self, validators: ValidatorSet) -> Self {
        self.validators = validators;
        self
    }

    /// Switches the chain to PoS with the given staking contract parameters.
    pub fn with_staking(mut self, params: PredeployParams) -> Self {
        self.staking = Some(params);
        self
    }

    /// Builds the genesis document.
    pub fn build(&self) -> Result<Genesis, GenesisError> {
        let mut alloc = BTreeMap::new();
        for (address, balance) in &self.premine {
            alloc.insert(
                *address,
                GenesisAccount {
                    nonce: None,
                    balance: *balance,
                    code: None,
                    storage: None,
                    private_key: None,
                },
            );
        }

        if let Some(params) = self.staking {
            validate_validator_count(self.validators.len(), params)?;
            if self.premine.contains_key(&STAKING_CONTRACT_ADDRESS) {
                return Err(GenesisError::PremineOnStakingContract(STAKING_CONTRACT_ADDRESS));
            }
            alloc.insert(STAKING_CONTRACT_ADDRESS, predeploy_staking_account(&self.validators, params)?);
        }

        let mut genesis = Genesis::default();
        genesis.config.chain_id = self.chain_id;
        for fork in [
            &mut genesis.config.homestead_block,
            &mut genesis.config.eip150_block,
            &mut genesis.config.eip155_block,
            &mut genesis.config.eip158_block,
            &mut genesis.config.byzantium_block,
            &mut genesis.config.constantinople_block,
            &mut genesis.config.petersburg_block,
            &mut genesis.config.istanbul_block,
            &mut genesis.config.berlin_block,
            &mut genesis.config.london_block,
        ] {
            *fork = Some(0);
        }
        let engine = self.consensus.as_str();
        let engine_type = if self.staking.is_some() { "PoS" } else { "PoA" };
        genesis
            .config
            .extra_fields
            .insert("engine".to_string(), json!({ engine: { "type": engine_type } }));
        genesis.gas_limit = self.gas_limit;
        genesis.difficulty = U256::from(1);
        genesis.alloc = alloc;

        info!(
            target: "stake_reth::genesis",
            chain_id = self.chain_id,
            consensus = %self.consensus,
            accounts = genesis.alloc.len(),
            pos = self.staking.is_some(),
            "Genesis document built"
        );

        Ok(genesis)
    }
}

/// Checks the staking contract bounds against the genesis validator set size.
pub fn validate_validator_count(count: usize, params: PredeployParams) -> Result<(), GenesisError> {
    let PredeployParams { min_validator_count: min, max_validator_count: max } = params;

    if min < 1 {
        return Err(GenesisError::MinValidatorCountZero);
    }
    if min > max {
        return Err(GenesisError::MinAboveMax { min, max });
    }
    if max > DEFAULT_MAX_VALIDATOR_COUNT {
        return Err(GenesisError::MaxAboveLimit(max));
    }
    if (count as u64) < min || (count as u64) > max {
        return Err(GenesisError::ValidatorCountOutOfRange { count, min, max });
    }
    Ok(())
}

/// Pretty-printed JSON of `genesis`.
pub fn genesis_to_json(genesis: &Genesis) -> eyre::Result<String> {
    serde_json::to_string_pretty(genesis).wrap_err("Failed to serialize genesis")
}

/// Writes `genesis` as JSON to `path`.
pub fn write_genesis_file(genesis: &Genesis, path: &Path) -> eyre::Result<()> {
    let json = genesis_to_json(genesis)?;
    std::fs::write(path, json)
        .wrap_err_with(|| format!("Failed to write genesis to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;
    use crate::validators::Validator;

    fn validators(count: u8) -> ValidatorSet {
        (1..=count).map(|n| Validator::ecdsa(Address::with_last_byte(n))).collect()
    }

    #[test]
    fn premine_parses_default_balance() {
        let premine: Premine = "0x00000000000000000000000000000000000000aa".parse().unwrap();
        assert_eq!(premine.balance, DEFAULT_PREMINE_BALANCE.parse::<U256>().unwrap());
        assert_eq!(
            premine.balance,
            U256::from(1_000_000_000_u64) * U256::from(10u64).pow(U256::from(18u64))
        );
    }

    #[test]
    fn premine_parses_explicit_balance() {
        let premine: Premine = "0x00000000000000000000000000000000000000aa:1000".parse().unwrap();
        assert_eq!(premine.address, address!("00000000000000000000000000000000000000aa"));
        assert_eq!(premine.balance, U256::from(1000));

        assert!(matches!(
            "0x00000000000000000000000000000000000000aa:lots".parse::<Premine>(),
            Err(PremineParseError::Balance(..))
        ));
    }

    #[test]
    fn poa_genesis_has_no_staking_contract() {
        let genesis = GenesisConfig::default()
            .with_premine(Premine { address: Address::with_last_byte(9), balance: U256::from(5) })
            .build()
            .unwrap();

        assert_eq!(genesis.config.chain_id, DEFAULT_CHAIN_ID);
        assert_eq!(genesis.alloc.len(), 1);
        assert!(!genesis.alloc.contains_key(&STAKING_CONTRACT_ADDRESS));
        assert_eq!(genesis.config.extra_fields["engine"], json!({"ibft": {"type": "PoA"}}));
    }

    #[test]
    fn pos_genesis_predeploys_staking_contract() {
        let genesis = GenesisConfig::default()
            .with_validators(validators(4))
            .with_staking(PredeployParams::default())
            .build()
            .unwrap();

        let staking = &genesis.alloc[&STAKING_CONTRACT_ADDRESS];
        assert_eq!(staking.balance, U256::from(4) * U256::from(8_000_000_000_000_000_000_u128));
        assert!(staking.code.is_some());
        assert_eq!(genesis.config.extra_fields["engine"], json!({"ibft": {"type": "PoS"}}));
        assert_eq!(genesis.gas_limit, DEFAULT_GENESIS_GAS_LIMIT);
    }

    #[test]
    fn validator_count_bounds_are_enforced() {
        let params = |min, max| PredeployParams { min_validator_count: min, max_validator_count: max };

        assert!(matches!(
            validate_validator_count(1, params(0, 10)),
            Err(GenesisError::MinValidatorCountZero)
        ));
        assert!(matches!(
            validate_validator_count(1, params(5, 4)),
            Err(GenesisError::MinAboveMax { min: 5, max: 4 })
        ));
        assert!(matches!(
            validate_validator_count(1, params(1, DEFAULT_MAX_VALIDATOR_COUNT + 1)),
            Err(GenesisError::MaxAboveLimit(_))
        ));
        assert!(matches!(
            validate_validator_count(2, params(3, 10)),
            Err(GenesisError::ValidatorCountOutOfRange { count: 2, .. })
        ));
        assert!(matches!(
            validate_validator_count(11, params(3, 10)),
            Err(GenesisError::ValidatorCountOutOfRange { count: 11, .. })
        ));
        assert!(validate_validator_count(3, params(3, 10)).is_ok());
    }

    #[test]
    fn premine_on_staking_address_is_rejected() {
        let err = GenesisConfig::default()
            .with_validators(validators(1))
            .with_staking(PredeployParams::default())
            .with_premine(Premine { address: STAKING_CONTRACT_ADDRESS, balance: U256::from(1) })
            .build()
            .unwrap_err();

        assert!(matches!(err, GenesisError::PremineOnStakingContract(_)));
    }
}
