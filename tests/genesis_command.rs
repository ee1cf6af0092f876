//! `genesis` command: document generation and cross-operator agreement.

mod common;

use std::fs;

use alloy_genesis::Genesis;
use alloy_primitives::{Address, U256};
use common::{plain_validators, read_uint, slot_key, DEFAULT_STAKE_WEI};
use eyre::Result;
use stake_reth::{
    cli::GenesisCommand,
    staking::slots::{STAKED_AMOUNT_SLOT, VALIDATORS_SLOT},
    BackendRegistry, ConsensusType, GenesisConfig, PredeployParams, StakeChainSpec,
    STAKING_CONTRACT_ADDRESS,
};
use tempfile::TempDir;

fn genesis_command(dir: &TempDir, file: &str) -> GenesisCommand {
    GenesisCommand {
        output: dir.path().join(file),
        chain_id: 1143,
        block_gas_limit: 30_000_000,
        consensus: "ibft".to_string(),
        pos: true,
        validators: plain_validators(2).into(),
        validators_file: None,
        premine: vec!["0x00000000000000000000000000000000000000aa".parse().unwrap()],
        min_validator_count: 1,
        max_validator_count: 10,
    }
}

#[test]
fn independent_operators_agree_on_genesis_hash() -> Result<()> {
    reth_tracing::init_test_tracing();

    let dir = tempfile::tempdir()?;
    let registry = BackendRegistry::builtin();

    let first = genesis_command(&dir, "operator-a.json").execute(&registry)?;
    let second = genesis_command(&dir, "operator-b.json").execute(&registry)?;

    assert_eq!(first, second);
    assert_eq!(
        fs::read(dir.path().join("operator-a.json"))?,
        fs::read(dir.path().join("operator-b.json"))?
    );
    Ok(())
}

#[test]
fn written_genesis_reloads_into_chain_spec() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let hash = genesis_command(&dir, "genesis.json").execute(&BackendRegistry::builtin())?;

    let genesis: Genesis = serde_json::from_str(&fs::read_to_string(dir.path().join("genesis.json"))?)?;
    let staking = &genesis.alloc[&STAKING_CONTRACT_ADDRESS];
    let storage = staking.storage.as_ref().unwrap();

    assert_eq!(read_uint(storage, slot_key(VALIDATORS_SLOT)), U256::from(2));
    assert_eq!(
        read_uint(storage, slot_key(STAKED_AMOUNT_SLOT)),
        U256::from(DEFAULT_STAKE_WEI) * U256::from(2)
    );

    let spec = StakeChainSpec::from_genesis(genesis)?;
    assert_eq!(spec.genesis_hash(), hash);
    assert_eq!(spec.genesis_validators().len(), 2);
    Ok(())
}

#[test]
fn validators_file_is_appended_in_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let file = dir.path().join("validators.json");
    fs::write(
        &file,
        r#"[{"address": "0x00000000000000000000000000000000000000f1", "blsPublicKey": "0x0102"}]"#,
    )?;

    let mut command = genesis_command(&dir, "genesis.json");
    command.validators_file = Some(file);
    command.execute(&BackendRegistry::builtin())?;

    let genesis: Genesis = serde_json::from_str(&fs::read_to_string(dir.path().join("genesis.json"))?)?;
    let spec = StakeChainSpec::from_genesis(genesis)?;
    let validators = spec.genesis_validators();

    assert_eq!(validators.len(), 3);
    assert_eq!(validators[2], "0x00000000000000000000000000000000000000f1".parse::<Address>()?);
    Ok(())
}

#[test]
fn unregistered_consensus_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let registry = BackendRegistry::new().with_consensus(ConsensusType::Dev, "dev");

    let result = genesis_command(&dir, "genesis.json").execute(&registry);

    assert!(result.is_err());
    assert!(!dir.path().join("genesis.json").exists());
}

#[test]
fn validator_count_outside_bounds_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let mut command = genesis_command(&dir, "genesis.json");
    command.min_validator_count = 3;

    assert!(command.execute(&BackendRegistry::builtin()).is_err());
    assert!(!dir.path().join("genesis.json").exists());
}

#[test]
fn validators_without_pos_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut command = genesis_command(&dir, "genesis.json");
    command.pos = false;

    assert!(command.execute(&BackendRegistry::builtin()).is_err());
}

#[test]
fn config_and_command_produce_same_document() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let hash = genesis_command(&dir, "genesis.json").execute(&BackendRegistry::builtin())?;

    let genesis = GenesisConfig::default()
        .with_consensus(ConsensusType::Ibft)
        .with_validators(plain_validators(2))
        .with_premine("0x00000000000000000000000000000000000000aa".parse()?)
        .with_staking(PredeployParams { min_validator_count: 1, max_validator_count: 10 })
        .build()?;

    assert_eq!(StakeChainSpec::from_genesis(genesis)?.genesis_hash(), hash);
    Ok(())
}
