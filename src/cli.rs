//! Command line interface.

use std::path::PathBuf;

use alloy_primitives::B256;
use clap::{Args, Parser, Subcommand};
use eyre::{bail, Context};
use tracing::info;

use crate::{
    chainspec::StakeChainSpec,
    genesis::{
        write_genesis_file, GenesisConfig, Premine, DEFAULT_CHAIN_ID, DEFAULT_GENESIS_GAS_LIMIT,
    },
    registry::BackendRegistry,
    staking::{PredeployParams, DEFAULT_MAX_VALIDATOR_COUNT, DEFAULT_MIN_VALIDATOR_COUNT},
    validators::{Validator, ValidatorSet},
    version::client_version_string,
};

/// Genesis tooling for PoS networks with a predeployed staking contract.
#[derive(Debug, Parser)]
#[command(name = "stake-reth", version = client_version_string())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a genesis document.
    Genesis(GenesisCommand),
}

impl Cli {
    pub fn run(self, registry: &BackendRegistry) -> eyre::Result<()> {
        match self.command {
            Commands::Genesis(command) => command.execute(registry).map(|_| ()),
        }
    }
}

#[derive(Debug, Args)]
pub struct GenesisCommand {
    /// Output file.
    #[arg(long, default_value = "genesis.json")]
    pub output: PathBuf,

    #[arg(long, default_value_t = DEFAULT_CHAIN_ID)]
    pub chain_id: u64,

    #[arg(long, default_value_t = DEFAULT_GENESIS_GAS_LIMIT)]
    pub block_gas_limit: u64,

    /// Consensus engine recorded in the genesis document.
    #[arg(long, default_value = "ibft")]
    pub consensus: String,

    /// Predeploy the staking contract with the genesis validators (PoS).
    #[arg(long)]
    pub pos: bool,

    /// Genesis validator as `0x<address>` or `0x<address>:0x<bls public key>`. Order is kept.
    #[arg(long = "validator")]
    pub validators: Vec<Validator>,

    /// JSON file with additional validators, appended after `--validator` entries.
    #[arg(long)]
    pub validators_file: Option<PathBuf>,

    /// Premined account as `0x<address>[:<balance>]`.
    #[arg(long)]
    pub premine: Vec<Premine>,

    #[arg(long, default_value_t = DEFAULT_MIN_VALIDATOR_COUNT)]
    pub min_validator_count: u64,

    #[arg(long, default_value_t = DEFAULT_MAX_VALIDATOR_COUNT)]
    pub max_validator_count: u64,
}

impl GenesisCommand {
    /// Writes the genesis document and returns its genesis hash.
    pub fn execute(self, registry: &BackendRegistry) -> eyre::Result<B256> {
        let consensus = registry.resolve_consensus(&self.consensus)?;

        let mut validators = ValidatorSet::new(self.validators);
        if let Some(path) = &self.validators_file {
            let contents = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read validators from {}", path.display()))?;
            let from_file: ValidatorSet = serde_json::from_str(&contents)
                .wrap_err_with(|| format!("Failed to parse validators from {}", path.display()))?;
            validators.extend(from_file);
        }

        if !self.pos && !validators.is_empty() {
            bail!("Genesis validators require --pos");
        }

        let mut config = GenesisConfig::default()
            .with_chain_id(self.chain_id)
            .with_gas_limit(self.block_gas_limit)
            .with_consensus(consensus)
            .with_validators(validators);
        for premine in self.premine {
            config = config.with_premine(premine);
        }
        if self.pos {
            config = config.with_staking(PredeployParams {
                min_validator_count: self.min_validator_count,
                max_validator_count: self.max_validator_count,
            });
        }

        let genesis = config.build()?;
        let genesis_hash = StakeChainSpec::from_genesis(genesis.clone())?.genesis_hash();
        write_genesis_file(&genesis, &self.output)?;

        info!(
            target: "stake_reth::cli",
            output = %self.output.display(),
            ?genesis_hash,
            "Genesis written"
        );

        Ok(genesis_hash)
    }
}
