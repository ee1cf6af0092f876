//! stake-reth: genesis tooling for Ethereum-compatible proof-of-stake networks.
//!
//! The staking contract is part of the genesis alloc with its storage already
//! populated, so the initial validator set is staked at block zero without any
//! contract code having run. That storage has to be bit-identical to what the
//! compiled contract would produce on-chain, which means reproducing the
//! Solidity storage layout by hand:
//! - **Slot addressing**: `keccak256`-derived keys for mappings and dynamic arrays
//! - **Byte packing**: the inline/chunked encoding of `bytes` values (BLS keys)
//! - **Predeploy**: per-validator and aggregate writes producing one genesis account
//!
//! ## Usage
//!
//! ```bash
//! stake-reth genesis \
//!   --pos \
//!   --validator 0x0000000000000000000000000000000000000001 \
//!   --validator 0x0000000000000000000000000000000000000002 \
//!   --premine 0x00000000000000000000000000000000000000aa \
//!   --output genesis.json
//! ```
//!
//! Every operator running the same command gets the same genesis hash.

// Core modules
pub mod chainspec;
pub mod cli;
pub mod genesis;
pub mod registry;
pub mod staking;
pub mod validators;
pub mod version;

// Re-export key types
pub use chainspec::StakeChainSpec;
pub use genesis::{GenesisConfig, GenesisError, Premine};
pub use registry::{BackendRegistry, ConsensusType, SecretsManagerType};
pub use staking::{
    predeploy_staking_account, predeploy_staking_account_with_stake, PredeployParams,
    StakingError, StorageMap, STAKING_CONTRACT_ADDRESS,
};
pub use validators::{Validator, ValidatorSet};
