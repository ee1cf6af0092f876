//! Registry of pluggable node backends.
//!
//! Consensus engines and secrets managers are selected by name in the genesis
//! document and node configuration. The registry is an explicit value built
//! once at startup and passed by reference; there is no process-wide table.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Consensus engine kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsensusType {
    Dev,
    Ibft,
    Dummy,
}

impl ConsensusType {
    pub const ALL: [Self; 3] = [Self::Dev, Self::Ibft, Self::Dummy];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Ibft => "ibft",
            Self::Dummy => "dummy",
        }
    }
}

/// Secrets manager backend kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SecretsManagerType {
    Local,
    HashicorpVault,
    AwsSsm,
    GcpSsm,
}

impl SecretsManagerType {
    pub const ALL: [Self; 4] = [Self::Local, Self::HashicorpVault, Self::AwsSsm, Self::GcpSsm];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::HashicorpVault => "hashicorp-vault",
            Self::AwsSsm => "aws-ssm",
            Self::GcpSsm => "gcp-ssm",
        }
    }
}

macro_rules! impl_backend_name {
    ($ty:ty, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = RegistryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .into_iter()
                    .find(|kind| kind.as_str() == s)
                    .ok_or_else(|| RegistryError::Unknown { kind: $kind, name: s.to_string() })
            }
        }
    };
}

impl_backend_name!(ConsensusType, "consensus");
impl_backend_name!(SecretsManagerType, "secrets manager");

/// Registry lookup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown {kind} backend {name:?}")]
    Unknown { kind: &'static str, name: String },
    #[error("{kind} backend {name:?} is not registered")]
    NotRegistered { kind: &'static str, name: String },
}

/// Backends available to this node, keyed by kind.
#[derive(Debug, Clone, Default)]
pub struct BackendRegistry {
    consensus: BTreeMap<ConsensusType, &'static str>,
    secrets_managers: BTreeMap<SecretsManagerType, &'static str>,
}

impl BackendRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in backend.
    pub fn builtin() -> Self {
        Self::new()
            .with_consensus(ConsensusType::Dev, "instant-seal development engine")
            .with_consensus(ConsensusType::Ibft, "Istanbul BFT")
            .with_consensus(ConsensusType::Dummy, "no-op engine for tests")
            .with_secrets_manager(SecretsManagerType::Local, "local filesystem")
            .with_secrets_manager(SecretsManagerType::HashicorpVault, "HashiCorp Vault")
            .with_secrets_manager(SecretsManagerType::AwsSsm, "AWS SSM Parameter Store")
            .with_secrets_manager(SecretsManagerType::GcpSsm, "GCP Secret Manager")
    }

    pub fn with_consensus(mut self, kind: ConsensusType, description: &'static str) -> Self {
        self.consensus.insert(kind, description);
        self
    }

    pub fn with_secrets_manager(
        mut self,
        kind: SecretsManagerType,
        description: &'static str,
    ) -> Self {
        self.secrets_managers.insert(kind, description);
        self
    }

    /// Whether `name` refers to a registered consensus engine.
    pub fn consensus_supported(&self, name: &str) -> bool {
        self.resolve_consensus(name).is_ok()
    }

    /// Whether `name` refers to a registered secrets manager.
    pub fn secrets_manager_supported(&self, name: &str) -> bool {
        self.resolve_secrets_manager(name).is_ok()
    }

    pub fn resolve_consensus(&self, name: &str) -> Result<ConsensusType, RegistryError> {
        let kind = name.parse::<ConsensusType>()?;
        if self.consensus.contains_key(&kind) {
            Ok(kind)
        } else {
            Err(RegistryError::NotRegistered { kind: "consensus", name: name.to_string() })
        }
    }

    pub fn resolve_secrets_manager(&self, name: &str) -> Result<SecretsManagerType, RegistryError> {
        let kind = name.parse::<SecretsManagerType>()?;
        if self.secrets_managers.contains_key(&kind) {
            Ok(kind)
        } else {
            Err(RegistryError::NotRegistered { kind: "secrets manager", name: name.to_string() })
        }
    }

    /// Registered consensus engines with their descriptions.
    pub fn consensus_backends(&self) -> impl Iterator<Item = (ConsensusType, &'static str)> + '_ {
        self.consensus.iter().map(|(kind, description)| (*kind, *description))
    }
}
