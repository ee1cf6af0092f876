//! Genesis validator set.
//!
//! Validators come in two flavours: plain ECDSA validators identified only by
//! their address, and BLS validators that additionally carry the public key
//! used for consensus attestations. The order of a [`ValidatorSet`] is
//! consensus-critical: position `i` becomes on-chain validator index `i`.

use std::str::FromStr;

use alloy_primitives::{hex, Address, Bytes};
use derive_more::{Deref, From, Into, IntoIterator};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single genesis validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Validator {
    /// Validator carrying a BLS public key.
    Bls(BlsValidator),
    /// Address-only validator.
    Ecdsa(EcdsaValidator),
}

/// Address-only validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EcdsaValidator {
    pub address: Address,
}

/// Validator with a BLS public key, stored verbatim in the staking contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlsValidator {
    pub address: Address,
    pub bls_public_key: Bytes,
}

impl Validator {
    pub const fn ecdsa(address: Address) -> Self {
        Self::Ecdsa(EcdsaValidator { address })
    }

    pub fn bls(address: Address, bls_public_key: impl Into<Bytes>) -> Self {
        Self::Bls(BlsValidator { address, bls_public_key: bls_public_key.into() })
    }

    pub const fn address(&self) -> Address {
        match self {
            Self::Bls(validator) => validator.address,
            Self::Ecdsa(validator) => validator.address,
        }
    }

    /// BLS public key, `None` for ECDSA validators.
    pub const fn bls_public_key(&self) -> Option<&Bytes> {
        match self {
            Self::Bls(validator) => Some(&validator.bls_public_key),
            Self::Ecdsa(_) => None,
        }
    }
}

/// Errors produced when parsing a validator from its CLI form.
#[derive(Debug, Error)]
pub enum ValidatorParseError {
    #[error("invalid validator address {0:?}: {1}")]
    Address(String, hex::FromHexError),
    #[error("invalid BLS public key {0:?}: {1}")]
    BlsPublicKey(String, hex::FromHexError),
}

impl FromStr for Validator {
    type Err = ValidatorParseError;

    /// Parses `0x<address>` or `0x<address>:0x<bls public key>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, bls_public_key) = match s.split_once(':') {
            Some((address, key)) => (address, Some(key)),
            None => (s, None),
        };

        let address = Address::from_str(address.trim())
            .map_err(|err| ValidatorParseError::Address(address.to_string(), err))?;

        match bls_public_key {
            Some(key) => {
                let key_bytes = hex::decode(key.trim())
                    .map_err(|err| ValidatorParseError::BlsPublicKey(key.to_string(), err))?;
                Ok(Self::bls(address, key_bytes))
            }
            None => Ok(Self::ecdsa(address)),
        }
    }
}

/// Ordered genesis validator set. Never sorted or deduplicated.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Deref, From, Into, IntoIterator,
)]
#[serde(transparent)]
pub struct ValidatorSet(#[into_iterator(owned, ref)] Vec<Validator>);

impl ValidatorSet {
    pub const fn new(validators: Vec<Validator>) -> Self {
        Self(validators)
    }

    /// Validator at `index`, if present.
    pub fn at(&self, index: usize) -> Option<&Validator> {
        self.0.get(index)
    }

    pub fn push(&mut self, validator: Validator) {
        self.0.push(validator);
    }

    pub fn extend(&mut self, validators: impl IntoIterator<Item = Validator>) {
        self.0.extend(validators);
    }
}

impl FromIterator<Validator> for ValidatorSet {
    fn from_iter<I: IntoIterator<Item = Validator>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    #[test]
    fn parses_plain_validator() {
        let validator: Validator = "0x0000000000000000000000000000000000000001".parse().unwrap();
        assert_eq!(validator, Validator::ecdsa(address!("0000000000000000000000000000000000000001")));
        assert!(validator.bls_public_key().is_none());
    }

    #[test]
    fn parses_bls_validator() {
        let validator: Validator =
            "0x0000000000000000000000000000000000000002:0xdeadbeef".parse().unwrap();
        assert_eq!(validator.address(), address!("0000000000000000000000000000000000000002"));
        assert_eq!(validator.bls_public_key().unwrap().as_ref(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!("0x1234".parse::<Validator>(), Err(ValidatorParseError::Address(..))));
        assert!(matches!(
            "0x0000000000000000000000000000000000000002:0xzz".parse::<Validator>(),
            Err(ValidatorParseError::BlsPublicKey(..))
        ));
    }

    #[test]
    fn json_distinguishes_variants() {
        let json = r#"[
            {"address": "0x0000000000000000000000000000000000000001"},
            {"address": "0x0000000000000000000000000000000000000002", "blsPublicKey": "0x0102"}
        ]"#;
        let set: ValidatorSet = serde_json::from_str(json).unwrap();

        assert_eq!(set.len(), 2);
        assert!(matches!(set.at(0), Some(Validator::Ecdsa(_))));
        assert!(matches!(set.at(1), Some(Validator::Bls(_))));
        assert!(set.at(2).is_none());

        let roundtrip: ValidatorSet =
            serde_json::from_str(&serde_json::to_string(&set).unwrap()).unwrap();
        assert_eq!(roundtrip, set);
    }

    #[test]
    fn keeps_duplicates_and_order() {
        let a = Validator::ecdsa(address!("00000000000000000000000000000000000000aa"));
        let b = Validator::ecdsa(address!("00000000000000000000000000000000000000bb"));
        let set: ValidatorSet = vec![b.clone(), a.clone(), b.clone()].into();

        let addresses: Vec<_> = set.iter().map(Validator::address).collect();
        assert_eq!(addresses, vec![b.address(), a.address(), b.address()]);
    }
}
