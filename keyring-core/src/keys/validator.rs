// keyring-core/src/keys/validator.rs
//
// Address Validator - does a Base58Check address belong to this network?

use crate::crypto::base58;
use crate::error::{KeyError, KeyResult};
use crate::network::NetworkParameters;
use serde::Serialize;

const HASH160_LEN: usize = 20;

/// Which of the network's address versions matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressKind {
    PubKeyHash,
    ScriptHash,
}

pub struct AddressValidator;

impl AddressValidator {
    /// Typed check.
    ///
    /// Malformed Base58Check reports the decode error; a well-formed address
    /// of another network reports `InvalidVersion`.
    pub fn check(network: &NetworkParameters, address: &str) -> KeyResult<AddressKind> {
        let payload = base58::decode_check(address)?;
        let (version, hash) = network.layout().split_version(&payload)?;

        let kind = if version == network.pub_key_hash() {
            AddressKind::PubKeyHash
        } else if version == network.script_hash() {
            AddressKind::ScriptHash
        } else {
            return Err(KeyError::InvalidVersion { found: version });
        };

        if hash.len() != HASH160_LEN {
            return Err(KeyError::InvalidLength(hash.len()));
        }
        Ok(kind)
    }

    /// Boolean convenience surface: malformed and wrong-network are both `false`.
    #[inline]
    pub fn is_valid(network: &NetworkParameters, address: &str) -> bool {
        Self::check(network, address).is_ok()
    }
}
