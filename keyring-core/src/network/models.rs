// keyring-core/src/network/models.rs
//
// Output records handed back to the formatting/transport layer.
// Field names follow the wallet wire format: pub / priv / pubHex.

use crate::crypto::paths::DerivationPath;
use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

// =============================================================================
// ENCODED KEY
// =============================================================================

/// Externally visible projection of a key pair under one network and one WIF version.
#[derive(Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct EncodedKey {
    /// Base58Check address (or the watched address itself)
    #[serde(rename = "pub")]
    pub public_address: String,
    /// WIF private key (equal to `public_address` for watch-only keys)
    #[serde(rename = "priv")]
    pub private_encoded: String,
    /// SEC1 public key, hex. Absent for watch-only keys.
    #[serde(rename = "pubHex", skip_serializing_if = "Option::is_none")]
    pub public_key_hex: Option<String>,
}

impl EncodedKey {
    /// Watch-only record: no private key material exists.
    pub fn watch_only(address: &str) -> Self {
        Self {
            public_address: address.to_string(),
            private_encoded: address.to_string(),
            public_key_hex: None,
        }
    }

    #[inline]
    pub fn is_watch_only(&self) -> bool {
        self.public_key_hex.is_none() && self.public_address == self.private_encoded
    }
}

// WIF never shows up in Debug output
impl std::fmt::Debug for EncodedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedKey")
            .field("public_address", &self.public_address)
            .field("private_encoded", &"[REDACTED]")
            .field("public_key_hex", &self.public_key_hex)
            .finish()
    }
}

// =============================================================================
// ALTERNATE WIF VERSIONS
// =============================================================================

/// Encoded key tagged with the WIF version it was serialized under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionedKey {
    #[serde(flatten)]
    pub key: EncodedKey,
    pub version: u8,
}

/// Non-secret facts about a decoded WIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedWif {
    pub version: u8,
    pub compressed: bool,
}

/// One private key presented under the primary and every legacy WIF version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateKeys {
    pub input_key: DecodedWif,
    pub master: VersionedKey,
    #[serde(rename = "alt")]
    pub alternates: Vec<VersionedKey>,
}

// =============================================================================
// HD SEARCH
// =============================================================================

/// A key derived at a concrete BIP44 path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedKey {
    pub path: DerivationPath,
    #[serde(flatten)]
    pub key: EncodedKey,
}

/// Point match or full enumeration, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
    Match(DerivedKey),
    All(Vec<DerivedKey>),
}
