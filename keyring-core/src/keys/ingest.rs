// keyring-core/src/keys/ingest.rs
//
// Key Ingest - classify a login string and route it to the right derivation
//
//   34 alphanumerics        -> watch-only address (no private key)
//   valid Base58Check       -> encoded private key (WIF)
//   anything else           -> raw seed phrase

use crate::crypto::base58;
use crate::error::{KeyError, KeyResult};
use crate::keys::codec::KeyCodec;
use crate::keys::seed::SeedDerivation;
use crate::network::{EncodedKey, NetworkParameters};
use serde::Serialize;
use std::fmt;

/// Length of a legacy Base58 address accepted as watch-only input
const WATCH_ONLY_LEN: usize = 34;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InputKind {
    WatchOnlyAddress,
    EncodedPrivateKey,
    SeedPhrase,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputKind::WatchOnlyAddress => "watch-only address",
            InputKind::EncodedPrivateKey => "encoded private key",
            InputKind::SeedPhrase => "seed phrase",
        };
        f.write_str(name)
    }
}

pub struct KeyIngest;

impl KeyIngest {
    /// Structural classification only; the network is not consulted.
    pub fn classify(input: &str) -> InputKind {
        if input.len() == WATCH_ONLY_LEN && input.bytes().all(|b| b.is_ascii_alphanumeric()) {
            InputKind::WatchOnlyAddress
        } else if base58::is_base58check(input) {
            InputKind::EncodedPrivateKey
        } else {
            InputKind::SeedPhrase
        }
    }

    /// Classify `input` and produce its encoded key under `network`.
    ///
    /// Failures are wrapped in `KeyResolution` carrying the classified kind.
    pub fn resolve(input: &str, network: &NetworkParameters, iguana: bool) -> KeyResult<EncodedKey> {
        let kind = Self::classify(input);
        tracing::debug!(%kind, iguana, "resolving key input");

        let resolved = match kind {
            InputKind::WatchOnlyAddress => Ok(EncodedKey::watch_only(input)),
            InputKind::EncodedPrivateKey => KeyCodec::wif_to_wif(input, network),
            InputKind::SeedPhrase => SeedDerivation::from_raw_seed(input.as_bytes(), iguana)
                .map(|pair| KeyCodec::encode(&pair, network, network.wif())),
        };

        resolved.map_err(|source| KeyError::KeyResolution {
            kind,
            source: Box::new(source),
        })
    }
}
