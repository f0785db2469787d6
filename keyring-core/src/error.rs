use crate::keys::ingest::InputKind;
use thiserror::Error;

pub type KeyResult<T> = std::result::Result<T, KeyError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Base58Check checksum mismatch")]
    InvalidChecksum,

    #[error("Invalid Base58 encoding: {0}")]
    InvalidEncoding(String),

    #[error("Unexpected version {found:#x}")]
    InvalidVersion { found: u16 },

    #[error("Invalid payload length: {0} bytes")]
    InvalidLength(usize),

    #[error("Unknown or incomplete network parameters: {0}")]
    UnknownNetwork(String),

    #[error("Scalar is outside the secp256k1 group order")]
    OutOfRangeScalar,

    #[error("Address {0} not found in the searched range")]
    AddressNotFound(String),

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("Key derivation failed: {0}")]
    Derivation(String),

    #[error("Mnemonic Error: {0}")]
    Mnemonic(#[from] MnemonicError),

    #[error("Failed to resolve {kind} input: {source}")]
    KeyResolution {
        kind: InputKind,
        #[source]
        source: Box<KeyError>,
    },
}

impl KeyError {
    /// Input kind attached by `KeyIngest`, if any.
    pub fn input_kind(&self) -> Option<InputKind> {
        match self {
            KeyError::KeyResolution { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MnemonicError {
    #[error("Invalid word count: {0}. Expected 12, 15, 18, 21 or 24 words.")]
    InvalidWordCount(usize),

    #[error("Word '{0}' not found in the BIP39 wordlist.")]
    UnknownWord(String),

    #[error("Checksum validation failed.")]
    ChecksumFailed,

    #[error("BIP39 internal error: {0}")]
    Bip39Error(String),
}
