// keyring-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! Primitives the key operations are built from:
//!
//! - **Base58Check**: checksummed Base58 used by WIF and addresses via [`base58`].
//! - **Hashing**: SHA-256, double SHA-256 and hash160 via [`hash`].
//! - **Mnemonic**: BIP-39 phrases and seed expansion via [`MnemonicPhrase`].
//! - **Key Derivation**: BIP-32 secp256k1 derivation via [`Secp256k1Deriver`].
//! - **Derivation Paths**: BIP-44 path model via [`DerivationPath`].

pub mod base58;
pub mod hash;
pub mod key_deriver;
pub mod mnemonic;
pub mod paths;

// Re-exports for cleaner API access
pub use key_deriver::Secp256k1Deriver;
pub use mnemonic::{MnemonicPhrase, WordCount};
pub use paths::{DerivationPath, PathSegment};
