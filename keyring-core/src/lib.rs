// keyring-core/src/lib.rs

//! Multi-network secp256k1 key material engine.
//!
//! Turns seeds, BIP-39 mnemonics and WIF strings into key pairs, encodes them
//! under per-coin [`NetworkParameters`], and searches BIP-44 trees for a
//! target address. Every operation is pure and synchronous.

pub mod api;
pub mod crypto;
pub mod error;
pub mod keys;
pub mod network;

pub use error::{KeyError, KeyResult, MnemonicError};
pub use keys::{
    AddressKind, AddressValidator, HdSearch, InputKind, KeyCodec, KeyIngest, KeyPair,
    SearchRange, SeedDerivation,
};
pub use network::{
    AddressLayout, AlternateKeys, DerivedKey, EncodedKey, NetworkParameters, NetworkRegistry,
};
