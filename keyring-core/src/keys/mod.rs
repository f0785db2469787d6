// keyring-core/src/keys/mod.rs

//! Key Operations
//!
//! Everything between a caller's input string and an encoded key:
//!
//! - **Codec**: WIF encode/decode, alternate WIF versions, addresses via [`KeyCodec`].
//! - **Seeds**: SHA-256 (optionally iguana-clamped) and BIP-39 seeds via [`SeedDerivation`].
//! - **HD Search**: BIP-44 enumeration and address lookup via [`HdSearch`].
//! - **Validation**: network membership of an address via [`AddressValidator`].
//! - **Ingest**: watch-only / WIF / seed classification via [`KeyIngest`].

pub mod codec;
pub mod ingest;
pub mod pair;
pub mod search;
pub mod seed;
pub mod validator;

pub use codec::KeyCodec;
pub use ingest::{InputKind, KeyIngest};
pub use pair::KeyPair;
pub use search::{HdSearch, SearchRange};
pub use seed::SeedDerivation;
pub use validator::{AddressKind, AddressValidator};
