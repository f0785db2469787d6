// keyring-core/src/crypto/key_deriver/mod.rs
//
// Key Derivation Engine - secp256k1 (BIP-32)
//
// ┌──────────────────────────────────────────────┐
// │  Seed (64 bytes from BIP-39 mnemonic)        │
// │                    │                         │
// │                    ▼                         │
// │        master XPrv (HMAC "Bitcoin seed")     │
// │                    │                         │
// │        m/44'/coin'/account'/chain/index      │
// └──────────────────────────────────────────────┘

pub mod secp256k1;

pub use secp256k1::Secp256k1Deriver;
