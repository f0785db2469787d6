// keyring-core/src/keys/seed.rs
//
// Seed Derivation - arbitrary seed material -> private scalar
//
// Raw seed:  SHA-256(seed) -> optional iguana clamp -> big-endian scalar
// Mnemonic:  BIP-39 PBKDF2 expansion -> 64-byte seed for HD search

use crate::crypto::hash::sha256;
use crate::crypto::mnemonic;
use crate::error::KeyResult;
use crate::keys::pair::KeyPair;
use zeroize::Zeroizing;

pub struct SeedDerivation;

impl SeedDerivation {
    /// SHA-256 of `seed`, clamped when `iguana` is set:
    /// `b[0] &= 0xF8; b[31] &= 0x7F; b[31] |= 0x40`.
    pub fn clamp_seed(seed: &[u8], iguana: bool) -> Zeroizing<[u8; 32]> {
        let mut bytes = Zeroizing::new(sha256(seed));
        if iguana {
            bytes[0] &= 0xf8;
            bytes[31] &= 0x7f;
            bytes[31] |= 0x40;
        }
        bytes
    }

    /// Compressed key pair from raw seed material.
    ///
    /// A digest that is zero or `>= n` is rejected with `OutOfRangeScalar`;
    /// it is not reduced modulo the group order.
    pub fn from_raw_seed(seed: &[u8], iguana: bool) -> KeyResult<KeyPair> {
        let bytes = Self::clamp_seed(seed, iguana);
        KeyPair::from_bytes(&bytes, true)
    }

    /// BIP-39 seed for `phrase`.
    ///
    /// Any phrase is expanded as typed; use `MnemonicPhrase::validate` to
    /// check wordlist and checksum first.
    pub fn from_mnemonic(phrase: &str, passphrase: Option<&str>) -> KeyResult<Zeroizing<[u8; 64]>> {
        mnemonic::expand_seed(phrase, passphrase)
    }
}
