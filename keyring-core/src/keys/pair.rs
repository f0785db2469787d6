// keyring-core/src/keys/pair.rs
//
// secp256k1 key pair: private scalar + public key serialization flag

use crate::error::{KeyError, KeyResult};
use k256::{elliptic_curve::sec1::ToEncodedPoint, SecretKey};
use zeroize::Zeroizing;

/// Private scalar in `[1, n-1]` plus the SEC1 compression flag.
///
/// The scalar range is enforced by `k256::SecretKey`, which also zeroizes
/// on drop.
#[derive(Clone)]
pub struct KeyPair {
    secret: SecretKey,
    compressed: bool,
}

impl KeyPair {
    #[inline]
    pub fn new(secret: SecretKey, compressed: bool) -> Self {
        Self { secret, compressed }
    }

    /// Big-endian 32-byte scalar. Zero or `>= n` is `OutOfRangeScalar`.
    pub fn from_bytes(bytes: &[u8; 32], compressed: bool) -> KeyResult<Self> {
        let secret = SecretKey::from_slice(bytes).map_err(|_| KeyError::OutOfRangeScalar)?;
        Ok(Self::new(secret, compressed))
    }

    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// Big-endian scalar bytes, zeroized when dropped.
    pub fn scalar_bytes(&self) -> Zeroizing<[u8; 32]> {
        let mut out = Zeroizing::new([0u8; 32]);
        out.copy_from_slice(&self.secret.to_bytes());
        out
    }

    /// SEC1 public key (33 bytes compressed, 65 bytes uncompressed).
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.secret
            .public_key()
            .to_encoded_point(self.compressed)
            .as_bytes()
            .to_vec()
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.compressed == other.compressed && *self.scalar_bytes() == *other.scalar_bytes()
    }
}

impl Eq for KeyPair {}

// Never print the scalar
impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("compressed", &self.compressed)
            .finish_non_exhaustive()
    }
}
