// keyring-core/src/crypto/key_deriver/secp256k1.rs
//
// secp256k1 Key Derivation — BIP-32 / BIP-44
//
// Algorithm: HMAC-SHA512 hierarchical deterministic derivation
// Reference: https://github.com/bitcoin/bips/blob/master/bip-0032.mediawiki

use crate::crypto::paths::PathSegment;
use crate::error::{KeyError, KeyResult};
use bip32::XPrv;
use k256::SecretKey;

/// secp256k1 Key Deriver — BIP-32 Standard
///
/// Callers that derive many siblings should derive the shared parent once
/// with [`derive_node`](Self::derive_node) and fan out with
/// [`derive_child`](Self::derive_child), instead of walking from the master
/// for every leaf.
pub struct Secp256k1Deriver;

impl Secp256k1Deriver {
    /// Master extended key from a BIP-39 seed (16..=64 bytes).
    pub fn master(seed: &[u8]) -> KeyResult<XPrv> {
        XPrv::new(seed)
            .map_err(|e| KeyError::Derivation(format!("Failed to create master key: {}", e)))
    }

    /// Walk `segments` starting at `parent`.
    pub fn derive_node(parent: &XPrv, segments: &[PathSegment]) -> KeyResult<XPrv> {
        let mut node = parent.clone();
        for segment in segments {
            node = Self::derive_child(&node, *segment)?;
        }
        Ok(node)
    }

    #[inline]
    pub fn derive_child(parent: &XPrv, segment: PathSegment) -> KeyResult<XPrv> {
        parent
            .derive_child(segment.child_number()?)
            .map_err(|e| KeyError::Derivation(format!("Child derivation failed at {}: {}", segment, e)))
    }

    /// Private scalar held by an extended key.
    pub fn secret_key(node: &XPrv) -> KeyResult<SecretKey> {
        SecretKey::from_bytes(&node.private_key().to_bytes()).map_err(|_| KeyError::OutOfRangeScalar)
    }
}

// =============================================================================
// TESTS
// =============================================================================
