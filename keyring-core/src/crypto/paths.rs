// keyring-core/src/crypto/paths.rs
//
// Derivation Paths Module - BIP-44 path model for secp256k1 coins
// BIP-44 (Purpose), SLIP-44 (Coin Types)

use crate::error::{KeyError, KeyResult};
use bip32::ChildNumber;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// SLIP-44 COIN TYPES
// =============================================================================
/// SLIP-44 Registered Coin Types
/// Ref: https://github.com/satoshilabs/slips/blob/master/slip-0044.md
pub mod coin_type {
    pub const BITCOIN: u32 = 0;
    pub const LITECOIN: u32 = 2;
    pub const DOGECOIN: u32 = 3;
    pub const ZCASH: u32 = 133;
    pub const KOMODO: u32 = 141;
}

/// BIP-44 purpose level
pub const BIP44_PURPOSE: u32 = 44;

// =============================================================================
// PATH SEGMENT
// =============================================================================
/// One level of a derivation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathSegment {
    pub index: u32,
    pub hardened: bool,
}

impl PathSegment {
    #[inline]
    pub const fn normal(index: u32) -> Self {
        Self {
            index,
            hardened: false,
        }
    }

    #[inline]
    pub const fn hardened(index: u32) -> Self {
        Self {
            index,
            hardened: true,
        }
    }

    /// BIP-32 child number; fails if `index` uses the hardened bit.
    pub fn child_number(&self) -> KeyResult<ChildNumber> {
        ChildNumber::new(self.index, self.hardened).map_err(|e| {
            KeyError::Derivation(format!("Invalid index {}: {}", self.index, e))
        })
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hardened {
            write!(f, "{}'", self.index)
        } else {
            write!(f, "{}", self.index)
        }
    }
}

// =============================================================================
// DERIVATION PATH
// =============================================================================
/// Ordered list of derivation segments, rendered as `m/44'/141'/0'/0/5`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DerivationPath {
    segments: Vec<PathSegment>,
}

impl DerivationPath {
    pub fn new(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// `m/44'/coin_type'/account'/change/index`
    ///
    /// # Arguments
    /// * `coin_type` - SLIP-44 coin type (see `coin_type::*`)
    /// * `account` - Account index (hardened)
    /// * `change` - 0 = external (receive), 1 = internal (change)
    /// * `index` - Address index
    pub fn bip44(coin_type: u32, account: u32, change: u32, index: u32) -> Self {
        Self::new(vec![
            PathSegment::hardened(BIP44_PURPOSE),
            PathSegment::hardened(coin_type),
            PathSegment::hardened(account),
            PathSegment::normal(change),
            PathSegment::normal(index),
        ])
    }

    /// `m/44'/coin_type'/account'`
    pub fn bip44_account(coin_type: u32, account: u32) -> Self {
        Self::new(vec![
            PathSegment::hardened(BIP44_PURPOSE),
            PathSegment::hardened(coin_type),
            PathSegment::hardened(account),
        ])
    }

    #[inline]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("m")?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Parses `m/44'/141'/0'/0/5` notation via `bip32::DerivationPath`.
impl FromStr for DerivationPath {
    type Err = KeyError;

    fn from_str(path: &str) -> KeyResult<Self> {
        let parsed = bip32::DerivationPath::from_str(path)
            .map_err(|e| KeyError::Derivation(format!("Invalid path '{}': {}", path, e)))?;

        let segments = parsed
            .iter()
            .map(|child| PathSegment {
                index: child.index(),
                hardened: child.is_hardened(),
            })
            .collect();

        Ok(Self { segments })
    }
}

impl Serialize for DerivationPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// TESTS
// =============================================================================
