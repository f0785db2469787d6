// keyring-core/src/keys/search.rs
//
// HD Search - walk m/44'/coin'/account'/chain/index under a BIP-39 master
//
// Traversal order (fixed, "first match" depends on it):
//   account (outer) -> chain 0 then 1 (middle) -> address index (inner)

use crate::crypto::key_deriver::Secp256k1Deriver;
use crate::crypto::paths::{DerivationPath, PathSegment};
use crate::error::{KeyError, KeyResult};
use crate::keys::codec::KeyCodec;
use crate::keys::pair::KeyPair;
use crate::keys::seed::SeedDerivation;
use crate::network::{DerivedKey, NetworkParameters};
use bip32::XPrv;
use serde::Deserialize;
use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// External (receive) chain
pub const EXTERNAL_CHAIN: u32 = 0;
/// Internal (change) chain
pub const INTERNAL_CHAIN: u32 = 1;

// =============================================================================
// SEARCH RANGE
// =============================================================================
/// Bounds of an HD traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRange {
    pub account_count: u32,
    pub address_depth: u32,
    #[serde(default)]
    pub account_offset: u32,
    #[serde(default)]
    pub address_offset: u32,
    #[serde(default)]
    pub include_change: bool,
}

impl SearchRange {
    pub fn new(account_count: u32, address_depth: u32) -> Self {
        Self {
            account_count,
            address_depth,
            account_offset: 0,
            address_offset: 0,
            include_change: false,
        }
    }

    pub fn with_change(mut self, include_change: bool) -> Self {
        self.include_change = include_change;
        self
    }

    pub fn with_account_offset(mut self, offset: u32) -> Self {
        self.account_offset = offset;
        self
    }

    pub fn with_address_offset(mut self, offset: u32) -> Self {
        self.address_offset = offset;
        self
    }

    #[inline]
    pub fn chain_count(&self) -> u32 {
        if self.include_change {
            2
        } else {
            1
        }
    }

    /// Number of keys the traversal visits, saturating at `usize::MAX`.
    pub fn len(&self) -> usize {
        (self.account_count as usize)
            .saturating_mul(self.chain_count() as usize)
            .saturating_mul(self.address_depth as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn accounts(&self) -> KeyResult<Range<u32>> {
        span(self.account_offset, self.account_count, "account")
    }

    fn indices(&self) -> KeyResult<Range<u32>> {
        span(self.address_offset, self.address_depth, "address")
    }
}

fn span(offset: u32, count: u32, what: &str) -> KeyResult<Range<u32>> {
    let end = offset.checked_add(count).ok_or_else(|| {
        KeyError::Derivation(format!("{} range {}+{} overflows", what, offset, count))
    })?;
    Ok(offset..end)
}

// =============================================================================
// HD SEARCH
// =============================================================================

/// Chain-level node (`m/44'/coin'/account'/chain`) shared by its address leaves.
struct ChainNode {
    account: u32,
    chain: u32,
    node: XPrv,
}

/// BIP-44 tree walker bound to one master key and one network.
pub struct HdSearch<'a> {
    master: XPrv,
    network: &'a NetworkParameters,
}

// Master key never shows up in Debug output
impl std::fmt::Debug for HdSearch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HdSearch")
            .field("coin_type", &self.network.coin_type())
            .finish_non_exhaustive()
    }
}

impl<'a> HdSearch<'a> {
    /// Master from a 16..=64 byte BIP-39 seed.
    pub fn from_seed(seed: &[u8], network: &'a NetworkParameters) -> KeyResult<Self> {
        Ok(Self {
            master: Secp256k1Deriver::master(seed)?,
            network,
        })
    }

    /// Master from a mnemonic phrase (BIP-39 PBKDF2 expansion).
    pub fn from_mnemonic(
        phrase: &str,
        passphrase: Option<&str>,
        network: &'a NetworkParameters,
    ) -> KeyResult<Self> {
        let seed = SeedDerivation::from_mnemonic(phrase, passphrase)?;
        Self::from_seed(&*seed, network)
    }

    /// Key at a single `(account, chain, index)` coordinate, walked from the master.
    pub fn derive_at(&self, account: u32, chain: u32, index: u32) -> KeyResult<DerivedKey> {
        let path = DerivationPath::bip44(self.network.coin_type(), account, chain, index);
        let node = Secp256k1Deriver::derive_node(&self.master, path.segments())?;
        self.encode_node(&node, path)
    }

    /// Every key in `range`, in traversal order.
    pub fn enumerate(&self, range: &SearchRange) -> KeyResult<Vec<DerivedKey>> {
        tracing::debug!(
            accounts = range.account_count,
            depth = range.address_depth,
            include_change = range.include_change,
            total = range.len(),
            "enumerating HD addresses"
        );

        let chains = self.chain_nodes(range)?;
        let leaves = fan_out(&chains, range.indices()?);

        #[cfg(feature = "parallel")]
        let keys = leaves
            .par_iter()
            .map(|(chain, index)| self.derive_leaf(chain, *index))
            .collect::<KeyResult<Vec<_>>>()?;

        #[cfg(not(feature = "parallel"))]
        let keys = leaves
            .iter()
            .map(|(chain, index)| self.derive_leaf(chain, *index))
            .collect::<KeyResult<Vec<_>>>()?;

        Ok(keys)
    }

    /// First key in traversal order whose address equals `target`.
    pub fn find_by_address(&self, target: &str, range: &SearchRange) -> KeyResult<DerivedKey> {
        tracing::debug!(
            accounts = range.account_count,
            depth = range.address_depth,
            include_change = range.include_change,
            total = range.len(),
            "searching HD addresses"
        );

        let chains = self.chain_nodes(range)?;
        let leaves = fan_out(&chains, range.indices()?);

        let matches = |leaf: &(&ChainNode, u32)| match self.derive_leaf(leaf.0, leaf.1) {
            Ok(found) if found.key.public_address == target => Some(Ok(found)),
            Ok(_) => None,
            Err(e) => Some(Err(e)),
        };

        // find_map_first keeps traversal order and stops pending work after a hit
        #[cfg(feature = "parallel")]
        let hit = leaves.par_iter().find_map_first(matches);

        #[cfg(not(feature = "parallel"))]
        let hit = leaves.iter().find_map(matches);

        match hit {
            Some(Ok(found)) => {
                tracing::debug!(path = %found.path, "address matched");
                Ok(found)
            }
            Some(Err(e)) => Err(e),
            None => Err(KeyError::AddressNotFound(target.to_string())),
        }
    }

    fn chain_nodes(&self, range: &SearchRange) -> KeyResult<Vec<ChainNode>> {
        let coin_type = self.network.coin_type();
        let accounts = range.accounts()?;
        let mut nodes = Vec::new();

        for account in accounts {
            let account_path = DerivationPath::bip44_account(coin_type, account);
            let account_node = Secp256k1Deriver::derive_node(&self.master, account_path.segments())?;

            for chain in EXTERNAL_CHAIN..EXTERNAL_CHAIN + range.chain_count() {
                let node = Secp256k1Deriver::derive_child(&account_node, PathSegment::normal(chain))?;
                nodes.push(ChainNode {
                    account,
                    chain,
                    node,
                });
            }
        }

        Ok(nodes)
    }

    fn derive_leaf(&self, chain: &ChainNode, index: u32) -> KeyResult<DerivedKey> {
        let node = Secp256k1Deriver::derive_child(&chain.node, PathSegment::normal(index))?;
        let path = DerivationPath::bip44(self.network.coin_type(), chain.account, chain.chain, index);
        self.encode_node(&node, path)
    }

    fn encode_node(&self, node: &XPrv, path: DerivationPath) -> KeyResult<DerivedKey> {
        let pair = KeyPair::new(Secp256k1Deriver::secret_key(node)?, true);
        Ok(DerivedKey {
            path,
            key: KeyCodec::encode(&pair, self.network, self.network.wif()),
        })
    }
}

fn fan_out(chains: &[ChainNode], indices: Range<u32>) -> Vec<(&ChainNode, u32)> {
    chains
        .iter()
        .flat_map(|chain| indices.clone().map(move |index| (chain, index)))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
