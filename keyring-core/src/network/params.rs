// keyring-core/src/network/params.rs
//
// Network Parameters - per-coin version bytes and address layout
// Base58Check versions (P2PKH / P2SH / WIF), SLIP-44 coin type

use crate::crypto::paths::coin_type;
use crate::error::{KeyError, KeyResult};
use serde::Deserialize;
use std::collections::HashMap;

// =============================================================================
// ADDRESS LAYOUT
// =============================================================================
/// How the address version is laid out in front of the hash160 payload.
///
/// WIF serialization is identical for both layouts; only addresses differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressLayout {
    /// Single version byte (Bitcoin, Komodo, Litecoin, ...)
    Standard,
    /// Two version bytes, big-endian (Zcash transparent `t1`/`t3` addresses)
    Zcash,
}

impl AddressLayout {
    /// Number of version bytes preceding the hash.
    #[inline]
    pub const fn version_width(self) -> usize {
        match self {
            AddressLayout::Standard => 1,
            AddressLayout::Zcash => 2,
        }
    }

    pub(crate) fn write_version(self, version: u16, out: &mut Vec<u8>) {
        match self {
            AddressLayout::Standard => out.push(version as u8),
            AddressLayout::Zcash => out.extend_from_slice(&version.to_be_bytes()),
        }
    }

    /// Split a decoded Base58Check payload into `(version, body)`.
    pub(crate) fn split_version(self, payload: &[u8]) -> KeyResult<(u16, &[u8])> {
        let width = self.version_width();
        if payload.len() < width {
            return Err(KeyError::InvalidLength(payload.len()));
        }
        let (head, body) = payload.split_at(width);
        let version = match self {
            AddressLayout::Standard => u16::from(head[0]),
            AddressLayout::Zcash => u16::from_be_bytes([head[0], head[1]]),
        };
        Ok((version, body))
    }

    fn fits(self, version: u16) -> bool {
        match self {
            AddressLayout::Standard => version <= u16::from(u8::MAX),
            AddressLayout::Zcash => true,
        }
    }
}

// =============================================================================
// NETWORK PARAMETERS
// =============================================================================
/// Immutable per-coin constants consumed by every key operation.
///
/// Constructed once per supported coin and shared by reference. Alternate WIF
/// versions are applied by passing the version into the codec, never by
/// patching a shared instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawNetworkParameters")]
pub struct NetworkParameters {
    pub_key_hash: u16,
    script_hash: u16,
    wif: u8,
    wif_alt: Vec<u8>,
    layout: AddressLayout,
    coin_type: u32,
}

impl NetworkParameters {
    /// Single-byte address versions.
    pub fn standard(pub_key_hash: u8, script_hash: u8, wif: u8) -> Self {
        Self {
            pub_key_hash: pub_key_hash.into(),
            script_hash: script_hash.into(),
            wif,
            wif_alt: Vec::new(),
            layout: AddressLayout::Standard,
            coin_type: coin_type::KOMODO,
        }
    }

    /// Two-byte (Zcash-style) address versions.
    pub fn zcash_style(pub_key_hash: u16, script_hash: u16, wif: u8) -> Self {
        Self {
            pub_key_hash,
            script_hash,
            wif,
            wif_alt: Vec::new(),
            layout: AddressLayout::Zcash,
            coin_type: coin_type::KOMODO,
        }
    }

    /// Override the SLIP-44 coin type used for BIP44 search paths.
    pub fn with_coin_type(mut self, coin_type: u32) -> Self {
        self.coin_type = coin_type;
        self
    }

    /// Attach legacy WIF versions. The primary `wif` must not appear in the list.
    pub fn with_wif_alt(mut self, wif_alt: Vec<u8>) -> KeyResult<Self> {
        self.wif_alt = wif_alt;
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> KeyResult<()> {
        if self.wif_alt.contains(&self.wif) {
            return Err(KeyError::UnknownNetwork(format!(
                "wifAlt must not contain the primary wif version {:#04x}",
                self.wif
            )));
        }
        if !self.layout.fits(self.pub_key_hash) || !self.layout.fits(self.script_hash) {
            return Err(KeyError::UnknownNetwork(format!(
                "address versions {:#x}/{:#x} do not fit a single-byte layout",
                self.pub_key_hash, self.script_hash
            )));
        }
        Ok(())
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    #[inline]
    pub fn pub_key_hash(&self) -> u16 {
        self.pub_key_hash
    }

    #[inline]
    pub fn script_hash(&self) -> u16 {
        self.script_hash
    }

    #[inline]
    pub fn wif(&self) -> u8 {
        self.wif
    }

    #[inline]
    pub fn wif_alt(&self) -> &[u8] {
        &self.wif_alt
    }

    #[inline]
    pub fn layout(&self) -> AddressLayout {
        self.layout
    }

    #[inline]
    pub fn coin_type(&self) -> u32 {
        self.coin_type
    }

    #[inline]
    pub fn is_alt_serialization(&self) -> bool {
        self.layout == AddressLayout::Zcash
    }

    /// Whether `version` is accepted when decoding a WIF for this network.
    #[inline]
    pub fn accepts_wif(&self, version: u8) -> bool {
        version == self.wif || self.wif_alt.contains(&version)
    }

    // =========================================================================
    // PRESETS
    // =========================================================================

    pub fn bitcoin() -> Self {
        Self::standard(0x00, 0x05, 0x80).with_coin_type(coin_type::BITCOIN)
    }

    pub fn komodo() -> Self {
        Self::standard(0x3c, 0x55, 0xbc).with_coin_type(coin_type::KOMODO)
    }

    pub fn litecoin() -> Self {
        Self::standard(0x30, 0x32, 0xb0).with_coin_type(coin_type::LITECOIN)
    }

    pub fn dogecoin() -> Self {
        Self::standard(0x1e, 0x16, 0x9e).with_coin_type(coin_type::DOGECOIN)
    }

    pub fn zcash() -> Self {
        Self::zcash_style(0x1cb8, 0x1cbd, 0x80).with_coin_type(coin_type::ZCASH)
    }
}

/// Wire shape of a caller-supplied network table entry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNetworkParameters {
    pub_key_hash: Option<u16>,
    script_hash: Option<u16>,
    wif: Option<u8>,
    #[serde(default)]
    wif_alt: Vec<u8>,
    #[serde(default)]
    is_zcash: bool,
    coin_type: Option<u32>,
}

impl TryFrom<RawNetworkParameters> for NetworkParameters {
    type Error = KeyError;

    fn try_from(raw: RawNetworkParameters) -> KeyResult<Self> {
        let missing = |field: &str| KeyError::UnknownNetwork(format!("missing field {field}"));

        let params = Self {
            pub_key_hash: raw.pub_key_hash.ok_or_else(|| missing("pubKeyHash"))?,
            script_hash: raw.script_hash.ok_or_else(|| missing("scriptHash"))?,
            wif: raw.wif.ok_or_else(|| missing("wif"))?,
            wif_alt: raw.wif_alt,
            layout: if raw.is_zcash {
                AddressLayout::Zcash
            } else {
                AddressLayout::Standard
            },
            coin_type: raw.coin_type.unwrap_or(coin_type::KOMODO),
        };
        params.validate()?;
        Ok(params)
    }
}

// =============================================================================
// REGISTRY
// =============================================================================
/// Symbol-keyed table of network parameters, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct NetworkRegistry {
    networks: HashMap<String, NetworkParameters>,
}

impl NetworkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-filled with the built-in presets.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.insert("BTC", NetworkParameters::bitcoin());
        registry.insert("KMD", NetworkParameters::komodo());
        registry.insert("LTC", NetworkParameters::litecoin());
        registry.insert("DOGE", NetworkParameters::dogecoin());
        registry.insert("ZEC", NetworkParameters::zcash());
        registry
    }

    pub fn insert(&mut self, symbol: &str, params: NetworkParameters) {
        self.networks.insert(symbol.to_ascii_uppercase(), params);
    }

    /// Lookup is case-insensitive on the coin symbol.
    pub fn get(&self, symbol: &str) -> KeyResult<&NetworkParameters> {
        self.networks
            .get(&symbol.to_ascii_uppercase())
            .ok_or_else(|| KeyError::UnknownNetwork(symbol.to_string()))
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl From<HashMap<String, NetworkParameters>> for NetworkRegistry {
    fn from(table: HashMap<String, NetworkParameters>) -> Self {
        let mut registry = Self::new();
        for (symbol, params) in table {
            registry.insert(&symbol, params);
        }
        registry
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let kmd = NetworkParameters::komodo();
        assert_eq!(kmd.pub_key_hash(), 0x3c);
        assert_eq!(kmd.wif(), 0xbc);
        assert_eq!(kmd.coin_type(), 141);
        assert!(!kmd.is_alt_serialization());

        let zec = NetworkParameters::zcash();
        assert_eq!(zec.layout(), AddressLayout::Zcash);
        assert!(zec.is_alt_serialization());
    }

    #[test]
    fn test_wif_alt_rejects_primary_version() {
        let result = NetworkParameters::komodo().with_wif_alt(vec![0x80, 0xbc]);
        assert!(matches!(result, Err(KeyError::UnknownNetwork(_))));

        let ok = NetworkParameters::komodo().with_wif_alt(vec![0x80]).unwrap();
        assert!(ok.accepts_wif(0xbc));
        assert!(ok.accepts_wif(0x80));
        assert!(!ok.accepts_wif(0xb0));
    }

    #[test]
    fn test_split_version() {
        let (v, body) = AddressLayout::Standard.split_version(&[0x3c, 1, 2]).unwrap();
        assert_eq!(v, 0x3c);
        assert_eq!(body, &[1, 2]);

        let (v, body) = AddressLayout::Zcash.split_version(&[0x1c, 0xb8, 7]).unwrap();
        assert_eq!(v, 0x1cb8);
        assert_eq!(body, &[7]);

        assert_eq!(
            AddressLayout::Zcash.split_version(&[0x1c]),
            Err(KeyError::InvalidLength(1))
        );
    }

    #[test]
    fn test_deserialize_network_table() {
        let json = r#"{
            "kmd": { "pubKeyHash": 60, "scriptHash": 85, "wif": 188, "wifAlt": [128] },
            "zec": { "pubKeyHash": 7352, "scriptHash": 7357, "wif": 128, "isZcash": true, "coinType": 133 }
        }"#;
        let table: HashMap<String, NetworkParameters> = serde_json::from_str(json).unwrap();
        let registry = NetworkRegistry::from(table);

        let kmd = registry.get("KMD").unwrap();
        assert_eq!(kmd, &NetworkParameters::komodo().with_wif_alt(vec![0x80]).unwrap());
        assert_eq!(registry.get("zec").unwrap(), &NetworkParameters::zcash());
    }

    #[test]
    fn test_deserialize_rejects_incomplete() {
        let missing = r#"{ "pubKeyHash": 60, "wif": 188 }"#;
        assert!(serde_json::from_str::<NetworkParameters>(missing).is_err());

        let too_wide = r#"{ "pubKeyHash": 7352, "scriptHash": 85, "wif": 188 }"#;
        assert!(serde_json::from_str::<NetworkParameters>(too_wide).is_err());

        let dup_alt = r#"{ "pubKeyHash": 60, "scriptHash": 85, "wif": 188, "wifAlt": [188] }"#;
        assert!(serde_json::from_str::<NetworkParameters>(dup_alt).is_err());
    }

    #[test]
    fn test_registry_unknown_symbol() {
        let registry = NetworkRegistry::with_defaults();
        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.get("XYZ"),
            Err(KeyError::UnknownNetwork("XYZ".to_string()))
        );
    }
}
