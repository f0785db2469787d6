// keyring-core/src/api/mod.rs
//
// String-in / record-out facade for the wallet UI layer.
// Each function is a thin composition of the `keys` operations.

use crate::error::{KeyError, KeyResult};
use crate::keys::{AddressValidator, HdSearch, KeyCodec, KeyIngest, SearchRange, SeedDerivation};
use crate::network::{AlternateKeys, EncodedKey, NetworkParameters, SearchResult};

// --- Key Encoding ---

/// Raw seed string → `{pub, priv, pubHex}`.
pub fn seed_to_wif(seed: &str, network: &NetworkParameters, iguana: bool) -> KeyResult<EncodedKey> {
    let pair = SeedDerivation::from_raw_seed(seed.as_bytes(), iguana)?;
    Ok(KeyCodec::encode(&pair, network, network.wif()))
}

/// WIF → `{pub, priv, pubHex}` under `network`.
pub fn wif_to_wif(wif: &str, network: &NetworkParameters) -> KeyResult<EncodedKey> {
    KeyCodec::wif_to_wif(wif, network)
}

/// Login-style entry point: watch-only address, WIF or seed.
pub fn string_to_wif(input: &str, network: &NetworkParameters, iguana: bool) -> KeyResult<EncodedKey> {
    KeyIngest::resolve(input, network, iguana)
}

/// WIF → master record plus one record per alternate WIF version.
pub fn from_wif(wif: &str, network: &NetworkParameters) -> KeyResult<AlternateKeys> {
    KeyCodec::decode_with_alternates(wif, network)
}

/// Hex public key → address.
pub fn pubkey_to_address(pubkey_hex: &str, network: &NetworkParameters) -> KeyResult<String> {
    KeyCodec::pubkey_to_address(pubkey_hex, network)
}

// --- Address Checks ---

/// `Ok(true)` / `Ok(false)` for well-formed addresses of this / another
/// network; `Err` when the string is not valid Base58Check at all.
pub fn address_version_check(network: &NetworkParameters, address: &str) -> KeyResult<bool> {
    match AddressValidator::check(network, address) {
        Ok(_) => Ok(true),
        Err(KeyError::InvalidVersion { .. }) | Err(KeyError::InvalidLength(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

// --- HD Search ---

/// Mnemonic search: every key in `range`, or the key whose address is `match_address`.
pub fn bip39_search(
    mnemonic: &str,
    network: &NetworkParameters,
    match_address: Option<&str>,
    range: &SearchRange,
) -> KeyResult<SearchResult> {
    let search = HdSearch::from_mnemonic(mnemonic, None, network)?;
    match match_address {
        Some(target) => search.find_by_address(target, range).map(SearchResult::Match),
        None => search.enumerate(range).map(SearchResult::All),
    }
}
