// keyring-core/src/keys/codec.rs
//
// Key Codec - WIF <-> key pair, public key -> Base58Check address
//
// WIF:     Base58Check( wif_version || scalar(32, BE) || [0x01 if compressed] )
// Address: Base58Check( pub_key_hash_version(1 or 2 bytes) || hash160(pubkey) )

use crate::crypto::base58;
use crate::crypto::hash::hash160;
use crate::error::{KeyError, KeyResult};
use crate::keys::pair::KeyPair;
use crate::network::{AlternateKeys, DecodedWif, EncodedKey, NetworkParameters, VersionedKey};
use k256::PublicKey;
use zeroize::Zeroizing;

/// Marker byte appended to the scalar for compressed public keys
const COMPRESSED_MARKER: u8 = 0x01;
const SCALAR_LEN: usize = 32;
const COMPRESSED_PUBKEY_LEN: usize = 33;
const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

/// Network-aware WIF and address codec.
///
/// # Flow:  Private scalar → WIF (per version) + public key → hash160 → address
pub struct KeyCodec;

impl KeyCodec {
    // =========================================================================
    // ENCODE
    // =========================================================================

    /// Encode `pair` under `network`, serializing the WIF with `wif_version`.
    ///
    /// Never fails: `KeyPair` already guarantees a valid scalar.
    pub fn encode(pair: &KeyPair, network: &NetworkParameters, wif_version: u8) -> EncodedKey {
        let public_key = pair.public_key_bytes();
        EncodedKey {
            public_address: Self::address_from_public_key(&public_key, network),
            private_encoded: Self::to_wif(pair, wif_version),
            public_key_hex: Some(hex::encode(&public_key)),
        }
    }

    /// WIF string for `pair` under `version`.
    pub fn to_wif(pair: &KeyPair, version: u8) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(SCALAR_LEN + 2));
        payload.push(version);
        payload.extend_from_slice(&*pair.scalar_bytes());
        if pair.is_compressed() {
            payload.push(COMPRESSED_MARKER);
        }
        base58::encode_check(&payload)
    }

    /// P2PKH address for a SEC1-encoded public key.
    pub fn address_from_public_key(public_key: &[u8], network: &NetworkParameters) -> String {
        let layout = network.layout();
        let mut payload = Vec::with_capacity(layout.version_width() + 20);
        layout.write_version(network.pub_key_hash(), &mut payload);
        payload.extend_from_slice(&hash160(public_key));
        base58::encode_check(&payload)
    }

    /// Hex public key → address.
    ///
    /// Only 33-byte `02`/`03` and 65-byte `04` SEC1 keys are accepted, and
    /// the point must lie on the curve.
    pub fn pubkey_to_address(pubkey_hex: &str, network: &NetworkParameters) -> KeyResult<String> {
        let bytes = hex::decode(pubkey_hex).map_err(|e| KeyError::InvalidEncoding(e.to_string()))?;
        match (bytes.len(), bytes.first()) {
            (COMPRESSED_PUBKEY_LEN, Some(0x02 | 0x03)) | (UNCOMPRESSED_PUBKEY_LEN, Some(0x04)) => {}
            (len, tag) => {
                return Err(KeyError::InvalidPublicKey(format!(
                    "unsupported SEC1 encoding: {} bytes, tag {:02x?}",
                    len, tag
                )))
            }
        }
        PublicKey::from_sec1_bytes(&bytes).map_err(|e| KeyError::InvalidPublicKey(e.to_string()))?;
        Ok(Self::address_from_public_key(&bytes, network))
    }

    // =========================================================================
    // DECODE
    // =========================================================================

    /// Decode a WIF accepted by `network` (primary or alternate version).
    pub fn decode(text: &str, network: &NetworkParameters) -> KeyResult<KeyPair> {
        let (decoded, pair) = Self::decode_checked(text, network)?;
        tracing::trace!(version = decoded.version, compressed = decoded.compressed, "decoded WIF");
        Ok(pair)
    }

    /// Decode once, then re-encode under the primary and every alternate WIF version.
    pub fn decode_with_alternates(text: &str, network: &NetworkParameters) -> KeyResult<AlternateKeys> {
        let (input_key, pair) = Self::decode_checked(text, network)?;

        let master = VersionedKey {
            key: Self::encode(&pair, network, network.wif()),
            version: network.wif(),
        };
        let alternates = network
            .wif_alt()
            .iter()
            .map(|&version| VersionedKey {
                key: Self::encode(&pair, network, version),
                version,
            })
            .collect();

        Ok(AlternateKeys {
            input_key,
            master,
            alternates,
        })
    }

    /// Normalize a WIF into `{pub, priv, pubHex}` under `network`'s primary version.
    pub fn wif_to_wif(text: &str, network: &NetworkParameters) -> KeyResult<EncodedKey> {
        let pair = Self::decode(text, network)?;
        Ok(Self::encode(&pair, network, network.wif()))
    }

    fn decode_checked(text: &str, network: &NetworkParameters) -> KeyResult<(DecodedWif, KeyPair)> {
        let payload = base58::decode_check(text)?;
        let (&version, body) = payload
            .split_first()
            .ok_or(KeyError::InvalidLength(0))?;

        if !network.accepts_wif(version) {
            return Err(KeyError::InvalidVersion {
                found: version.into(),
            });
        }

        let compressed = match body.len() {
            SCALAR_LEN => false,
            len if len == SCALAR_LEN + 1 && body[SCALAR_LEN] == COMPRESSED_MARKER => true,
            len => return Err(KeyError::InvalidLength(len)),
        };

        let mut scalar = Zeroizing::new([0u8; SCALAR_LEN]);
        scalar.copy_from_slice(&body[..SCALAR_LEN]);
        let pair = KeyPair::from_bytes(&scalar, compressed)?;

        Ok((DecodedWif { version, compressed }, pair))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Private key 1, the smallest valid scalar
    const WIF_ONE_COMPRESSED: &str = "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn";
    const WIF_ONE_UNCOMPRESSED: &str = "5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf";
    const ADDR_ONE_COMPRESSED: &str = "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH";
    const ADDR_ONE_UNCOMPRESSED: &str = "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm";
    const PUB_ONE_COMPRESSED: &str =
        "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

    fn scalar(last: u8) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[31] = last;
        bytes
    }

    fn pair(fill: u8, compressed: bool) -> KeyPair {
        KeyPair::from_bytes(&[fill; 32], compressed).unwrap()
    }

    #[test]
    fn test_encode_bitcoin_vectors() {
        let btc = NetworkParameters::bitcoin();

        let compressed = KeyPair::from_bytes(&scalar(1), true).unwrap();
        let key = KeyCodec::encode(&compressed, &btc, btc.wif());
        assert_eq!(key.private_encoded, WIF_ONE_COMPRESSED);
        assert_eq!(key.public_address, ADDR_ONE_COMPRESSED);
        assert_eq!(key.public_key_hex.as_deref(), Some(PUB_ONE_COMPRESSED));

        let uncompressed = KeyPair::from_bytes(&scalar(1), false).unwrap();
        let key = KeyCodec::encode(&uncompressed, &btc, btc.wif());
        assert_eq!(key.private_encoded, WIF_ONE_UNCOMPRESSED);
        assert_eq!(key.public_address, ADDR_ONE_UNCOMPRESSED);
    }

    #[test]
    fn test_decode_bitcoin_vectors() {
        let btc = NetworkParameters::bitcoin();

        let compressed = KeyCodec::decode(WIF_ONE_COMPRESSED, &btc).unwrap();
        assert!(compressed.is_compressed());
        assert_eq!(&*compressed.scalar_bytes(), &scalar(1));

        let uncompressed = KeyCodec::decode(WIF_ONE_UNCOMPRESSED, &btc).unwrap();
        assert!(!uncompressed.is_compressed());
    }

    #[test]
    fn test_round_trip_both_layouts() {
        for network in [NetworkParameters::komodo(), NetworkParameters::zcash()] {
            for compressed in [true, false] {
                for fill in [0x01, 0x5a, 0xa7] {
                    let original = pair(fill, compressed);
                    let encoded = KeyCodec::encode(&original, &network, network.wif());
                    let decoded = KeyCodec::decode(&encoded.private_encoded, &network).unwrap();
                    assert_eq!(decoded, original);
                }
            }
        }
    }

    #[test]
    fn test_address_prefixes() {
        let pair = pair(0x11, true);

        let kmd = NetworkParameters::komodo();
        assert!(KeyCodec::encode(&pair, &kmd, kmd.wif()).public_address.starts_with('R'));

        let zec = NetworkParameters::zcash();
        assert!(KeyCodec::encode(&pair, &zec, zec.wif()).public_address.starts_with("t1"));
    }

    #[test]
    fn test_decode_wrong_version() {
        let result = KeyCodec::decode(WIF_ONE_COMPRESSED, &NetworkParameters::komodo());
        assert_eq!(result.unwrap_err(), KeyError::InvalidVersion { found: 0x80 });
    }

    #[test]
    fn test_decode_bad_checksum() {
        let mut tampered = WIF_ONE_COMPRESSED[..WIF_ONE_COMPRESSED.len() - 1].to_string();
        tampered.push('m');
        let result = KeyCodec::decode(&tampered, &NetworkParameters::bitcoin());
        assert_eq!(result.unwrap_err(), KeyError::InvalidChecksum);
    }

    #[test]
    fn test_decode_bad_length() {
        let btc = NetworkParameters::bitcoin();

        let mut short = vec![0x80];
        short.extend_from_slice(&[0x11; 31]);
        let result = KeyCodec::decode(&base58::encode_check(&short), &btc);
        assert_eq!(result.unwrap_err(), KeyError::InvalidLength(31));

        // 33 bytes but the trailing byte is not the compression marker
        let mut bad_marker = vec![0x80];
        bad_marker.extend_from_slice(&[0x11; 32]);
        bad_marker.push(0x02);
        let result = KeyCodec::decode(&base58::encode_check(&bad_marker), &btc);
        assert_eq!(result.unwrap_err(), KeyError::InvalidLength(33));
    }

    #[test]
    fn test_decode_out_of_range_scalar() {
        let mut payload = vec![0x80];
        payload.extend_from_slice(&[0xff; 32]);
        payload.push(COMPRESSED_MARKER);
        let result = KeyCodec::decode(&base58::encode_check(&payload), &NetworkParameters::bitcoin());
        assert_eq!(result.unwrap_err(), KeyError::OutOfRangeScalar);
    }

    #[test]
    fn test_decode_with_alternates_standard() {
        let kmd = NetworkParameters::komodo().with_wif_alt(vec![0x80, 0xb0]).unwrap();

        // A Bitcoin-versioned WIF is accepted through wifAlt
        let keys = KeyCodec::decode_with_alternates(WIF_ONE_COMPRESSED, &kmd).unwrap();
        assert_eq!(keys.input_key, DecodedWif { version: 0x80, compressed: true });
        assert_eq!(keys.master.version, 0xbc);
        assert_eq!(keys.alternates.len(), kmd.wif_alt().len());

        assert_eq!(keys.alternates[0].version, 0x80);
        assert_eq!(keys.alternates[0].key.private_encoded, WIF_ONE_COMPRESSED);
        assert_eq!(keys.alternates[1].version, 0xb0);

        for alt in &keys.alternates {
            // WIF version never affects the address
            assert_eq!(alt.key.public_address, keys.master.key.public_address);
            assert_ne!(alt.key.private_encoded, keys.master.key.private_encoded);
        }
    }

    #[test]
    fn test_decode_with_alternates_zcash_layout() {
        let zec = NetworkParameters::zcash().with_wif_alt(vec![0xef]).unwrap();
        let original = pair(0x33, true);
        let wif = KeyCodec::to_wif(&original, zec.wif());

        let keys = KeyCodec::decode_with_alternates(&wif, &zec).unwrap();
        assert_eq!(keys.alternates.len(), 1);
        assert_eq!(keys.master.key.private_encoded, wif);
        assert_eq!(keys.alternates[0].key.public_address, keys.master.key.public_address);
        assert!(keys.master.key.public_address.starts_with("t1"));

        let reparsed = KeyCodec::decode(&keys.alternates[0].key.private_encoded, &zec).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_decode_with_alternates_none_configured() {
        let btc = NetworkParameters::bitcoin();
        let keys = KeyCodec::decode_with_alternates(WIF_ONE_UNCOMPRESSED, &btc).unwrap();
        assert!(keys.alternates.is_empty());
        assert_eq!(keys.master.key.private_encoded, WIF_ONE_UNCOMPRESSED);
    }

    #[test]
    fn test_wif_to_wif() {
        let kmd = NetworkParameters::komodo().with_wif_alt(vec![0x80]).unwrap();
        let key = KeyCodec::wif_to_wif(WIF_ONE_COMPRESSED, &kmd).unwrap();
        assert!(key.private_encoded.starts_with('U'));
        assert_eq!(key.public_key_hex.as_deref(), Some(PUB_ONE_COMPRESSED));
    }

    #[test]
    fn test_pubkey_to_address() {
        let btc = NetworkParameters::bitcoin();
        assert_eq!(
            KeyCodec::pubkey_to_address(PUB_ONE_COMPRESSED, &btc).unwrap(),
            ADDR_ONE_COMPRESSED
        );
        assert!(matches!(
            KeyCodec::pubkey_to_address("zz", &btc),
            Err(KeyError::InvalidEncoding(_))
        ));
        let bad_tag = format!("05{}", &PUB_ONE_COMPRESSED[2..]);
        assert!(matches!(
            KeyCodec::pubkey_to_address(&bad_tag, &btc),
            Err(KeyError::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn test_pubkey_to_address_rejects_nonstandard_sec1() {
        let btc = NetworkParameters::bitcoin();
        let x = &PUB_ONE_COMPRESSED[2..];

        // identity point, bare x coordinate, compressed tag on 65 bytes
        for input in [
            "00".to_string(),
            x.to_string(),
            format!("02{}{}", x, x),
            format!("04{}", x),
        ] {
            assert!(
                matches!(
                    KeyCodec::pubkey_to_address(&input, &btc),
                    Err(KeyError::InvalidPublicKey(_))
                ),
                "input {}",
                input
            );
        }

        // x with no matching y on the curve
        let off_curve = format!("02{}", "00".repeat(32));
        assert!(matches!(
            KeyCodec::pubkey_to_address(&off_curve, &btc),
            Err(KeyError::InvalidPublicKey(_))
        ));

        let uncompressed = KeyPair::from_bytes(&scalar(1), false).unwrap().public_key_bytes();
        assert_eq!(
            KeyCodec::pubkey_to_address(&hex::encode(uncompressed), &btc).unwrap(),
            ADDR_ONE_UNCOMPRESSED
        );
    }
}
