// keyring-core/src/crypto/base58.rs
//
// Base58Check - Base58 of payload || first 4 bytes of SHA256d(payload)

use crate::crypto::hash::sha256d;
use crate::error::{KeyError, KeyResult};
use zeroize::Zeroizing;

const CHECKSUM_LEN: usize = 4;

/// Encode `payload` (version bytes included) with a trailing checksum.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Zeroizing::new(Vec::with_capacity(payload.len() + CHECKSUM_LEN));
    data.extend_from_slice(payload);

    let checksum = sha256d(payload);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    bs58::encode(data.as_slice()).into_string()
}

/// Decode and verify a Base58Check string, returning the payload without checksum.
pub fn decode_check(text: &str) -> KeyResult<Zeroizing<Vec<u8>>> {
    let mut data = Zeroizing::new(
        bs58::decode(text)
            .into_vec()
            .map_err(|e| KeyError::InvalidEncoding(e.to_string()))?,
    );

    if data.len() < CHECKSUM_LEN {
        return Err(KeyError::InvalidLength(data.len()));
    }

    let split = data.len() - CHECKSUM_LEN;
    let expected = sha256d(&data[..split]);
    if data[split..] != expected[..CHECKSUM_LEN] {
        return Err(KeyError::InvalidChecksum);
    }

    data.truncate(split);
    Ok(data)
}

/// Structural check only: does `text` carry a valid Base58Check checksum?
#[inline]
pub fn is_base58check(text: &str) -> bool {
    decode_check(text).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_address() {
        // P2PKH of hash160 for private key 1
        let mut payload = vec![0x00];
        payload.extend(hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap());
        assert_eq!(encode_check(&payload), "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH");

        let decoded = decode_check("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH").unwrap();
        assert_eq!(&*decoded, &payload);
    }

    #[test]
    fn test_bad_checksum() {
        // Last character changed
        let result = decode_check("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ");
        assert_eq!(result, Err(KeyError::InvalidChecksum));
    }

    #[test]
    fn test_bad_alphabet() {
        // '0' and 'l' are not part of the Base58 alphabet
        assert!(matches!(
            decode_check("0OIl"),
            Err(KeyError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(decode_check("11"), Err(KeyError::InvalidLength(2)));
        assert!(!is_base58check(""));
    }
}
