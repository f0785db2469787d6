// keyring-core/src/crypto/mnemonic.rs
//
// Mnemonic Module - BIP-39 phrases and seed expansion
// Standard: BIP-39 (Mnemonic), PBKDF2-HMAC-SHA512 (Seed Derivation)

use crate::error::{KeyError, KeyResult, MnemonicError};
use bip39::Mnemonic;
use hmac::Hmac;
use rand::{rngs::OsRng, RngCore};
use sha2::Sha512;
use std::borrow::Cow;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const PBKDF2_ROUNDS: u32 = 2048;
const SALT_PREFIX: &str = "mnemonic";

/// Supported phrase lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCount {
    /// 12 words (128-bit entropy)
    Twelve = 12,
    /// 15 words (160-bit entropy)
    Fifteen = 15,
    /// 18 words (192-bit entropy)
    Eighteen = 18,
    /// 21 words (224-bit entropy)
    TwentyOne = 21,
    /// 24 words (256-bit entropy)
    TwentyFour = 24,
}

impl WordCount {
    #[inline]
    pub const fn entropy_bytes(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    fn from_count(count: usize) -> Option<Self> {
        match count {
            12 => Some(WordCount::Twelve),
            15 => Some(WordCount::Fifteen),
            18 => Some(WordCount::Eighteen),
            21 => Some(WordCount::TwentyOne),
            24 => Some(WordCount::TwentyFour),
            _ => None,
        }
    }
}

/// Validated BIP-39 phrase (English wordlist).
///
/// # Security
/// - **ZeroizeOnDrop**: the phrase is overwritten when the value is dropped
/// - **No Debug Leak**: `Debug` never prints the words
/// - **CSPRNG**: generation uses `OsRng`
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MnemonicPhrase {
    phrase: String,
    word_count: usize,
}

impl std::fmt::Debug for MnemonicPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MnemonicPhrase")
            .field("word_count", &self.word_count)
            .field("phrase", &"[REDACTED]")
            .finish()
    }
}

impl MnemonicPhrase {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Generate a fresh phrase from OS entropy.
    pub fn generate(word_count: WordCount) -> KeyResult<Self> {
        let entropy_size = word_count.entropy_bytes();

        let mut entropy = Zeroizing::new([0u8; 32]);
        OsRng.fill_bytes(&mut entropy[..entropy_size]);

        let mnemonic = Mnemonic::from_entropy(&entropy[..entropy_size])
            .map_err(|e| MnemonicError::Bip39Error(e.to_string()))?;

        Ok(Self {
            phrase: mnemonic.to_string(),
            word_count: word_count as usize,
        })
    }

    /// Parse an existing phrase.
    ///
    /// Whitespace is normalized; word count, wordlist membership and
    /// checksum are all checked.
    pub fn from_phrase(phrase: &str) -> KeyResult<Self> {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let count = words.len();

        if WordCount::from_count(count).is_none() {
            return Err(MnemonicError::InvalidWordCount(count).into());
        }

        let normalized = words.join(" ");
        Mnemonic::parse(&normalized).map_err(classify_bip39_error)?;

        Ok(Self {
            phrase: normalized,
            word_count: count,
        })
    }

    // =========================================================================
    // GETTERS
    // =========================================================================

    /// The normalized phrase. Never log this.
    #[inline]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    // =========================================================================
    // SEED DERIVATION
    // =========================================================================

    /// 64-byte BIP-39 seed (PBKDF2-HMAC-SHA512, 2048 rounds).
    ///
    /// `passphrase` is the optional BIP-39 "25th word"; `None` means empty.
    pub fn to_seed(&self, passphrase: Option<&str>) -> KeyResult<Zeroizing<[u8; 64]>> {
        expand_seed(&self.phrase, passphrase)
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    #[inline]
    pub fn validate(phrase: &str) -> bool {
        Self::from_phrase(phrase).is_ok()
    }
}

/// PBKDF2-HMAC-SHA512 over any phrase, with no wordlist or checksum check.
///
/// Phrase and passphrase are NFKD-normalized; whitespace is kept as given.
pub fn expand_seed(phrase: &str, passphrase: Option<&str>) -> KeyResult<Zeroizing<[u8; 64]>> {
    let mut password = Cow::Borrowed(phrase);
    Mnemonic::normalize_utf8_cow(&mut password);

    let mut salt = Cow::Owned(format!("{}{}", SALT_PREFIX, passphrase.unwrap_or("")));
    Mnemonic::normalize_utf8_cow(&mut salt);

    let mut seed = Zeroizing::new([0u8; 64]);
    pbkdf2::pbkdf2::<Hmac<Sha512>>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut *seed)
        .map_err(|e| MnemonicError::Bip39Error(e.to_string()))?;

    for buffer in [password, salt] {
        if let Cow::Owned(mut owned) = buffer {
            owned.zeroize();
        }
    }
    Ok(seed)
}

fn classify_bip39_error(e: bip39::Error) -> KeyError {
    let error = match e {
        bip39::Error::UnknownWord(index) => MnemonicError::UnknownWord(format!("#{}", index)),
        bip39::Error::InvalidChecksum => MnemonicError::ChecksumFailed,
        bip39::Error::BadWordCount(count) => MnemonicError::InvalidWordCount(count),
        other => MnemonicError::Bip39Error(other.to_string()),
    };
    KeyError::Mnemonic(error)
}

// =============================================================================
// UNIT TESTS
// =============================================================================
