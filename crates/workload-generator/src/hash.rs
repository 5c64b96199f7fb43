//! Key hashing and alphabet derivation.

use md5::{Digest, Md5};
use std::ops::Range;

/// Length of an alphabet: two hex-encoded MD5 digests.
pub const ALPHABET_LEN: usize = 64;

/// Lowercase hex MD5 digest of `input` (32 characters).
pub fn hash(input: &str) -> String {
    hex::encode(Md5::digest(input.as_bytes()))
}

/// The 64 hex characters every profile field is sliced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(String);

impl Alphabet {
    /// `hash(key) + hash(reversed key)`.
    pub fn from_key(key: &str) -> Self {
        let reversed: String = key.chars().rev().collect();
        Self(format!("{}{}", hash(key), hash(&reversed)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fixed-offset slice of the alphabet.
    pub fn slice(&self, range: Range<usize>) -> &str {
        &self.0[range]
    }

    /// Value of the character at `index` read as a digit in `radix`.
    ///
    /// Alphabet characters are hex digits, so this never falls back to zero
    /// for radix 16 or above.
    pub fn digit(&self, index: usize, radix: u32) -> u32 {
        self.0
            .as_bytes()
            .get(index)
            .and_then(|b| char::from(*b).to_digit(radix))
            .unwrap_or(0)
    }

    /// A window of hex characters parsed as one number.
    pub fn hex_window(&self, range: Range<usize>) -> u32 {
        u32::from_str_radix(self.slice(range), 16).unwrap_or(0)
    }

    /// Position of the first occurrence of `marker`.
    pub fn position(&self, marker: char) -> Option<usize> {
        self.0.find(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_digests() {
        assert_eq!(hash(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(hash("1"), "c4ca4238a0b923820dcc509a6f75849b");
    }

    #[test]
    fn test_alphabet_is_hash_of_key_and_reversed_key() {
        let alphabet = Alphabet::from_key("12");
        assert_eq!(alphabet.as_str().len(), ALPHABET_LEN);
        assert_eq!(alphabet.slice(0..32), hash("12"));
        assert_eq!(alphabet.slice(32..64), hash("21"));
    }

    #[test]
    fn test_digit_and_window() {
        let alphabet = Alphabet::from_key("000000000001");
        let window = alphabet.slice(36..40);
        assert_eq!(
            alphabet.hex_window(36..40),
            u32::from_str_radix(window, 16).unwrap()
        );
        let c = alphabet.as_str().as_bytes()[41] as char;
        assert_eq!(alphabet.digit(41, 16), c.to_digit(16).unwrap());
    }

    #[test]
    fn test_digit_out_of_range_is_zero() {
        let alphabet = Alphabet::from_key("x");
        assert_eq!(alphabet.digit(ALPHABET_LEN, 16), 0);
    }
}
