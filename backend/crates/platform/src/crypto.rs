//! Cryptographic Utilities
//!
//! Opaque identifiers drawn from the operating system's entropy source.

use rand::{RngCore, rngs::OsRng};
use thiserror::Error;

/// Symbols allowed in opaque tokens: `0-9`, `A-Z`, `a-z` and `-`
pub const TOKEN_ALPHABET: &[u8] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz-";

/// Random token generation errors
#[derive(Debug, Error)]
pub enum RandomError {
    /// The entropy source failed; no weaker fallback is attempted
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(#[from] rand::Error),

    /// Alphabet is empty, longer than 256 symbols, or not ASCII
    #[error("Token alphabet must be 1 to 256 ASCII symbols")]
    InvalidAlphabet,
}

/// Generate an opaque token of exactly `len` symbols from [`TOKEN_ALPHABET`]
///
/// Backed by [`OsRng`]. A failing entropy source aborts generation.
pub fn random_token(len: usize) -> Result<String, RandomError> {
    random_string_with(&mut OsRng, TOKEN_ALPHABET, len)
}

/// Generate `len` symbols drawn uniformly and independently from `alphabet`
///
/// Each symbol is picked from one random byte using rejection sampling: bytes
/// that fall past the largest multiple of the alphabet size are discarded, so
/// every symbol has exactly the same probability.
pub fn random_string_with<R>(
    rng: &mut R,
    alphabet: &[u8],
    len: usize,
) -> Result<String, RandomError>
where
    R: RngCore + ?Sized,
{
    if alphabet.is_empty() || alphabet.len() > 256 || !alphabet.is_ascii() {
        return Err(RandomError::InvalidAlphabet);
    }

    let symbols = alphabet.len();
    let zone = 256 - (256 % symbols);

    let mut token = String::with_capacity(len);
    let mut produced = 0usize;
    let mut buf = [0u8; 64];

    while produced < len {
        rng.try_fill_bytes(&mut buf)?;

        for &byte in &buf {
            let byte = usize::from(byte);
            if byte >= zone {
                continue;
            }

            token.push(char::from(alphabet[byte % symbols]));
            produced += 1;

            if produced == len {
                break;
            }
        }
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Replays a fixed byte pattern
    struct SequenceRng {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            let mut buf = [0u8; 4];
            self.fill_bytes(&mut buf);
            u32::from_le_bytes(buf)
        }

        fn next_u64(&mut self) -> u64 {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf);
            u64::from_le_bytes(buf)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest.iter_mut() {
                *b = self.bytes[self.pos % self.bytes.len()];
                self.pos += 1;
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    /// Always fails, like an exhausted entropy source
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {}

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source exhausted"))
        }
    }

    #[test]
    fn test_alphabet_contents() {
        assert!(TOKEN_ALPHABET.is_ascii());
        assert!(TOKEN_ALPHABET.contains(&b'-'));
        let unique: HashSet<_> = TOKEN_ALPHABET.iter().collect();
        assert_eq!(unique.len(), TOKEN_ALPHABET.len());
    }

    #[test]
    fn test_random_token_length() {
        for len in [0, 1, 32, 100] {
            let token = random_token(len).unwrap();
            assert_eq!(token.chars().count(), len);
        }
    }

    #[test]
    fn test_random_token_alphabet() {
        let token = random_token(1_000).unwrap();
        assert!(token.bytes().all(|b| TOKEN_ALPHABET.contains(&b)));
    }

    #[test]
    fn test_random_token_uniqueness() {
        let sample: HashSet<String> = (0..10_000).map(|_| random_token(32).unwrap()).collect();
        assert_eq!(sample.len(), 10_000);
    }

    #[test]
    fn test_rejection_sampling_skips_biased_bytes() {
        // 252..=255 are outside the unbiased zone for a 63-symbol alphabet
        let mut rng = SequenceRng {
            bytes: vec![255, 254, 253, 252, 0, 64, 62],
            pos: 0,
        };
        let token = random_string_with(&mut rng, TOKEN_ALPHABET, 3).unwrap();
        assert_eq!(token, "01-");
    }

    #[test]
    fn test_power_of_two_alphabet_uses_every_byte() {
        let mut rng = SequenceRng {
            bytes: vec![0, 1, 255],
            pos: 0,
        };
        let token = random_string_with(&mut rng, b"ab", 3).unwrap();
        assert_eq!(token, "abb");
    }

    #[test]
    fn test_entropy_failure_propagates() {
        let result = random_string_with(&mut BrokenRng, TOKEN_ALPHABET, 32);
        assert!(matches!(result, Err(RandomError::EntropyUnavailable(_))));
    }

    #[test]
    fn test_zero_length_does_not_touch_rng() {
        let token = random_string_with(&mut BrokenRng, TOKEN_ALPHABET, 0).unwrap();
        assert!(token.is_empty());
    }

    #[test]
    fn test_invalid_alphabet() {
        let mut rng = SequenceRng { bytes: vec![0], pos: 0 };
        assert!(matches!(
            random_string_with(&mut rng, b"", 4),
            Err(RandomError::InvalidAlphabet)
        ));
        assert!(matches!(
            random_string_with(&mut rng, "é".as_bytes(), 4),
            Err(RandomError::InvalidAlphabet)
        ));
    }
}
