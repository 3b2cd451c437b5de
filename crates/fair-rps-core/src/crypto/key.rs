//! Secret HMAC key and the secure random source it is drawn from.

use crate::error::{GameError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of random bytes in a key
pub const KEY_BYTES: usize = 32;

/// ChaCha20 stream seeded from the operating system's entropy source.
///
/// There is no fallback: if the OS source fails, the round cannot be fair.
pub fn secure_rng() -> Result<ChaCha20Rng> {
    let rng = ChaCha20Rng::from_rng(OsRng)?;
    Ok(rng)
}

/// 256-bit secret key, kept as its lowercase hex text.
///
/// The HMAC is keyed by the UTF-8 bytes of this text, so a verifier only
/// needs the string that was revealed.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    /// Draw a fresh key from a cryptographically secure source
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; KEY_BYTES];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self(hex::encode(bytes)))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_BYTES]) -> Self {
        Self(hex::encode(bytes))
    }

    /// The hex text of the key
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bytes the HMAC is keyed with
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl FromStr for SecretKey {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| GameError::InvalidKey)?;
        let bytes: [u8; KEY_BYTES] = bytes.try_into().map_err(|_| GameError::InvalidKey)?;
        Ok(Self::from_bytes(bytes))
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", &self.0[..8])
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for SecretKey {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        self.0.serialize(s)
    }
}

impl<'de> Deserialize<'de> for SecretKey {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source that always reports exhaustion
    struct BrokenRng;

    impl RngCore for BrokenRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            Err(rand::Error::new("entropy source exhausted"))
        }
    }

    impl CryptoRng for BrokenRng {}

    #[test]
    fn test_generated_key_is_64_lowercase_hex() {
        let key = SecretKey::generate(&mut secure_rng().unwrap()).unwrap();

        assert_eq!(key.as_str().len(), 64);
        assert!(key
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_keys_are_unique() {
        let mut rng = secure_rng().unwrap();
        let key1 = SecretKey::generate(&mut rng).unwrap();
        let key2 = SecretKey::generate(&mut rng).unwrap();

        assert_ne!(key1, key2);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let key1 = SecretKey::generate(&mut ChaCha20Rng::seed_from_u64(42)).unwrap();
        let key2 = SecretKey::generate(&mut ChaCha20Rng::seed_from_u64(42)).unwrap();

        assert_eq!(key1, key2);
    }

    #[test]
    fn test_random_source_failure_propagates() {
        let err = SecretKey::generate(&mut BrokenRng).unwrap_err();
        assert!(matches!(err, GameError::RandomSourceFailure(_)));
    }

    #[test]
    fn test_parse_key() {
        let key = SecretKey::from_bytes([0xAB; KEY_BYTES]);
        let parsed: SecretKey = key.as_str().to_uppercase().parse().unwrap();

        assert_eq!(parsed, key);
        assert!(matches!("abcd".parse::<SecretKey>(), Err(GameError::InvalidKey)));
        assert!(matches!(
            "zz".repeat(32).parse::<SecretKey>(),
            Err(GameError::InvalidKey)
        ));
    }

    #[test]
    fn test_debug_hides_key() {
        let key = SecretKey::from_bytes([0x11; KEY_BYTES]);
        assert_eq!(format!("{:?}", key), "SecretKey(11111111..)");
    }
}
