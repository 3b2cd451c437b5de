//! Commitment for the commit-reveal scheme.

use super::SecretKey;
use crate::error::{GameError, Result};
use crate::games::Move;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(key: &SecretKey, message: &[u8]) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(message);
    mac
}

/// Commitment = HMAC-SHA256(key, move)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Create a commitment binding `key` to `m`
    pub fn new(key: &SecretKey, m: &Move) -> Self {
        let digest = keyed_mac(key, m.as_bytes()).finalize().into_bytes();
        Self(digest.into())
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the revealed key and move produce this commitment
    pub fn verify(&self, key: &SecretKey, m: &Move) -> bool {
        keyed_mac(key, m.as_bytes()).verify_slice(&self.0).is_ok()
    }
}

/// Lowercase hex HMAC of `m` under `key`
pub fn commit(key: &SecretKey, m: &Move) -> String {
    Commitment::new(key, m).to_string()
}

impl FromStr for Commitment {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s).map_err(|_| GameError::InvalidDigest)?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| GameError::InvalidDigest)?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for Commitment {
    fn serialize<S: Serializer>(&self, s: S) -> std::result::Result<S::Ok, S::Error> {
        hex::encode(self.0).serialize(s)
    }
}

impl<'de> Deserialize<'de> for Commitment {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let hex_str = String::deserialize(d)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}
