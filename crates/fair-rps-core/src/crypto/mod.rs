//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - SecretKey and the OS-seeded secure random source
//! - Commitment (HMAC-SHA256 of a move under the secret key)

mod commitment;
mod key;

pub use commitment::{commit, Commitment};
pub use key::{secure_rng, SecretKey, KEY_BYTES};
