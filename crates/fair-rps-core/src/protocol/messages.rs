//! Round transcript messages.
//!
//! These are what gets shown to the user, serialised as JSON when a
//! machine-readable transcript is requested.

use super::types::RoundResult;
use crate::crypto::{Commitment, SecretKey};
use crate::games::Move;
use serde::{Deserialize, Serialize};

/// Sent before the user chooses
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    pub hmac: Commitment,
}

/// Sent after the round is decided
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevealMessage {
    pub user_move: Move,
    pub computer_move: Move,
    pub result: RoundResult,
    pub key: SecretKey,
    pub hmac: Commitment,
}

impl RevealMessage {
    /// Check the reveal against the commitment published before the user moved
    pub fn verify(&self, published: &CommitMessage) -> bool {
        self.hmac == published.hmac && published.hmac.verify(&self.key, &self.computer_move)
    }
}
