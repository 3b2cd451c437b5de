//! A single commit/reveal round.
//!
//! `CommittedRound` exists between the commitment being shown and the user
//! choosing a move; it exposes only the commitment. Resolving it consumes
//! it and yields a `RevealedRound`, which carries the key.

use super::messages::{CommitMessage, RevealMessage};
use super::types::RoundResult;
use crate::crypto::{Commitment, SecretKey};
use crate::error::Result;
use crate::games::{resolve, Move, MoveSet, OutcomeRelation};
use rand::{CryptoRng, RngCore};
use std::fmt;

/// Computer move fixed and committed, key still secret
pub struct CommittedRound {
    key: SecretKey,
    system_move: Move,
    commitment: Commitment,
}

impl CommittedRound {
    /// Generate a key, pick the computer's move, and commit to it
    pub fn new<R: RngCore + CryptoRng>(moves: &MoveSet, rng: &mut R) -> Result<Self> {
        let key = SecretKey::generate(rng)?;
        let system_move = moves.choose(rng).clone();
        let commitment = Commitment::new(&key, &system_move);

        tracing::debug!(%commitment, "committed to computer move");

        Ok(Self {
            key,
            system_move,
            commitment,
        })
    }

    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn commit_message(&self) -> CommitMessage {
        CommitMessage {
            hmac: self.commitment,
        }
    }

    /// Resolve against the user's move and reveal the key
    pub fn resolve(self, user_move: &Move, relation: &OutcomeRelation) -> Result<RevealedRound> {
        let result = resolve(user_move, &self.system_move, relation)?;

        Ok(RevealedRound {
            user_move: user_move.clone(),
            system_move: self.system_move,
            result,
            key: self.key,
            commitment: self.commitment,
        })
    }
}

impl fmt::Debug for CommittedRound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommittedRound")
            .field("commitment", &self.commitment)
            .finish_non_exhaustive()
    }
}

/// Finished round with everything needed to check the commitment
#[derive(Clone, Debug)]
pub struct RevealedRound {
    pub user_move: Move,
    pub system_move: Move,
    pub result: RoundResult,
    pub key: SecretKey,
    pub commitment: Commitment,
}

impl RevealedRound {
    /// Check that the revealed key and computer move match the commitment
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, &self.system_move)
    }

    pub fn reveal_message(&self) -> RevealMessage {
        RevealMessage {
            user_move: self.user_move.clone(),
            computer_move: self.system_move.clone(),
            result: self.result,
            key: self.key.clone(),
            hmac: self.commitment,
        }
    }
}
