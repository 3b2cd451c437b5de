//! Fair RPS Core Library
//!
//! Rock-paper-scissors generalised to any odd number of moves, with an
//! HMAC-SHA256 commitment so the player can check after the round that the
//! computer's move was fixed before they chose theirs.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{commit, secure_rng, Commitment, SecretKey};
pub use error::{GameError, MoveSetError};
pub use games::{build_relation, resolve, Move, MoveSet, Outcome, OutcomeRelation};
pub use protocol::{CommittedRound, RevealedRound, RoundResult};
