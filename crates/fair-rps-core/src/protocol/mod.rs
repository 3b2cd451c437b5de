//! Round protocol: types, the commit/reveal round, and transcript messages.

mod messages;
mod round;
mod types;

pub use messages::{CommitMessage, RevealMessage};
pub use round::{CommittedRound, RevealedRound};
pub use types::RoundResult;
