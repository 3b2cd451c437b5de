//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Round result, from the user's side of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    UserWins,
    SystemWins,
    Draw,
}

impl RoundResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundResult::UserWins => "User wins",
            RoundResult::SystemWins => "Computer wins",
            RoundResult::Draw => "Draw",
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
