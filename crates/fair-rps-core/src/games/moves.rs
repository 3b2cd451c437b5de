//! Move names and validated move sets.

use crate::error::{GameError, MoveSetError};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A single selectable move, identified by its case-sensitive name
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(String);

impl Move {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to bytes for commitment
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<&str> for Move {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Move {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.0)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered list of distinct moves.
///
/// The order defines adjacency on the cycle the rules are generated from.
/// A `MoveSet` always holds an odd number of at least 3 unique moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveSet(Vec<Move>);

impl MoveSet {
    pub const MIN_MOVES: usize = 3;

    /// Validate a list of names into a move set
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<Move> = names.into_iter().map(Move::new).collect();

        if moves.len() < Self::MIN_MOVES {
            return Err(MoveSetError::TooFewMoves { count: moves.len() });
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for m in &moves {
            if !seen.insert(m.as_str()) {
                return Err(MoveSetError::DuplicateMove {
                    name: m.to_string(),
                });
            }
        }

        if moves.len() % 2 == 0 {
            return Err(MoveSetError::EvenMoveCount { count: moves.len() });
        }

        Ok(Self(moves))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set has no moves
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }

    /// Move at a zero-based position
    pub fn get(&self, index: usize) -> Option<&Move> {
        self.0.get(index)
    }

    /// Position of a move in the cycle
    pub fn index_of(&self, name: &str) -> Result<usize, GameError> {
        self.0
            .iter()
            .position(|m| m.as_str() == name)
            .ok_or_else(|| GameError::UnknownMove(name.to_string()))
    }

    pub fn contains(&self, m: &Move) -> bool {
        self.0.contains(m)
    }

    /// Pick one move uniformly at random
    pub fn choose<R: Rng + CryptoRng>(&self, rng: &mut R) -> &Move {
        &self.0[rng.gen_range(0..self.0.len())]
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
