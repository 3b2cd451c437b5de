//! Rule generation for N-move rock-paper-scissors.
//!
//! Moves sit on a cycle in the order they were given. With `half = N / 2`,
//! each move is beaten by the `half` moves that follow it and beats the
//! `half` moves that precede it. For `[Rock, Paper, Scissors]` this is the
//! classic game; for `[Rock, Spock, Paper, Lizard, Scissors]` it is RPSLS.

use super::moves::{Move, MoveSet};
use crate::error::Result;
use crate::protocol::RoundResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one move against another, from the first move's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same pairing seen from the other side
    pub fn opposite(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete pairwise outcome table over a move set.
///
/// Row-major `N x N`; cell `(a, b)` is the outcome of `a` played against `b`.
/// Built once and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeRelation {
    moves: MoveSet,
    cells: Vec<Outcome>,
}

impl OutcomeRelation {
    /// Generate the relation for a validated move set
    pub fn new(moves: MoveSet) -> Self {
        let n = moves.len();
        let half = n / 2;
        let mut cells = vec![Outcome::Draw; n * n];

        for i in 0..n {
            for j in 1..=half {
                let k = (i + j) % n;
                cells[k * n + i] = Outcome::Win;
                cells[i * n + k] = Outcome::Lose;
            }
        }

        // Self-pairs; already Draw from initialisation for odd N.
        for i in 0..n {
            cells[i * n + i] = Outcome::Draw;
        }

        tracing::debug!(moves = n, half, "built outcome relation");

        Self { moves, cells }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Outcome by position in the move set
    pub fn outcome_at(&self, row: usize, col: usize) -> Outcome {
        self.cells[row * self.moves.len() + col]
    }

    /// Outcome of `a` played against `b`
    pub fn outcome(&self, a: &Move, b: &Move) -> Result<Outcome> {
        let row = self.moves.index_of(a.as_str())?;
        let col = self.moves.index_of(b.as_str())?;
        Ok(self.outcome_at(row, col))
    }

    /// One row of the table: `m` against every move, in move-set order
    pub fn row(&self, m: &Move) -> Result<&[Outcome]> {
        let n = self.moves.len();
        let row = self.moves.index_of(m.as_str())?;
        Ok(&self.cells[row * n..(row + 1) * n])
    }

    /// Moves that `m` beats
    pub fn beaten_by(&self, m: &Move) -> Result<Vec<&Move>> {
        let row = self.row(m)?;
        Ok(self
            .moves
            .iter()
            .zip(row)
            .filter(|(_, o)| **o == Outcome::Win)
            .map(|(other, _)| other)
            .collect())
    }

    /// Every ordered pair with its outcome
    pub fn pairs(&self) -> impl Iterator<Item = (&Move, &Move, Outcome)> + '_ {
        let n = self.moves.len();
        self.cells.iter().enumerate().map(move |(idx, o)| {
            (
                &self.moves.as_slice()[idx / n],
                &self.moves.as_slice()[idx % n],
                *o,
            )
        })
    }
}

/// Validate move names and generate their outcome relation
pub fn build_relation<I, S>(names: I) -> Result<OutcomeRelation>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let moves = MoveSet::new(names)?;
    Ok(OutcomeRelation::new(moves))
}

/// Decide a round from the user's perspective
pub fn resolve(
    user_move: &Move,
    system_move: &Move,
    relation: &OutcomeRelation,
) -> Result<RoundResult> {
    // Membership is checked even for equal moves so a stray name never
    // resolves to a draw.
    let outcome = relation.outcome(user_move, system_move)?;

    let result = match outcome {
        Outcome::Draw => RoundResult::Draw,
        Outcome::Win => RoundResult::UserWins,
        Outcome::Lose => RoundResult::SystemWins,
    };

    tracing::debug!(user = %user_move, system = %system_move, %result, "resolved round");

    Ok(result)
}
