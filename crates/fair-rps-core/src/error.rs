//! Error types for rule generation and the commitment scheme.

use thiserror::Error;

/// Why a list of move names cannot form a game
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetError {
    #[error("at least 3 moves are required, got {count}")]
    TooFewMoves { count: usize },

    #[error("the number of moves must be odd, got {count}")]
    EvenMoveCount { count: usize },

    #[error("duplicate move: {name}")]
    DuplicateMove { name: String },
}

/// Errors from game and commitment operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetError),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Secure random source unavailable: {0}")]
    RandomSourceFailure(#[from] rand::Error),

    #[error("Invalid key: expected 64 hex characters")]
    InvalidKey,

    #[error("Invalid digest: expected 64 hex characters")]
    InvalidDigest,
}

pub type Result<T> = std::result::Result<T, GameError>;
