//! Move sets and rule generation.

mod moves;
mod rules;

pub use moves::{Move, MoveSet};
pub use rules::{build_relation, resolve, Outcome, OutcomeRelation};
