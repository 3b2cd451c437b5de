//! Numbered move menu and the input loop behind it.

use crate::table;
use fair_rps_core::{Move, MoveSet, OutcomeRelation};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

/// What a line of user input asks for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Play(Move),
    Help,
    Exit,
}

/// Input that does not name a menu entry; answered with a re-prompt
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid choice. Please select 0-{max}.")]
    OutOfRange { max: usize },
}

pub fn render(moves: &MoveSet) -> String {
    let mut menu = String::from("Available moves:\n");
    for (i, m) in moves.iter().enumerate() {
        let _ = writeln!(menu, "{} - {}", i + 1, m);
    }
    menu.push_str("0 - Exit\n? - Help\n");
    menu
}

pub fn parse_choice(input: &str, moves: &MoveSet) -> Result<Choice, InvalidInput> {
    let input = input.trim();
    if input == "?" {
        return Ok(Choice::Help);
    }

    let index: usize = input.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => InvalidInput::OutOfRange { max: moves.len() },
        _ => InvalidInput::NotANumber,
    })?;
    if index == 0 {
        return Ok(Choice::Exit);
    }

    moves
        .get(index - 1)
        .cloned()
        .map(Choice::Play)
        .ok_or(InvalidInput::OutOfRange { max: moves.len() })
}

/// Show the menu and read until the user picks a move or leaves.
///
/// Returns `None` on `0` or end of input.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    relation: &OutcomeRelation,
) -> io::Result<Option<Move>> {
    write!(out, "{}", render(relation.moves()))?;

    let mut buf = Vec::new();
    loop {
        write!(out, "Enter your move: ")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            tracing::debug!("input closed, leaving game");
            return Ok(None);
        }
        // Bytes that are not UTF-8 fall through to a re-prompt
        let line = String::from_utf8_lossy(&buf);

        match parse_choice(&line, relation.moves()) {
            Ok(Choice::Play(m)) => return Ok(Some(m)),
            Ok(Choice::Exit) => return Ok(None),
            Ok(Choice::Help) => {
                writeln!(out, "{}", table::render(relation))?;
                write!(out, "{}", render(relation.moves()))?;
            }
            Err(e) => {
                tracing::debug!(input = line.trim(), "rejected menu input");
                writeln!(out, "{}", e)?;
            }
        }
    }
}
