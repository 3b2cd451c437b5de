//! One interactive round: commit, prompt, resolve, reveal.

use crate::menu;
use anyhow::Result;
use fair_rps_core::{CommittedRound, OutcomeRelation, RevealedRound, RoundResult};
use rand::{CryptoRng, RngCore};
use std::io::{BufRead, Write};
use tracing::info;

/// Play a round over the given input and output.
///
/// Returns `None` if the user left before choosing a move.
pub fn play_round<R, I, W>(
    relation: &OutcomeRelation,
    rng: &mut R,
    input: &mut I,
    out: &mut W,
    json: bool,
) -> Result<Option<RevealedRound>>
where
    R: RngCore + CryptoRng,
    I: BufRead,
    W: Write,
{
    let round = CommittedRound::new(relation.moves(), rng)?;

    writeln!(out, "HMAC: {}", round.commitment())?;
    if json {
        writeln!(out, "{}", serde_json::to_string(&round.commit_message())?)?;
    }

    let Some(user_move) = menu::prompt(input, out, relation)? else {
        info!("user left before choosing");
        return Ok(None);
    };

    let revealed = round.resolve(&user_move, relation)?;
    info!(result = %revealed.result, "round finished");

    writeln!(out, "Your move: {}", revealed.user_move)?;
    writeln!(out, "Computer move: {}", revealed.system_move)?;
    writeln!(out, "{}", verdict(revealed.result))?;
    writeln!(out, "HMAC key: {}", revealed.key)?;
    if json {
        writeln!(out, "{}", serde_json::to_string(&revealed.reveal_message())?)?;
    }

    Ok(Some(revealed))
}

fn verdict(result: RoundResult) -> &'static str {
    match result {
        RoundResult::UserWins => "You win!",
        RoundResult::SystemWins => "You lose!",
        RoundResult::Draw => "Draw!",
    }
}
