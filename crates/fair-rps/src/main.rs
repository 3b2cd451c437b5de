//! Fair RPS
//!
//! Rock-paper-scissors with any odd number of moves. Before you pick, the
//! computer prints an HMAC of its move; afterwards it reveals the key so you
//! can check it did not change its mind.
//!
//! Commands:
//! - `play <MOVES>...` - play one round
//! - `table <MOVES>...` - print who beats whom
//! - `verify --key K --move M --hmac H` - check a finished round

mod cli;
mod game;
mod menu;
mod table;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use fair_rps_core::{build_relation, secure_rng, Commitment, Move, OutcomeRelation, SecretKey};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const MOVE_SET_HINT: &str =
    "provide an odd number (3 or more) of unique moves, e.g. `fair-rps play Rock Paper Scissors`";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the round transcript.
    let env_filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command {
        Command::Play { moves, json } => play(moves.moves, json),
        Command::Table { moves } => {
            let relation = relation(moves.moves)?;
            println!("{}", table::render(&relation));
            Ok(())
        }
        Command::Verify {
            key,
            move_name,
            hmac,
        } => verify(&key, &move_name, &hmac),
    }
}

fn relation(names: Vec<String>) -> Result<OutcomeRelation> {
    let relation = build_relation(names).context(MOVE_SET_HINT)?;
    info!(moves = relation.moves().len(), "rules generated");
    Ok(relation)
}

fn play(names: Vec<String>, json: bool) -> Result<()> {
    let relation = relation(names)?;
    let mut rng = secure_rng().context("cannot start a fair round")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    game::play_round(&relation, &mut rng, &mut stdin.lock(), &mut stdout.lock(), json)?;

    Ok(())
}

fn verify(key: &str, move_name: &str, hmac: &str) -> Result<()> {
    let key: SecretKey = key.parse()?;
    let commitment: Commitment = hmac.parse()?;

    if !commitment.verify(&key, &Move::from(move_name)) {
        bail!("HMAC does not match key and move: the round was not fair");
    }

    println!("OK");
    Ok(())
}
