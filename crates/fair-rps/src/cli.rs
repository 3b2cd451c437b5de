//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "fair-rps")]
#[command(about = "Provably fair rock-paper-scissors with any odd number of moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter, e.g. "debug" or "fair_rps_core=trace"
    #[arg(long, env = "FAIR_RPS_LOG", default_value = "warn", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one round against the computer
    Play {
        #[command(flatten)]
        moves: MoveArgs,

        /// Also print the commit and reveal messages as JSON lines
        #[arg(long, env = "FAIR_RPS_JSON")]
        json: bool,
    },

    /// Print who beats whom
    Table {
        #[command(flatten)]
        moves: MoveArgs,
    },

    /// Check a revealed key against the HMAC shown before the round
    Verify {
        /// Key revealed after the round
        #[arg(long)]
        key: String,

        /// Computer move revealed after the round
        #[arg(long = "move")]
        move_name: String,

        /// HMAC shown before the round
        #[arg(long)]
        hmac: String,
    },
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    /// Move names in cycle order: an odd number, at least 3, no duplicates.
    /// Each move is beaten by the half of the moves that follow it.
    pub moves: Vec<String>,
}
