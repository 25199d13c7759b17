use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Parser, Debug)]
#[command(name = "ember")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick a move for a chess position within a time budget")]
pub struct Args {
    /// Position to search, as FEN.
    #[arg(long, default_value = START_FEN)]
    pub fen: String,

    /// Search to this depth instead of using the clock.
    #[arg(short, long)]
    pub depth: Option<u8>,

    /// Spend this many milliseconds on the move.
    #[arg(short, long)]
    pub movetime: Option<u64>,

    /// Stop after searching this many nodes.
    #[arg(short, long)]
    pub nodes: Option<u64>,

        /// Milliseconds left on the game clock.
    #[arg(long, default_value_t = 60_000)]
    pub clock: u64,

    /// Engine parameter as NAME=VALUE. May be repeated.
    #[arg(short, long = "option", value_name = "NAME=VALUE")]
    pub options: Vec<String>,

    /// Print every engine parameter with its range and exit.
    #[arg(long)]
    pub list_options: bool,

    /// Write the log to a file instead of stderr.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
