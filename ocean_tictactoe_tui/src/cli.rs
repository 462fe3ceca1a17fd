//! Command-line options for the TUI binary.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "ocean_tictactoe_tui", version, about)]
pub struct Cli {
    /// Write diagnostics to this file; the screen itself stays clean.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Render marks as plain X and O instead of chess glyphs.
    #[arg(long)]
    pub ascii: bool,
}
