use std::path::PathBuf;

use tracing_subscriber::filter::LevelFilter;
use veto::{GameTitle, Side};

/// Runs a map veto between two teams and prints the resulting match.
///
/// Commands (`ban <map>`, `pick <map>`, `side <label>`, `undo`) are read one
/// per line from `--script` or stdin. Blank lines and `#` comments are skipped.
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "veto", version)]
pub struct Args {
    /// Game title (`cod` or `valorant`).
    #[arg(long, short)]
    pub title: GameTitle,

    #[arg(long)]
    pub team_a: String,

    #[arg(long)]
    pub team_b: String,

    /// Flip a coin for roster order. The winner becomes roster A.
    #[arg(long)]
    pub coin_flip: bool,

    /// Side the coin flip winner gets. Defaults to the title's first side.
    #[arg(long, requires = "coin_flip")]
    pub preference: Option<Side>,

    /// Seed for the coin flip.
    #[arg(long, requires = "coin_flip")]
    pub seed: Option<u64>,

    /// Defaults to 5 for Call of Duty and 3 for Valorant.
    #[arg(long)]
    pub best_of: Option<u32>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Print the finished match as JSON on stdout. Prompts go to stderr.
    #[arg(long)]
    pub json: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn best_of(&self) -> u32 {
        self.best_of.unwrap_or_else(|| self.title.default_best_of())
    }

    pub fn preference(&self) -> Side {
        self.preference
            .unwrap_or_else(|| self.title.side_options()[0])
    }

    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }

        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
