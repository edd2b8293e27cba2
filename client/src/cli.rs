use std::{
    io::{self, BufRead, Write},
    num::ParseIntError,
    path::PathBuf,
};

use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::config::VariantChoice;

pub const TURNS_PROMPT: &str = "Number of turns: ";

/// Play Conway's Game of Life in the terminal.
#[derive(Parser, Debug)]
#[command(name = "termlife", version, about)]
pub struct Args {
    /// Seed pattern file. Without one the board is seeded randomly.
    pub seed_file: Option<PathBuf>,

    /// Border treatment and rule.
    #[arg(long, value_enum)]
    pub variant: Option<VariantChoice>,

    /// Board width and height.
    #[arg(long)]
    pub size: Option<usize>,

    /// Number of turns; asked for interactively when omitted.
    #[arg(long)]
    pub turns: Option<u32>,

    /// Pause after each frame, in milliseconds.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for the random board.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Kill cells the fixed-border rule leaves unset instead of keeping
    /// whatever their next-state slot held.
    #[arg(long)]
    pub clear_stale_pending: bool,

    /// JSON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// More log output on stderr; repeat for more.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Error, Debug)]
pub enum TurnCountError {
    #[error("no turn count given")]
    Eof,

    #[error("invalid turn count {input:?}, expected a non-negative integer")]
    Invalid {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("couldn't read turn count")]
    Io(#[from] io::Error),
}

/// Prompts on `output` and reads one line from `input` as the turn count.
pub fn read_turn_count<R, W>(mut input: R, mut output: W) -> Result<u32, TurnCountError>
where
    R: BufRead,
    W: Write,
{
    output.write_all(TURNS_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TurnCountError::Eof);
    }

    let trimmed = line.trim();
    trimmed.parse::<u32>().map_err(|source| TurnCountError::Invalid {
        input: trimmed.to_owned(),
        source,
    })
}
