//! Clap derive structures for the `genlottery` CLI.
//!
//! One flat command: pick a game and a line count, then either generate
//! (the default), show the saved batch, or delete it. The action flags
//! are mutually exclusive, matching the original tool.

use clap::{ArgAction, Args, Parser};
use strum::VariantNames;

use genlottery_core::{LotteryType, MAX_LINES, MIN_LINES};

/// genlottery -- random number generator for UK lottery games
#[derive(Debug, Parser)]
#[command(
    name = "genlottery",
    disable_version_flag = true,
    about = "Generate random numbers for all current UK lottery games",
    long_about = "Generates random lottery numbers for a chosen game type and\n\
        optionally saves them, one store file per game. Without --text the\n\
        interactive form surface runs in the terminal.",
    after_help = "NOTE: --delete, --no_save, --print and --version are mutually exclusive"
)]
pub struct Cli {
    /// The type of lottery to generate numbers for [default: EURO, or the
    /// configured default]
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_parser = parse_lottery_type
    )]
    pub lottery_type: Option<LotteryType>,

    /// The number of lottery lines to generate [default: 2, or the
    /// configured default]
    #[arg(
        short = 'l',
        long = "lines",
        value_name = "N",
        value_parser = parse_line_count
    )]
    pub lines: Option<usize>,

    /// Display in the terminal instead of running the interactive form
    #[arg(long)]
    pub text: bool,

    #[command(flatten)]
    pub mode: ModeOpts,

    /// Increase log verbosity (--verbose, --verbose --verbose, ...)
    #[arg(long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// The mutually exclusive action flags.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct ModeOpts {
    /// Delete the saved file, use --type to determine which file to delete
    #[arg(short = 'd', long)]
    pub delete: bool,

    /// Do NOT save results to a file
    #[arg(short = 'n', long = "no_save")]
    pub no_save: bool,

    /// Show previously saved data, use --type to choose the saved file
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Print name and version, then exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}

fn parse_lottery_type(raw: &str) -> Result<LotteryType, String> {
    raw.parse().map_err(|_| {
        format!(
            "'{raw}' is not a lottery type (one of: {})",
            LotteryType::VARIANTS.join(", ")
        )
    })
}

fn parse_line_count(raw: &str) -> Result<usize, String> {
    let invalid = || format!("{raw} is invalid. The valid range is {MIN_LINES}-{MAX_LINES}");
    let lines: usize = raw.parse().map_err(|_| invalid())?;
    if (MIN_LINES..=MAX_LINES).contains(&lines) {
        Ok(lines)
    } else {
        Err(invalid())
    }
}
