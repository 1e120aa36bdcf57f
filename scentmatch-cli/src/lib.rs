//! Command-line interface for the scentmatch engine.
//!
//! The `rank` subcommand reads a perfume catalogue and a raw questionnaire
//! answer document, sanitises the answers, ranks the catalogue and prints the
//! result as JSON. Options layer from CLI flags, `SCENTMATCH_*` environment
//! variables and configuration files.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod rank;

pub use error::CliError;

use rank::{RankArgs, run_rank};

pub(crate) const ARG_CATALOGUE: &str = "catalogue";
pub(crate) const ARG_ANSWERS: &str = "answers";
pub(crate) const ARG_LIMIT: &str = "limit";
pub(crate) const ARG_SCORING_CONFIG: &str = "scoring-config";
pub(crate) const ARG_DISLIKE_POLICY: &str = "dislike-policy";
pub(crate) const ENV_CATALOGUE: &str = "SCENTMATCH_CMDS_RANK_CATALOGUE";
pub(crate) const ENV_ANSWERS: &str = "SCENTMATCH_CMDS_RANK_ANSWERS";

/// Run the scentmatch CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, an
/// input cannot be read or decoded, or the ranking cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "scentmatch",
    about = "Rank a perfume catalogue against questionnaire answers",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank a catalogue file against an answers file.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
