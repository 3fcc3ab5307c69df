//! Command-line interface for offline convenience scoring.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use nearby_scorer::ConvenienceScorer;
use serde::Serialize;

mod error;
mod input;
mod score;

pub use error::CliError;

use score::{ScoreArgs, run_score};

pub(crate) const ARG_PLACES: &str = "places";
pub(crate) const ARG_LOCATION: &str = "location";
pub(crate) const ENV_PLACES: &str = "NEARBY_CMDS_SCORE_PLACES_PATH";
pub(crate) const ENV_LOCATION: &str = "NEARBY_CMDS_SCORE_LOCATION";
/// Category scored when none is configured.
pub(crate) const DEFAULT_CATEGORY: &str = "store";

/// Run the nearby CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Score(args) => run_score(args),
        Command::Profiles => {
            let mut stdout = std::io::stdout().lock();
            write_profiles(&mut stdout, &ConvenienceScorer::default())
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "nearby",
    about = "Convenience scoring for places near a location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a places payload and print a distance-sorted report.
    Score(ScoreArgs),
    /// Print the category profiles used for scoring.
    Profiles,
}

#[derive(Debug, Serialize)]
struct ProfileListing<'a> {
    categories: std::collections::BTreeMap<&'a str, nearby_core::CategoryProfile>,
    default: nearby_core::CategoryProfile,
}

fn write_profiles(writer: &mut dyn Write, scorer: &ConvenienceScorer) -> Result<(), CliError> {
    let registry = scorer.registry();
    let listing = ProfileListing {
        categories: registry
            .iter()
            .map(|(name, profile)| (name, *profile))
            .collect(),
        default: registry.fallback(),
    };
    write_json(writer, &listing)
}

pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
