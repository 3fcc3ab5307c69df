//! Score command implementation for the nearby CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use nearby_core::LatLng;
use nearby_scorer::{ConvenienceScorer, NearbyReport, filter_by_min_rating};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{file_is_file, load_places};
use crate::{
    ARG_LOCATION, ARG_PLACES, CliError, DEFAULT_CATEGORY, ENV_LOCATION, ENV_PLACES, write_json,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score places already fetched from a proximity search. \
                 The payload is either a provider nearby-search response \
                 (an object with a `results` array) or a bare JSON array of \
                 places. The report lists places nearest first with the \
                 convenience score and its interpretation.",
    about = "Score the convenience of places around a location"
)]
#[ortho_config(prefix = "NEARBY")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the places to score.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) places_path: Option<Utf8PathBuf>,
    /// Search origin as "lat,lng".
    #[arg(long = ARG_LOCATION, value_name = "lat,lng", allow_hyphen_values = true)]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Place category used to pick the scoring profile (default "store").
    #[arg(long, value_name = "name")]
    #[serde(default)]
    pub(crate) category: Option<String>,
    /// Drop places rated below this value before scoring.
    #[arg(long, value_name = "rating")]
    #[serde(default)]
    pub(crate) min_rating: Option<f64>,
    /// Radius the places were searched with, echoed in the report metadata.
    #[arg(long, value_name = "metres")]
    #[serde(default)]
    pub(crate) radius_m: Option<u32>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ScoreConfig {
    /// Path to the JSON places payload.
    pub(crate) places_path: Utf8PathBuf,
    /// Validated search origin.
    pub(crate) location: LatLng,
    /// Category key used for profile lookup.
    pub(crate) category: String,
    /// Optional rating threshold.
    pub(crate) min_rating: Option<f64>,
    /// Optional search radius in metres.
    pub(crate) radius_m: Option<u32>,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.places_path, ARG_PLACES)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let places_path = args.places_path.ok_or(CliError::MissingArgument {
            field: ARG_PLACES,
            env: ENV_PLACES,
        })?;
        let raw_location = args.location.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION,
            env: ENV_LOCATION,
        })?;
        let location = raw_location
            .parse::<LatLng>()
            .map_err(|source| CliError::InvalidLocation {
                value: raw_location.clone(),
                source,
            })?;
        let category = args
            .category
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_owned());

        Ok(Self {
            places_path,
            location,
            category,
            min_rating: args.min_rating,
            radius_m: args.radius_m,
        })
    }
}

pub(super) fn run_score(args: ScoreArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_score_with(args, &ConvenienceScorer::default(), &mut stdout)
}

pub(super) fn run_score_with(
    args: ScoreArgs,
    scorer: &ConvenienceScorer,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_score_config(args)?;
    let report = execute_score(&config, scorer)?;
    write_json(writer, &report)
}

fn resolve_score_config(args: ScoreArgs) -> Result<ScoreConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(super) fn execute_score(
    config: &ScoreConfig,
    scorer: &ConvenienceScorer,
) -> Result<NearbyReport, CliError> {
    let loaded = load_places(&config.places_path)?;
    let places = match config.min_rating {
        Some(min_rating) => filter_by_min_rating(loaded, min_rating),
        None => loaded,
    };
    scorer
        .report(places, &config.category, &config.location, config.radius_m)
        .map_err(|source| CliError::Score { source })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
