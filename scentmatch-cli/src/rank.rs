//! Rank command implementation for the scentmatch CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use scentmatch_core::{DEFAULT_LIMIT, Perfume, RankedPerfume, sanitize_answers};
use scentmatch_scorer::{
    DislikePolicy, MatchQuality, PreferenceScorer, ScoringConfig, describe_match_quality, rank,
};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_ANSWERS, ARG_CATALOGUE, ARG_DISLIKE_POLICY, ARG_LIMIT, ARG_SCORING_CONFIG, CliError,
    ENV_ANSWERS, ENV_CATALOGUE,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank a perfume catalogue against a questionnaire answer \
                 document. The catalogue is a JSON array of perfumes; the \
                 answers are the raw JSON object collected by the kiosk and \
                 are sanitised before scoring.",
    about = "Rank perfumes for a set of answers"
)]
#[ortho_config(prefix = "SCENTMATCH")]
pub(crate) struct RankArgs {
    /// Path to the JSON perfume catalogue.
    #[arg(long = ARG_CATALOGUE, value_name = "path")]
    #[serde(default)]
    pub(crate) catalogue: Option<Utf8PathBuf>,
    /// Path to the JSON questionnaire answers.
    #[arg(long = ARG_ANSWERS, value_name = "path")]
    #[serde(default)]
    pub(crate) answers: Option<Utf8PathBuf>,
    /// Maximum number of perfumes to print (default 6).
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Path to a JSON scoring configuration overriding the defaults.
    #[arg(long = ARG_SCORING_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    /// How disliked notes are handled: `penalise` or `exclude`.
    #[arg(long = ARG_DISLIKE_POLICY, value_name = "policy")]
    #[serde(default)]
    pub(crate) dislike_policy: Option<DislikePolicy>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    pub(crate) catalogue: Utf8PathBuf,
    pub(crate) answers: Utf8PathBuf,
    pub(crate) limit: usize,
    pub(crate) scoring_config: Option<Utf8PathBuf>,
    pub(crate) dislike_policy: Option<DislikePolicy>,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.catalogue, ARG_CATALOGUE)?;
        Self::require_existing(&self.answers, ARG_ANSWERS)?;
        if let Some(path) = &self.scoring_config {
            Self::require_existing(path, ARG_SCORING_CONFIG)?;
        }
        Ok(())
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

    /// Load the scoring configuration file, if any, and apply the policy
    /// override.
    pub(crate) fn scorer(&self) -> Result<PreferenceScorer, CliError> {
        let mut scoring = match &self.scoring_config {
            Some(path) => load_json::<ScoringConfig>(path, ARG_SCORING_CONFIG)?,
            None => ScoringConfig::default(),
        };
        if let Some(policy) = self.dislike_policy {
            scoring = scoring.with_dislike_policy(policy);
        }
        PreferenceScorer::with_config(scoring).map_err(|source| {
            log::warn!("rejecting scoring configuration: {source}");
            CliError::InvalidScoringConfig(source)
        })
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let catalogue = args.catalogue.ok_or(CliError::MissingArgument {
            field: ARG_CATALOGUE,
            env: ENV_CATALOGUE,
        })?;
        let answers = args.answers.ok_or(CliError::MissingArgument {
            field: ARG_ANSWERS,
            env: ENV_ANSWERS,
        })?;
        Ok(Self {
            catalogue,
            answers,
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            scoring_config: args.scoring_config,
            dislike_policy: args.dislike_policy,
        })
    }
}

/// One line of `rank` output: the ranked perfume plus its display tier.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankedOutput {
    #[serde(flatten)]
    pub(crate) ranked: RankedPerfume,
    pub(crate) quality: MatchQuality,
    pub(crate) quality_label: &'static str,
}

impl From<RankedPerfume> for RankedOutput {
    fn from(ranked: RankedPerfume) -> Self {
        let quality = describe_match_quality(ranked.evaluation.match_percentage);
        Self {
            ranked,
            quality,
            quality_label: quality.label(),
        }
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_rank_config(args)?;
    let output = execute_rank(&config)?;
    write_ranking(writer, &output)
}

fn resolve_rank_config(args: RankArgs) -> Result<RankConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_rank(config: &RankConfig) -> Result<Vec<RankedOutput>, CliError> {
    let scorer = config.scorer()?;
    let catalog = load_catalogue(&config.catalogue)?;
    let answers: serde_json::Value = load_json(&config.answers, ARG_ANSWERS)?;
    let preferences = sanitize_answers(&answers);
    log::debug!(
        "ranking {} perfumes from {} with limit {}",
        catalog.len(),
        config.catalogue,
        config.limit
    );
    Ok(rank(&scorer, &catalog, &preferences, config.limit)
        .into_iter()
        .map(RankedOutput::from)
        .collect())
}

/// Loads a JSON array of [`Perfume`] records from disk.
pub(crate) fn load_catalogue(path: &Utf8Path) -> Result<Vec<Perfume>, CliError> {
    load_json(path, ARG_CATALOGUE)
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn write_ranking(writer: &mut dyn Write, output: &[RankedOutput]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerializeRanking)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteRankingOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WriteRankingOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
