//! Recommend command implementation for the roadtrip CLI.

use std::io::Write;
use std::num::NonZeroU32;

use camino::Utf8PathBuf;
use clap::Parser;
use log::warn;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roadtrip_core::{
    Answers, DEFAULT_PICK_COUNT, FALLBACK_LANGUAGE, ScoredCandidate, Scorer, Trip, adapt,
    day_ranges, pick_scored,
};
use roadtrip_data::{load_answers, load_catalog};
use roadtrip_scorer::PreferenceScorer;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ANSWERS, ARG_CATALOG, ARG_COUNT, ARG_DAYS, ARG_LANG, CliError, ENV_RECOMMEND_CATALOG,
    require_existing, write_json,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every active trip of a catalog against the traveller's \
                 questionnaire answers and print a varied shortlist as JSON. \
                 Each pick is adapted to the requested number of days when \
                 one is known.",
    about = "Recommend trips from a catalog"
)]
#[ortho_config(prefix = "ROADTRIP")]
pub(crate) struct RecommendArgs {
    /// Path to the country catalog (`<cc>.itins.json`).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Path to a questionnaire snapshot (JSON).
    #[arg(long = ARG_ANSWERS, value_name = "path")]
    #[serde(default)]
    pub(crate) answers: Option<Utf8PathBuf>,
    /// Number of trips to shortlist.
    #[arg(long = ARG_COUNT, value_name = "n")]
    #[serde(default)]
    pub(crate) count: Option<usize>,
    /// Trip length in days; overrides the questionnaire unless 0.
    #[arg(long = ARG_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) days: Option<u32>,
    /// Language used for titles and stage names.
    #[arg(long = ARG_LANG, value_name = "code")]
    #[serde(default)]
    pub(crate) lang: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) answers: Option<Utf8PathBuf>,
    pub(crate) count: usize,
    pub(crate) days: Option<NonZeroU32>,
    pub(crate) lang: String,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.catalog, ARG_CATALOG)?;
        if let Some(answers) = &self.answers {
            require_existing(answers, ARG_ANSWERS)?;
        }
        Ok(())
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_RECOMMEND_CATALOG,
        })?;
        Ok(Self {
            catalog,
            answers: args.answers,
            count: args.count.unwrap_or(DEFAULT_PICK_COUNT),
            days: args.days.and_then(NonZeroU32::new),
            lang: args.lang.unwrap_or_else(|| FALLBACK_LANGUAGE.to_owned()),
        })
    }
}

/// One shortlisted trip as printed by `recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Recommendation {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) summary: String,
    pub(crate) score: i32,
    pub(crate) diversity_key: String,
    pub(crate) schedule: Vec<ScheduleEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) bounds: Option<MapBounds>,
    pub(crate) trip: Trip,
}

/// Day label of one stage, e.g. `"1–3"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ScheduleEntry {
    pub(crate) stage: String,
    pub(crate) name: String,
    pub(crate) days: String,
}

/// Area covering every stage, for fitting a map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub(crate) struct MapBounds {
    pub(crate) south: f64,
    pub(crate) west: f64,
    pub(crate) north: f64,
    pub(crate) east: f64,
}

impl Recommendation {
    fn new(candidate: ScoredCandidate<'_>, days: Option<NonZeroU32>, lang: &str) -> Self {
        let source = candidate.trip;
        let trip = days.map_or_else(|| source.clone(), |wanted| fit_to_days(source, wanted));
        let schedule = trip
            .stages
            .iter()
            .zip(day_ranges(&trip.stages))
            .map(|(stage, range)| ScheduleEntry {
                stage: stage.id.clone(),
                name: stage.display_name(lang).to_owned(),
                days: range.to_string(),
            })
            .collect();
        let bounds = trip.bounds().map(|rect| MapBounds {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        });
        Self {
            id: source.id.clone(),
            title: source.display_title(lang).to_owned(),
            summary: source.display_summary(lang).to_owned(),
            score: candidate.score,
            diversity_key: source.diversity_key().to_owned(),
            schedule,
            bounds,
            trip,
        }
    }
}

fn fit_to_days(trip: &Trip, days: NonZeroU32) -> Trip {
    adapt(trip, days).unwrap_or_else(|err| {
        warn!("keeping trip '{}' as authored: {err}", trip.id);
        trip.clone()
    })
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &PreferenceScorer::default(), &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    scorer: &dyn Scorer,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let recommendations = execute_recommend(args, scorer)?;
    write_json(writer, &recommendations)
}

fn execute_recommend(
    args: RecommendArgs,
    scorer: &dyn Scorer,
) -> Result<Vec<Recommendation>, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let catalog = load_catalog(&config.catalog).map_err(|source| CliError::Catalog {
        path: config.catalog.clone(),
        source,
    })?;
    let answers = effective_answers(&config);
    let days = answers.preferred_days().and_then(NonZeroU32::new);
    Ok(pick_scored(catalog.trips(), &answers, scorer, config.count)
        .into_iter()
        .map(|candidate| Recommendation::new(candidate, days, &config.lang))
        .collect())
}

/// Questionnaire answers with the command-line day count applied on top.
fn effective_answers(config: &RecommendConfig) -> Answers {
    let answers = config
        .answers
        .as_deref()
        .map(load_answers)
        .unwrap_or_default();
    match config.days {
        Some(days) => answers.with_days(days.get()),
        None => answers,
    }
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
