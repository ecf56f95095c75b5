//! Adapt command implementation for the roadtrip CLI.

use std::io::Write;
use std::num::NonZeroU32;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use roadtrip_core::{Trip, adapt};
use roadtrip_data::load_catalog;
use serde::{Deserialize, Serialize};

use crate::{
    ARG_CATALOG, ARG_DAYS, ARG_TRIP, CliError, ENV_ADAPT_CATALOG, ENV_ADAPT_DAYS, ENV_ADAPT_TRIP,
    require_existing, write_json,
};

/// CLI arguments for the `adapt` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Reshape one catalog trip so its stages add up to the \
                 requested number of days. Later stages are dropped or the \
                 last stage is stretched; the result is printed as JSON.",
    about = "Adapt a catalog trip to a number of days"
)]
#[ortho_config(prefix = "ROADTRIP")]
pub(crate) struct AdaptArgs {
    /// Path to the country catalog (`<cc>.itins.json`).
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Identifier of the trip to adapt.
    #[arg(long = ARG_TRIP, value_name = "id")]
    #[serde(default)]
    pub(crate) trip: Option<String>,
    /// Wanted trip length in days.
    #[arg(long = ARG_DAYS, value_name = "days")]
    #[serde(default)]
    pub(crate) days: Option<u32>,
}

impl AdaptArgs {
    pub(crate) fn into_config(self) -> Result<AdaptConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AdaptConfig::try_from(merged)
    }
}

/// Resolved `adapt` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AdaptConfig {
    pub(crate) catalog: Utf8PathBuf,
    pub(crate) trip: String,
    pub(crate) days: NonZeroU32,
}

impl TryFrom<AdaptArgs> for AdaptConfig {
    type Error = CliError;

    fn try_from(args: AdaptArgs) -> Result<Self, Self::Error> {
        let catalog = args.catalog.ok_or(CliError::MissingArgument {
            field: ARG_CATALOG,
            env: ENV_ADAPT_CATALOG,
        })?;
        let trip = args.trip.ok_or(CliError::MissingArgument {
            field: ARG_TRIP,
            env: ENV_ADAPT_TRIP,
        })?;
        let raw_days = args.days.ok_or(CliError::MissingArgument {
            field: ARG_DAYS,
            env: ENV_ADAPT_DAYS,
        })?;
        let days = NonZeroU32::new(raw_days).ok_or(CliError::ZeroDays { field: ARG_DAYS })?;
        Ok(Self {
            catalog,
            trip,
            days,
        })
    }
}

pub(super) fn run_adapt(args: AdaptArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_adapt_with(args, &mut stdout)
}

pub(super) fn run_adapt_with(args: AdaptArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let adapted = execute_adapt(args)?;
    write_json(writer, &adapted)
}

fn execute_adapt(args: AdaptArgs) -> Result<Trip, CliError> {
    let config = args.into_config()?;
    require_existing(&config.catalog, ARG_CATALOG)?;
    let catalog = load_catalog(&config.catalog).map_err(|source| CliError::Catalog {
        path: config.catalog.clone(),
        source,
    })?;
    let trip = catalog
        .find(&config.trip)
        .ok_or_else(|| CliError::UnknownTrip {
            id: config.trip.clone(),
            path: config.catalog.clone(),
        })?;
    Ok(adapt(trip, config.days)?)
}
