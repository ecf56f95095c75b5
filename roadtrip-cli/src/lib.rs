//! Command-line interface for recommending and adapting road trips.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;

mod adapt;
mod error;
mod recommend;

use adapt::AdaptArgs;
pub use error::CliError;
use recommend::RecommendArgs;

const ARG_CATALOG: &str = "catalog";
const ARG_ANSWERS: &str = "answers";
const ARG_COUNT: &str = "count";
const ARG_DAYS: &str = "days";
const ARG_LANG: &str = "lang";
const ARG_TRIP: &str = "trip";
const ENV_RECOMMEND_CATALOG: &str = "ROADTRIP_CMDS_RECOMMEND_CATALOG";
const ENV_ADAPT_CATALOG: &str = "ROADTRIP_CMDS_ADAPT_CATALOG";
const ENV_ADAPT_TRIP: &str = "ROADTRIP_CMDS_ADAPT_TRIP";
const ENV_ADAPT_DAYS: &str = "ROADTRIP_CMDS_ADAPT_DAYS";

/// Run the roadtrip CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => recommend::run_recommend(args),
        Command::Adapt(args) => adapt::run_adapt(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "roadtrip",
    about = "Recommend and reshape road trips from a country catalog",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Shortlist the catalog trips that best match a questionnaire.
    Recommend(RecommendArgs),
    /// Stretch or shorten one catalog trip to a number of days.
    Adapt(AdaptArgs),
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match roadtrip_fs::file_is_file(path) {
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

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
