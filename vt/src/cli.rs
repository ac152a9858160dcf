//! Command-line arguments and how they select a query.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{CommandFactory, Parser};

use crate::config::Config;
use crate::render::DisplaySettings;

/// Layouts accepted by `--time`.
const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%H%M"];

/// Layouts accepted by `--date`.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y%m%d", "%d/%m/%Y"];

/// Plan trips with Västtrafik from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "vt",
    version,
    override_usage = "vt [options] FROM TO\n       vt [options] TO\n       vt [options]"
)]
pub struct Args {
    /// Show only trip summaries.
    #[arg(short, long)]
    pub short: bool,

    /// Time of departure.
    #[arg(short, long, value_name = "TIME")]
    pub time: Option<String>,

    /// Date of departure.
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Print raw JSON data.
    #[arg(short, long)]
    pub raw: bool,

    /// Show possible completions for stop name instead of searching for
    /// trips (used by ZSH completion).
    #[arg(short, long)]
    pub complete: bool,

    /// Print debug output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Read configuration from this file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(hide = true)]
    pub stops: Vec<String>,
}

/// Problems with what was asked for on the command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("Expected (partial) stop name to complete")]
    CompletionArgs,

    #[error("Invalid number of arguments.")]
    ArgumentCount,

    #[error("Failed to parse time: {0}")]
    InvalidTime(String),

    #[error("Failed to parse date: {0}")]
    InvalidDate(String),
}

/// What the invocation asks the program to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print stop names matching a prefix
    Complete(String),
    /// Search trips between two stops, as typed or configured
    Search { origin: String, destination: String },
}

impl Args {
    /// Rendering options for this invocation.
    pub fn display_settings(&self) -> DisplaySettings {
        DisplaySettings::new(self.short, self.date.is_some())
    }

    /// Pick the command, filling in configured defaults for missing stops.
    pub fn resolve(&self, config: &Config) -> Result<Command, UsageError> {
        if self.complete {
            return match self.stops.as_slice() {
                [prefix] => Ok(Command::Complete(prefix.clone())),
                _ => Err(UsageError::CompletionArgs),
            };
        }

        let (origin, destination) = match (
            self.stops.as_slice(),
            &config.default_origin,
            &config.default_destination,
        ) {
            ([origin, destination], _, _) => (origin.clone(), destination.clone()),
            ([destination], Some(origin), _) => (origin.clone(), destination.clone()),
            ([], Some(origin), Some(destination)) => (origin.clone(), destination.clone()),
            _ => return Err(UsageError::ArgumentCount),
        };

        Ok(Command::Search {
            origin,
            destination,
        })
    }

    /// The `--time` value, parsed.
    pub fn departure_time(&self) -> Result<Option<NaiveTime>, UsageError> {
        self.time.as_deref().map(parse_time).transpose()
    }

    /// The `--date` value, parsed.
    pub fn departure_date(&self) -> Result<Option<NaiveDate>, UsageError> {
        self.date.as_deref().map(parse_date).transpose()
    }

    /// Full help text, as printed by `--help`.
    pub fn help_text() -> String {
        <Self as CommandFactory>::command().render_help().to_string()
    }
}

/// Parse a departure time such as `08:15`, `08:15:00` or `0815`.
pub fn parse_time(input: &str) -> Result<NaiveTime, UsageError> {
    let trimmed = input.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| UsageError::InvalidTime(input.to_string()))
}

/// Parse a departure date such as `2014-05-03`, `20140503` or `03/05/2014`.
pub fn parse_date(input: &str) -> Result<NaiveDate, UsageError> {
    let trimmed = input.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| UsageError::InvalidDate(input.to_string()))
}
