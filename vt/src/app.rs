//! One invocation, end to end.
//!
//! Loads the configuration, resolves stop names, queries the planner and
//! prints either completions, raw JSON or the trip table. Every failure
//! that ends the program is an [`AppError`]; [`report`] prints it the way
//! users expect.

use std::error::Error as _;

use tracing::{debug, info};

use crate::cli::{Args, Command, UsageError};
use crate::config::{self, Config, ConfigError};
use crate::locations::{LocationError, Locations};
use crate::render::{print_table, render_trips};
use crate::vasttrafik::{PlannerClient, PlannerConfig, PlannerError, TripQuery};

/// Errors that end the program.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("No auth_key given. See http://labs.vasttrafik.se/ for instructions.")]
    MissingAuthKey,

    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error("Failed to create planner client")]
    Client(#[source] PlannerError),

    #[error("No such stop found: {0}")]
    NoSuchStop(String),

    #[error("Failed to look up stop {name}")]
    StopLookup {
        name: String,
        #[source]
        source: PlannerError,
    },

    #[error("Failed to look up trip")]
    TripLookup(#[source] PlannerError),
}

/// Run the command selected by `args`.
pub async fn run(args: &Args) -> Result<(), AppError> {
    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::default_path()?,
    };
    let config = Config::load(&config_path)?.with_env_overrides();
    debug!(path = %config_path.display(), aliases = config.aliases.len(), "loaded config");

    let client = PlannerClient::new(PlannerConfig::new(auth_key(&config)?))
        .map_err(AppError::Client)?;
    let command = args.resolve(&config)?;
    let locations = Locations::new(client.clone(), config.aliases);

    match command {
        Command::Complete(prefix) => {
            let names = locations
                .completions(&prefix)
                .await
                .map_err(|e| stop_lookup_error(&prefix, e))?;
            for name in names {
                println!("{name}");
            }
        }
        Command::Search {
            origin,
            destination,
        } => {
            let query = trip_query(args, &locations, &origin, &destination).await?;
            info!(%origin, %destination, "searching trips");

            if args.raw {
                println!("Search for trip from {origin} to {destination}");
                let response = client
                    .trip_raw(&query)
                    .await
                    .map_err(AppError::TripLookup)?;
                println!("{response:#}");
            } else {
                let trips = client.trip(&query).await.map_err(AppError::TripLookup)?;
                print_table(&render_trips(trips, &args.display_settings()));
            }
        }
    }

    Ok(())
}

/// Print `err`, its causes and the usage help to stderr.
pub fn report(err: &AppError) {
    eprintln!("{}", error_chain(err));
    eprintln!("{}", Args::help_text());
}

fn auth_key(config: &Config) -> Result<&str, AppError> {
    config
        .auth_key
        .as_deref()
        .filter(|key| !key.trim().is_empty())
        .ok_or(AppError::MissingAuthKey)
}

async fn trip_query(
    args: &Args,
    locations: &Locations,
    origin: &str,
    destination: &str,
) -> Result<TripQuery, AppError> {
    let origin_id = stop_id(locations, origin).await?;
    let dest_id = stop_id(locations, destination).await?;
    let mut query = TripQuery::new(origin_id, dest_id);

    if let Some(time) = args.departure_time()? {
        query = query.with_time(time);
    }

    // An unreadable date is reported, but the search still runs for today
    match args.departure_date() {
        Ok(Some(date)) => query = query.with_date(date),
        Ok(None) => {}
        Err(e) => println!("{e}"),
    }

    Ok(query)
}

async fn stop_id(locations: &Locations, name: &str) -> Result<String, AppError> {
    locations
        .id_by_name(name)
        .await
        .map_err(|e| stop_lookup_error(name, e))
}

fn stop_lookup_error(name: &str, err: LocationError) -> AppError {
    match err {
        LocationError::NoSuchStop(_) => AppError::NoSuchStop(name.to_string()),
        LocationError::Planner(source) => AppError::StopLookup {
            name: name.to_string(),
            source,
        },
    }
}

/// The error message followed by one line per underlying cause.
fn error_chain(err: &AppError) -> String {
    let mut lines = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(cause.to_string());
        source = cause.source();
    }
    lines.join("\n")
}
