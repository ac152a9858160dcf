//! Tracing subscriber setup.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used when `--verbose` is not given.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Level used with `--verbose`.
const VERBOSE_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. An invalid
/// `RUST_LOG` is reported and the default is used instead. Calling this
/// more than once keeps the first subscriber.
pub fn init(verbose: bool) {
    let default_level = default_level(verbose);
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(rust_log) => build_filter(&rust_log, default_level),
        Err(_) => EnvFilter::new(default_level.to_string()),
    };

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn default_level(verbose: bool) -> LevelFilter {
    if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL }
}

fn build_filter(directives: &str, default_level: LevelFilter) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    })
}
