//! Stop lookup error types.

use crate::vasttrafik::PlannerError;

/// Errors that can occur when resolving stop names.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// The planner request failed
    #[error(transparent)]
    Planner(#[from] PlannerError),

    /// No stop matches the given name
    #[error("no stop matches {0:?}")]
    NoSuchStop(String),
}
