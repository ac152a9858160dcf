//! Domain error types.

/// Errors raised while building domain values from planner data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A multi-stage trip arrived with no legs
    #[error("trip must have at least one leg")]
    EmptyTrip,
}
