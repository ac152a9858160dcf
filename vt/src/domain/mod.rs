//! Domain types for the journey client.
//!
//! Stops, legs and trips as handed over by the planner, plus the line
//! styling table. Trips are built in their final shape at ingestion, so
//! code that receives a `Trip` can rely on it having at least one leg.

mod error;
mod line;
mod stop;
mod trip;

pub use error::DomainError;
pub use line::{
    DEFAULT_STYLE, Intensity, LineStyle, NIGHT_BUS_STYLE, colorize_line, line_style,
};
pub use stop::{Stop, TimestampError, delay_minutes, display_name, parse_timestamp};
pub use trip::{Leg, Legs, Trip};
