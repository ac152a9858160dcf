//! Collapsing a trip into summary and detail rows.

use crate::domain::Trip;

use super::{DisplayRow, DisplaySettings, format_leg};

/// A trip ready for the table: one summary row and, for multi-stage
/// trips outside summary-only mode, one row per leg.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTrip {
    pub summary: DisplayRow,
    pub details: Option<Vec<DisplayRow>>,
}

/// Normalize the trip's stops and build its rows.
///
/// The summary of a multi-stage trip spans first origin to last
/// destination and carries no line. Detail rows whose duration is exactly
/// zero are dropped; the planner sometimes reports such hops between two
/// platforms of the same stop.
pub fn render_trip(mut trip: Trip, settings: &DisplaySettings) -> RenderedTrip {
    trip.normalize();

    match &trip {
        Trip::SingleLeg(leg) => RenderedTrip {
            summary: format_leg(
                &leg.origin,
                &leg.destination,
                leg.line.as_deref(),
                settings,
            ),
            details: None,
        },
        Trip::MultiLeg(legs) => {
            let summary = format_leg(
                &legs.first().origin,
                &legs.last().destination,
                None,
                settings,
            );
            let details = (!settings.summary_only).then(|| {
                legs.iter()
                    .map(|leg| {
                        format_leg(&leg.origin, &leg.destination, leg.line.as_deref(), settings)
                    })
                    .filter(|row| !row.is_zero_length())
                    .collect()
            });
            RenderedTrip { summary, details }
        }
    }
}

/// Render every trip, keeping the planner's order.
pub fn render_trips(
    trips: impl IntoIterator<Item = Trip>,
    settings: &DisplaySettings,
) -> Vec<RenderedTrip> {
    trips
        .into_iter()
        .map(|trip| render_trip(trip, settings))
        .collect()
}
