//! Conversion from Västtrafik DTOs to domain types.
//!
//! This is where the object-or-array shape of a trip's legs is decided,
//! once, so the rest of the program works on [`Trip`] variants.

use tracing::warn;

use crate::domain::{DomainError, Leg, Legs, Stop, Trip};

use super::types::{LegDto, OneOrMany, StopDto, TripDto, TripList};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The trip violates a domain invariant
    #[error("invalid trip: {0}")]
    InvalidTrip(#[from] DomainError),
}

/// Convert a trip list to domain trips.
///
/// Trips that cannot be converted are logged and skipped rather than
/// failing the whole list. Order is preserved.
pub fn convert_trip_list(list: TripList) -> Vec<Trip> {
    let Some(trips) = list.trips else {
        return Vec::new();
    };

    trips
        .into_vec()
        .into_iter()
        .enumerate()
        .filter_map(|(idx, dto)| match convert_trip(dto) {
            Ok(trip) => Some(trip),
            Err(e) => {
                warn!(trip = idx, error = %e, "skipping trip");
                None
            }
        })
        .collect()
}

/// Convert a single trip.
pub fn convert_trip(dto: TripDto) -> Result<Trip, ConversionError> {
    let trip = match dto.legs {
        OneOrMany::One(leg) => Trip::SingleLeg(convert_leg(leg)),
        OneOrMany::Many(legs) => {
            Trip::MultiLeg(Legs::new(legs.into_iter().map(convert_leg).collect())?)
        }
    };
    Ok(trip)
}

fn convert_leg(dto: LegDto) -> Leg {
    Leg {
        origin: convert_stop(dto.origin),
        destination: convert_stop(dto.destination),
        line: dto.sname.filter(|line| !line.is_empty()),
    }
}

fn convert_stop(dto: StopDto) -> Stop {
    Stop {
        rt_date: dto.rt_date,
        rt_time: dto.rt_time,
        track: dto.track.filter(|track| !track.is_empty()),
        ..Stop::new(dto.name, dto.date, dto.time)
    }
}
