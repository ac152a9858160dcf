//! Västtrafik journey planner client.
//!
//! This module provides an HTTP client for the Västtrafik REST API (v1),
//! which plans trips across the Gothenburg region's public transport.
//!
//! Key characteristics of the API:
//! - Authentication is an `authKey` query parameter, not a header
//! - A list with one element is sent as a bare object, so every list field
//!   may be an object or an array
//! - Times are `HH:MM` and dates `YYYY-MM-DD`, Swedish local time

mod client;
mod convert;
mod error;
mod types;

pub use client::{PlannerClient, PlannerConfig, TripQuery};
pub use convert::{ConversionError, convert_trip, convert_trip_list};
pub use error::PlannerError;
pub use types::{
    LegDto, LocationList, LocationResponse, OneOrMany, StopDto, StopLocation, TripDto, TripList,
    TripResponse,
};
