//! Västtrafik journey planner for the terminal.
//!
//! Looks up trips between two stops and prints them as a table: one
//! summary line per trip, followed by the legs of trips with changes.

pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod locations;
pub mod logging;
pub mod render;
pub mod vasttrafik;
