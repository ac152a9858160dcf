//! Stop name lookup and completion.
//!
//! Turns what the user typed into planner stop ids, applying the
//! configured aliases first.

mod error;
mod lookup;

pub use error::LocationError;
pub use lookup::{Locations, resolve_alias};
