//! Turning trips into terminal text.
//!
//! `leg` formats one origin/destination pair into a row, `trip` collapses a
//! trip into a summary row plus optional detail rows, and `table` lays the
//! rows out as aligned columns.

mod leg;
mod table;
mod trip;

pub use leg::{DisplayRow, format_duration, format_leg, total_minutes};
pub use table::{SUMMARY_HEADERS, print_table, render_table, strip_ansi, visible_width};
pub use trip::{RenderedTrip, render_trip, render_trips};

/// Display switches chosen on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Show only one row per trip
    pub summary_only: bool,
    /// Prefix every time label with its date
    pub show_date: bool,
}

impl DisplaySettings {
    /// Create settings from the two switches.
    pub fn new(summary_only: bool, show_date: bool) -> Self {
        Self {
            summary_only,
            show_date,
        }
    }
}
