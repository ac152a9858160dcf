//! Formatting of a single origin/destination pair.

use colored::Colorize;

use crate::domain::{Stop, colorize_line};

use super::DisplaySettings;

/// Placeholder shown when a duration cannot be computed.
const UNKNOWN_DURATION: &str = "??:??";

/// One display line: two time/stop pairs joined by a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub origin_time: String,
    pub origin_stop: String,
    pub separator: String,
    pub destination_time: String,
    pub destination_stop: String,
    /// Scheduled travel time; kept for filtering, never displayed
    pub total_minutes: Option<i64>,
}

impl DisplayRow {
    /// The five displayed cells, in column order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.origin_time,
            &self.origin_stop,
            &self.separator,
            &self.destination_time,
            &self.destination_stop,
        ]
    }

    /// Whether this row is a zero-length hop.
    pub fn is_zero_length(&self) -> bool {
        self.total_minutes == Some(0)
    }
}

/// Whole minutes from the origin's scheduled instant to the destination's,
/// rounded down. Negative spans are returned as they are.
pub fn total_minutes(origin: &Stop, destination: &Stop) -> Option<i64> {
    let (from, to) = (origin.datetime?, destination.datetime?);
    Some(to.signed_duration_since(from).num_seconds().div_euclid(60))
}

/// Format minutes as `HH:MM`. Hours are not wrapped at 24.
///
/// ```
/// use vt::render::format_duration;
///
/// assert_eq!(format_duration(45), "00:45");
/// assert_eq!(format_duration(26 * 60 + 5), "26:05");
/// ```
pub fn format_duration(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes.div_euclid(60), minutes.rem_euclid(60))
}

/// Build the display row for travelling from `origin` to `destination`.
///
/// Both stops must already be normalized. With a `line` the separator
/// carries a colored line badge (detail rows); without one it shows only
/// the duration (summary rows).
pub fn format_leg(
    origin: &Stop,
    destination: &Stop,
    line: Option<&str>,
    settings: &DisplaySettings,
) -> DisplayRow {
    let total = total_minutes(origin, destination);
    let duration = total.map_or_else(|| UNKNOWN_DURATION.to_string(), format_duration);

    let separator = match line {
        Some(line) => format!("--[{}, {}]-->", colorize_line(line), duration),
        None => format!("--[{}]-->", duration),
    };

    DisplayRow {
        origin_time: time_label(origin, settings),
        origin_stop: stop_label(origin),
        separator,
        destination_time: time_label(destination, settings),
        destination_stop: stop_label(destination),
        total_minutes: total,
    }
}

/// `(HH:MM)`, or `(HH:MM +N)` with the delay in red (late) or green (early).
fn time_label(stop: &Stop, settings: &DisplaySettings) -> String {
    let prefix = if settings.show_date {
        format!("{} ", stop.date)
    } else {
        String::new()
    };

    match stop.delay_minutes {
        Some(delay) if delay != 0 => {
            let delay_text = format!("{delay:+}");
            let delay_text = if delay > 0 {
                delay_text.red()
            } else {
                delay_text.green()
            };
            format!("{prefix}({} {delay_text})", stop.time)
        }
        _ => format!("{prefix}({})", stop.time),
    }
}

/// `name[track]`, with empty brackets when the track is unknown.
fn stop_label(stop: &Stop) -> String {
    format!("{}[{}]", stop.name, stop.track.as_deref().unwrap_or_default())
}
