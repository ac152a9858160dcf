//! Stop records and their normalization.
//!
//! The planner reports every call as a pair of string-encoded timestamps:
//! the scheduled `date`/`time` and, when it has live data, the real-time
//! `rtDate`/`rtTime`. A `Stop` keeps those strings as received and, once
//! normalized, carries the parsed instants and the resulting delay.

use chrono::NaiveDateTime;
use tracing::debug;

/// City suffix the planner appends to stop names inside Gothenburg.
const CITY_SUFFIX: &str = ", Göteborg";

/// Timestamp layouts accepted for `date + " " + time`.
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];

/// Error returned when a date/time pair cannot be turned into an instant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {input:?}")]
pub struct TimestampError {
    input: String,
}

/// Parse a planner date (`YYYY-MM-DD`) and time (`HH:MM`) into an instant.
///
/// # Examples
///
/// ```
/// use vt::domain::parse_timestamp;
///
/// let t = parse_timestamp("2014-05-03", "10:45").unwrap();
/// assert_eq!(t.to_string(), "2014-05-03 10:45:00");
///
/// assert!(parse_timestamp("2014-05-03", "").is_err());
/// assert!(parse_timestamp("yesterday", "10:45").is_err());
/// ```
pub fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, TimestampError> {
    let input = format!("{} {}", date.trim(), time.trim());
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&input, fmt).ok())
        .ok_or(TimestampError { input })
}

/// Strip the city suffix from a stop name.
///
/// ```
/// use vt::domain::display_name;
///
/// assert_eq!(display_name("Centralstationen, Göteborg"), "Centralstationen");
/// assert_eq!(display_name("Kungälv Busstation"), "Kungälv Busstation");
/// ```
pub fn display_name(name: &str) -> &str {
    name.strip_suffix(CITY_SUFFIX).unwrap_or(name)
}

/// Signed whole minutes between two instants, truncated toward zero.
///
/// A real-time instant 90 seconds early is reported as `-1`, not `-2`.
pub fn delay_minutes(scheduled: NaiveDateTime, realtime: NaiveDateTime) -> i64 {
    realtime.signed_duration_since(scheduled).num_seconds() / 60
}

/// A stop on a leg, as reported by the planner.
///
/// `datetime`, `rt_datetime` and `delay_minutes` are only meaningful after
/// [`Stop::normalize`] has run. Before that they are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// Stop name as the planner reported it
    pub planner_name: String,
    /// Display name, city suffix stripped once normalized
    pub name: String,
    /// Scheduled date, `YYYY-MM-DD`
    pub date: String,
    /// Scheduled time, `HH:MM`
    pub time: String,
    /// Real-time date, if the planner has live data
    pub rt_date: Option<String>,
    /// Real-time time, if the planner has live data
    pub rt_time: Option<String>,
    /// Platform or stand label
    pub track: Option<String>,
    /// Scheduled instant
    pub datetime: Option<NaiveDateTime>,
    /// Real-time instant, the scheduled one when no live data is present
    pub rt_datetime: Option<NaiveDateTime>,
    /// Real-time minus scheduled, in minutes; `None` when either failed to parse
    pub delay_minutes: Option<i64>,
}

impl Stop {
    /// Creates a stop with scheduled times only.
    pub fn new(name: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            planner_name: name.clone(),
            name,
            date: date.into(),
            time: time.into(),
            rt_date: None,
            rt_time: None,
            track: None,
            datetime: None,
            rt_datetime: None,
            delay_minutes: None,
        }
    }

    /// Sets the real-time date and time.
    pub fn with_realtime(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.rt_date = Some(date.into());
        self.rt_time = Some(time.into());
        self
    }

    /// Sets the platform label.
    pub fn with_track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }

    /// Strip the display suffix and derive instants and delay.
    ///
    /// Real-time fields that are absent fall back to their scheduled
    /// counterparts, so a stop without live data has a delay of zero.
    /// Unparseable timestamps leave the delay unknown and are only logged.
    /// Running this twice gives the same result as running it once.
    ///
    /// # Examples
    ///
    /// ```
    /// use vt::domain::Stop;
    ///
    /// let mut stop = Stop::new("Brunnsparken, Göteborg", "2014-05-03", "10:00")
    ///     .with_realtime("2014-05-03", "10:03");
    /// stop.normalize();
    ///
    /// assert_eq!(stop.name, "Brunnsparken");
    /// assert_eq!(stop.delay_minutes, Some(3));
    /// ```
    pub fn normalize(&mut self) {
        self.name = display_name(&self.planner_name).to_string();

        self.datetime = parse_timestamp(&self.date, &self.time)
            .inspect_err(|e| {
                debug!(stop = %self.name, error = %e, "failed to parse scheduled time")
            })
            .ok();

        let rt_date = self.rt_date.as_deref().unwrap_or(&self.date);
        let rt_time = self.rt_time.as_deref().unwrap_or(&self.time);
        self.rt_datetime = parse_timestamp(rt_date, rt_time)
            .inspect_err(|e| debug!(stop = %self.name, error = %e, "failed to parse real-time"))
            .ok();

        self.delay_minutes = match (self.datetime, self.rt_datetime) {
            (Some(scheduled), Some(realtime)) => Some(delay_minutes(scheduled, realtime)),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        parse_timestamp(date, time).unwrap()
    }

    #[test]
    fn parses_minutes_and_seconds() {
        assert_eq!(at("2014-05-03", "10:45"), at("2014-05-03", "10:45:00"));
        assert_eq!(at("2014-05-03", " 10:45 ").to_string(), "2014-05-03 10:45:00");
    }

    #[test]
    fn rejects_malformed_timestamps() {
        assert!(parse_timestamp("", "").is_err());
        assert!(parse_timestamp("2014-05-03", "25:00").is_err());
        assert!(parse_timestamp("03/05/2014", "10:00").is_err());

        let err = parse_timestamp("2014-05-03", "soon").unwrap_err();
        assert_eq!(err.to_string(), "invalid timestamp \"2014-05-03 soon\"");
    }

    #[test]
    fn strips_city_suffix() {
        assert_eq!(display_name("Centralstationen, Göteborg"), "Centralstationen");
        assert_eq!(display_name("Centralstationen"), "Centralstationen");
        assert_eq!(display_name("Göteborg, Centralstationen"), "Göteborg, Centralstationen");
    }

    #[test]
    fn delay_truncates_toward_zero() {
        let scheduled = at("2014-05-03", "10:00:00");
        assert_eq!(delay_minutes(scheduled, at("2014-05-03", "10:01:59")), 1);
        assert_eq!(delay_minutes(scheduled, at("2014-05-03", "09:58:30")), -1);
        assert_eq!(delay_minutes(scheduled, at("2014-05-03", "09:59:01")), 0);
        assert_eq!(delay_minutes(scheduled, scheduled), 0);
    }

    #[test]
    fn delay_across_midnight() {
        let mut stop =
            Stop::new("Nattbuss", "2014-05-03", "23:55").with_realtime("2014-05-04", "00:07");
        stop.normalize();
        assert_eq!(stop.delay_minutes, Some(12));
    }

    #[test]
    fn late_and_early_stops() {
        let mut late = Stop::new("A", "2014-05-03", "10:00").with_realtime("2014-05-03", "10:04");
        late.normalize();
        assert_eq!(late.delay_minutes, Some(4));

        let mut early = Stop::new("B", "2014-05-03", "10:00").with_realtime("2014-05-03", "09:58");
        early.normalize();
        assert_eq!(early.delay_minutes, Some(-2));
    }

    #[test]
    fn missing_realtime_means_no_delay() {
        let mut stop = Stop::new("Järntorget, Göteborg", "2014-05-03", "10:00");
        stop.normalize();

        assert_eq!(stop.name, "Järntorget");
        assert_eq!(stop.datetime, Some(at("2014-05-03", "10:00")));
        assert_eq!(stop.rt_datetime, stop.datetime);
        assert_eq!(stop.delay_minutes, Some(0));
        assert_eq!(stop.track, None);
    }

    #[test]
    fn realtime_time_without_date_uses_scheduled_date() {
        let mut stop = Stop::new("A", "2014-05-03", "10:00");
        stop.rt_time = Some("10:05".to_string());
        stop.normalize();
        assert_eq!(stop.delay_minutes, Some(5));
    }

    #[test]
    fn malformed_schedule_leaves_delay_unknown() {
        let mut stop = Stop::new("A", "not a date", "10:00").with_realtime("2014-05-03", "10:05");
        stop.normalize();

        assert_eq!(stop.datetime, None);
        assert!(stop.rt_datetime.is_some());
        assert_eq!(stop.delay_minutes, None);
    }

    #[test]
    fn malformed_realtime_leaves_delay_unknown() {
        let mut stop = Stop::new("A", "2014-05-03", "10:00").with_realtime("2014-05-03", "??");
        stop.normalize();

        assert!(stop.datetime.is_some());
        assert_eq!(stop.rt_datetime, None);
        assert_eq!(stop.delay_minutes, None);
    }

    #[test]
    fn repeated_suffix_is_stripped_once() {
        let mut stop = Stop::new("Torget, Göteborg, Göteborg", "2014-05-03", "10:00");
        stop.normalize();
        assert_eq!(stop.name, "Torget, Göteborg");

        stop.normalize();
        assert_eq!(stop.name, "Torget, Göteborg");
        assert_eq!(stop.planner_name, "Torget, Göteborg, Göteborg");
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut stop = Stop::new("Centralstationen, Göteborg", "2014-05-03", "10:00")
            .with_realtime("2014-05-03", "10:02")
            .with_track("A");
        stop.normalize();
        let once = stop.clone();
        stop.normalize();

        assert_eq!(stop, once);
        assert_eq!(stop.name, "Centralstationen");
        assert_eq!(stop.track.as_deref(), Some("A"));
    }
}
