//! Plain-text table layout.
//!
//! Summary rows go into one aligned table with a header. A trip with
//! detail rows gets its own smaller table right below its summary line,
//! indented and framed so it reads as part of that trip:
//!
//! ```text
//! Time     Stop               Time     Stop
//! -------  -----------------  ...
//! (10:00)  Chalmers[A]        ...
//!         * --------  ...
//!         | (10:00)   ...
//!         | (10:08)   ...
//!         * --------  ...
//! ```

use super::{DisplayRow, RenderedTrip};

/// Column headers of the summary table. The separator column has none.
pub const SUMMARY_HEADERS: [&str; 5] = ["Time", "Stop", "", "Time", "Stop"];

/// Space between two columns.
const COLUMN_GAP: &str = "  ";

/// Minimum space a header leaves after itself.
const HEADER_PADDING: usize = 2;

/// Prefix of the rule lines above and below a nested table.
const NESTED_EDGE: &str = "\t* ";

/// Prefix of the rows inside a nested table.
const NESTED_BODY: &str = "\t| ";

type Cells<'a> = [&'a str; 5];

/// Remove ANSI escape sequences from `s`.
///
/// ```
/// use vt::render::strip_ansi;
///
/// assert_eq!(strip_ansi("\x1b[1;44m16\x1b[0m"), "16");
/// assert_eq!(strip_ansi("plain"), "plain");
/// ```
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        if chars.next_if_eq(&'[').is_some() {
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        }
    }

    out
}

/// Width of `s` on screen, ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

/// Lay out the summary table, with nested detail tables, as text.
///
/// Every line ends in a newline. Trips appear in the order given.
pub fn render_table(trips: &[RenderedTrip]) -> String {
    let rows: Vec<Cells<'_>> = trips.iter().map(|trip| trip.summary.cells()).collect();
    let widths = column_widths(Some(&SUMMARY_HEADERS), &rows);

    let mut out = String::new();
    push_line(&mut out, "", &row_line(&SUMMARY_HEADERS, &widths));
    push_line(&mut out, "", &rule_line(&widths));

    for (trip, row) in trips.iter().zip(&rows) {
        push_line(&mut out, "", &row_line(row, &widths));
        if let Some(details) = trip.details.as_deref().filter(|d| !d.is_empty()) {
            push_nested(&mut out, details);
        }
    }

    out
}

/// Write the table to stdout.
pub fn print_table(trips: &[RenderedTrip]) {
    print!("{}", render_table(trips));
}

/// Append the framed detail table of one trip.
fn push_nested(out: &mut String, details: &[DisplayRow]) {
    let rows: Vec<Cells<'_>> = details.iter().map(DisplayRow::cells).collect();
    let widths = column_widths(None, &rows);
    let rule = rule_line(&widths);

    push_line(out, NESTED_EDGE, &rule);
    for row in &rows {
        push_line(out, NESTED_BODY, &row_line(row, &widths));
    }
    push_line(out, NESTED_EDGE, &rule);
}

fn column_widths(headers: Option<&Cells<'_>>, rows: &[Cells<'_>]) -> [usize; 5] {
    let mut widths = [0; 5];
    for (col, width) in widths.iter_mut().enumerate() {
        let minimum = headers.map_or(0, |h| visible_width(h[col]) + HEADER_PADDING);
        *width = rows
            .iter()
            .map(|row| visible_width(row[col]))
            .fold(minimum, usize::max);
    }
    widths
}

fn row_line(cells: &Cells<'_>, widths: &[usize; 5]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| {
            let fill = width.saturating_sub(visible_width(cell));
            format!("{cell}{}", " ".repeat(fill))
        })
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

fn rule_line(widths: &[usize; 5]) -> String {
    widths
        .iter()
        .map(|&width| "-".repeat(width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

fn push_line(out: &mut String, prefix: &str, line: &str) {
    out.push_str(prefix);
    out.push_str(line);
    out.push('\n');
}
