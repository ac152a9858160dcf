//! Terminal styles for transit lines.
//!
//! Terminals offer far fewer colors than the operator's livery, so the
//! table only approximates it: a background, an optional foreground and
//! an intensity per line.

use std::collections::HashMap;
use std::sync::LazyLock;

use colored::{Color, ColoredString, Colorize};

/// Lines sharing the night-bus band style.
const NIGHT_BUS_LINES: [&str; 4] = ["16", "17", "18", "19"];

/// Text intensity of a line badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intensity {
    Normal,
    Bright,
    Dim,
}

/// How a line identifier is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    pub background: Color,
    pub foreground: Option<Color>,
    pub intensity: Intensity,
}

impl LineStyle {
    const fn new(background: Color, foreground: Option<Color>, intensity: Intensity) -> Self {
        Self {
            background,
            foreground,
            intensity,
        }
    }

    /// Wrap `text` in this style's start sequence and a reset.
    pub fn paint(&self, text: &str) -> ColoredString {
        let mut painted = text.on_color(self.background);
        if let Some(fg) = self.foreground {
            painted = painted.color(fg);
        }
        match self.intensity {
            Intensity::Normal => painted,
            Intensity::Bright => painted.bold(),
            Intensity::Dim => painted.dimmed(),
        }
    }
}

/// Style for lines without an entry of their own.
pub const DEFAULT_STYLE: LineStyle = LineStyle::new(Color::Blue, None, Intensity::Bright);

/// Style shared by the night buses.
pub const NIGHT_BUS_STYLE: LineStyle =
    LineStyle::new(Color::Blue, Some(Color::Green), Intensity::Bright);

static LINE_STYLES: LazyLock<HashMap<&'static str, LineStyle>> = LazyLock::new(|| {
    use Color::*;
    use Intensity::*;

    let mut styles = HashMap::from([
        ("1", LineStyle::new(White, Some(Blue), Normal)),
        ("2", LineStyle::new(Yellow, Some(Blue), Bright)),
        ("3", LineStyle::new(Blue, Some(White), Dim)),
        ("4", LineStyle::new(Green, Some(White), Dim)),
        ("5", LineStyle::new(Red, Some(White), Bright)),
        ("6", LineStyle::new(Red, Some(Black), Dim)),
        ("7", LineStyle::new(Red, Some(White), Dim)),
        ("8", LineStyle::new(Magenta, Some(White), Dim)),
        ("9", LineStyle::new(Cyan, Some(White), Normal)),
        ("10", LineStyle::new(Yellow, Some(Black), Bright)),
        ("11", LineStyle::new(Black, Some(White), Bright)),
        ("13", LineStyle::new(White, Some(Blue), Dim)),
    ]);
    for line in NIGHT_BUS_LINES {
        styles.insert(line, NIGHT_BUS_STYLE);
    }
    styles
});

/// Look up the style for a line identifier.
///
/// ```
/// use vt::domain::{line_style, DEFAULT_STYLE, NIGHT_BUS_STYLE};
///
/// assert_eq!(line_style("17"), NIGHT_BUS_STYLE);
/// assert_eq!(line_style("Röd"), DEFAULT_STYLE);
/// ```
pub fn line_style(line: &str) -> LineStyle {
    LINE_STYLES.get(line).copied().unwrap_or(DEFAULT_STYLE)
}

/// Render a line identifier as a colored badge.
pub fn colorize_line(line: &str) -> String {
    line_style(line).paint(line).to_string()
}
