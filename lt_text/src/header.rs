//! ABOUTME: Section headers at info, debug, and trace verbosity
//! ABOUTME: Strict and lenient entry points differ only on unknown levels

use crate::color::black_on_cyan;
use crate::level::LogLevel;
use crate::pad::{pad, PadOptions};
use crate::HORIZONTAL_DASH;
use lt_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Prefix for info headers
pub const INFO_PREFIX: &str = ">>> ";

/// Levels that have a header style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderLevel {
    Info,
    Debug,
    Trace,
}

impl FromStr for HeaderLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(HeaderLevel::Info),
            "debug" => Ok(HeaderLevel::Debug),
            "trace" => Ok(HeaderLevel::Trace),
            _ => Err(Error::InvalidArgument(format!(
                "Invalid header level \"{}\"",
                s
            ))),
        }
    }
}

impl TryFrom<LogLevel> for HeaderLevel {
    type Error = LogLevel;

    fn try_from(level: LogLevel) -> std::result::Result<Self, LogLevel> {
        match level {
            LogLevel::Info => Ok(HeaderLevel::Info),
            LogLevel::Debug => Ok(HeaderLevel::Debug),
            LogLevel::Trace => Ok(HeaderLevel::Trace),
            other => Err(other),
        }
    }
}

/// Width of the bar drawn by debug and trace headers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLayout {
    pub total: usize,
    pub left: usize,
}

impl HeaderLayout {
    /// Layout used by [`format_header`]
    pub const FORMAT: HeaderLayout = HeaderLayout {
        total: 100,
        left: 0,
    };

    /// Layout used by [`make_header`]
    pub const MAKE: HeaderLayout = HeaderLayout {
        total: 100,
        left: 20,
    };
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self::MAKE
    }
}

/// Render `header` in the style of `level`
pub fn render_header(header: &str, level: HeaderLevel, layout: &HeaderLayout) -> String {
    match level {
        HeaderLevel::Info => format!("{}{}", INFO_PREFIX, title_case(header)),
        HeaderLevel::Debug => pad(
            &black_on_cyan(header),
            layout.total,
            &PadOptions::fill('-').left(layout.left),
        ),
        HeaderLevel::Trace => pad(
            header,
            layout.total,
            &PadOptions::fill(HORIZONTAL_DASH).left(layout.left),
        ),
    }
}

/// Header for `level`, failing on anything but info, debug, or trace
///
/// # Examples
///
/// ```
/// use lt_text::format_header;
/// assert_eq!(format_header("setup done", "info").unwrap(), ">>> Setup Done");
/// assert!(format_header("setup done", "bogus").is_err());
/// ```
pub fn format_header(header: &str, level: &str) -> Result<String> {
    format_header_with(header, level, &HeaderLayout::FORMAT)
}

/// [`format_header`] with an explicit bar layout
pub fn format_header_with(header: &str, level: &str, layout: &HeaderLayout) -> Result<String> {
    let level: HeaderLevel = level.parse()?;
    Ok(render_header(header, level, layout))
}

/// Header for `level`, or `header` unchanged when the level has no style
///
/// Unlike [`format_header`] this never fails: levels such as `warn` or
/// names the logger does not know pass the text through as is.
///
/// # Examples
///
/// ```
/// use lt_text::make_header;
/// assert_eq!(make_header("setup done", "INFO"), ">>> Setup Done");
/// assert_eq!(make_header("setup done", "bogus"), "setup done");
/// ```
pub fn make_header(header: &str, level: &str) -> String {
    make_header_with(header, level, &HeaderLayout::MAKE)
}

/// [`make_header`] with an explicit bar layout
pub fn make_header_with(header: &str, level: &str, layout: &HeaderLayout) -> String {
    let styled = level
        .parse::<LogLevel>()
        .ok()
        .and_then(|level| HeaderLevel::try_from(level).ok());

    match styled {
        Some(level) => render_header(header, level, layout),
        None => header.to_string(),
    }
}

/// Capitalize the first letter of every alphabetic run, lowercase the rest
///
/// # Examples
///
/// ```
/// use lt_text::title_case;
/// assert_eq!(title_case("hello wORLD-wide"), "Hello World-Wide");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::{strip_color, visible_length};

    #[test]
    fn test_title_case() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("start node 2"), "Start Node 2");
        assert_eq!(title_case("they're here"), "They'Re Here");
        assert_eq!(title_case("ÉCOLE normale"), "École Normale");
    }

    #[test]
    fn test_format_header_info() {
        assert_eq!(
            format_header("launch producer", "info").unwrap(),
            ">>> Launch Producer"
        );
        assert_eq!(
            format_header("launch producer", "INFO").unwrap(),
            ">>> Launch Producer"
        );
    }

    #[test]
    fn test_format_header_debug() {
        let out = format_header("boot", "debug").unwrap();
        assert!(out.starts_with("\x1b[30;46mboot\x1b[0m"));
        assert_eq!(visible_length(&out), 100);
        assert!(strip_color(&out).ends_with("---"));
    }

    #[test]
    fn test_format_header_trace() {
        let out = format_header("boot", "trace").unwrap();
        assert!(out.starts_with("boot⎯"));
        assert_eq!(out.chars().count(), 100);
    }

    #[test]
    fn test_format_header_rejects_unknown_level() {
        let err = format_header("boot", "bogus").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(ref msg) if msg.contains("bogus")));

        // warn is a log level but has no header style
        assert!(format_header("boot", "warn").is_err());
    }

    #[test]
    fn test_make_header_levels() {
        assert_eq!(make_header("boot", "info"), ">>> Boot");

        let debug = make_header("boot", "debug");
        assert!(debug.starts_with(&format!("{}\x1b[30;46mboot", "-".repeat(20))));
        assert_eq!(visible_length(&debug), 100);

        let trace = make_header("boot", "Trace");
        assert!(trace.starts_with(&format!("{}boot", "⎯".repeat(20))));
        assert_eq!(trace.chars().count(), 100);
    }

    #[test]
    fn test_make_header_passes_through_unknown_level() {
        assert_eq!(make_header("boot", "bogus"), "boot");
        assert_eq!(make_header("boot", "warn"), "boot");
        assert_eq!(make_header("boot", "error"), "boot");
    }

    #[test]
    fn test_custom_layout() {
        let layout = HeaderLayout { total: 10, left: 2 };
        assert_eq!(make_header_with("ab", "trace", &layout), "⎯⎯ab⎯⎯⎯⎯⎯⎯");
        assert_eq!(
            format_header_with("ab", "trace", &layout).unwrap(),
            "⎯⎯ab⎯⎯⎯⎯⎯⎯"
        );
    }

    #[test]
    fn test_header_level_from_log_level() {
        assert_eq!(HeaderLevel::try_from(LogLevel::Debug), Ok(HeaderLevel::Debug));
        assert_eq!(HeaderLevel::try_from(LogLevel::Fatal), Err(LogLevel::Fatal));
    }
}
