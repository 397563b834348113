//! ABOUTME: Text helpers for visible length, truncation, padding, and headers
//! ABOUTME: Also hosts the small scalar helpers shared by test harnesses

pub mod ansi;
pub mod color;
pub mod header;
pub mod level;
pub mod pad;
pub mod scalar;
pub mod tokens;

pub use ansi::{squeeze, strip_color, visible_length};
pub use header::{
    format_header, format_header_with, make_header, make_header_with, title_case, HeaderLayout,
    HeaderLevel,
};
pub use level::LogLevel;
pub use pad::{pad, PadOptions};
pub use scalar::{optional, override_chain, plural, plural_with};
pub use tokens::format_tokens;

/// Fill for trace headers and separators
pub const HORIZONTAL_BAR: char = '─';
/// Fill for trace headers
pub const HORIZONTAL_DASH: char = '⎯';
/// Column separator for tabular output
pub const VERTICAL_BAR: char = '│';
