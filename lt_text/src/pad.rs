//! ABOUTME: Right-padding that measures text by its visible width
//! ABOUTME: Used to draw fixed-width header bars around color-coded titles

use crate::ansi::visible_length;

/// Layout knobs for [`pad`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadOptions<'a> {
    /// Copies of `fill` placed before the text
    pub left: usize,
    /// Character repeated on both sides
    pub fill: char,
    /// Placed on either side of the text, inside the fill
    pub sep: &'a str,
    /// Visible length of the text when the caller already knows it
    pub text_len: Option<usize>,
}

impl Default for PadOptions<'_> {
    fn default() -> Self {
        Self {
            left: 0,
            fill: ' ',
            sep: "",
            text_len: None,
        }
    }
}

impl<'a> PadOptions<'a> {
    /// Options with the given fill character and everything else default
    pub fn fill(fill: char) -> Self {
        Self {
            fill,
            ..Self::default()
        }
    }

    /// Set the number of leading fill characters
    pub fn left(mut self, left: usize) -> Self {
        self.left = left;
        self
    }

    /// Set the separator placed around the text
    pub fn sep(mut self, sep: &'a str) -> Self {
        self.sep = sep;
        self
    }
}

/// Pad `text` so that its visible width reaches `total`
///
/// Builds `fill * left + sep + text + sep` and appends `fill` until the
/// result is `total` columns wide, not counting color escapes inside `text`.
/// Text that is already wider is never cut.
///
/// # Examples
///
/// ```
/// use lt_text::{pad, PadOptions};
/// assert_eq!(pad("x", 5, &PadOptions::fill('-').left(2)), "--x--");
/// assert_eq!(pad("hi", 10, &PadOptions::fill(':').left(1).sep(" ")), ": hi :::::");
/// ```
pub fn pad(text: &str, total: usize, options: &PadOptions<'_>) -> String {
    let raw_len = text.chars().count();
    let text_len = options.text_len.unwrap_or_else(|| visible_length(text));

    let mut out = String::with_capacity(text.len() + total);
    out.extend(std::iter::repeat(options.fill).take(options.left));
    out.push_str(options.sep);
    out.push_str(text);
    out.push_str(options.sep);

    // invisible characters in `text` widen the raw target
    let target = (total + raw_len).saturating_sub(text_len);
    let current = out.chars().count();
    if current < target {
        out.extend(std::iter::repeat(options.fill).take(target - current));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::black_on_cyan;

    #[test]
    fn test_pad_plain_text() {
        let out = pad("x", 5, &PadOptions::fill('-').left(2));
        assert!(out.starts_with("--"));
        assert_eq!(out, "--x--");
        assert!(visible_length(&out) >= 5);
    }

    #[test]
    fn test_pad_defaults_to_spaces() {
        assert_eq!(pad("ab", 4, &PadOptions::default()), "ab  ");
    }

    #[test]
    fn test_pad_never_truncates() {
        let out = pad("hello, world", 4, &PadOptions::fill('-').left(3));
        assert_eq!(out, "---hello, world");
    }

    #[test]
    fn test_pad_compensates_for_color_codes() {
        let colored = black_on_cyan("title");
        let out = pad(&colored, 20, &PadOptions::fill('-').left(2));
        assert!(out.starts_with("--"));
        assert_eq!(visible_length(&out), 20);
    }

    #[test]
    fn test_pad_with_separator() {
        let out = pad("hello, world", 24, &PadOptions::fill(':').left(3).sep(" ~ "));
        assert_eq!(out, "::: ~ hello, world ~ :::");
    }

    #[test]
    fn test_pad_uses_text_len_hint() {
        let options = PadOptions {
            text_len: Some(1),
            ..PadOptions::fill('.')
        };
        // "abc" claims one column, so the raw target grows by two
        assert_eq!(pad("abc", 4, &options), "abc...");
    }

    #[test]
    fn test_pad_multibyte_fill() {
        let out = pad("t", 4, &PadOptions::fill('⎯'));
        assert_eq!(out, "t⎯⎯⎯");
    }
}
