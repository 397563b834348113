//! ABOUTME: Visible-length measurement and truncation for color-coded text
//! ABOUTME: Color escapes are `ESC[<n>m` or `ESC[<n>;<n>m` and take no columns

use lt_core::{Error, Result};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Marker inserted where [`squeeze`] removed characters
pub const ELISION: &str = "..";

fn color_code() -> &'static Regex {
    static COLOR_CODE: OnceLock<Regex> = OnceLock::new();
    COLOR_CODE.get_or_init(|| {
        Regex::new(r"\x1b\[[0-9]+(;[0-9]+)?m").expect("color code pattern is valid")
    })
}

/// Remove color escape sequences from `s`
pub fn strip_color(s: &str) -> Cow<'_, str> {
    color_code().replace_all(s, "")
}

/// Number of characters in `s` once color escape sequences are removed
///
/// # Examples
///
/// ```
/// use lt_text::visible_length;
/// assert_eq!(visible_length("\u{1b}[31mhello\u{1b}[0m"), 5);
/// ```
pub fn visible_length(s: &str) -> usize {
    strip_color(s).chars().count()
}

/// Shorten `s` to `max_len` characters, keeping the last `tail` of them
///
/// Strings that already fit are returned unchanged. Otherwise the result is
/// the head of `s`, then [`ELISION`], then the last `tail` characters.
///
/// # Examples
///
/// ```
/// use lt_text::squeeze;
/// assert_eq!(squeeze("abcdefghij", 6, 0).unwrap(), "abcd..");
/// assert_eq!(squeeze("abcdefghij", 8, 2).unwrap(), "abcd..ij");
/// ```
pub fn squeeze(s: &str, max_len: usize, tail: usize) -> Result<Cow<'_, str>> {
    let len = s.chars().count();
    if len <= max_len {
        return Ok(Cow::Borrowed(s));
    }

    let head = tail
        .checked_add(ELISION.len())
        .and_then(|kept| max_len.checked_sub(kept))
        .ok_or_else(|| {
            Error::InvalidArgument(format!(
                "cannot squeeze to {} characters while keeping a tail of {}",
                max_len, tail
            ))
        })?;

    let mut out: String = s.chars().take(head).collect();
    out.push_str(ELISION);
    out.extend(s.chars().skip(len - tail));
    Ok(Cow::Owned(out))
}
