//! ABOUTME: Recursive shortening of long string leaves in JSON values
//! ABOUTME: `trim` edits in place, `abridge` returns a trimmed copy

use lt_core::Result;
use lt_text::squeeze;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Longest string left intact by default
pub const DEFAULT_MAX_LEN: usize = 79;

/// Characters kept from the end of a shortened string
pub const KEEP_TAIL: usize = 3;

/// How [`trim_with`] walks a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimOptions {
    /// Strings longer than this many characters are squeezed
    pub max_len: usize,
    /// Also squeeze strings that sit directly inside arrays
    pub shorten_sequence_items: bool,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            shorten_sequence_items: false,
        }
    }
}

impl TrimOptions {
    pub fn new(max_len: usize) -> Self {
        Self {
            max_len,
            ..Self::default()
        }
    }
}

/// Shorten object string values longer than `max_len`, recursing into
/// nested objects and arrays
///
/// Strings directly inside arrays are not shortened; see
/// [`TrimOptions::shorten_sequence_items`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// let mut data = json!({"a": "x".repeat(100), "b": ["y".repeat(100)]});
/// lt_json::trim(&mut data, 79).unwrap();
/// assert_eq!(data["a"].as_str().unwrap().chars().count(), 79);
/// assert_eq!(data["b"][0].as_str().unwrap().len(), 100);
/// ```
pub fn trim(data: &mut Value, max_len: usize) -> Result<()> {
    trim_with(data, &TrimOptions::new(max_len))
}

/// [`trim`] with explicit options
pub fn trim_with(data: &mut Value, options: &TrimOptions) -> Result<()> {
    match data {
        Value::Object(map) => {
            for value in map.values_mut() {
                if is_container(value) {
                    trim_with(value, options)?;
                } else {
                    shorten(value, options.max_len)?;
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                if is_container(item) {
                    trim_with(item, options)?;
                } else if options.shorten_sequence_items {
                    shorten(item, options.max_len)?;
                }
                // Inherited behavior: array string items were never written
                // back, and existing log output depends on that.
            }
        }
        _ => {}
    }
    Ok(())
}

/// A trimmed deep copy of `data`; the original is left untouched
pub fn abridge(data: &Value, max_len: usize) -> Result<Value> {
    abridge_with(data, &TrimOptions::new(max_len))
}

/// [`abridge`] with explicit options
pub fn abridge_with(data: &Value, options: &TrimOptions) -> Result<Value> {
    let mut clone = data.clone();
    trim_with(&mut clone, options)?;
    Ok(clone)
}

fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

fn shorten(value: &mut Value, max_len: usize) -> Result<()> {
    if let Value::String(s) = value {
        if s.chars().count() > max_len {
            let short = squeeze(s, max_len, KEEP_TAIL)?.into_owned();
            *s = short;
        }
    }
    Ok(())
}
