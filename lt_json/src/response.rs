//! ABOUTME: Reading fields out of JSON response bodies and pretty-printing them
//! ABOUTME: Missing keys fall back quietly, malformed JSON is a parse failure

use crate::trim::trim;
use lt_core::{Error, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Map, Serializer, Value};
use std::io::{self, Write};

/// Threshold [`format_json`] trims at whenever trimming is enabled
pub const FORMAT_JSON_TRIM_LEN: usize = 100;

/// Key read by [`get_transaction_id`]
pub const TRANSACTION_ID_KEY: &str = "transaction_id";

/// Anything that exposes a response body as text
pub trait ResponseText {
    fn text(&self) -> &str;
}

impl ResponseText for str {
    fn text(&self) -> &str {
        self
    }
}

impl ResponseText for String {
    fn text(&self) -> &str {
        self.as_str()
    }
}

impl<T: ResponseText + ?Sized> ResponseText for &T {
    fn text(&self) -> &str {
        (**self).text()
    }
}

/// `body[key]`, or `fallback` when the body has no such key
///
/// # Examples
///
/// ```
/// use lt_json::extract_field;
/// use serde_json::json;
///
/// let body = r#"{"head_block_num": 42}"#;
/// assert_eq!(extract_field(body, "head_block_num", json!(0)).unwrap(), json!(42));
/// assert_eq!(extract_field(body, "missing", json!(0)).unwrap(), json!(0));
/// assert!(extract_field("{", "missing", json!(0)).is_err());
/// ```
pub fn extract_field<R>(response: &R, key: &str, fallback: Value) -> Result<Value>
where
    R: ResponseText + ?Sized,
{
    let mut parsed: Value = serde_json::from_str(response.text())?;
    Ok(parsed
        .as_object_mut()
        .and_then(|map| map.remove(key))
        .unwrap_or(fallback))
}

/// The `transaction_id` of a response body, if it carries one
pub fn get_transaction_id<R>(response: &R) -> Result<Option<String>>
where
    R: ResponseText + ?Sized,
{
    let id = match extract_field(response, TRANSACTION_ID_KEY, Value::Null)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    };
    Ok(id)
}

/// A copy of `data` restricted to `keys`, failing on the first missing key
pub fn fetch_keys<I, K>(data: &Map<String, Value>, keys: I) -> Result<Map<String, Value>>
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter()
        .map(|key| {
            let key = key.as_ref();
            data.get(key)
                .map(|value| (key.to_string(), value.clone()))
                .ok_or_else(|| Error::KeyNotFound(key.to_string()))
        })
        .collect()
}

/// Pretty-print a JSON document with four-space indentation
///
/// Keys keep their input order and non-ASCII characters are written as
/// `\uXXXX` escapes. When `max_len` is a non-zero value, long strings are
/// trimmed at [`FORMAT_JSON_TRIM_LEN`]; the given number only switches
/// trimming on.
pub fn format_json(text: &str, max_len: Option<usize>) -> Result<String> {
    let mut data: Value = serde_json::from_str(text)?;
    if matches!(max_len, Some(n) if n > 0) {
        trim(&mut data, FORMAT_JSON_TRIM_LEN)?;
    }

    let mut buf = Vec::new();
    let formatter = AsciiFormatter(PrettyFormatter::with_indent(b"    "));
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| Error::ParseFailure(e.to_string()))
}

/// Pretty layout with every non-ASCII character escaped as UTF-16 units
struct AsciiFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
