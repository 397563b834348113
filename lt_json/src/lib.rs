//! ABOUTME: JSON helpers for trimming long strings and reading response bodies
//! ABOUTME: Works on serde_json values so callers can log payloads compactly

pub mod response;
pub mod trim;

pub use response::{
    extract_field, fetch_keys, format_json, get_transaction_id, ResponseText,
    FORMAT_JSON_TRIM_LEN,
};
pub use trim::{abridge, abridge_with, trim, trim_with, TrimOptions, DEFAULT_MAX_LEN};
