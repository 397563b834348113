//! ABOUTME: Core error taxonomy, tracing setup, and timestamp helpers
//! ABOUTME: Foundation crate used by every other lstests helper crate

pub mod error;
pub mod telemetry;
pub mod time;

pub use error::{Error, Result};
pub use time::{format_time, get_time, TimeFormat};
