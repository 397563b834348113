//! ABOUTME: Layered configuration for helper defaults with validation
//! ABOUTME: Defaults, then an optional lthelper.toml, then LSTESTS_ environment variables

use config::{Config as ConfigBuilder, Environment, File};
use lt_core::{Error, Result, TimeFormat};
use lt_json::TrimOptions;
use lt_text::HeaderLayout;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "lthelper.toml";

/// Prefix of environment overrides, e.g. `LSTESTS_TRIM__MAX_LEN=120`
pub const ENV_PREFIX: &str = "LSTESTS";

/// Main configuration struct
#[derive(Debug, Clone, Deserialize, Serialize, Validate, Default)]
#[serde(default)]
pub struct Config {
    #[validate(nested)]
    pub header: HeaderConfig,
    #[validate(nested)]
    pub trim: TrimConfig,
    #[validate(nested)]
    pub tokens: TokenConfig,
    #[validate(nested)]
    pub time: TimeConfig,
}

/// Bar layout for `make_header`
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct HeaderConfig {
    #[validate(range(min = 1, max = 1000))]
    pub total: usize,
    #[validate(range(max = 1000))]
    pub left: usize,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            total: HeaderLayout::MAKE.total,
            left: HeaderLayout::MAKE.left,
        }
    }
}

/// JSON trimming
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct TrimConfig {
    /// Must leave room for the elision marker and the kept tail
    #[validate(range(min = 5))]
    pub max_len: usize,
    pub shorten_sequence_items: bool,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            max_len: lt_json::DEFAULT_MAX_LEN,
            shorten_sequence_items: false,
        }
    }
}

/// Token amount rendering
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct TokenConfig {
    #[validate(range(max = 18))]
    pub digits: usize,
    #[validate(length(min = 1))]
    pub symbol: String,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            digits: lt_text::tokens::DEFAULT_DIGITS,
            symbol: lt_text::tokens::DEFAULT_SYMBOL.to_string(),
        }
    }
}

/// Timestamp shape
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct TimeConfig {
    pub date: bool,
    #[validate(range(max = 9))]
    pub precision: u32,
    pub local_time: bool,
    pub time_zone: bool,
}

impl Default for TimeConfig {
    fn default() -> Self {
        let format = TimeFormat::default();
        Self {
            date: format.date,
            precision: format.precision,
            local_time: format.local_time,
            time_zone: format.time_zone,
        }
    }
}

impl Config {
    /// Load from defaults, `lthelper.toml` if present, and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load like [`Config::load`] but read `path` instead of the default file
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let defaults = Config::default();
        let mut builder = ConfigBuilder::builder()
            .set_default("header.total", defaults.header.total as i64)?
            .set_default("header.left", defaults.header.left as i64)?
            .set_default("trim.max_len", defaults.trim.max_len as i64)?
            .set_default("trim.shorten_sequence_items", defaults.trim.shorten_sequence_items)?
            .set_default("tokens.digits", defaults.tokens.digits as i64)?
            .set_default("tokens.symbol", defaults.tokens.symbol)?
            .set_default("time.date", defaults.time.date)?
            .set_default("time.precision", i64::from(defaults.time.precision))?
            .set_default("time.local_time", defaults.time.local_time)?
            .set_default("time.time_zone", defaults.time.time_zone)?;

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        // Load from environment variables with LSTESTS_ prefix (highest priority)
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build config: {}", e)))?;

        let parsed: Config = config
            .try_deserialize()
            .map_err(|e| Error::Config(format!("Failed to deserialize config: {}", e)))?;

        parsed
            .validate()
            .map_err(|e| Error::Config(format!("Config validation failed: {}", e)))?;

        Ok(parsed)
    }

    pub fn header_layout(&self) -> HeaderLayout {
        HeaderLayout {
            total: self.header.total,
            left: self.header.left,
        }
    }

    pub fn trim_options(&self) -> TrimOptions {
        TrimOptions {
            max_len: self.trim.max_len,
            shorten_sequence_items: self.trim.shorten_sequence_items,
        }
    }

    pub fn time_format(&self) -> TimeFormat {
        TimeFormat {
            date: self.time.date,
            precision: self.time.precision,
            local_time: self.time.local_time,
            time_zone: self.time.time_zone,
        }
    }
}
