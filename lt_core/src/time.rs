// ABOUTME: Wall-clock timestamp formatting for log lines and test artifacts.
// ABOUTME: Supports optional date, sub-second digits, local time, and zone suffix.
use chrono::{DateTime, Local, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Sub-second digits beyond nanoseconds carry no information
pub const MAX_PRECISION: u32 = 9;

/// Shape of a timestamp produced by [`get_time`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeFormat {
    /// Prefix the clock time with `YYYY-MM-DDT`
    pub date: bool,
    /// Number of sub-second digits, 0 omits the fraction
    pub precision: u32,
    /// Use local calendar time instead of UTC
    pub local_time: bool,
    /// Append the zone after a space
    pub time_zone: bool,
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            date: true,
            precision: 3,
            local_time: false,
            time_zone: false,
        }
    }
}

impl TimeFormat {
    /// The chrono pattern that parses a string produced with this format
    ///
    /// # Examples
    ///
    /// ```
    /// use lt_core::TimeFormat;
    /// assert_eq!(TimeFormat::default().pattern(), "%Y-%m-%dT%H:%M:%S%.f");
    /// ```
    pub fn pattern(&self) -> String {
        let mut pattern = String::from(if self.date {
            "%Y-%m-%dT%H:%M:%S"
        } else {
            "%H:%M:%S"
        });
        if self.precision > 0 {
            pattern.push_str("%.f");
        }
        if self.time_zone {
            pattern.push_str(if self.local_time { " %:z" } else { " UTC" });
        }
        pattern
    }
}

/// Format the current wall-clock time
///
/// # Examples
///
/// ```
/// use lt_core::{get_time, TimeFormat};
/// let stamp = get_time(&TimeFormat::default());
/// assert_eq!(stamp.len(), "2021-01-01T00:00:00.000".len());
/// ```
pub fn get_time(format: &TimeFormat) -> String {
    if format.local_time {
        format_time(&Local::now(), format)
    } else {
        format_time(&Utc::now(), format)
    }
}

/// Format a fixed instant the way [`get_time`] formats the current one
///
/// Sub-second digits are truncated, never rounded.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lt_core::{format_time, TimeFormat};
///
/// let instant = Utc.timestamp_opt(1_609_459_200, 987_654_321).unwrap();
/// let format = TimeFormat { precision: 2, ..TimeFormat::default() };
/// assert_eq!(format_time(&instant, &format), "2021-01-01T00:00:00.98");
/// ```
pub fn format_time<Tz>(instant: &DateTime<Tz>, format: &TimeFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = if format.date {
        instant.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        instant.format("%H:%M:%S").to_string()
    };

    let precision = format.precision.min(MAX_PRECISION);
    if precision > 0 {
        // leap seconds report nanos past 1e9
        let nanos = u64::from(instant.nanosecond().min(999_999_999));
        let subsec = nanos / 10u64.pow(MAX_PRECISION - precision);
        out.push_str(&format!(".{:0width$}", subsec, width = precision as usize));
    }

    if format.time_zone {
        out.push(' ');
        if format.local_time {
            out.push_str(&instant.format("%:z").to_string());
        } else {
            out.push_str("UTC");
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, NaiveDateTime, NaiveTime};

    fn fixed_instant() -> DateTime<Utc> {
        // 2021-03-04T05:06:07.123456789Z
        Utc.timestamp_opt(1_614_834_367, 123_456_789).unwrap()
    }

    #[test]
    fn test_default_format() {
        let stamp = format_time(&fixed_instant(), &TimeFormat::default());
        assert_eq!(stamp, "2021-03-04T05:06:07.123");
    }

    #[test]
    fn test_without_date_or_fraction() {
        let format = TimeFormat {
            date: false,
            precision: 0,
            ..TimeFormat::default()
        };
        assert_eq!(format_time(&fixed_instant(), &format), "05:06:07");
    }

    #[test]
    fn test_fraction_is_truncated_and_zero_padded() {
        let format = TimeFormat {
            precision: 6,
            ..TimeFormat::default()
        };
        assert_eq!(
            format_time(&fixed_instant(), &format),
            "2021-03-04T05:06:07.123456"
        );

        let early = Utc.timestamp_opt(1_614_834_367, 4_000_000).unwrap();
        let format = TimeFormat {
            precision: 3,
            ..TimeFormat::default()
        };
        assert_eq!(format_time(&early, &format), "2021-03-04T05:06:07.004");
    }

    #[test]
    fn test_precision_is_capped() {
        let format = TimeFormat {
            precision: 12,
            ..TimeFormat::default()
        };
        assert_eq!(
            format_time(&fixed_instant(), &format),
            "2021-03-04T05:06:07.123456789"
        );
    }

    #[test]
    fn test_zone_suffix() {
        let utc = TimeFormat {
            time_zone: true,
            ..TimeFormat::default()
        };
        assert_eq!(
            format_time(&fixed_instant(), &utc),
            "2021-03-04T05:06:07.123 UTC"
        );

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = TimeFormat {
            time_zone: true,
            local_time: true,
            precision: 0,
            ..TimeFormat::default()
        };
        assert_eq!(
            format_time(&fixed_instant().with_timezone(&offset), &local),
            "2021-03-04T07:06:07 +02:00"
        );
    }

    #[test]
    fn test_round_trip_through_pattern() {
        for precision in [0, 3, 6, 9] {
            let format = TimeFormat {
                precision,
                ..TimeFormat::default()
            };
            let stamp = format_time(&fixed_instant(), &format);
            let parsed = NaiveDateTime::parse_from_str(&stamp, &format.pattern())
                .expect("stamp should parse with its own pattern");
            let expected = fixed_instant().naive_utc();

            assert_eq!(parsed.year(), expected.year());
            assert_eq!(parsed.month(), expected.month());
            assert_eq!(parsed.day(), expected.day());
            assert_eq!(parsed.hour(), expected.hour());
            assert_eq!(parsed.minute(), expected.minute());
            assert_eq!(parsed.second(), expected.second());
            let scale = 10u32.pow(MAX_PRECISION - precision);
            assert_eq!(parsed.nanosecond(), expected.nanosecond() / scale * scale);
        }
    }

    #[test]
    fn test_round_trip_with_zone() {
        let format = TimeFormat {
            time_zone: true,
            ..TimeFormat::default()
        };
        let stamp = format_time(&fixed_instant(), &format);
        let parsed = NaiveDateTime::parse_from_str(&stamp, &format.pattern()).unwrap();
        assert_eq!(parsed.second(), 7);
    }

    #[test]
    fn test_round_trip_with_local_offset() {
        let format = TimeFormat {
            time_zone: true,
            local_time: true,
            ..TimeFormat::default()
        };
        for seconds in [2 * 3600, -(5 * 3600 + 30 * 60), 0] {
            let offset = FixedOffset::east_opt(seconds).unwrap();
            let stamp = format_time(&fixed_instant().with_timezone(&offset), &format);
            let parsed = DateTime::parse_from_str(&stamp, &format.pattern())
                .expect("local stamp should parse with its own pattern");

            assert_eq!(parsed.offset().local_minus_utc(), seconds);
            assert_eq!(parsed.timestamp(), fixed_instant().timestamp());
            assert_eq!(parsed.nanosecond(), 123_000_000);
        }

        let now = get_time(&format);
        assert!(DateTime::parse_from_str(&now, &format.pattern()).is_ok());
    }

    #[test]
    fn test_time_only_round_trip() {
        let format = TimeFormat {
            date: false,
            ..TimeFormat::default()
        };
        let stamp = format_time(&fixed_instant(), &format);
        let parsed = NaiveTime::parse_from_str(&stamp, &format.pattern()).unwrap();
        assert_eq!(parsed.hour(), 5);
        assert_eq!(parsed.minute(), 6);
        assert_eq!(parsed.second(), 7);
    }

    #[test]
    fn test_get_time_shape() {
        let stamp = get_time(&TimeFormat {
            time_zone: true,
            ..TimeFormat::default()
        });
        assert!(stamp.ends_with(" UTC"));
        assert_eq!(stamp.len(), "2021-03-04T05:06:07.123 UTC".len());

        let local = get_time(&TimeFormat {
            local_time: true,
            date: false,
            precision: 0,
            time_zone: false,
        });
        assert_eq!(local.len(), "05:06:07".len());
    }
}
