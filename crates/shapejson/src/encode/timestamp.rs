use chrono::{DateTime, SecondsFormat, Utc};

use crate::encode::path::Path;
use crate::error::{Error, Result};
use crate::options::TimestampFormat;
use crate::value::{Number, Value};

/// Rendered timestamp: either a string to quote or a bare integer.
#[derive(Debug, PartialEq, Eq)]
pub enum TimestampText {
    Quoted(String),
    Epoch(i64),
}

pub fn format_timestamp(dt: &DateTime<Utc>, format: TimestampFormat) -> TimestampText {
    match format {
        TimestampFormat::Iso8601 => {
            TimestampText::Quoted(dt.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        // `-0000` marks a UTC time with no local offset information.
        TimestampFormat::Rfc822 => {
            TimestampText::Quoted(dt.format("%a, %d %b %Y %H:%M:%S -0000").to_string())
        }
        TimestampFormat::UnixTimestamp => TimestampText::Epoch(dt.timestamp()),
    }
}

/// Normalize a timestamp-like value to UTC.
///
/// Accepts instants, RFC 3339 strings, and epoch seconds.
pub fn to_utc(value: &Value, path: &Path<'_>) -> Result<DateTime<Utc>> {
    let out_of_range = || Error::Mismatch {
        path: path.to_string(),
        expected: "timestamp within the supported range",
        found: value.kind_name(),
    };
    match value {
        Value::Timestamp(dt) => Ok(dt.with_timezone(&Utc)),
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| Error::Mismatch {
                path: path.to_string(),
                expected: "RFC 3339 timestamp string",
                found: "string",
            }),
        Value::Number(Number::I64(secs)) => {
            DateTime::from_timestamp(*secs, 0).ok_or_else(out_of_range)
        }
        Value::Number(Number::U64(secs)) => i64::try_from(*secs)
            .ok()
            .and_then(|s| DateTime::from_timestamp(s, 0))
            .ok_or_else(out_of_range),
        Value::Number(Number::F64(f)) => {
            if !f.is_finite() {
                return Err(Error::NonFiniteFloat {
                    path: path.to_string(),
                });
            }
            let secs = f.floor();
            let nanos = ((f - secs) * 1e9) as u32;
            if secs < i64::MIN as f64 || secs > i64::MAX as f64 {
                return Err(out_of_range());
            }
            DateTime::from_timestamp(secs as i64, nanos.min(999_999_999)).ok_or_else(out_of_range)
        }
        other => Err(Error::Mismatch {
            path: path.to_string(),
            expected: "timestamp",
            found: other.kind_name(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn new_year() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn iso8601_is_whole_seconds_zulu() {
        let dt = new_year() + chrono::Duration::milliseconds(250);
        assert_eq!(
            format_timestamp(&dt, TimestampFormat::Iso8601),
            TimestampText::Quoted("2023-01-01T00:00:00Z".into())
        );
    }

    #[test]
    fn rfc822_uses_day_and_month_names() {
        assert_eq!(
            format_timestamp(&new_year(), TimestampFormat::Rfc822),
            TimestampText::Quoted("Sun, 01 Jan 2023 00:00:00 -0000".into())
        );
    }

    #[test]
    fn unix_epoch_is_floored_seconds() {
        assert_eq!(
            format_timestamp(&new_year(), TimestampFormat::UnixTimestamp),
            TimestampText::Epoch(1_672_531_200)
        );
        let before_epoch = Utc.timestamp_opt(-2, 500_000_000).unwrap();
        assert_eq!(
            format_timestamp(&before_epoch, TimestampFormat::UnixTimestamp),
            TimestampText::Epoch(-2)
        );
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        let dt = DateTime::parse_from_rfc3339("2023-01-01T05:30:00+05:30").unwrap();
        let utc = to_utc(&Value::from(dt), &Path::Root).unwrap();
        assert_eq!(utc, new_year());
    }

    #[test]
    fn epoch_numbers_and_strings_are_accepted() {
        assert_eq!(to_utc(&Value::from(1_672_531_200i64), &Path::Root).unwrap(), new_year());
        assert_eq!(to_utc(&Value::from(1_672_531_200.0), &Path::Root).unwrap(), new_year());
        assert_eq!(
            to_utc(&Value::from("2023-01-01T00:00:00Z"), &Path::Root).unwrap(),
            new_year()
        );
    }

    #[test]
    fn garbage_string_is_a_mismatch() {
        let err = to_utc(&Value::from("yesterday"), &Path::Root).unwrap_err();
        assert!(matches!(err, Error::Mismatch { found: "string", .. }));
    }
}
