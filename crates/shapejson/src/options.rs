use core::fmt;
use core::str::FromStr;

use crate::error::Error;

/// Wire representation of a timestamp scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampFormat {
    /// `2023-01-01T00:00:00Z`, emitted as a JSON string
    #[default]
    Iso8601,
    /// `Sun, 01 Jan 2023 00:00:00 -0000`, emitted as a JSON string
    Rfc822,
    /// Whole seconds since the Unix epoch, emitted as a JSON number
    UnixTimestamp,
}

impl TimestampFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampFormat::Iso8601 => "iso8601",
            TimestampFormat::Rfc822 => "rfc822",
            TimestampFormat::UnixTimestamp => "unixtimestamp",
        }
    }
}

impl FromStr for TimestampFormat {
    type Err = Error;

    /// Names compare case-insensitively, so `unixTimestamp` is accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("iso8601") {
            Ok(TimestampFormat::Iso8601)
        } else if s.eq_ignore_ascii_case("rfc822") {
            Ok(TimestampFormat::Rfc822)
        } else if s.eq_ignore_ascii_case("unixtimestamp") {
            Ok(TimestampFormat::UnixTimestamp)
        } else {
            Err(Error::InvalidTimestampFormat(s.to_string()))
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Format used by timestamp shapes that carry no `timestamp_format` metadata
    pub default_timestamp_format: TimestampFormat,
    /// Reject string/integer/float/boolean values whose kind differs from the shape.
    /// When off, such values pass through in their own JSON encoding.
    pub strict: bool,
}
