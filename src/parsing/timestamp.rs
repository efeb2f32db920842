//! Epoch seconds to calendar time.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::error::{FbDataError, Result};

/// Format used when a timestamp is rendered as text (CSV cells, JSON).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A converted export timestamp.
///
/// Keeps the raw epoch seconds from the export next to the calendar time in
/// the timezone it was converted with, so no view has to choose between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    epoch: i64,
    local: NaiveDateTime,
}

impl Timestamp {
    /// Seconds since the Unix epoch, as stored in the export.
    pub fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Wall-clock time in the conversion timezone.
    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    /// Calendar date in the conversion timezone.
    pub fn date(&self) -> NaiveDate {
        self.local.date()
    }

    pub fn year(&self) -> i32 {
        self.local.year()
    }

    pub fn month(&self) -> u32 {
        self.local.month()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.local.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Converts epoch seconds into calendar time in `tz`.
///
/// # Example
///
/// ```rust
/// use fbdata::parsing::to_timestamp;
/// use chrono_tz::Tz;
///
/// let ts = to_timestamp(1582964988, &Tz::UTC).unwrap();
/// assert_eq!(ts.to_string(), "2020-02-29 08:29:48");
/// assert_eq!(ts.epoch(), 1582964988);
/// ```
pub fn to_timestamp(epoch: i64, tz: &Tz) -> Result<Timestamp> {
    let utc = DateTime::from_timestamp(epoch, 0).ok_or(FbDataError::InvalidTimestamp(epoch))?;
    Ok(Timestamp {
        epoch,
        local: utc.with_timezone(tz).naive_local(),
    })
}
