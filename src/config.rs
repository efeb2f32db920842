//! Configuration types for readers and batch export.
//!
//! # Example
//!
//! ```rust
//! use fbdata::config::{ExportConfig, ReaderConfig};
//! use chrono_tz::Tz;
//!
//! let reader = ReaderConfig::new()
//!     .with_timezone(Tz::Europe__Moscow)
//!     .with_fix_encoding(true);
//!
//! let export = ExportConfig::new()
//!     .with_reader(reader)
//!     .with_skip_missing(true);
//! ```

use std::sync::OnceLock;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FbDataError, Result};

/// Detects the IANA timezone of the running system.
///
/// Falls back to UTC when detection fails or the name is unknown to
/// `chrono-tz`. Detection runs once per process; later calls return the
/// cached zone.
pub fn system_timezone() -> Tz {
    static SYSTEM_TZ: OnceLock<Tz> = OnceLock::new();
    *SYSTEM_TZ.get_or_init(detect_timezone)
}

fn detect_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            warn!("unrecognised system timezone \"{}\", falling back to UTC", name);
            Tz::UTC
        }),
        Err(e) => {
            warn!(error = %e, "cannot detect system timezone, falling back to UTC");
            Tz::UTC
        }
    }
}

/// Parses an IANA timezone name such as `Europe/Berlin`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| FbDataError::invalid_format("timezone", format!("unknown timezone '{name}'")))
}

/// Configuration for extracting records from one content type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Fix Meta's broken UTF-8 encoding (Mojibake) (default: true)
    pub fix_encoding: bool,

    /// Timezone used to turn epoch seconds into calendar time
    /// (default: the system timezone)
    pub timezone: Tz,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fix_encoding: true,
            timezone: system_timezone(),
        }
    }
}

impl ReaderConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration pinned to UTC, independent of the host.
    pub fn utc() -> Self {
        Self {
            fix_encoding: true,
            timezone: Tz::UTC,
        }
    }

    /// Enables or disables the encoding fix.
    #[must_use]
    pub fn with_fix_encoding(mut self, fix: bool) -> Self {
        self.fix_encoding = fix;
        self
    }

    /// Sets the timezone for timestamp conversion.
    #[must_use]
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }
}

/// Configuration for exporting every content type at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Settings passed to each reader
    pub reader: ReaderConfig,

    /// Skip content types whose file is absent instead of failing
    /// (default: false)
    pub skip_missing: bool,
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reader configuration.
    #[must_use]
    pub fn with_reader(mut self, reader: ReaderConfig) -> Self {
        self.reader = reader;
        self
    }

    /// Sets whether absent content types are skipped.
    #[must_use]
    pub fn with_skip_missing(mut self, skip: bool) -> Self {
        self.skip_missing = skip;
        self
    }
}
