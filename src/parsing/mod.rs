//! Field-level normalization shared by every extractor.
//!
//! - [`encoding`] - undo Meta's Latin-1/UTF-8 mojibake
//! - [`timestamp`] - epoch seconds to calendar time

pub mod encoding;
pub mod timestamp;

pub use encoding::{fix_mojibake, normalize_text, to_mojibake};
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp, to_timestamp};
