//! Per-content-type record extractors.
//!
//! Every extractor turns one raw JSON record into fields in the order of its
//! `COLUMNS`. Field lookups use JSON pointers (`/data/0/post`).
//!
//! Missing data follows one rule for all content types: the identity field
//! (`timestamp`, or `name` for friends and contacts) is required and its
//! absence is a [`FbDataError::MissingField`]; every other text field falls
//! back to an empty string.

use chrono_tz::Tz;
use serde_json::Value;

use crate::config::ReaderConfig;
use crate::content::ContentType;
use crate::core::record::Field;
use crate::error::{FbDataError, Result};
use crate::parsing::{normalize_text, to_timestamp};

pub mod address_book;
pub mod comments;
pub mod friends;
pub mod posts;
pub mod reactions;
pub mod sessions;

pub use address_book::extract_contact;
pub use comments::extract_comment;
pub use friends::extract_friend;
pub use posts::extract_post;
pub use reactions::extract_reaction;
pub use sessions::extract_session;

/// Settings an extractor needs while converting one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractContext {
    /// Content type being extracted, used in error messages
    pub content: ContentType,
    /// Whether to undo mojibake in normalized text fields
    pub fix_encoding: bool,
    /// Timezone for timestamp conversion
    pub timezone: Tz,
}

impl ExtractContext {
    pub fn new(content: ContentType, config: &ReaderConfig) -> Self {
        Self {
            content,
            fix_encoding: config.fix_encoding,
            timezone: config.timezone,
        }
    }

    /// Required epoch-seconds field, converted to a timestamp.
    pub fn timestamp(&self, record: &Value, pointer: &str) -> Result<Field> {
        let epoch = record
            .pointer(pointer)
            .and_then(Value::as_i64)
            .ok_or_else(|| self.missing(pointer))?;
        Ok(Field::Timestamp(to_timestamp(epoch, &self.timezone)?))
    }

    /// Required text field, normalized.
    pub fn required_text(&self, record: &Value, pointer: &str) -> Result<Field> {
        let text = record
            .pointer(pointer)
            .and_then(Value::as_str)
            .ok_or_else(|| self.missing(pointer))?;
        Ok(Field::Text(normalize_text(text, self.fix_encoding)?))
    }

    /// Optional text field, normalized, empty when absent.
    pub fn text(&self, record: &Value, pointer: &str) -> Result<Field> {
        Ok(Field::Text(normalize_text(
            optional_str(record, pointer),
            self.fix_encoding,
        )?))
    }

    /// Optional text field copied verbatim, empty when absent.
    pub fn raw_text(&self, record: &Value, pointer: &str) -> Field {
        Field::Text(optional_str(record, pointer).to_string())
    }

    fn missing(&self, pointer: &str) -> FbDataError {
        FbDataError::missing_field(self.content, pointer.trim_start_matches('/').replace('/', "."))
    }
}

fn optional_str<'a>(record: &'a Value, pointer: &str) -> &'a str {
    record.pointer(pointer).and_then(Value::as_str).unwrap_or("")
}

#[cfg(test)]
pub(crate) fn test_context(content: ContentType) -> ExtractContext {
    ExtractContext::new(content, &ReaderConfig::utc())
}
