//! Unified error types for fbdata.
//!
//! Every fallible operation in the crate returns [`FbDataError`]. Errors are
//! terminal for the content type being extracted: nothing is retried and no
//! record is silently skipped.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

use crate::content::ContentType;

/// A specialized [`Result`] type for fbdata operations.
///
/// # Example
///
/// ```rust
/// use fbdata::error::Result;
/// use fbdata::Record;
///
/// fn my_function() -> Result<Vec<Record>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, FbDataError>;

/// The error type for all fbdata operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FbDataError {
    /// An I/O error occurred, typically while writing CSV output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The descriptor's file does not exist under the export root.
    ///
    /// Exports are allowed to omit content types, so callers running a batch
    /// may want to treat this one differently from the others.
    #[error("No {content} file in export (expected {})", path.display())]
    FileNotFound {
        /// Content type whose file is missing
        content: ContentType,
        /// Full path that was looked up
        path: PathBuf,
    },

    /// The file exists but is not the JSON structure we expect.
    #[error("Malformed archive file {}: {source}", path.display())]
    MalformedArchive {
        /// File that failed to parse or unwrap
        path: PathBuf,
        /// What went wrong
        #[source]
        source: ArchiveErrorKind,
    },

    /// A text field could not be re-decoded from Latin-1 into UTF-8.
    #[error("Cannot fix encoding of {text:?}: {source}")]
    Encoding {
        /// The offending input text
        text: String,
        /// Why decoding failed
        #[source]
        source: EncodingErrorKind,
    },

    /// A required field of a raw record is absent or has the wrong type.
    #[error("Missing field '{field}' in {content} record")]
    MissingField {
        /// Content type of the record
        content: ContentType,
        /// Dotted path of the missing field
        field: String,
    },

    /// Epoch seconds outside the representable calendar range.
    #[error("Timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    /// Invalid value or configuration.
    #[error("Invalid {format}: {message}")]
    InvalidFormat {
        /// What was being validated (e.g. "timezone", "record")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Kinds of archive structure errors.
#[derive(Debug, Error)]
pub enum ArchiveErrorKind {
    /// The file is not valid JSON
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// A key of the unwrap path is absent
    #[error("missing key '{0}'")]
    MissingKey(String),
    /// The unwrapped value is not a list of records
    #[error("expected an array at '{0}'")]
    NotAnArray(String),
}

/// Kinds of text normalization errors.
#[derive(Debug, Error)]
pub enum EncodingErrorKind {
    /// Character cannot be represented as a single Latin-1 byte
    #[error("character {0:?} is outside Latin-1")]
    Codepoint(char),
    /// Re-encoded bytes are not valid UTF-8
    #[error("{0}")]
    Utf8(#[from] FromUtf8Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl FbDataError {
    /// Creates a file-not-found error.
    pub fn not_found(content: ContentType, path: impl Into<PathBuf>) -> Self {
        FbDataError::FileNotFound {
            content,
            path: path.into(),
        }
    }

    /// Creates a malformed-archive error.
    pub fn malformed(path: impl Into<PathBuf>, source: impl Into<ArchiveErrorKind>) -> Self {
        FbDataError::MalformedArchive {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Creates an encoding error.
    pub fn encoding(text: impl Into<String>, source: EncodingErrorKind) -> Self {
        FbDataError::Encoding {
            text: text.into(),
            source,
        }
    }

    /// Creates a missing-field error.
    pub fn missing_field(content: ContentType, field: impl Into<String>) -> Self {
        FbDataError::MissingField {
            content,
            field: field.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        FbDataError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if the content type's file was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FbDataError::FileNotFound { .. })
    }

    /// Returns `true` if the file could not be parsed or unwrapped.
    pub fn is_malformed(&self) -> bool {
        matches!(self, FbDataError::MalformedArchive { .. })
    }

    /// Returns `true` if this is a text normalization error.
    pub fn is_encoding(&self) -> bool {
        matches!(self, FbDataError::Encoding { .. })
    }

    /// Returns `true` if a required record field was missing.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, FbDataError::MissingField { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, FbDataError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = FbDataError::not_found(ContentType::Friends, "/tmp/x/friends/friends.json");
        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "No friends file in export (expected /tmp/x/friends/friends.json)"
        );
    }

    #[test]
    fn test_malformed_missing_key() {
        let err = FbDataError::malformed("a.json", ArchiveErrorKind::MissingKey("friends".into()));
        assert!(err.is_malformed());
        assert!(err.to_string().contains("missing key 'friends'"));
    }

    #[test]
    fn test_malformed_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = FbDataError::malformed("a.json", json_err);
        assert!(err.is_malformed());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_missing_field_display() {
        let err = FbDataError::missing_field(ContentType::Comments, "timestamp");
        assert!(err.is_missing_field());
        assert_eq!(err.to_string(), "Missing field 'timestamp' in comments record");
    }

    #[test]
    fn test_encoding_codepoint() {
        let err = FbDataError::encoding("日本", EncodingErrorKind::Codepoint('日'));
        assert!(err.is_encoding());
        assert!(err.to_string().contains("outside Latin-1"));
    }

    #[test]
    fn test_io_from() {
        let err: FbDataError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(err.is_io());
        assert!(!err.is_not_found());
    }
}
