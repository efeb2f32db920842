//! The extraction table.
//!
//! One [`Descriptor`] per [`ContentType`] says where the content lives in the
//! export, how to reach the list of raw records inside the JSON document, how
//! to turn one raw record into fields and what the resulting columns are
//! called. This table is the only place that knows which content types exist;
//! adding one means adding a variant, an extractor and a row here.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::content::ContentType;
use crate::core::record::Field;
use crate::error::{ArchiveErrorKind, FbDataError, Result};
use crate::extractors::{self, ExtractContext};

/// Converts one raw record into fields in column order.
pub type Extractor = fn(&Value, &ExtractContext) -> Result<Vec<Field>>;

/// Extraction rules for one content type.
#[derive(Debug, Clone, Copy)]
pub struct Descriptor {
    /// Content type this row describes
    pub content_type: ContentType,
    /// File location relative to the export root
    pub path: &'static str,
    /// Object keys leading to the record array; empty when the document
    /// itself is the array
    pub unwrap: &'static [&'static str],
    /// Per-record extractor
    pub extract: Extractor,
    /// Output column names
    pub columns: &'static [&'static str],
}

/// All descriptors, in [`ContentType::all`] order.
pub static DESCRIPTORS: [Descriptor; 6] = [
    Descriptor {
        content_type: ContentType::Friends,
        path: "friends/friends.json",
        unwrap: &["friends"],
        extract: extractors::extract_friend,
        columns: extractors::friends::COLUMNS,
    },
    Descriptor {
        content_type: ContentType::AddressBook,
        path: "about_you/your_address_books.json",
        unwrap: &["address_book", "address_book"],
        extract: extractors::extract_contact,
        columns: extractors::address_book::COLUMNS,
    },
    Descriptor {
        content_type: ContentType::Posts,
        path: "posts/your_posts_1.json",
        unwrap: &[],
        extract: extractors::extract_post,
        columns: extractors::posts::COLUMNS,
    },
    Descriptor {
        content_type: ContentType::Comments,
        path: "comments/comments.json",
        unwrap: &["comments"],
        extract: extractors::extract_comment,
        columns: extractors::comments::COLUMNS,
    },
    Descriptor {
        content_type: ContentType::Reactions,
        path: "likes_and_reactions/posts_and_comments.json",
        unwrap: &["reactions"],
        extract: extractors::extract_reaction,
        columns: extractors::reactions::COLUMNS,
    },
    Descriptor {
        content_type: ContentType::Sessions,
        path: "security_and_login_information/account_activity.json",
        unwrap: &["account_activity"],
        extract: extractors::extract_session,
        columns: extractors::sessions::COLUMNS,
    },
];

/// Returns the descriptor for a content type.
pub fn descriptor(content: ContentType) -> &'static Descriptor {
    &DESCRIPTORS[content as usize]
}

impl Descriptor {
    /// Location of this content type's file under `root`.
    pub fn file_path(&self, root: &Path) -> PathBuf {
        self.path.split('/').fold(root.to_path_buf(), |acc, part| acc.join(part))
    }

    /// Name of the CSV file written for this content type.
    pub fn csv_file_name(&self) -> String {
        format!("{}.csv", self.content_type)
    }

    /// Whether one of the columns holds timestamps.
    pub fn has_timestamp(&self) -> bool {
        self.columns.contains(&"timestamp")
    }

    /// Follows the unwrap path through a parsed document and returns the raw
    /// records. `path` is only used for error messages.
    pub fn unwrap_records(&self, document: Value, path: &Path) -> Result<Vec<Value>> {
        let mut current = document;
        let mut trail = String::from("$");

        for key in self.unwrap {
            trail.push('.');
            trail.push_str(key);
            current = match current {
                Value::Object(mut map) => map.remove(*key),
                _ => None,
            }
            .ok_or_else(|| FbDataError::malformed(path, ArchiveErrorKind::MissingKey(trail.clone())))?;
        }

        match current {
            Value::Array(records) => Ok(records),
            _ => Err(FbDataError::malformed(path, ArchiveErrorKind::NotAnArray(trail))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_table_order_matches_content_types() {
        for (row, content) in DESCRIPTORS.iter().zip(ContentType::all()) {
            assert_eq!(row.content_type, *content);
            assert_eq!(descriptor(*content).content_type, *content);
        }
        assert_eq!(DESCRIPTORS.len(), ContentType::all().len());
    }

    #[test]
    fn test_file_path() {
        let path = descriptor(ContentType::Sessions).file_path(Path::new("/export"));
        assert_eq!(
            path,
            Path::new("/export")
                .join("security_and_login_information")
                .join("account_activity.json")
        );
    }

    #[test]
    fn test_csv_file_name() {
        assert_eq!(descriptor(ContentType::AddressBook).csv_file_name(), "address_book.csv");
    }

    #[test]
    fn test_has_timestamp() {
        assert!(descriptor(ContentType::Friends).has_timestamp());
        assert!(!descriptor(ContentType::AddressBook).has_timestamp());
    }

    #[test]
    fn test_unwrap_nested() {
        let doc = json!({"address_book": {"address_book": [{"name": "A"}, {"name": "B"}]}});
        let records = descriptor(ContentType::AddressBook)
            .unwrap_records(doc, Path::new("a.json"))
            .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_unwrap_root_array() {
        let doc = json!([{"timestamp": 1}]);
        let records = descriptor(ContentType::Posts)
            .unwrap_records(doc, Path::new("p.json"))
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_unwrap_missing_key() {
        let doc = json!({"address_book": {}});
        let err = descriptor(ContentType::AddressBook)
            .unwrap_records(doc, Path::new("a.json"))
            .unwrap_err();
        assert!(err.is_malformed());
        assert!(err.to_string().contains("missing key '$.address_book.address_book'"));
    }

    #[test]
    fn test_unwrap_not_an_array() {
        let doc = json!({"friends": {"name": "A"}});
        let err = descriptor(ContentType::Friends)
            .unwrap_records(doc, Path::new("f.json"))
            .unwrap_err();
        assert!(err.to_string().contains("expected an array at '$.friends'"));
    }

    #[test]
    fn test_every_extractor_matches_its_columns() {
        let ctx = ExtractContext::new(ContentType::Friends, &crate::config::ReaderConfig::utc());
        let record = json!({"timestamp": 1582964988, "name": "x"});
        for row in &DESCRIPTORS {
            let ctx = ExtractContext {
                content: row.content_type,
                ..ctx
            };
            let fields = (row.extract)(&record, &ctx).unwrap();
            assert_eq!(fields.len(), row.columns.len(), "{}", row.content_type);
        }
    }
}
