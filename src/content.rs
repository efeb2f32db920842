//! Content types found in a Facebook data export.

use serde::{Deserialize, Serialize};

use crate::descriptor::{self, Descriptor};

/// A kind of record that can be extracted from an export.
///
/// The order of [`ContentType::all`] is the order of the descriptor table and
/// of batch exports.
///
/// # Example
///
/// ```rust
/// use fbdata::ContentType;
/// use std::str::FromStr;
///
/// let content = ContentType::from_str("address-book").unwrap();
/// assert_eq!(content, ContentType::AddressBook);
/// assert_eq!(content.to_string(), "address_book");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Friend list with the date each friendship started
    Friends,
    /// Contacts uploaded from phone address books
    AddressBook,
    /// Own timeline posts
    Posts,
    /// Comments written by the account owner
    Comments,
    /// Likes and reactions on posts and comments
    Reactions,
    /// Login sessions with IP and location
    Sessions,
}

impl ContentType {
    /// Returns the stable snake_case name, also used as the CSV file stem.
    pub fn name(&self) -> &'static str {
        match self {
            ContentType::Friends => "friends",
            ContentType::AddressBook => "address_book",
            ContentType::Posts => "posts",
            ContentType::Comments => "comments",
            ContentType::Reactions => "reactions",
            ContentType::Sessions => "sessions",
        }
    }

    /// Returns the extraction rules for this content type.
    pub fn descriptor(self) -> &'static Descriptor {
        descriptor::descriptor(self)
    }

    /// Returns all content type names.
    pub fn all_names() -> &'static [&'static str] {
        &[
            "friends",
            "address_book",
            "posts",
            "comments",
            "reactions",
            "sessions",
        ]
    }

    /// Returns all content types in table order.
    pub fn all() -> &'static [ContentType] {
        &[
            ContentType::Friends,
            ContentType::AddressBook,
            ContentType::Posts,
            ContentType::Comments,
            ContentType::Reactions,
            ContentType::Sessions,
        ]
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "friends" => Ok(ContentType::Friends),
            "address_book" | "contacts" => Ok(ContentType::AddressBook),
            "posts" => Ok(ContentType::Posts),
            "comments" => Ok(ContentType::Comments),
            "reactions" | "likes" => Ok(ContentType::Reactions),
            "sessions" => Ok(ContentType::Sessions),
            _ => Err(format!(
                "Unknown content type: '{}'. Expected one of: {}",
                s,
                ContentType::all_names().join(", ")
            )),
        }
    }
}
