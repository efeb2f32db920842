//! Extracted values: fields, records and name-keyed mappings.
//!
//! A [`Record`] is the canonical output unit of an extraction. Its fields are
//! always in the order of the descriptor's columns and there is exactly one
//! field per column.
//!
//! # Example
//!
//! ```
//! use fbdata::{ContentType, Field, Record};
//!
//! let record = Record::new(
//!     ContentType::AddressBook,
//!     &["name", "contact"],
//!     vec![Field::from("Alice"), Field::from("+123")],
//! )?;
//!
//! assert_eq!(record.get("contact").unwrap().to_string(), "+123");
//!
//! let mapping = record.into_mapping();
//! assert_eq!(mapping.keys().collect::<Vec<_>>(), ["name", "contact"]);
//! # Ok::<(), fbdata::FbDataError>(())
//! ```

use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::content::ContentType;
use crate::error::{FbDataError, Result};
use crate::parsing::Timestamp;

/// One cell of an extracted record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// Text value, already normalized when the column calls for it
    Text(String),
    /// Converted timestamp, raw epoch included
    Timestamp(Timestamp),
}

impl Field {
    /// Returns the text if this is a text field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            Field::Timestamp(_) => None,
        }
    }

    /// Returns the timestamp if this is a timestamp field.
    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            Field::Timestamp(ts) => Some(ts),
            Field::Text(_) => None,
        }
    }

    /// Returns `true` for an empty text field.
    pub fn is_empty(&self) -> bool {
        matches!(self, Field::Text(s) if s.is_empty())
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Text(s) => f.write_str(s),
            Field::Timestamp(ts) => ts.fmt(f),
        }
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Field::Text(s) => serializer.serialize_str(s),
            Field::Timestamp(ts) => ts.serialize(serializer),
        }
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Text(s)
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<Timestamp> for Field {
    fn from(ts: Timestamp) -> Self {
        Field::Timestamp(ts)
    }
}

/// A fixed-arity extracted tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    content: ContentType,
    columns: &'static [&'static str],
    fields: Vec<Field>,
}

impl Record {
    /// Creates a record, checking that there is one field per column.
    pub fn new(
        content: ContentType,
        columns: &'static [&'static str],
        fields: Vec<Field>,
    ) -> Result<Self> {
        if fields.len() != columns.len() {
            return Err(FbDataError::invalid_format(
                "record",
                format!(
                    "{} record has {} fields but {} columns",
                    content,
                    fields.len(),
                    columns.len()
                ),
            ));
        }

        Ok(Self {
            content,
            columns,
            fields,
        })
    }

    pub fn content(&self) -> ContentType {
        self.content
    }

    /// Column names, in field order.
    pub fn columns(&self) -> &'static [&'static str] {
        self.columns
    }

    /// Fields, in column order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Looks a field up by column name.
    pub fn get(&self, column: &str) -> Option<&Field> {
        self.columns
            .iter()
            .position(|c| *c == column)
            .map(|i| &self.fields[i])
    }

    /// Returns the first timestamp field, if the record has one.
    pub fn timestamp(&self) -> Option<&Timestamp> {
        self.fields.iter().find_map(Field::as_timestamp)
    }

    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    /// Converts the record into a name-keyed mapping.
    pub fn into_mapping(self) -> Mapping {
        Mapping {
            entries: self.columns.iter().copied().zip(self.fields).collect(),
        }
    }
}

impl Index<usize> for Record {
    type Output = Field;

    fn index(&self, index: usize) -> &Field {
        &self.fields[index]
    }
}

/// Name-keyed view of a record. Keys keep column order.
///
/// Serializes as a JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(&'static str, Field)>,
}

impl Mapping {
    /// Keys in column order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Field)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Mapping {
    type Item = (&'static str, Field);
    type IntoIter = std::vec::IntoIter<(&'static str, Field)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
