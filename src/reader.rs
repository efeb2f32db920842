//! Generic reader over one content type of an export.
//!
//! Every view (records, mappings, table, CSV) is derived from the single lazy
//! [`Reader::produce`] pass, so they always agree on count and order.
//!
//! # Example
//!
//! ```rust,no_run
//! use fbdata::{ContentType, Reader};
//!
//! let reader = Reader::new(ContentType::Friends, "./facebook-export");
//!
//! // Lazy: one extraction per step
//! for record in reader.produce()? {
//!     let record = record?;
//!     println!("{} {}", record[0], record[1]);
//! }
//!
//! // Eager views
//! let records = reader.to_list()?;
//! let mappings = reader.to_mappings()?;
//! let table = reader.to_table()?;
//! # Ok::<(), fbdata::FbDataError>(())
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::ReaderConfig;
use crate::content::ContentType;
use crate::core::record::{Mapping, Record};
use crate::core::table::Table;
use crate::descriptor::{self, Descriptor};
use crate::error::{FbDataError, Result};
use crate::extractors::ExtractContext;

/// Extracts one content type from an export root.
#[derive(Debug, Clone)]
pub struct Reader {
    descriptor: &'static Descriptor,
    root: PathBuf,
    config: ReaderConfig,
}

impl Reader {
    /// Creates a reader with default configuration.
    pub fn new(content: ContentType, root: impl Into<PathBuf>) -> Self {
        Self::with_config(content, root, ReaderConfig::default())
    }

    /// Creates a reader with custom configuration.
    pub fn with_config(content: ContentType, root: impl Into<PathBuf>, config: ReaderConfig) -> Self {
        Self::from_descriptor(descriptor::descriptor(content), root, config)
    }

    /// Creates a reader for an explicit descriptor.
    pub fn from_descriptor(
        descriptor: &'static Descriptor,
        root: impl Into<PathBuf>,
        config: ReaderConfig,
    ) -> Self {
        Self {
            descriptor,
            root: root.into(),
            config,
        }
    }

    pub fn content_type(&self) -> ContentType {
        self.descriptor.content_type
    }

    pub fn descriptor(&self) -> &'static Descriptor {
        self.descriptor
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// File this reader opens.
    pub fn path(&self) -> PathBuf {
        self.descriptor.file_path(&self.root)
    }

    /// Reads and parses the file, returning a lazy iterator of records.
    ///
    /// Each call re-reads the file.
    pub fn produce(&self) -> Result<Records> {
        let path = self.path();
        if !path.is_file() {
            return Err(FbDataError::not_found(self.content_type(), path));
        }

        debug!(content = %self.content_type(), path = %path.display(), "reading export file");
        // Bytes, not a String: invalid UTF-8 is a malformed archive, not an IO error
        let bytes = fs::read(&path)?;
        let document: Value =
            serde_json::from_slice(&bytes).map_err(|e| FbDataError::malformed(&path, e))?;
        let raw = self.descriptor.unwrap_records(document, &path)?;
        debug!(content = %self.content_type(), records = raw.len(), "unwrapped raw records");

        Ok(Records {
            descriptor: self.descriptor,
            context: ExtractContext::new(self.content_type(), &self.config),
            raw: raw.into_iter(),
        })
    }

    /// Extracts every record. The first failing record aborts.
    pub fn to_list(&self) -> Result<Vec<Record>> {
        self.produce()?.collect()
    }

    /// Extracts every record as a name-keyed mapping.
    pub fn to_mappings(&self) -> Result<Vec<Mapping>> {
        Ok(self.to_list()?.into_iter().map(Record::into_mapping).collect())
    }

    /// Extracts every record into a column-major table.
    pub fn to_table(&self) -> Result<Table> {
        Ok(Table::from_records(
            self.content_type(),
            self.descriptor.columns,
            self.to_list()?,
        ))
    }

    /// Writes `<content>.csv` into `output_dir`, creating the directory when
    /// needed. Returns the written path.
    #[cfg(feature = "csv-output")]
    pub fn save_csv(&self, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let table = self.to_table()?;
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir)?;

        let path = output_dir.join(self.descriptor.csv_file_name());
        crate::core::output::write_csv(&table, &path)?;
        debug!(content = %self.content_type(), rows = table.len(), path = %path.display(), "wrote csv");
        Ok(path)
    }
}

/// Lazy sequence of extracted records from one file.
#[derive(Debug)]
pub struct Records {
    descriptor: &'static Descriptor,
    context: ExtractContext,
    raw: std::vec::IntoIter<Value>,
}

impl Records {
    pub fn content_type(&self) -> ContentType {
        self.descriptor.content_type
    }
}

impl Iterator for Records {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.raw.next()?;
        Some((self.descriptor.extract)(&raw, &self.context).and_then(|fields| {
            Record::new(self.descriptor.content_type, self.descriptor.columns, fields)
        }))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.raw.size_hint()
    }
}

impl ExactSizeIterator for Records {}
