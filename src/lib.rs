//! # fbdata
//!
//! A Rust library for turning a Facebook "Download Your Information" JSON
//! export into flat records and CSV files.
//!
//! ## Overview
//!
//! An export is a directory tree of JSON files. fbdata knows where six kinds
//! of content live in that tree:
//! - **friends** - `(timestamp, name)`
//! - **address_book** - `(name, contact)`
//! - **posts** - `(timestamp, content)`
//! - **comments** - `(timestamp, content)`
//! - **reactions** - `(timestamp, reaction, title)`
//! - **sessions** - `(timestamp, ip_address, city, region, country)`
//!
//! Text fields are repaired from Meta's Latin-1/UTF-8 mojibake and epoch
//! seconds become calendar timestamps.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fbdata::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // One content type as records
//!     let friends = get_friends("./facebook-export")?;
//!     for friend in &friends {
//!         println!("{} {}", friend[0], friend[1]);
//!     }
//!
//!     // Or everything as CSV
//!     let paths = save_all("./facebook-export", "./csv")?;
//!     println!("wrote {} files", paths.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`descriptor`] - the extraction table ([`Descriptor`], [`DESCRIPTORS`])
//! - [`reader`] - [`Reader`]: lazy records, lists, mappings, tables, CSV
//! - [`export`] - [`save_all`](export::save_all) batch CSV export
//! - [`api`] - `get_friends`, `get_posts`, ...
//! - [`extractors`] - per-content-type record extractors
//! - [`parsing`] - mojibake fix and timestamp conversion
//! - [`core`] - [`Field`], [`Record`], [`Mapping`], [`Table`], CSV writer,
//!   monthly summary
//! - [`config`] - [`ReaderConfig`](config::ReaderConfig),
//!   [`ExportConfig`](config::ExportConfig)
//! - [`error`] - [`FbDataError`], [`Result`]

pub mod api;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod content;
pub mod core;
pub mod descriptor;
pub mod error;
#[cfg(feature = "csv-output")]
pub mod export;
pub mod extractors;
pub mod parsing;
pub mod reader;

// Re-export the main types at the crate root for convenience
pub use content::ContentType;
pub use crate::core::{Field, Mapping, Record, Table};
pub use descriptor::{DESCRIPTORS, Descriptor};
pub use error::{FbDataError, Result};
pub use reader::{Reader, Records};

/// Convenient re-exports for common usage.
///
/// ```rust
/// use fbdata::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{ContentType, Field, Mapping, Record, Table};

    // Error types
    pub use crate::error::{FbDataError, Result};

    // Extraction
    pub use crate::descriptor::{DESCRIPTORS, Descriptor, descriptor};
    pub use crate::reader::{Reader, Records};

    // Configuration
    pub use crate::config::{ExportConfig, ReaderConfig};

    // One-call API
    pub use crate::api::{
        get_address_book, get_comments, get_friends, get_posts, get_reactions, get_sessions,
    };

    // Normalization
    pub use crate::parsing::{Timestamp, fix_mojibake, to_timestamp};

    // Summary
    pub use crate::core::summary::{YearMonth, monthly_counts};

    // Output
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "csv-output")]
    pub use crate::export::{save_all, save_all_with_config, save_selected};
}
