//! Core data types and materialization.
//!
//! This module contains:
//! - [`record`] - [`Field`], [`Record`] and [`Mapping`]
//! - [`table`] - column-major [`Table`]
//! - [`summary`] - per-month counts
//! - [`output`] - CSV writer
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(feature = "csv-output")]
//! # fn example() {
//! use fbdata::core::{Field, Record, Table, monthly_counts, to_csv, write_csv};
//! # }
//! ```

pub mod output;
pub mod record;
pub mod summary;
pub mod table;

pub use record::{Field, Mapping, Record};
pub use summary::{YearMonth, monthly_counts};
pub use table::{Column, Table};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
