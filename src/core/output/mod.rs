//! Output writers.
//!
//! Only flat CSV is produced: one file per content type, header row taken
//! from the descriptor's columns.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> fbdata::Result<()> {
//! use fbdata::core::output::{to_csv, write_csv};
//! use fbdata::{ContentType, Reader};
//!
//! let table = Reader::new(ContentType::Friends, "./facebook-export").to_table()?;
//!
//! write_csv(&table, "friends.csv")?;
//! let csv_string = to_csv(&table)?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
