//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::table::Table;
use crate::error::{EncodingErrorKind, FbDataError, Result};

/// Writes a table to a CSV file.
///
/// # Format
/// - Delimiter: `,`
/// - Header: the table's column names, no index column
/// - Quoting: only where needed (embedded commas, quotes, newlines)
/// - Timestamps: `YYYY-MM-DD HH:MM:SS`
/// - Encoding: UTF-8
pub fn write_csv(table: &Table, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = csv::Writer::from_writer(file);
    write_table(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

/// Renders a table as a CSV string.
pub fn to_csv(table: &Table) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_table(&mut writer, table)?;
    let bytes = writer
        .into_inner()
        .map_err(|e| FbDataError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| FbDataError::encoding("csv output", EncodingErrorKind::Utf8(e)))
}

fn write_table<W: Write>(writer: &mut csv::Writer<W>, table: &Table) -> Result<()> {
    writer.write_record(table.header())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(|field| field.to_string()))?;
    }
    Ok(())
}
