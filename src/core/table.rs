//! Column-major tabular view of extracted records.

use serde::Serialize;

use crate::content::ContentType;
use crate::core::record::{Field, Record};

/// One named column of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    name: &'static str,
    values: Vec<Field>,
}

impl Column {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn values(&self) -> &[Field] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A frame with one column per descriptor column and one row per record.
///
/// All columns always have the same length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    content: ContentType,
    columns: Vec<Column>,
}

impl Table {
    /// Builds a table from records sharing `columns`.
    pub fn from_records(
        content: ContentType,
        columns: &'static [&'static str],
        records: Vec<Record>,
    ) -> Self {
        let mut table: Vec<Column> = columns
            .iter()
            .map(|name| Column {
                name: *name,
                values: Vec::with_capacity(records.len()),
            })
            .collect();

        for record in records {
            for (column, field) in table.iter_mut().zip(record.into_fields()) {
                column.values.push(field);
            }
        }

        Self {
            content,
            columns: table,
        }
    }

    pub fn content(&self) -> ContentType {
        self.content
    }

    /// Column names, used as the CSV header.
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns row `index` as borrowed fields in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Field>> {
        if index >= self.len() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }

    /// Iterates rows in record order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&Field>> + '_ {
        (0..self.len()).map(|i| self.columns.iter().map(|c| &c.values[i]).collect())
    }
}
