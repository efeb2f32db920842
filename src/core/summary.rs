//! Per-month record counts.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::record::Record;
use crate::parsing::Timestamp;

/// A calendar month, ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Month of a timestamp, in the timezone it was converted with.
    pub fn of(ts: &Timestamp) -> Self {
        Self {
            year: ts.year(),
            month: ts.month(),
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Counts records per calendar month of their timestamp.
///
/// Records without a timestamp column (address book) are ignored.
///
/// # Example
///
/// ```rust,no_run
/// use fbdata::api::get_friends;
/// use fbdata::core::summary::monthly_counts;
///
/// let friends = get_friends("./facebook-export")?;
/// for (month, count) in monthly_counts(&friends) {
///     println!("{month}  {count}");
/// }
/// # Ok::<(), fbdata::FbDataError>(())
/// ```
pub fn monthly_counts<'a, I>(records: I) -> BTreeMap<YearMonth, usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = BTreeMap::new();
    for ts in records.into_iter().filter_map(Record::timestamp) {
        *counts.entry(YearMonth::of(ts)).or_insert(0) += 1;
    }
    counts
}
