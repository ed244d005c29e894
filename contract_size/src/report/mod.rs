//!
//! The contract size report.
//!

pub mod record;
pub mod row;
pub mod table;

use crate::config::sort::direction::Direction as SortDirection;
use crate::config::sort::field::Field as SortField;
use crate::config::sort::Sort;
use crate::config::unit::Unit;

use self::record::SizeRecord;
use self::row::Row;

///
/// The contract size report.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    /// The measured contracts, in resolution or sort order.
    pub records: Vec<SizeRecord>,
    /// The sum of all contract sizes.
    pub total_bytes: u64,
    /// The display unit.
    pub unit: Unit,
}

impl Report {
    /// The label of the total row.
    pub const TOTAL_LABEL: &'static str = "Total";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(records: Vec<SizeRecord>, unit: Unit) -> Self {
        let total_bytes = records.iter().map(|record| record.size_bytes).sum();
        Self {
            records,
            total_bytes,
            unit,
        }
    }

    ///
    /// The unrounded total size in KiB.
    ///
    pub fn total_kib(&self) -> f64 {
        self.total_bytes as f64 / crate::BYTES_PER_KIB
    }

    ///
    /// Sorts the records.
    ///
    /// Size ties are ordered by name, so the result never depends on extraction order.
    ///
    pub fn sort(&mut self, sort: Sort) {
        match sort.field {
            SortField::Name => self.records.sort_by(|a, b| a.name.cmp(&b.name)),
            SortField::Size => self.records.sort_by(|a, b| {
                a.size_bytes
                    .cmp(&b.size_bytes)
                    .then_with(|| a.name.cmp(&b.name))
            }),
        }
        if let SortDirection::Descending = sort.direction {
            self.records.reverse();
        }
    }

    ///
    /// Renders the per-contract rows.
    ///
    pub fn rows(&self) -> Vec<Row> {
        self.records
            .iter()
            .map(|record| Row::new(record.name.clone(), record.size_bytes, self.unit))
            .collect()
    }

    ///
    /// Renders the total row.
    ///
    pub fn total_row(&self) -> Row {
        Row::new(Self::TOTAL_LABEL.to_owned(), self.total_bytes, self.unit)
    }

    ///
    /// Serializes the report to JSON.
    ///
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("Always valid")
    }
}
