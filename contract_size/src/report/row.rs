//!
//! The rendered report row.
//!

use crate::config::unit::Unit;

///
/// The rendered report row.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The contract name, or the total label.
    pub name: String,
    /// The size formatted in the report unit.
    pub size: String,
    /// The size in KiB rounded to the displayed precision.
    pub size_kib: f64,
}

impl Row {
    ///
    /// Renders a byte count in `unit`.
    ///
    pub fn new(name: String, size_bytes: u64, unit: Unit) -> Self {
        let size_kib = format!("{:.2}", size_bytes as f64 / crate::BYTES_PER_KIB)
            .parse::<f64>()
            .unwrap_or_default();
        Self {
            name,
            size: unit.format(size_bytes),
            size_kib,
        }
    }
}
