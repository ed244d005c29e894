//!
//! The contract size limit evaluator.
//!

pub mod violation;

use crate::config::max_size::MaxSize;
use crate::error::Errors;
use crate::report::row::Row;
use crate::report::table::Table;

use self::violation::Violation;

///
/// Checks the displayed rows against the size limit.
///
/// A row violates the limit only if it is strictly bigger. Every violation is
/// reported, not just the first one.
///
pub fn evaluate(rows: &[Row], max_size: MaxSize) -> Vec<Violation> {
    let Some(limit) = max_size.limit() else {
        return vec![];
    };

    rows.iter()
        .filter(|row| row.size_kib > limit)
        .map(|row| Violation::new(row.name.clone(), row.size_kib, limit))
        .collect()
}

///
/// Decides the run outcome from the rendered table.
///
/// Fails with one `ThresholdExceeded` error per violating contract.
///
pub fn check(table: &Table, max_size: MaxSize) -> Result<(), Errors> {
    let errors: Errors = evaluate(table.rows(), max_size)
        .into_iter()
        .map(Into::into)
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
