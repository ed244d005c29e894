//!
//! The contract size limit violation.
//!

use crate::error::Error;

///
/// The contract size limit violation.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The contract name as displayed.
    pub name: String,
    /// The contract size in KiB, as displayed.
    pub size_kib: f64,
    /// The limit in KiB.
    pub limit_kib: f64,
}

impl Violation {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, size_kib: f64, limit_kib: f64) -> Self {
        Self {
            name,
            size_kib,
            limit_kib,
        }
    }
}

impl From<Violation> for Error {
    fn from(violation: Violation) -> Self {
        Self::ThresholdExceeded {
            name: violation.name,
            size: violation.size_kib,
            limit: violation.limit_kib,
        }
    }
}
