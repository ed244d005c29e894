//!
//! The size of a single contract.
//!

///
/// The size of a single contract.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SizeRecord {
    /// The contract name as displayed.
    pub name: String,
    /// The deployed bytecode size.
    pub size_bytes: u64,
}

impl SizeRecord {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, size_bytes: u64) -> Self {
        Self { name, size_bytes }
    }

    ///
    /// The unrounded size in KiB.
    ///
    pub fn size_kib(&self) -> f64 {
        self.size_bytes as f64 / crate::BYTES_PER_KIB
    }
}
