//!
//! The size display unit.
//!

///
/// The size display unit.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Unit {
    /// Kibibytes rounded to two decimals.
    #[default]
    KiB,
    /// Exact bytes.
    Bytes,
}

impl Unit {
    ///
    /// Formats a byte count in this unit.
    ///
    pub fn format(&self, bytes: u64) -> String {
        match self {
            Self::KiB => format!("{:.2} {self}", bytes as f64 / crate::BYTES_PER_KIB),
            Self::Bytes => format!("{bytes} {self}"),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::KiB => write!(f, "KiB"),
            Self::Bytes => write!(f, "Bytes"),
        }
    }
}
