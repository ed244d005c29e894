//!
//! The terminal table rendering.
//!

use colored::Colorize;

use crate::report::row::Row;
use crate::report::Report;

///
/// The terminal table with one row per contract and a total row.
///
#[derive(Debug, Clone)]
pub struct Table {
    /// The per-contract rows.
    rows: Vec<Row>,
    /// The total row.
    total: Row,
}

impl Table {
    /// The name column width limit, in characters.
    pub const NAME_COLUMN_MAX_WIDTH: usize = 64;

    /// The name column header.
    pub const NAME_HEADER: &'static str = "Contract";

    /// The size column header.
    pub const SIZE_HEADER: &'static str = "Size";

    ///
    /// The per-contract rows, as displayed.
    ///
    pub fn rows(&self) -> &[Row] {
        self.rows.as_slice()
    }

    ///
    /// The total row, as displayed.
    ///
    pub fn total(&self) -> &Row {
        &self.total
    }

    ///
    /// Shortens `name` to the column width, marking the cut with an ellipsis.
    ///
    fn truncate(name: &str, width: usize) -> String {
        if name.chars().count() <= width {
            return name.to_owned();
        }
        let mut truncated: String = name.chars().take(width.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}

impl From<&Report> for Table {
    fn from(report: &Report) -> Self {
        Self {
            rows: report.rows(),
            total: report.total_row(),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name_width = self
            .rows
            .iter()
            .chain(std::iter::once(&self.total))
            .map(|row| row.name.chars().count())
            .chain(std::iter::once(Self::NAME_HEADER.len()))
            .max()
            .unwrap_or_default()
            .min(Self::NAME_COLUMN_MAX_WIDTH);
        let size_width = self
            .rows
            .iter()
            .chain(std::iter::once(&self.total))
            .map(|row| row.size.chars().count())
            .chain(std::iter::once(Self::SIZE_HEADER.len()))
            .max()
            .unwrap_or_default();

        let name_line = "═".repeat(name_width + 2);
        let size_line = "═".repeat(size_width + 2);
        let name_separator = "─".repeat(name_width + 2);
        let size_separator = "─".repeat(size_width + 2);

        writeln!(f, "╔{name_line}╤{size_line}╗")?;
        writeln!(
            f,
            "║ {:<name_width$} │ {:>size_width$} ║",
            Self::NAME_HEADER.bold(),
            Self::SIZE_HEADER.bold(),
        )?;
        writeln!(f, "╟{name_separator}┼{size_separator}╢")?;
        for row in self.rows.iter() {
            writeln!(
                f,
                "║ {:<name_width$} │ {:>size_width$} ║",
                Self::truncate(row.name.as_str(), name_width),
                row.size,
            )?;
        }
        writeln!(f, "╟{name_separator}┼{size_separator}╢")?;
        writeln!(
            f,
            "║ {:<name_width$} │ {:>size_width$} ║",
            self.total.name.bold(),
            self.total.size.bold(),
        )?;
        write!(f, "╚{name_line}╧{size_line}╝")?;

        Ok(())
    }
}
