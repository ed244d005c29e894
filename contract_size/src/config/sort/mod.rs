//!
//! The report sort order.
//!

pub mod direction;
pub mod field;

use std::str::FromStr;

use self::direction::Direction;
use self::field::Field;

///
/// The report sort order.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    /// The field to sort by.
    pub field: Field,
    /// The sort direction.
    pub direction: Direction,
}

impl Sort {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(field: Field, direction: Direction) -> Self {
        Self { field, direction }
    }

    ///
    /// Parses the `--sort` values, never failing.
    ///
    /// An unknown field or direction is replaced with its default, and a warning
    /// describing the substitution is returned alongside.
    ///
    pub fn parse_lenient(values: &[String]) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let field = match values.first() {
            Some(value) => Field::from_str(value).unwrap_or_else(|error| {
                warnings.push(format!("{error}. Falling back to `{}`.", Field::default()));
                Field::default()
            }),
            None => Field::default(),
        };
        let direction = match values.get(1) {
            Some(value) => Direction::from_str(value).unwrap_or_else(|error| {
                warnings.push(format!(
                    "{error}. Falling back to `{}`.",
                    Direction::default()
                ));
                Direction::default()
            }),
            None => Direction::default(),
        };
        if values.len() > 2 {
            warnings.push(format!(
                "Ignoring extra sort arguments: {}",
                values[2..].join(" ")
            ));
        }

        (Self::new(field, direction), warnings)
    }
}

impl std::fmt::Display for Sort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}
