//!
//! The report sort field.
//!

///
/// The report sort field.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The displayed contract name.
    #[default]
    Name,
    /// The deployed size.
    Size,
}

impl std::str::FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "size" => Ok(Self::Size),
            string => anyhow::bail!(
                "Unknown sort field `{string}`. Supported fields: {}",
                vec![Self::Name, Self::Size]
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Size => write!(f, "size"),
        }
    }
}
