//!
//! The maximum contract size policy.
//!

use std::str::FromStr;

use crate::error::Error;

///
/// The maximum contract size policy.
///
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum MaxSize {
    /// No check is performed.
    #[default]
    Unset,
    /// The Ethereum Mainnet limit of 24 KiB.
    Default,
    /// An explicit limit in KiB.
    Limit(f64),
}

impl MaxSize {
    ///
    /// Parses an optional command line value.
    ///
    /// `None` means the option was not passed at all.
    ///
    pub fn parse(value: Option<&str>) -> Result<Self, Error> {
        match value {
            Some(value) => Self::from_str(value),
            None => Ok(Self::Unset),
        }
    }

    ///
    /// Returns the active limit in KiB, if any.
    ///
    pub fn limit(&self) -> Option<f64> {
        match self {
            Self::Unset => None,
            Self::Default => Some(crate::DEFAULT_MAX_SIZE_KIB),
            Self::Limit(limit) => Some(*limit),
        }
    }
}

impl FromStr for MaxSize {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let string = string.trim();
        if string == "true" {
            return Ok(Self::Default);
        }
        match f64::from_str(string) {
            Ok(limit) if limit.is_finite() => Ok(Self::Limit(limit)),
            _ => Err(Error::InvalidMaxSize {
                value: string.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for MaxSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.limit() {
            Some(limit) => write!(f, "{limit} KiB"),
            None => write!(f, "unset"),
        }
    }
}
