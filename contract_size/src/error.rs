//!
//! The contract size reporter errors.
//!

use std::path::PathBuf;

///
/// A fatal condition of a contract size run.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The build output directory cannot be listed.
    #[error("Reading build directory {path:?}: {error}")]
    ReadingDirectory {
        /// The underlying IO error.
        error: std::io::Error,
        /// The build output directory.
        path: PathBuf,
    },
    /// Neither explicit names nor matching artifacts were found.
    #[error("No compiled artifacts to measure in {path:?}")]
    NoArtifacts {
        /// The build output directory.
        path: PathBuf,
    },
    /// The artifact path does not exist or is not a regular file.
    #[error("Artifact file {path:?} not found or invalid: {reason}")]
    ArtifactNotFound {
        /// The expected artifact path.
        path: PathBuf,
        /// The description of the failure.
        reason: String,
    },
    /// The artifact file cannot be read.
    #[error("Reading artifact file {path:?}: {error}")]
    ReadingArtifact {
        /// The underlying IO error.
        error: std::io::Error,
        /// The artifact path.
        path: PathBuf,
    },
    /// The artifact file is not a valid JSON object.
    #[error("Parsing artifact file {path:?}: {error}")]
    ParsingArtifact {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The artifact path.
        path: PathBuf,
    },
    /// The artifact lacks the runtime bytecode field.
    #[error("Artifact file {path:?} is missing the `deployedBytecode` field, not a contract artifact")]
    MissingDeployedBytecode {
        /// The artifact path.
        path: PathBuf,
    },
    /// The maximum size option is neither `true` nor a number.
    #[error("Invalid value `{value}` for the maximum contract size, expected `true` or a number of KiB")]
    InvalidMaxSize {
        /// The rejected value.
        value: String,
    },
    /// The build tool configuration file cannot be read.
    #[error("Reading configuration file {path:?}: {error}")]
    ReadingHostConfig {
        /// The underlying IO error.
        error: std::io::Error,
        /// The configuration file path.
        path: PathBuf,
    },
    /// The build tool configuration file is not valid.
    #[error("Parsing configuration file {path:?}: {error}")]
    ParsingHostConfig {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The configuration file path.
        path: PathBuf,
    },
    /// The contract exceeds the configured size limit.
    #[error("Contract `{name}` is bigger than {limit} KiB ({size:.2} KiB)")]
    ThresholdExceeded {
        /// The contract name as displayed.
        name: String,
        /// The contract size in KiB, as displayed.
        size: f64,
        /// The size limit in KiB.
        limit: f64,
    },
}

///
/// The failures collected from a whole run.
///
#[derive(Debug, Default)]
pub struct Errors {
    /// The collected errors, in contract resolution order.
    inner: Vec<Error>,
}

impl Errors {
    ///
    /// Appends an error.
    ///
    pub fn push(&mut self, error: Error) {
        self.inner.push(error);
    }

    ///
    /// The number of collected errors.
    ///
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    ///
    /// Whether no error has been collected.
    ///
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    ///
    /// Iterates over the collected errors.
    ///
    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.inner.iter()
    }
}

impl From<Error> for Errors {
    fn from(error: Error) -> Self {
        Self { inner: vec![error] }
    }
}

impl FromIterator<Error> for Errors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl std::fmt::Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.inner.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Error;
    use super::Errors;

    #[test]
    fn display_lists_every_error() {
        let errors: Errors = vec![
            Error::NoArtifacts {
                path: PathBuf::from("build"),
            },
            Error::InvalidMaxSize {
                value: "abc".to_owned(),
            },
        ]
        .into_iter()
        .collect();

        let text = errors.to_string();
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("No compiled artifacts"));
        assert!(text.contains("`abc`"));
    }
}
