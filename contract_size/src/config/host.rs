//!
//! The build tool configuration.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

///
/// The subset of the build tool configuration the size reporter needs.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct HostConfig {
    /// The directory with compiled artifact files.
    pub contracts_build_directory: Option<PathBuf>,
    /// The source contracts directory.
    pub contracts_directory: Option<PathBuf>,
    /// The project working directory.
    pub working_directory: Option<PathBuf>,
}

impl TryFrom<&Path> for HostConfig {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::ReadingHostConfig {
            error,
            path: path.to_path_buf(),
        })?;
        let config: Self =
            serde_json::from_str(text.as_str()).map_err(|error| Error::ParsingHostConfig {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::HostConfig;
    use crate::error::Error;

    #[test]
    fn ok() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = directory.path().join("config.json");
        std::fs::write(
            path.as_path(),
            r#"{"contracts_build_directory":"/project/build/contracts","working_directory":"/project"}"#,
        )
        .expect("Always valid");

        let config = HostConfig::try_from(path.as_path()).expect("Always valid");
        assert_eq!(
            config.contracts_build_directory,
            Some(PathBuf::from("/project/build/contracts"))
        );
        assert_eq!(config.contracts_directory, None);
        assert_eq!(config.working_directory, Some(PathBuf::from("/project")));
    }

    #[test]
    fn error_missing_file() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = directory.path().join("absent.json");

        assert!(matches!(
            HostConfig::try_from(path.as_path()),
            Err(Error::ReadingHostConfig { .. })
        ));
    }

    #[test]
    fn error_invalid_json() {
        let directory = tempfile::tempdir().expect("Always valid");
        let path = directory.path().join("config.json");
        std::fs::write(path.as_path(), "module.exports = {}").expect("Always valid");

        assert!(matches!(
            HostConfig::try_from(path.as_path()),
            Err(Error::ParsingHostConfig { .. })
        ));
    }
}
