//!
//! The compiled contract artifact.
//!

use std::path::Path;

use crate::error::Error;

///
/// The compiled contract artifact.
///
/// Only the fields the size reporter reads are declared, the rest are ignored.
///
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// The `0x`-prefixed runtime bytecode.
    pub deployed_bytecode: Option<String>,
}

impl Artifact {
    ///
    /// Reads and parses the artifact at `path`.
    ///
    /// The path must exist and be a regular file.
    ///
    pub fn read(path: &Path) -> Result<Self, Error> {
        let metadata = std::fs::metadata(path).map_err(|error| Error::ArtifactNotFound {
            path: path.to_path_buf(),
            reason: error.to_string(),
        })?;
        if !metadata.is_file() {
            return Err(Error::ArtifactNotFound {
                path: path.to_path_buf(),
                reason: "not a regular file".to_owned(),
            });
        }

        let text = std::fs::read_to_string(path).map_err(|error| Error::ReadingArtifact {
            error,
            path: path.to_path_buf(),
        })?;
        let artifact: Self =
            serde_json::from_str(text.as_str()).map_err(|error| Error::ParsingArtifact {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(artifact)
    }

    ///
    /// Returns the deployed bytecode size in bytes.
    ///
    /// The `0x` prefix and even length are assumed, not checked.
    ///
    pub fn deployed_size(&self, path: &Path) -> Result<u64, Error> {
        let bytecode = self
            .deployed_bytecode
            .as_deref()
            .ok_or_else(|| Error::MissingDeployedBytecode {
                path: path.to_path_buf(),
            })?;
        Ok(hex_size(bytecode))
    }
}

///
/// Converts a `0x`-prefixed hex string length into a byte count.
///
pub fn hex_size(bytecode: &str) -> u64 {
    (bytecode.len().saturating_sub(2) / 2) as u64
}
