//!
//! The reference to a contract to measure.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// The reference to a contract to measure.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRef {
    /// The bare contract name, without extension.
    pub name: String,
    /// The compiled artifact file path.
    pub artifact_path: PathBuf,
    /// The source-path-based name, if path disambiguation found one.
    pub display_name: Option<String>,
}

impl ContractRef {
    ///
    /// Creates a reference to `<build_directory>/<name>.json`.
    ///
    pub fn new(build_directory: &Path, name: String) -> Self {
        let artifact_path =
            build_directory.join(format!("{name}.{}", era_compiler_common::EXTENSION_JSON));
        Self {
            name,
            artifact_path,
            display_name: None,
        }
    }

    ///
    /// Returns the name shown in the report.
    ///
    pub fn label(&self, disambiguate_paths: bool) -> &str {
        match (disambiguate_paths, self.display_name.as_deref()) {
            (true, Some(display_name)) => display_name,
            _ => self.name.as_str(),
        }
    }
}
