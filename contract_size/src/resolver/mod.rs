//!
//! The contract artifact resolver.
//!

pub mod contract_ref;

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Error;

use self::contract_ref::ContractRef;

///
/// Resolves the contracts to measure.
///
/// Explicit names are taken verbatim and in order, bypassing the mock filter.
/// Otherwise the build directory is scanned for JSON artifacts, sorted by name.
///
pub fn resolve(config: &Config) -> Result<Vec<ContractRef>, Error> {
    let names = if config.contracts.is_empty() {
        scan(config.build_directory.as_path(), config.ignore_mocks)?
    } else {
        let mut visited = HashSet::with_capacity(config.contracts.len());
        config
            .contracts
            .iter()
            .filter(|name| visited.insert(name.as_str()))
            .cloned()
            .collect()
    };
    if names.is_empty() {
        return Err(Error::NoArtifacts {
            path: config.build_directory.clone(),
        });
    }

    let mut contracts: Vec<ContractRef> = names
        .into_iter()
        .map(|name| ContractRef::new(config.build_directory.as_path(), name))
        .collect();

    if config.disambiguate_paths {
        match config.contracts_directory.as_deref() {
            Some(contracts_directory) => assign_display_names(
                contracts.as_mut_slice(),
                contracts_directory,
                config.working_directory.as_deref(),
            ),
            None => log::debug!("No contracts directory configured, paths are not disambiguated"),
        }
    }

    Ok(contracts)
}

///
/// Lists the artifact names in the build directory.
///
fn scan(build_directory: &Path, ignore_mocks: bool) -> Result<Vec<String>, Error> {
    let map_error = |error: std::io::Error| Error::ReadingDirectory {
        error,
        path: build_directory.to_path_buf(),
    };
    let suffix = format!(".{}", era_compiler_common::EXTENSION_JSON);

    let mut names = Vec::new();
    for entry in std::fs::read_dir(build_directory).map_err(map_error)? {
        let entry = entry.map_err(map_error)?;
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            log::debug!("Skipping non-UTF-8 file name {file_name:?}");
            continue;
        };
        let Some(name) = file_name.strip_suffix(suffix.as_str()) else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        if ignore_mocks && name.ends_with(crate::MOCK_SUFFIX) {
            log::debug!("Skipping mock contract `{name}`");
            continue;
        }
        names.push(name.to_owned());
    }
    names.sort();
    Ok(names)
}

///
/// Names every contract after its source file, relative to the working directory.
///
/// The source extension is replaced with the artifact one. Contracts without a
/// source file of the same stem keep their bare name.
///
fn assign_display_names(
    contracts: &mut [ContractRef],
    contracts_directory: &Path,
    working_directory: Option<&Path>,
) {
    let sources = index_sources(contracts_directory);

    for contract in contracts.iter_mut() {
        let Some(source_path) = sources.get(contract.name.as_str()) else {
            log::debug!("No source file found for contract `{}`", contract.name);
            continue;
        };
        let relative_path = working_directory
            .and_then(|working_directory| source_path.strip_prefix(working_directory).ok())
            .unwrap_or(source_path.as_path());
        let display_name = relative_path
            .with_extension(era_compiler_common::EXTENSION_JSON)
            .to_string_lossy()
            .to_string();
        contract.display_name = Some(display_name);
    }
}

///
/// Maps source file stems to their paths under `contracts_directory`.
///
/// If several files share a stem, the lexicographically first path wins.
///
fn index_sources(contracts_directory: &Path) -> BTreeMap<String, PathBuf> {
    let pattern = format!(
        "{}/**/*.{}",
        glob::Pattern::escape(&contracts_directory.to_string_lossy()),
        era_compiler_common::EXTENSION_SOLIDITY
    );
    let mut paths: Vec<PathBuf> = match glob::glob(pattern.as_str()) {
        Ok(paths) => paths.filter_map(Result::ok).collect(),
        Err(error) => {
            log::debug!("Invalid source pattern `{pattern}`: {error}");
            return BTreeMap::new();
        }
    };
    paths.sort();

    let mut sources = BTreeMap::new();
    for path in paths.into_iter() {
        let Some(stem) = path.file_stem() else {
            continue;
        };
        sources
            .entry(stem.to_string_lossy().to_string())
            .or_insert(path);
    }
    sources
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::path::PathBuf;

    use crate::config::Config;
    use crate::error::Error;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Always valid");
        }
        std::fs::write(path, "{}").expect("Always valid");
    }

    fn names(config: &Config) -> Vec<String> {
        super::resolve(config)
            .expect("Always valid")
            .into_iter()
            .map(|contract| contract.name)
            .collect()
    }

    #[test]
    fn ok_scan() {
        let directory = tempfile::tempdir().expect("Always valid");
        touch(directory.path().join("Token.json").as_path());
        touch(directory.path().join("Crowdsale.json").as_path());
        touch(directory.path().join("README.md").as_path());

        let config = Config::new(directory.path().to_path_buf());
        assert_eq!(names(&config), vec!["Crowdsale", "Token"]);

        let contracts = super::resolve(&config).expect("Always valid");
        assert_eq!(
            contracts[1].artifact_path,
            directory.path().join("Token.json")
        );
    }

    #[test]
    fn ignore_mocks_on_scan() {
        let directory = tempfile::tempdir().expect("Always valid");
        touch(directory.path().join("Token.json").as_path());
        touch(directory.path().join("TokenMock.json").as_path());
        touch(directory.path().join("MockToken.json").as_path());

        let mut config = Config::new(directory.path().to_path_buf());
        config.ignore_mocks = true;
        assert_eq!(names(&config), vec!["MockToken", "Token"]);

        config.ignore_mocks = false;
        assert_eq!(names(&config), vec!["MockToken", "Token", "TokenMock"]);
    }

    #[test]
    fn explicit_names_bypass_mock_filter() {
        let directory = tempfile::tempdir().expect("Always valid");
        touch(directory.path().join("TokenMock.json").as_path());

        let mut config = Config::new(directory.path().to_path_buf());
        config.ignore_mocks = true;
        config.contracts = vec!["TokenMock".to_owned()];
        assert_eq!(names(&config), vec!["TokenMock"]);
    }

    #[test]
    fn explicit_names_keep_order_and_skip_duplicates() {
        let mut config = Config::new(PathBuf::from("/nonexistent"));
        config.contracts = vec!["B".to_owned(), "A".to_owned(), "B".to_owned()];
        assert_eq!(names(&config), vec!["B", "A"]);
    }

    #[test]
    fn error_no_artifacts() {
        let directory = tempfile::tempdir().expect("Always valid");
        touch(directory.path().join("notes.txt").as_path());

        let config = Config::new(directory.path().to_path_buf());
        assert!(matches!(
            super::resolve(&config),
            Err(Error::NoArtifacts { .. })
        ));
    }

    #[test]
    fn error_only_mocks() {
        let directory = tempfile::tempdir().expect("Always valid");
        touch(directory.path().join("TokenMock.json").as_path());

        let mut config = Config::new(directory.path().to_path_buf());
        config.ignore_mocks = true;
        assert!(matches!(
            super::resolve(&config),
            Err(Error::NoArtifacts { .. })
        ));
    }

    #[test]
    fn error_missing_directory() {
        let directory = tempfile::tempdir().expect("Always valid");

        let config = Config::new(directory.path().join("absent"));
        assert!(matches!(
            super::resolve(&config),
            Err(Error::ReadingDirectory { .. })
        ));
    }

    #[test]
    fn disambiguate_paths() {
        let project = tempfile::tempdir().expect("Always valid");
        let build_directory = project.path().join("build/contracts");
        let contracts_directory = project.path().join("contracts");
        touch(build_directory.join("Token.json").as_path());
        touch(build_directory.join("Migrations.json").as_path());
        touch(contracts_directory.join("token/Token.sol").as_path());

        let mut config = Config::new(build_directory);
        config.contracts_directory = Some(contracts_directory);
        config.working_directory = Some(project.path().to_path_buf());
        config.disambiguate_paths = true;

        let contracts = super::resolve(&config).expect("Always valid");
        assert_eq!(contracts[0].name, "Migrations");
        assert_eq!(contracts[0].display_name, None);
        assert_eq!(contracts[0].label(true), "Migrations");
        assert_eq!(contracts[1].name, "Token");
        assert_eq!(
            contracts[1].display_name.as_deref(),
            Path::new("contracts/token/Token.json").to_str()
        );
        assert_eq!(contracts[1].label(false), "Token");
    }
}
