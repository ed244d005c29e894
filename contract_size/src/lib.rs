//!
//! The contract size reporter library.
//!

pub mod artifact;
pub mod config;
pub mod error;
pub mod extractor;
pub mod report;
pub mod resolver;
pub mod threshold;

pub use self::artifact::Artifact;
pub use self::config::host::HostConfig;
pub use self::config::max_size::MaxSize;
pub use self::config::output_format::OutputFormat;
pub use self::config::sort::direction::Direction as SortDirection;
pub use self::config::sort::field::Field as SortField;
pub use self::config::sort::Sort;
pub use self::config::unit::Unit;
pub use self::config::Config;
pub use self::error::Error;
pub use self::error::Errors;
pub use self::report::record::SizeRecord;
pub use self::report::row::Row;
pub use self::report::table::Table;
pub use self::report::Report;
pub use self::resolver::contract_ref::ContractRef;
pub use self::threshold::violation::Violation as ThresholdViolation;

/// The number of bytes in a kibibyte.
pub const BYTES_PER_KIB: f64 = 1024.0;

/// The Ethereum Mainnet deployed contract size limit in KiB.
pub const DEFAULT_MAX_SIZE_KIB: f64 = 24.0;

/// The file name suffix of contracts excluded by `--ignore-mocks`.
pub const MOCK_SUFFIX: &str = "Mock";

/// The default build output directory, relative to the working directory.
pub const DEFAULT_BUILD_DIRECTORY: &str = "build/contracts";

/// The default source contracts directory, relative to the working directory.
pub const DEFAULT_CONTRACTS_DIRECTORY: &str = "contracts";

///
/// Measures every contract selected by `config`.
///
/// Extraction runs on the current `rayon` pool. All failures are collected after
/// every artifact has been processed, so a single broken artifact does not hide the others.
///
pub fn run(config: &Config) -> Result<Report, Errors> {
    let contracts = resolver::resolve(config)?;
    log::debug!("Resolved {} contract artifacts", contracts.len());

    let records = extractor::extract_all(contracts.as_slice(), config.disambiguate_paths)?;

    let mut report = Report::new(records, config.unit);
    report.sort(config.sort);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::Config;
    use crate::Error;
    use crate::Sort;
    use crate::SortDirection;
    use crate::SortField;

    fn write_artifact(directory: &Path, name: &str, size: usize) {
        let json = format!(r#"{{"deployedBytecode":"0x{}"}}"#, "ab".repeat(size));
        std::fs::write(directory.join(format!("{name}.json")), json).expect("Always valid");
    }

    #[test]
    fn ok() {
        let directory = tempfile::tempdir().expect("Always valid");
        write_artifact(directory.path(), "A", 3000);
        write_artifact(directory.path(), "B", 1000);
        write_artifact(directory.path(), "C", 2000);

        let mut config = Config::new(directory.path().to_path_buf());
        config.sort = Sort::new(SortField::Size, SortDirection::Ascending);
        let report = super::run(&config).expect("Always valid");

        let names: Vec<&str> = report
            .records
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        assert_eq!(names, vec!["B", "C", "A"]);
        assert_eq!(report.total_bytes, 6000);
        assert_eq!(report.total_kib(), 5.859375);
    }

    #[test]
    fn error_missing_artifact() {
        let directory = tempfile::tempdir().expect("Always valid");
        write_artifact(directory.path(), "Token", 10);

        let mut config = Config::new(directory.path().to_path_buf());
        config.contracts = vec!["Token".to_owned(), "Missing".to_owned()];
        let errors = super::run(&config).expect_err("Must fail");

        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors.iter().next(),
            Some(Error::ArtifactNotFound { path, .. }) if path == &directory.path().join("Missing.json")
        ));
    }

    #[test]
    fn error_empty_build_directory() {
        let directory = tempfile::tempdir().expect("Always valid");

        let config = Config::new(directory.path().to_path_buf());
        let errors = super::run(&config).expect_err("Must fail");

        assert!(matches!(
            errors.iter().next(),
            Some(Error::NoArtifacts { .. })
        ));
    }
}
