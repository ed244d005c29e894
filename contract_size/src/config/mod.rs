//!
//! The contract size run configuration.
//!

pub mod host;
pub mod max_size;
pub mod output_format;
pub mod sort;
pub mod unit;

use std::path::PathBuf;

use self::max_size::MaxSize;
use self::sort::Sort;
use self::unit::Unit;

///
/// The contract size run configuration.
///
/// Built once from the command line and passed into the pipeline.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The directory with compiled artifact files.
    pub build_directory: PathBuf,
    /// The source contracts directory, used for path disambiguation only.
    pub contracts_directory: Option<PathBuf>,
    /// The project working directory, used for path disambiguation only.
    pub working_directory: Option<PathBuf>,
    /// The explicitly requested contract names. Empty means all artifacts.
    pub contracts: Vec<String>,
    /// The size limit policy.
    pub max_size: MaxSize,
    /// Whether to skip `*Mock` artifacts when scanning the build directory.
    pub ignore_mocks: bool,
    /// The size display unit.
    pub unit: Unit,
    /// The row order.
    pub sort: Sort,
    /// Whether to display contracts by their source path.
    pub disambiguate_paths: bool,
}

impl Config {
    ///
    /// A shortcut constructor with default options.
    ///
    pub fn new(build_directory: PathBuf) -> Self {
        Self {
            build_directory,
            contracts_directory: None,
            working_directory: None,
            contracts: vec![],
            max_size: MaxSize::default(),
            ignore_mocks: false,
            unit: Unit::default(),
            sort: Sort::default(),
            disambiguate_paths: false,
        }
    }
}
