//!
//! The contract size reporter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The contract size reporter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Enables debug logging. `RUST_LOG` takes precedence.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppresses the report and status output. Errors are still printed.
    #[arg(short, long)]
    pub quiet: bool,

    /// Measures only the specified contracts. All artifacts are measured by default.
    #[arg(short, long, num_args = 1..)]
    pub contracts: Vec<String>,

    /// Fails if any contract is bigger than the limit in KiB.
    /// Passing the flag without a value uses the Ethereum Mainnet limit of 24 KiB.
    #[arg(long, num_args = 0..=1, default_missing_value = "true", value_name = "KIB")]
    pub check_max_size: Option<String>,

    /// Skips artifacts whose name ends with `Mock` when scanning the build directory.
    #[arg(long)]
    pub ignore_mocks: bool,

    /// Displays sizes in bytes instead of KiB.
    #[arg(long)]
    pub size_in_bytes: bool,

    /// Sorts the report by `name` or `size`, in `asc` or `desc` direction.
    #[arg(long, num_args = 1..=2, value_names = ["FIELD", "DIRECTION"])]
    pub sort: Vec<String>,

    /// Displays contracts by their source path relative to the working directory.
    #[arg(long)]
    pub disambiguate_paths: bool,

    /// The build tool configuration file in JSON format.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// The directory with compiled artifacts.
    /// Defaults to `build/contracts` in the working directory.
    #[arg(long)]
    pub build_directory: Option<PathBuf>,

    /// The source contracts directory.
    /// Defaults to `contracts` in the working directory.
    #[arg(long)]
    pub contracts_directory: Option<PathBuf>,

    /// The project working directory. Defaults to the current directory.
    #[arg(long)]
    pub working_directory: Option<PathBuf>,

    /// The report output format: `table` or `json`.
    #[arg(long, default_value_t = contract_size::OutputFormat::Table)]
    pub output_format: contract_size::OutputFormat,

    /// Sets the number of threads reading artifacts concurrently.
    #[arg(short, long)]
    pub threads: Option<usize>,
}

impl Arguments {
    ///
    /// Validates the arguments and builds the run configuration.
    ///
    /// The maximum size is validated before any file is touched.
    /// Returns the configuration and the non-fatal warnings.
    ///
    pub fn validate(&self) -> anyhow::Result<(contract_size::Config, Vec<String>)> {
        let max_size = contract_size::MaxSize::parse(self.check_max_size.as_deref())?;
        let (sort, warnings) = contract_size::Sort::parse_lenient(self.sort.as_slice());

        let host_config = match self.config.as_deref() {
            Some(path) => contract_size::HostConfig::try_from(path)?,
            None => contract_size::HostConfig::default(),
        };

        let working_directory = match self
            .working_directory
            .clone()
            .or(host_config.working_directory)
        {
            Some(working_directory) => working_directory,
            None => std::env::current_dir()?,
        };
        let build_directory = self
            .build_directory
            .clone()
            .or(host_config.contracts_build_directory)
            .unwrap_or_else(|| PathBuf::from(contract_size::DEFAULT_BUILD_DIRECTORY));
        let contracts_directory = self
            .contracts_directory
            .clone()
            .or(host_config.contracts_directory)
            .unwrap_or_else(|| PathBuf::from(contract_size::DEFAULT_CONTRACTS_DIRECTORY));

        let mut config = contract_size::Config::new(working_directory.join(build_directory));
        config.contracts_directory = Some(working_directory.join(contracts_directory));
        config.working_directory = Some(working_directory);
        config.contracts = self.contracts.clone();
        config.max_size = max_size;
        config.ignore_mocks = self.ignore_mocks;
        config.unit = if self.size_in_bytes {
            contract_size::Unit::Bytes
        } else {
            contract_size::Unit::KiB
        };
        config.sort = sort;
        config.disambiguate_paths = self.disambiguate_paths;

        Ok((config, warnings))
    }
}
