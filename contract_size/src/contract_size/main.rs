//!
//! The contract size reporter executable.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if arguments.verbose {
            "debug"
        } else {
            "warn"
        },
    ))
    .init();

    let exit_code = match main_inner(arguments) {
        Ok(()) => era_compiler_common::EXIT_CODE_SUCCESS,
        Err(error) => {
            for line in error_lines(&error).into_iter() {
                eprintln!("{} {line}", "Error:".bright_red().bold());
            }
            era_compiler_common::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let (config, warnings) = arguments.validate()?;
    for warning in warnings.into_iter() {
        log::warn!("{warning}");
        eprintln!("{} {warning}", "Warning:".bright_yellow().bold());
    }

    let mut thread_pool_builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = arguments.threads {
        thread_pool_builder = thread_pool_builder.num_threads(threads);
    }
    thread_pool_builder.build_global()?;

    if !arguments.quiet {
        eprintln!(
            "   {} {:?} with {} worker threads",
            "Measuring".bright_green().bold(),
            config.build_directory,
            rayon::current_num_threads(),
        );
    }
    let report = contract_size::run(&config)?;

    let table = contract_size::Table::from(&report);
    if !arguments.quiet {
        match arguments.output_format {
            contract_size::OutputFormat::Table => println!("{table}"),
            contract_size::OutputFormat::Json => println!("{}", report.to_json()),
        }
    }

    contract_size::threshold::check(&table, config.max_size)?;

    Ok(())
}

///
/// Splits the run failure into one message per collected error.
///
fn error_lines(error: &anyhow::Error) -> Vec<String> {
    match error.downcast_ref::<contract_size::Errors>() {
        Some(errors) => errors.iter().map(|error| error.to_string()).collect(),
        None => vec![error.to_string()],
    }
}
