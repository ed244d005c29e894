//!
//! The contract size extractor.
//!

use rayon::iter::IntoParallelRefIterator;
use rayon::iter::ParallelIterator;

use crate::artifact::Artifact;
use crate::error::Error;
use crate::error::Errors;
use crate::report::record::SizeRecord;
use crate::resolver::contract_ref::ContractRef;

///
/// Measures a single contract.
///
pub fn extract(contract: &ContractRef, disambiguate_paths: bool) -> Result<SizeRecord, Error> {
    let path = contract.artifact_path.as_path();
    let artifact = Artifact::read(path)?;
    let size_bytes = artifact.deployed_size(path)?;
    log::debug!("Measured `{}`: {size_bytes} bytes", contract.name);

    Ok(SizeRecord::new(
        contract.label(disambiguate_paths).to_owned(),
        size_bytes,
    ))
}

///
/// Measures all contracts concurrently.
///
/// Returns either every record, in input order, or every failure, in input order.
///
pub fn extract_all(
    contracts: &[ContractRef],
    disambiguate_paths: bool,
) -> Result<Vec<SizeRecord>, Errors> {
    let results: Vec<Result<SizeRecord, Error>> = contracts
        .par_iter()
        .map(|contract| extract(contract, disambiguate_paths))
        .collect();

    let mut records = Vec::with_capacity(results.len());
    let mut errors = Errors::default();
    for result in results.into_iter() {
        match result {
            Ok(record) => records.push(record),
            Err(error) => errors.push(error),
        }
    }

    if errors.is_empty() {
        Ok(records)
    } else {
        Err(errors)
    }
}
