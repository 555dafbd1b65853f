use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use log::warn;
use qecc_code::{gf2_rank, validate, CodeParameters};
use serde::Serialize;

use crate::commands::load_code;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// JSON artefact produced by `generate` or `batch`.
    #[arg(long)]
    pub input: PathBuf,
}

/// Outcome of checking a stored code.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Code parameters.
    pub params: CodeParameters,
    /// GF(2) rank of the generators.
    pub rank: usize,
    /// Whether every commutation and independence check passed.
    pub valid: bool,
    /// Failure description when `valid` is false.
    pub failure: Option<String>,
    /// Canonical code hash.
    pub hash: String,
}

pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let report = verify_file(&args.input)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    match report.failure {
        Some(failure) => Err(failure.into()),
        None => Ok(()),
    }
}

/// Loads a stored code and runs the validator on it.
pub fn verify_file(path: &Path) -> Result<VerifyReport, Box<dyn Error>> {
    let code = load_code(path)?;
    let failure = match validate::validate(&code) {
        Ok(()) => None,
        Err(err) => {
            warn!("{} failed validation: {err}", path.display());
            Some(err.to_string())
        }
    };
    Ok(VerifyReport {
        params: code.params(),
        rank: gf2_rank(code.generators()),
        valid: failure.is_none(),
        failure,
        hash: code.canonical_hash(),
    })
}
