use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use log::info;
use qecc_code::construct::construct_with;
use qecc_code::{CodeParameters, ConstructionOptions, EntropyPolicy, PauliString, RandomCode};
use qecc_core::{RngHandle, RunProvenance};

/// Output rendering for a generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Serialized artefact accepted by `verify` and `syndrome`.
    Json,
    /// Human readable Pauli strings.
    Pauli,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Physical qubits.
    #[arg(long)]
    pub n: usize,
    /// Logical qubits.
    #[arg(long, default_value_t = 0)]
    pub k: usize,
    /// Block parameter (at least 3, at most n - k).
    #[arg(long)]
    pub r: usize,
    /// Seed of the random source.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Draw B and D independently instead of from one shared slice.
    #[arg(long)]
    pub independent_draws: bool,
    /// Skip the brute-force validator.
    #[arg(long)]
    pub skip_validation: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    /// Write to this file instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let params = CodeParameters::new(args.n, args.k, args.r)?;
    let options = ConstructionOptions {
        entropy: if args.independent_draws {
            EntropyPolicy::Independent
        } else {
            EntropyPolicy::SharedRepairDraw
        },
        validate: !args.skip_validation,
    };
    let mut rng = RngHandle::from_seed(args.seed);
    let mut provenance = RunProvenance::from_seed(args.seed);
    provenance.label = params.label();
    let code = construct_with(params, options, &mut rng, provenance)?;

    let rendered = match args.format {
        OutputFormat::Json => qecc_code::to_json(&code)?,
        OutputFormat::Pauli => render_pauli(&code)?,
    };
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            info!("wrote {} to {}", params.label(), path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Renders generators and logical operators as Pauli strings, one per line.
pub fn render_pauli(code: &RandomCode) -> Result<String, Box<dyn Error>> {
    let mut out = String::new();
    let params = code.params();
    match code.provenance().seed {
        Some(seed) => writeln!(out, "# {} seed={seed}", params.label())?,
        None => writeln!(out, "# {}", params.label())?,
    }
    writeln!(out, "stabilizers:")?;
    for row in 0..code.generators().height() {
        writeln!(out, "  S{row:<3} {}", PauliString::from_row(code.generators(), row)?)?;
    }
    if params.k() > 0 {
        writeln!(out, "logicals:")?;
        for j in 0..params.k() {
            let x = PauliString::from_symplectic(&code.logical_x(j)?)?;
            let z = PauliString::from_symplectic(&code.logical_z(j)?)?;
            writeln!(out, "  X{j:<3} {x}")?;
            writeln!(out, "  Z{j:<3} {z}")?;
        }
    }
    Ok(out)
}
