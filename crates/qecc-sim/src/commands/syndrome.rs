use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use qecc_code::syndrome::{logical_action, syndrome};
use qecc_code::PauliString;

use crate::commands::load_code;

#[derive(Args, Debug)]
pub struct SyndromeArgs {
    /// JSON artefact produced by `generate` or `batch`.
    #[arg(long)]
    pub input: PathBuf,
    /// Pauli error, one of I/X/Y/Z per qubit (e.g. `XIIZY`).
    #[arg(long)]
    pub error: String,
}

pub fn run(args: &SyndromeArgs) -> Result<(), Box<dyn Error>> {
    let code = load_code(&args.input)?;
    let error: PauliString = args.error.parse()?;
    let bits = error.to_symplectic();
    let syndrome = syndrome(&code, &bits)?;
    let action = logical_action(&code, &bits)?;

    println!("syndrome: {}", bit_string(&syndrome));
    let k = code.params().k();
    let flipped: Vec<String> = action
        .iter()
        .enumerate()
        .filter(|(_, anti)| **anti)
        .map(|(col, _)| {
            if col < k {
                format!("X{col}")
            } else {
                format!("Z{}", col - k)
            }
        })
        .collect();
    if flipped.is_empty() {
        println!("anticommutes with: none");
    } else {
        println!("anticommutes with: {}", flipped.join(" "));
    }
    Ok(())
}

pub(crate) fn bit_string(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { '1' } else { '0' }).collect()
}
