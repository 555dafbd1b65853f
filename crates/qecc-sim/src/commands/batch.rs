use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use log::{debug, info};
use qecc_code::construct::construct_with;
use qecc_code::CodeParameters;
use qecc_core::{RngHandle, RunProvenance};
use serde::{Deserialize, Serialize};

use crate::commands::write_json;
use crate::config::BatchConfig;

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// YAML batch configuration.
    #[arg(long)]
    pub config: PathBuf,
    /// Output directory for code artefacts and the manifest.
    #[arg(long)]
    pub out: PathBuf,
}

/// Index of the artefacts written by one batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchManifest {
    /// Master seed of the batch.
    pub master_seed: u64,
    /// One record per written code.
    pub codes: Vec<ManifestEntry>,
}

/// Artefact record inside [`BatchManifest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name relative to the output directory.
    pub file: String,
    /// Code parameters.
    pub params: CodeParameters,
    /// Substream seed the code was drawn from.
    pub seed: u64,
    /// Canonical code hash.
    pub hash: String,
}

pub fn run(args: &BatchArgs) -> Result<(), Box<dyn Error>> {
    let config = BatchConfig::load(&args.config)?;
    let manifest = run_config(&config, &args.out)?;
    info!(
        "wrote {} codes and manifest to {}",
        manifest.codes.len(),
        args.out.display()
    );
    Ok(())
}

/// Draws every code of `config` into `out` and writes `manifest.json`.
pub fn run_config(
    config: &BatchConfig,
    out: &Path,
) -> Result<BatchManifest, Box<dyn Error>> {
    fs::create_dir_all(out)?;
    let parameters = config.parameters()?;
    let options = config.options();

    let mut substream = 0u64;
    let mut codes = Vec::new();
    for (entry, params) in config.codes.iter().zip(parameters) {
        let prefix = entry.label.clone().unwrap_or_else(|| params.label());
        for idx in 0..entry.count {
            let mut rng = RngHandle::substream(config.master_seed, substream);
            substream += 1;
            let seed = rng.seed();
            let mut provenance = RunProvenance::from_seed(seed);
            provenance.label = prefix.clone();

            let code = construct_with(params, options, &mut rng, provenance)?;
            let file = format!("{prefix}-{idx:03}.json");
            fs::write(out.join(&file), qecc_code::to_json(&code)?)?;
            debug!("wrote {file}");
            codes.push(ManifestEntry {
                file,
                params,
                seed,
                hash: code.canonical_hash(),
            });
        }
    }

    let manifest = BatchManifest {
        master_seed: config.master_seed,
        codes,
    };
    write_json(out.join("manifest.json"), &manifest)?;
    Ok(manifest)
}
