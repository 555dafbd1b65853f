use std::fs;
use std::path::Path;

use qecc_code::{CodeParameters, ConstructionOptions, EntropyPolicy};
use qecc_core::{ErrorInfo, QeccError};
use serde::{Deserialize, Serialize};

/// YAML-configurable description of a batch of code constructions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Master seed; code `i` of the batch uses substream `i`.
    #[serde(default)]
    pub master_seed: u64,
    /// How the repaired blocks draw their random bits.
    #[serde(default)]
    pub entropy: EntropyPolicy,
    /// Run the brute-force validator on every code.
    #[serde(default = "default_validate")]
    pub validate: bool,
    /// Parameter sets to draw.
    pub codes: Vec<BatchEntry>,
}

/// One `(n, k, r)` parameter set and how many codes to draw for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Physical qubits.
    pub n: usize,
    /// Logical qubits.
    #[serde(default)]
    pub k: usize,
    /// Block parameter.
    pub r: usize,
    /// Number of codes to draw.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Optional file name prefix; defaults to the parameter label.
    #[serde(default)]
    pub label: Option<String>,
}

fn default_validate() -> bool {
    true
}

fn default_count() -> usize {
    1
}

impl BatchConfig {
    /// Reads and parses a YAML batch file.
    pub fn load(path: &Path) -> Result<Self, QeccError> {
        let text = fs::read_to_string(path).map_err(|err| {
            QeccError::Config(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_str(&text)
    }

    /// Parses a YAML batch description.
    pub fn from_yaml_str(text: &str) -> Result<Self, QeccError> {
        let config: BatchConfig = serde_yaml::from_str(text)
            .map_err(|err| QeccError::Config(ErrorInfo::new("config-parse", err.to_string())))?;
        if config.codes.is_empty() {
            let info = ErrorInfo::new("empty-batch", "batch lists no codes")
                .with_hint("add at least one entry under `codes`");
            return Err(QeccError::Config(info));
        }
        Ok(config)
    }

    /// Construction options shared by every code in the batch.
    pub fn options(&self) -> ConstructionOptions {
        ConstructionOptions {
            entropy: self.entropy,
            validate: self.validate,
        }
    }

    /// Validates every entry, returning the parameters in file order.
    pub fn parameters(&self) -> Result<Vec<CodeParameters>, QeccError> {
        self.codes
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                CodeParameters::new(entry.n, entry.k, entry.r).map_err(|err| {
                    let info = err.info().clone().with_context("entry", idx.to_string());
                    QeccError::Config(info)
                })
            })
            .collect()
    }
}
