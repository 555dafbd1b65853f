//! Provenance and schema descriptors shared across QECC artifacts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic version describing the schema of serialized payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for bug fixes and documentation updates.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Provenance information attached to every constructed code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Seed of the random source the code was drawn from. `None` when the
    /// source was not a fresh seeded handle, since the seed alone would not
    /// reproduce the code.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Canonical hash of the code; filled in when the code is serialized.
    #[serde(default)]
    pub code_hash: String,
    /// Free-form label supplied by the caller (batch entry, experiment name).
    #[serde(default)]
    pub label: String,
    /// Version map for all tools involved in the run.
    #[serde(default)]
    pub tool_versions: BTreeMap<String, String>,
}

impl RunProvenance {
    /// Creates a provenance record for a code drawn with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    /// Creates a provenance record, stamping the toolkit version.
    pub fn new(seed: Option<u64>) -> Self {
        let mut tool_versions = BTreeMap::new();
        tool_versions.insert("qecc-core".to_string(), env!("CARGO_PKG_VERSION").to_string());
        Self {
            seed,
            code_hash: String::new(),
            label: String::new(),
            tool_versions,
        }
    }
}
