use std::fmt;

use log::{debug, info};
use qecc_core::{ErrorInfo, QeccError, RngHandle, RunProvenance, SchemaVersion, SymplecticMatrix};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::arena::RandomArena;
use crate::fill::{self, EntropyPolicy};
use crate::hash;
use crate::layout::BlockLayout;
use crate::logical;
use crate::params::CodeParameters;
use crate::repair::{self, RepairReport};
use crate::validate;

/// Knobs for a single construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionOptions {
    /// How B and D draw their random bits.
    #[serde(default)]
    pub entropy: EntropyPolicy,
    /// Run the brute-force validator before returning.
    #[serde(default = "default_validate")]
    pub validate: bool,
}

fn default_validate() -> bool {
    true
}

impl Default for ConstructionOptions {
    fn default() -> Self {
        Self {
            entropy: EntropyPolicy::default(),
            validate: default_validate(),
        }
    }
}

/// Stabilizer generators and paired logical operators drawn for one
/// `(n, k, r)`.
#[derive(Clone, PartialEq)]
pub struct RandomCode {
    params: CodeParameters,
    generators: SymplecticMatrix,
    logicals: SymplecticMatrix,
    repair: RepairReport,
    schema_version: SchemaVersion,
    provenance: RunProvenance,
    correction_probability: Option<f64>,
}

impl fmt::Debug for RandomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomCode")
            .field("params", &self.params)
            .field("generators", &self.generators)
            .field("logicals", &self.logicals)
            .field("provenance", &self.provenance)
            .finish_non_exhaustive()
    }
}

impl RandomCode {
    /// Draws a code for `params` from `rng` with default options. The
    /// handle's seed is recorded only when nothing was drawn from it before.
    pub fn generate(params: CodeParameters, rng: &mut RngHandle) -> Result<Self, QeccError> {
        let provenance = RunProvenance::new(rng.fresh_seed());
        construct_with(params, ConstructionOptions::default(), rng, provenance)
    }

    /// Reassembles a code from stored matrices, checking their shapes.
    pub fn from_parts(
        params: CodeParameters,
        generators: SymplecticMatrix,
        logicals: SymplecticMatrix,
        schema_version: SchemaVersion,
        provenance: RunProvenance,
    ) -> Result<Self, QeccError> {
        let n = params.n();
        let expected = [
            ("generators", generators.height(), params.stabilizers()),
            ("generators", generators.length(), 2 * n),
            ("logicals", logicals.height(), 2 * n),
            ("logicals", logicals.length(), 2 * params.k()),
        ];
        for (matrix, actual, wanted) in expected {
            if actual != wanted {
                let info = ErrorInfo::new("shape-mismatch", "matrix shape does not match parameters")
                    .with_context("matrix", matrix)
                    .with_context("expected", wanted.to_string())
                    .with_context("actual", actual.to_string())
                    .with_context("params", params.label());
                return Err(QeccError::Matrix(info));
            }
        }
        Ok(Self {
            params,
            generators,
            logicals,
            repair: RepairReport::default(),
            schema_version,
            provenance,
            correction_probability: None,
        })
    }

    pub(crate) fn with_repair_report(mut self, repair: RepairReport) -> Self {
        self.repair = repair;
        self
    }

    /// Code parameters.
    pub fn params(&self) -> CodeParameters {
        self.params
    }

    /// `(n - k) x 2n` stabilizer generator matrix.
    pub fn generators(&self) -> &SymplecticMatrix {
        &self.generators
    }

    /// `2n x 2k` logical operator matrix.
    pub fn logicals(&self) -> &SymplecticMatrix {
        &self.logicals
    }

    /// Logical X_j as a `2n`-bit symplectic vector.
    pub fn logical_x(&self, j: usize) -> Result<Vec<bool>, QeccError> {
        self.logical_column(j)
    }

    /// Logical Z_j as a `2n`-bit symplectic vector.
    pub fn logical_z(&self, j: usize) -> Result<Vec<bool>, QeccError> {
        self.logical_column(self.params.k() + j)
    }

    fn logical_column(&self, col: usize) -> Result<Vec<bool>, QeccError> {
        if col >= self.logicals.length() {
            let info = ErrorInfo::new("logical-out-of-range", "no such logical operator")
                .with_context("column", col.to_string())
                .with_context("k", self.params.k().to_string());
            return Err(QeccError::Matrix(info));
        }
        self.logicals.column(col)
    }

    /// Counters of the commutation repair that produced the code.
    pub fn repair_report(&self) -> RepairReport {
        self.repair
    }

    /// Schema version used when serializing the code.
    pub fn schema_version(&self) -> SchemaVersion {
        self.schema_version
    }

    /// Provenance payload stored with the code.
    pub fn provenance(&self) -> &RunProvenance {
        &self.provenance
    }

    /// Reserved error-correction probability. Construction never computes
    /// it, so this is always `None`.
    pub fn correction_probability(&self) -> Option<f64> {
        self.correction_probability
    }

    /// Canonical structural hash of the code.
    pub fn canonical_hash(&self) -> String {
        hash::canonical_code_hash(self)
    }

    /// Hands both matrices to the caller.
    pub fn into_parts(self) -> (SymplecticMatrix, SymplecticMatrix) {
        (self.generators, self.logicals)
    }
}

/// Draws a code for `params` with default options. The source is opaque, so
/// the recorded provenance carries no seed.
pub fn construct<R: RngCore + ?Sized>(
    params: CodeParameters,
    rng: &mut R,
) -> Result<RandomCode, QeccError> {
    construct_with(
        params,
        ConstructionOptions::default(),
        rng,
        RunProvenance::new(None),
    )
}

/// Draws a code for `params`: plan the blocks, fill them from a pre-sized
/// arena, repair commutation, derive the logical operators and, when
/// requested, validate the result.
pub fn construct_with<R: RngCore + ?Sized>(
    params: CodeParameters,
    options: ConstructionOptions,
    rng: &mut R,
    provenance: RunProvenance,
) -> Result<RandomCode, QeccError> {
    let layout = BlockLayout::plan(params);
    let mut arena = RandomArena::new(layout.arena_bytes(options.entropy), rng);

    let mut generators = SymplecticMatrix::new(params.stabilizers(), 2 * params.n());
    fill::place_identities(&layout, &mut generators)?;
    fill::fill_random_blocks(&layout, &mut arena, options.entropy, &mut generators)?;
    debug!(
        "filled {} from {} arena bytes ({} unused)",
        params.label(),
        arena.total(),
        arena.remaining()
    );
    let report = repair::repair_commutation(&layout, &mut generators)?;
    let logicals = logical::derive_logicals(&layout, &generators)?;

    let code = RandomCode::from_parts(
        params,
        generators,
        logicals,
        SchemaVersion::default(),
        provenance,
    )?
    .with_repair_report(report);
    if options.validate {
        validate::validate(&code)?;
    }
    info!(
        "constructed {} code (seed {:?}, {} repair flips)",
        params.label(),
        code.provenance().seed,
        report.d_flips + report.b_flips
    );
    Ok(code)
}
