use log::warn;
use qecc_core::{ErrorInfo, QeccError, RunProvenance, SchemaVersion, SymplecticMatrix};
use serde::{Deserialize, Serialize};

use crate::construct::RandomCode;
use crate::params::CodeParameters;
use crate::repair::RepairReport;

#[derive(Debug, Serialize, Deserialize)]
struct SerializableCode {
    schema_version: SchemaVersion,
    provenance: RunProvenance,
    params: CodeParameters,
    generators: Vec<String>,
    logicals: Vec<String>,
    #[serde(default)]
    repair: RepairReport,
    correction_probability: Option<f64>,
}

fn to_serializable(code: &RandomCode) -> SerializableCode {
    let mut provenance = code.provenance().clone();
    provenance.code_hash = code.canonical_hash();
    SerializableCode {
        schema_version: code.schema_version(),
        provenance,
        params: code.params(),
        generators: code.generators().to_bit_strings(),
        logicals: code.logicals().to_bit_strings(),
        repair: code.repair_report(),
        correction_probability: code.correction_probability(),
    }
}

fn from_serializable(payload: SerializableCode) -> Result<RandomCode, QeccError> {
    let params = payload.params;
    let generators = SymplecticMatrix::from_bit_strings(2 * params.n(), &payload.generators)?;
    let logicals = SymplecticMatrix::from_bit_strings(2 * params.k(), &payload.logicals)?;
    if payload.correction_probability.is_some() {
        warn!("ignoring stored correction probability; it is not computed by construction");
    }
    let expected_hash = payload.provenance.code_hash.clone();
    if expected_hash.is_empty() {
        let info = ErrorInfo::new("hash-missing", "stored code carries no canonical hash")
            .with_context("params", params.label())
            .with_hint("re-export the code with to_json or to_bytes");
        return Err(QeccError::Serde(info));
    }
    let code = RandomCode::from_parts(
        params,
        generators,
        logicals,
        payload.schema_version,
        payload.provenance,
    )?
    .with_repair_report(payload.repair);
    if expected_hash != code.canonical_hash() {
        let info = ErrorInfo::new("hash-mismatch", "stored code hash does not match contents")
            .with_context("stored", expected_hash)
            .with_context("computed", code.canonical_hash());
        return Err(QeccError::Serde(info));
    }
    Ok(code)
}

/// Serializes a code to a pretty-printed JSON string.
pub fn to_json(code: &RandomCode) -> Result<String, QeccError> {
    serde_json::to_string_pretty(&to_serializable(code))
        .map_err(|err| QeccError::Serde(ErrorInfo::new("json-serialize", err.to_string())))
}

/// Restores a code from a JSON string. The stored hash is mandatory and must
/// match the contents.
pub fn from_json(json: &str) -> Result<RandomCode, QeccError> {
    let payload: SerializableCode = serde_json::from_str(json)
        .map_err(|err| QeccError::Serde(ErrorInfo::new("json-deserialize", err.to_string())))?;
    from_serializable(payload)
}

/// Serializes a code into a compact binary representation.
pub fn to_bytes(code: &RandomCode) -> Result<Vec<u8>, QeccError> {
    bincode::serialize(&to_serializable(code))
        .map_err(|err| QeccError::Serde(ErrorInfo::new("binary-serialize", err.to_string())))
}

/// Restores a code from its binary representation.
pub fn from_bytes(bytes: &[u8]) -> Result<RandomCode, QeccError> {
    let payload: SerializableCode = bincode::deserialize(bytes)
        .map_err(|err| QeccError::Serde(ErrorInfo::new("binary-deserialize", err.to_string())))?;
    from_serializable(payload)
}
