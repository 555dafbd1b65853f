use qecc_core::SymplecticMatrix;
use sha2::{Digest, Sha256};

use crate::construct::RandomCode;

fn update_matrix(hasher: &mut Sha256, matrix: &SymplecticMatrix) {
    hasher.update((matrix.height() as u64).to_le_bytes());
    hasher.update((matrix.length() as u64).to_le_bytes());
    for &word in matrix.words() {
        hasher.update(word.to_le_bytes());
    }
}

/// Computes the canonical structural hash for a constructed code.
pub fn canonical_code_hash(code: &RandomCode) -> String {
    let mut hasher = Sha256::new();
    let version = code.schema_version();
    hasher.update((version.major as u64).to_le_bytes());
    hasher.update((version.minor as u64).to_le_bytes());
    hasher.update((version.patch as u64).to_le_bytes());
    let params = code.params();
    hasher.update((params.n() as u64).to_le_bytes());
    hasher.update((params.k() as u64).to_le_bytes());
    hasher.update((params.r() as u64).to_le_bytes());

    update_matrix(&mut hasher, code.generators());
    update_matrix(&mut hasher, code.logicals());

    let digest = hasher.finalize();
    digest
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<String>()
}
