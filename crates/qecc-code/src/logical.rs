use qecc_core::{QeccError, SymplecticMatrix};

use crate::layout::{BlockLayout, BlockRole};

/// Builds the `2n x 2k` logical operator table from a repaired generator
/// matrix. Column `j < k` is logical X_j, column `k + j` is logical Z_j; rows
/// `[0, n)` hold the X-part and `[n, 2n)` the Z-part.
///
/// * X_j: column `j` of E on qubits `[r, n - k)`, a single X on qubit
///   `n - k + j`, and column `j` of C on the Z-part of qubits `[0, r)`.
/// * Z_j: column `j` of A2 on the Z-part of qubits `[0, r)` and a single Z on
///   qubit `n - k + j`.
pub fn derive_logicals(
    layout: &BlockLayout,
    generators: &SymplecticMatrix,
) -> Result<SymplecticMatrix, QeccError> {
    let params = layout.params();
    let n = params.n();
    let k = params.k();
    let m = params.stabilizers();
    let a2 = layout.block(BlockRole::A2);
    let c = layout.block(BlockRole::C);
    let e = layout.block(BlockRole::E);

    let mut logicals = SymplecticMatrix::new(2 * n, 2 * k);
    for j in 0..k {
        for row in e.y0..e.y1 {
            let bit = generators.get(row, e.x0 + j)?;
            logicals.set(row, j, bit)?;
        }
        logicals.set(m + j, j, true)?;
        for row in c.y0..c.y1 {
            let bit = generators.get(row, c.x0 + j)?;
            logicals.set(n + row, j, bit)?;
        }

        for row in a2.y0..a2.y1 {
            let bit = generators.get(row, a2.x0 + j)?;
            logicals.set(n + row, k + j, bit)?;
        }
        logicals.set(2 * n - k + j, k + j, true)?;
    }
    Ok(logicals)
}
