use log::debug;
use qecc_core::{QeccError, SymplecticMatrix};
use serde::{Deserialize, Serialize};

use crate::layout::{BlockLayout, BlockRole};

/// Counters describing one repair pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepairReport {
    /// Row pairs whose commutator was evaluated.
    pub pairs_checked: usize,
    /// Bits flipped inside D.
    pub d_flips: usize,
    /// Bits flipped inside B.
    pub b_flips: usize,
}

/// Makes every pair of generator rows commute.
///
/// Only two families of pairs can anticommute once the blocks are filled:
/// an upper row `j < r` against a lower row `i >= r`, and two upper rows. For
/// the first family the cell `D[i][j]` (row `i`, column `n + j`) meets the X
/// identity of row `j` and appears in no other commutator, so flipping it
/// toggles exactly that pair. For two upper rows `i < j` the cell `B[i][j]`
/// plays the same role.
pub fn repair_commutation(
    layout: &BlockLayout,
    generators: &mut SymplecticMatrix,
) -> Result<RepairReport, QeccError> {
    let mut report = RepairReport::default();
    let n = layout.params().n();
    let upper = layout.block(BlockRole::XIdentity);
    let lower = layout.block(BlockRole::ZIdentity);

    for i in lower.y0..lower.y1 {
        for j in upper.y0..upper.y1 {
            report.pairs_checked += 1;
            if generators.row_product(i, j)? {
                generators.flip(i, n + j)?;
                report.d_flips += 1;
            }
        }
    }

    for i in upper.y0..upper.y1 {
        for j in (i + 1)..upper.y1 {
            report.pairs_checked += 1;
            if generators.row_product(i, j)? {
                generators.flip(i, n + j)?;
                report.b_flips += 1;
            }
        }
    }

    debug!(
        "commutation repair on {}: {} pairs, {} D flips, {} B flips",
        layout.params().label(),
        report.pairs_checked,
        report.d_flips,
        report.b_flips
    );
    Ok(report)
}
