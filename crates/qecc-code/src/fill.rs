use log::trace;
use qecc_core::{QeccError, SymplecticMatrix};
use serde::{Deserialize, Serialize};

use crate::arena::{BitSlice, RandomArena};
use crate::layout::{Block, BlockLayout, BlockRole};

/// How the two repaired blocks draw their random bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntropyPolicy {
    /// B and D read the same arena slice, sized to the larger of the two.
    #[default]
    SharedRepairDraw,
    /// B and D each consume their own slice.
    Independent,
}

/// Writes the X and Z identity diagonals.
pub fn place_identities(
    layout: &BlockLayout,
    generators: &mut SymplecticMatrix,
) -> Result<(), QeccError> {
    for role in [BlockRole::XIdentity, BlockRole::ZIdentity] {
        let block = layout.block(role);
        for offset in 0..block.height() {
            generators.set(block.y0 + offset, block.x0 + offset, true)?;
        }
    }
    Ok(())
}

/// Copies bits into `block`, cell `(row, col)` of the region taking bit
/// `row * width + col` of `bits`.
pub fn fill_block(
    block: &Block,
    bits: &BitSlice<'_>,
    generators: &mut SymplecticMatrix,
) -> Result<(), QeccError> {
    let width = block.width();
    for row in 0..block.height() {
        for col in 0..width {
            let bit = bits.bit(row * width + col)?;
            generators.set(block.y0 + row, block.x0 + col, bit)?;
        }
    }
    Ok(())
}

/// Fills A1, A2, C, E and then B and D from `arena`, clearing the diagonal of
/// E afterwards.
pub fn fill_random_blocks(
    layout: &BlockLayout,
    arena: &mut RandomArena,
    policy: EntropyPolicy,
    generators: &mut SymplecticMatrix,
) -> Result<(), QeccError> {
    for role in [BlockRole::A1, BlockRole::A2, BlockRole::C, BlockRole::E] {
        let block = layout.block(role);
        let bits = arena.consume_bits(block.cells())?;
        fill_block(&block, &bits, generators)?;
        trace!("filled {:?} with {} cells", role, block.cells());
    }
    clear_e_diagonal(layout, generators)?;

    let b = layout.block(BlockRole::B);
    let d = layout.block(BlockRole::D);
    match policy {
        EntropyPolicy::SharedRepairDraw => {
            let bits = arena.consume_bits(b.cells().max(d.cells()))?;
            fill_block(&b, &bits, generators)?;
            fill_block(&d, &bits, generators)?;
        }
        EntropyPolicy::Independent => {
            let bits = arena.consume_bits(b.cells())?;
            fill_block(&b, &bits, generators)?;
            let bits = arena.consume_bits(d.cells())?;
            fill_block(&d, &bits, generators)?;
        }
    }
    trace!(
        "filled B and D ({:?}), arena {}/{} bytes used",
        policy,
        arena.consumed(),
        arena.total()
    );
    Ok(())
}

fn clear_e_diagonal(
    layout: &BlockLayout,
    generators: &mut SymplecticMatrix,
) -> Result<(), QeccError> {
    let e = layout.block(BlockRole::E);
    for offset in 0..e.width().min(e.height()) {
        generators.set(e.y0 + offset, e.x0 + offset, false)?;
    }
    Ok(())
}
