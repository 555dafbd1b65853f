use serde::{Deserialize, Serialize};

use crate::arena::request_bytes;
use crate::fill::EntropyPolicy;
use crate::params::CodeParameters;

/// Named structural region of the generator matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BlockRole {
    /// Identity on the X columns of the first `r` rows.
    XIdentity,
    /// Identity on the Z columns of the remaining `n - k - r` rows.
    ZIdentity,
    /// Random X block right of the X identity.
    A1,
    /// Random X block over the last `k` qubits.
    A2,
    /// Z block of the first `r` rows, repaired for mutual commutation.
    B,
    /// Random Z block over the last `k` qubits of the first `r` rows.
    C,
    /// Z block of the lower rows, repaired against the first `r` rows.
    D,
    /// Random Z block over the last `k` qubits of the lower rows.
    E,
}

/// Half-open rectangle `[y0, y1) x [x0, x1)` of the generator matrix, `y`
/// indexing rows and `x` columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Region this rectangle belongs to.
    pub role: BlockRole,
    /// First column.
    pub x0: usize,
    /// First row.
    pub y0: usize,
    /// One past the last column.
    pub x1: usize,
    /// One past the last row.
    pub y1: usize,
}

impl Block {
    fn new(role: BlockRole, rows: (usize, usize), cols: (usize, usize)) -> Self {
        Self {
            role,
            x0: cols.0,
            y0: rows.0,
            x1: cols.1,
            y1: rows.1,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.x1 - self.x0
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.y1 - self.y0
    }

    /// Number of cells.
    pub fn cells(&self) -> usize {
        self.width() * self.height()
    }

    /// Whether the block has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells() == 0
    }

    /// Arena bytes requested when this block is filled on its own.
    pub fn request_bytes(&self) -> usize {
        request_bytes(self.cells())
    }

    /// Whether the absolute cell `(row, col)` lies inside the block.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.y0..self.y1).contains(&row) && (self.x0..self.x1).contains(&col)
    }
}

/// Coordinates of all eight regions for one `(n, k, r)`.
///
/// With `m = n - k` the generator matrix reads
///
/// ```text
///            X: [0,r)  [r,m)  [m,n) | Z: [n,n+r)  [n+r,2n-k)  [2n-k,2n)
/// [0,r)         I      A1     A2    |    B        0           C
/// [r,m)         0      0      0     |    D        I           E
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLayout {
    params: CodeParameters,
    x_identity: Block,
    z_identity: Block,
    a1: Block,
    a2: Block,
    b: Block,
    c: Block,
    d: Block,
    e: Block,
}

impl BlockLayout {
    /// Computes the block rectangles for `params`.
    pub fn plan(params: CodeParameters) -> Self {
        let n = params.n();
        let k = params.k();
        let r = params.r();
        let m = params.stabilizers();
        let top = (0, r);
        let lower = (r, m);
        Self {
            params,
            x_identity: Block::new(BlockRole::XIdentity, top, (0, r)),
            z_identity: Block::new(BlockRole::ZIdentity, lower, (n + r, 2 * n - k)),
            a1: Block::new(BlockRole::A1, top, (r, m)),
            a2: Block::new(BlockRole::A2, top, (m, n)),
            b: Block::new(BlockRole::B, top, (n, n + r)),
            c: Block::new(BlockRole::C, top, (2 * n - k, 2 * n)),
            d: Block::new(BlockRole::D, lower, (n, n + r)),
            e: Block::new(BlockRole::E, lower, (2 * n - k, 2 * n)),
        }
    }

    /// Parameters the layout was planned for.
    pub fn params(&self) -> CodeParameters {
        self.params
    }

    /// Rectangle of `role`.
    pub fn block(&self, role: BlockRole) -> Block {
        match role {
            BlockRole::XIdentity => self.x_identity,
            BlockRole::ZIdentity => self.z_identity,
            BlockRole::A1 => self.a1,
            BlockRole::A2 => self.a2,
            BlockRole::B => self.b,
            BlockRole::C => self.c,
            BlockRole::D => self.d,
            BlockRole::E => self.e,
        }
    }

    /// All eight blocks, identities first.
    pub fn blocks(&self) -> [Block; 8] {
        [
            self.x_identity,
            self.z_identity,
            self.a1,
            self.a2,
            self.b,
            self.c,
            self.d,
            self.e,
        ]
    }

    /// Random blocks in fill order.
    pub fn random_blocks(&self) -> [Block; 6] {
        [self.a1, self.a2, self.c, self.e, self.b, self.d]
    }

    /// Total arena bytes consumed by a fill under `policy`, slack included.
    pub fn arena_bytes(&self, policy: EntropyPolicy) -> usize {
        let independent: usize = [self.a1, self.a2, self.c, self.e]
            .iter()
            .map(Block::request_bytes)
            .sum();
        let repair = match policy {
            EntropyPolicy::SharedRepairDraw => {
                request_bytes(self.b.cells().max(self.d.cells()))
            }
            EntropyPolicy::Independent => self.b.request_bytes() + self.d.request_bytes(),
        };
        independent + repair
    }
}
