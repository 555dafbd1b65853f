use qecc_core::SymplecticMatrix;

/// Rank of the rows of `matrix` over GF(2).
pub fn gf2_rank(matrix: &SymplecticMatrix) -> usize {
    let width = matrix.length().div_ceil(64);
    let mut rows: Vec<Vec<u64>> = matrix
        .words()
        .chunks(width.max(1))
        .take(matrix.height())
        .map(|chunk| chunk.to_vec())
        .collect();
    if width == 0 {
        return 0;
    }

    let mut rank = 0;
    for col in 0..matrix.length() {
        if rank == rows.len() {
            break;
        }
        let bucket = col / 64;
        let offset = col % 64;
        let pivot = rows
            .iter()
            .enumerate()
            .skip(rank)
            .find(|(_, row)| (row[bucket] >> offset) & 1 == 1)
            .map(|(idx, _)| idx);
        let Some(pivot) = pivot else {
            continue;
        };
        rows.swap(rank, pivot);
        let pivot_row = rows[rank].clone();
        for (idx, row) in rows.iter_mut().enumerate() {
            if idx != rank && (row[bucket] >> offset) & 1 == 1 {
                for (word, pivot_word) in row.iter_mut().zip(&pivot_row) {
                    *word ^= pivot_word;
                }
            }
        }
        rank += 1;
    }
    rank
}
