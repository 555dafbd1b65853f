//! Owned binary symplectic matrices over GF(2).
//!
//! A row of width `2n` encodes an `n`-qubit Pauli operator: columns `[0, n)`
//! hold the X-part and `[n, 2n)` the Z-part. Bits are packed row-major into
//! `u64` words, column `c` of a row living in word `c / 64` at bit `c % 64`.
//! Every accessor is bounds checked.

use std::fmt;

use crate::errors::{ErrorInfo, QeccError};

const WORD_BITS: usize = 64;

/// Dense row-major bit matrix used for generator and logical operator tables.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SymplecticMatrix {
    height: usize,
    length: usize,
    words_per_row: usize,
    words: Vec<u64>,
}

impl fmt::Debug for SymplecticMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymplecticMatrix")
            .field("height", &self.height)
            .field("length", &self.length)
            .field("rows", &self.to_bit_strings())
            .finish()
    }
}

fn out_of_range(axis: &str, index: usize, bound: usize) -> QeccError {
    QeccError::Matrix(
        ErrorInfo::new("index-out-of-range", "matrix index outside allocated shape")
            .with_context("axis", axis)
            .with_context("index", index.to_string())
            .with_context("bound", bound.to_string()),
    )
}

fn shape_mismatch(expected: usize, actual: usize) -> QeccError {
    QeccError::Matrix(
        ErrorInfo::new("shape-mismatch", "operand widths differ")
            .with_context("expected", expected.to_string())
            .with_context("actual", actual.to_string()),
    )
}

impl SymplecticMatrix {
    /// Creates an all-zero matrix with `height` rows and `length` columns.
    pub fn new(height: usize, length: usize) -> Self {
        let words_per_row = length.div_ceil(WORD_BITS);
        Self {
            height,
            length,
            words_per_row,
            words: vec![0; height * words_per_row],
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of qubits encoded by one row (half the row width).
    pub fn qubits(&self) -> usize {
        self.length / 2
    }

    fn check(&self, row: usize, col: usize) -> Result<(), QeccError> {
        if row >= self.height {
            return Err(out_of_range("row", row, self.height));
        }
        if col >= self.length {
            return Err(out_of_range("column", col, self.length));
        }
        Ok(())
    }

    fn locate(&self, row: usize, col: usize) -> (usize, u64) {
        (
            row * self.words_per_row + col / WORD_BITS,
            1u64 << (col % WORD_BITS),
        )
    }

    /// Reads the bit at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, QeccError> {
        self.check(row, col)?;
        let (word, mask) = self.locate(row, col);
        Ok(self.words[word] & mask != 0)
    }

    /// Writes the bit at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, bit: bool) -> Result<(), QeccError> {
        self.check(row, col)?;
        let (word, mask) = self.locate(row, col);
        if bit {
            self.words[word] |= mask;
        } else {
            self.words[word] &= !mask;
        }
        Ok(())
    }

    /// Toggles the bit at `(row, col)` and returns its new value.
    pub fn flip(&mut self, row: usize, col: usize) -> Result<bool, QeccError> {
        self.check(row, col)?;
        let (word, mask) = self.locate(row, col);
        self.words[word] ^= mask;
        Ok(self.words[word] & mask != 0)
    }

    /// Packed words backing `row`.
    pub fn row_words(&self, row: usize) -> Result<&[u64], QeccError> {
        if row >= self.height {
            return Err(out_of_range("row", row, self.height));
        }
        let start = row * self.words_per_row;
        Ok(&self.words[start..start + self.words_per_row])
    }

    /// All packed words in row-major order.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Overwrites row `dst_row` with row `src_row` of `src`.
    pub fn copy_row_from(
        &mut self,
        dst_row: usize,
        src: &SymplecticMatrix,
        src_row: usize,
    ) -> Result<(), QeccError> {
        if src.length != self.length {
            return Err(shape_mismatch(self.length, src.length));
        }
        if dst_row >= self.height {
            return Err(out_of_range("row", dst_row, self.height));
        }
        let source = src.row_words(src_row)?.to_vec();
        let start = dst_row * self.words_per_row;
        self.words[start..start + self.words_per_row].copy_from_slice(&source);
        Ok(())
    }

    /// Returns `row` as a bit vector.
    pub fn row(&self, row: usize) -> Result<Vec<bool>, QeccError> {
        if row >= self.height {
            return Err(out_of_range("row", row, self.height));
        }
        (0..self.length).map(|col| self.get(row, col)).collect()
    }

    /// Returns column `col` as a bit vector.
    pub fn column(&self, col: usize) -> Result<Vec<bool>, QeccError> {
        if col >= self.length {
            return Err(out_of_range("column", col, self.length));
        }
        (0..self.height).map(|row| self.get(row, col)).collect()
    }

    /// Serializes `row` to an integer index, column 0 being the most
    /// significant bit. Rows wider than 64 bits cannot be indexed.
    pub fn row_index(&self, row: usize) -> Result<u64, QeccError> {
        if self.length > WORD_BITS {
            let info = ErrorInfo::new("row-too-wide", "row does not fit a 64-bit index")
                .with_context("length", self.length.to_string());
            return Err(QeccError::Matrix(info));
        }
        let bits = self.row(row)?;
        Ok(bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit)))
    }

    /// Number of qubits on which the Pauli operator of `row` acts non-trivially.
    pub fn row_weight(&self, row: usize) -> Result<usize, QeccError> {
        let bits = self.row(row)?;
        let n = self.qubits();
        Ok((0..n).filter(|&q| bits[q] || bits[n + q]).count())
    }

    /// Symplectic inner product of rows `a` and `b`.
    pub fn row_product(&self, a: usize, b: usize) -> Result<bool, QeccError> {
        symplectic_product(&self.row(a)?, &self.row(b)?)
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> SymplecticMatrix {
        let mut out = SymplecticMatrix::new(self.length, self.height);
        for row in 0..self.height {
            for col in 0..self.length {
                let (word, mask) = self.locate(row, col);
                if self.words[word] & mask != 0 {
                    let (dst, dst_mask) = out.locate(col, row);
                    out.words[dst] |= dst_mask;
                }
            }
        }
        out
    }

    /// Stacks the rows of `other` below the rows of `self`.
    pub fn stack(&self, other: &SymplecticMatrix) -> Result<SymplecticMatrix, QeccError> {
        if other.length != self.length {
            return Err(shape_mismatch(self.length, other.length));
        }
        let mut words = self.words.clone();
        words.extend_from_slice(&other.words);
        Ok(SymplecticMatrix {
            height: self.height + other.height,
            length: self.length,
            words_per_row: self.words_per_row,
            words,
        })
    }

    /// Renders every row as a string of `0`/`1` characters.
    pub fn to_bit_strings(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                (0..self.length)
                    .map(|col| {
                        let (word, mask) = self.locate(row, col);
                        if self.words[word] & mask != 0 {
                            '1'
                        } else {
                            '0'
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Parses rows produced by [`SymplecticMatrix::to_bit_strings`].
    pub fn from_bit_strings(length: usize, rows: &[String]) -> Result<Self, QeccError> {
        let mut matrix = SymplecticMatrix::new(rows.len(), length);
        for (row, text) in rows.iter().enumerate() {
            if text.chars().count() != length {
                return Err(shape_mismatch(length, text.chars().count()));
            }
            for (col, ch) in text.chars().enumerate() {
                match ch {
                    '0' => {}
                    '1' => matrix.set(row, col, true)?,
                    other => {
                        let info = ErrorInfo::new("invalid-bit", "row strings may only hold 0 or 1")
                            .with_context("row", row.to_string())
                            .with_context("character", other.to_string());
                        return Err(QeccError::Matrix(info));
                    }
                }
            }
        }
        Ok(matrix)
    }
}

/// Symplectic inner product `Σ_q a_X[q]·b_Z[q] + a_Z[q]·b_X[q] mod 2`.
///
/// Returns `true` when the two Pauli operators anticommute.
pub fn symplectic_product(a: &[bool], b: &[bool]) -> Result<bool, QeccError> {
    if a.len() != b.len() {
        return Err(shape_mismatch(a.len(), b.len()));
    }
    if a.len() % 2 != 0 {
        let info = ErrorInfo::new("odd-width", "symplectic vectors must have even width")
            .with_context("length", a.len().to_string());
        return Err(QeccError::Matrix(info));
    }
    let n = a.len() / 2;
    let mut parity = false;
    for q in 0..n {
        parity ^= (a[q] && b[n + q]) ^ (a[n + q] && b[q]);
    }
    Ok(parity)
}
