use std::fmt;
use std::str::FromStr;

use qecc_core::{ErrorInfo, QeccError, SymplecticMatrix};

/// Single-qubit Pauli operator, phases ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pauli {
    /// Identity.
    I,
    /// Bit flip.
    X,
    /// Both flips.
    Y,
    /// Phase flip.
    Z,
}

impl Pauli {
    fn from_bits(x: bool, z: bool) -> Self {
        match (x, z) {
            (false, false) => Pauli::I,
            (true, false) => Pauli::X,
            (true, true) => Pauli::Y,
            (false, true) => Pauli::Z,
        }
    }

    fn bits(self) -> (bool, bool) {
        match self {
            Pauli::I => (false, false),
            Pauli::X => (true, false),
            Pauli::Y => (true, true),
            Pauli::Z => (false, true),
        }
    }

    fn symbol(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }
}

/// Tensor product of single-qubit Paulis, qubit 0 first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PauliString(Vec<Pauli>);

impl PauliString {
    /// Decodes a `2n`-bit symplectic vector.
    pub fn from_symplectic(bits: &[bool]) -> Result<Self, QeccError> {
        if bits.len() % 2 != 0 {
            let info = ErrorInfo::new("odd-width", "symplectic vectors must have even width")
                .with_context("length", bits.len().to_string());
            return Err(QeccError::Matrix(info));
        }
        let n = bits.len() / 2;
        Ok(Self(
            (0..n)
                .map(|q| Pauli::from_bits(bits[q], bits[n + q]))
                .collect(),
        ))
    }

    /// Row `row` of `matrix` as a Pauli string.
    pub fn from_row(matrix: &SymplecticMatrix, row: usize) -> Result<Self, QeccError> {
        Self::from_symplectic(&matrix.row(row)?)
    }

    /// Column `col` of `matrix` as a Pauli string.
    pub fn from_column(matrix: &SymplecticMatrix, col: usize) -> Result<Self, QeccError> {
        Self::from_symplectic(&matrix.column(col)?)
    }

    /// Encodes the string as a `2n`-bit symplectic vector.
    pub fn to_symplectic(&self) -> Vec<bool> {
        let n = self.0.len();
        let mut bits = vec![false; 2 * n];
        for (q, pauli) in self.0.iter().enumerate() {
            let (x, z) = pauli.bits();
            bits[q] = x;
            bits[n + q] = z;
        }
        bits
    }

    /// Number of qubits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string acts on no qubits.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of non-identity factors.
    pub fn weight(&self) -> usize {
        self.0.iter().filter(|p| **p != Pauli::I).count()
    }

    /// Single-qubit factors.
    pub fn paulis(&self) -> &[Pauli] {
        &self.0
    }
}

impl fmt::Display for PauliString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pauli in &self.0 {
            write!(f, "{}", pauli.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for PauliString {
    type Err = QeccError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .chars()
            .enumerate()
            .map(|(idx, ch)| match ch.to_ascii_uppercase() {
                'I' | '_' => Ok(Pauli::I),
                'X' => Ok(Pauli::X),
                'Y' => Ok(Pauli::Y),
                'Z' => Ok(Pauli::Z),
                other => Err(QeccError::Matrix(
                    ErrorInfo::new("invalid-pauli", "unknown Pauli symbol")
                        .with_context("position", idx.to_string())
                        .with_context("symbol", other.to_string()),
                )),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(PauliString)
    }
}
