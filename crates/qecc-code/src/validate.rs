//! Brute-force commutation checks used as a regression oracle for the
//! constructor. Every check reports the first offending pair as a
//! [`QeccError::Validation`].

use qecc_core::{symplectic_product, ErrorInfo, QeccError, SymplecticMatrix};

use crate::construct::RandomCode;
use crate::rank::gf2_rank;

/// Checks that every pair of generator rows commutes.
pub fn check_stabilizers(generators: &SymplecticMatrix) -> Result<(), QeccError> {
    let rows = (0..generators.height())
        .map(|row| generators.row(row))
        .collect::<Result<Vec<_>, _>>()?;
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            if symplectic_product(&rows[i], &rows[j])? {
                let info = ErrorInfo::new("stabilizer-anticommute", "stabilizer rows anticommute")
                    .with_context("row_a", i.to_string())
                    .with_context("row_b", j.to_string());
                return Err(QeccError::Validation(info));
            }
        }
    }
    Ok(())
}

/// Checks that every generator row commutes with every logical column.
pub fn check_logicals(
    generators: &SymplecticMatrix,
    logicals: &SymplecticMatrix,
) -> Result<(), QeccError> {
    if logicals.height() != generators.length() {
        let info = ErrorInfo::new("shape-mismatch", "logical columns do not match generator width")
            .with_context("generator_length", generators.length().to_string())
            .with_context("logical_height", logicals.height().to_string());
        return Err(QeccError::Matrix(info));
    }
    let columns = logical_columns(logicals)?;
    for row in 0..generators.height() {
        let stabilizer = generators.row(row)?;
        for (col, logical) in columns.iter().enumerate() {
            if symplectic_product(&stabilizer, logical)? {
                let info = ErrorInfo::new(
                    "logical-anticommute",
                    "logical operator anticommutes with a stabilizer",
                )
                .with_context("stabilizer", row.to_string())
                .with_context("logical", col.to_string());
                return Err(QeccError::Validation(info));
            }
        }
    }
    Ok(())
}

/// Checks the canonical relations: X_i and Z_i anticommute, every other pair
/// of logical operators commutes.
pub fn check_logical_algebra(logicals: &SymplecticMatrix) -> Result<(), QeccError> {
    let columns = logical_columns(logicals)?;
    let k = columns.len() / 2;
    for a in 0..columns.len() {
        for b in (a + 1)..columns.len() {
            let expected = a < k && b == a + k;
            if symplectic_product(&columns[a], &columns[b])? != expected {
                let info = ErrorInfo::new(
                    "logical-algebra-broken",
                    "logical operators violate canonical commutation",
                )
                .with_context("logical_a", a.to_string())
                .with_context("logical_b", b.to_string())
                .with_context("expected_anticommute", expected.to_string());
                return Err(QeccError::Validation(info));
            }
        }
    }
    Ok(())
}

/// Checks that the generator rows are linearly independent.
pub fn check_independence(generators: &SymplecticMatrix) -> Result<(), QeccError> {
    let rank = gf2_rank(generators);
    if rank != generators.height() {
        let info = ErrorInfo::new("rank-deficient", "stabilizer generators are dependent")
            .with_context("rank", rank.to_string())
            .with_context("rows", generators.height().to_string());
        return Err(QeccError::Validation(info));
    }
    Ok(())
}

/// Runs every check against a constructed code.
pub fn validate(code: &RandomCode) -> Result<(), QeccError> {
    check_stabilizers(code.generators())?;
    check_logicals(code.generators(), code.logicals())?;
    check_logical_algebra(code.logicals())?;
    check_independence(code.generators())
}

fn logical_columns(logicals: &SymplecticMatrix) -> Result<Vec<Vec<bool>>, QeccError> {
    (0..logicals.length())
        .map(|col| logicals.column(col))
        .collect()
}
