use qecc_core::{symplectic_product, ErrorInfo, QeccError};

use crate::construct::RandomCode;

fn check_width(code: &RandomCode, error: &[bool]) -> Result<(), QeccError> {
    let expected = 2 * code.params().n();
    if error.len() != expected {
        let info = ErrorInfo::new(
            "error-length-mismatch",
            "Pauli error width does not match the code",
        )
        .with_context("expected", expected.to_string())
        .with_context("actual", error.len().to_string());
        return Err(QeccError::Matrix(info));
    }
    Ok(())
}

/// Syndrome of a Pauli `error` given in symplectic form: bit `i` is set when
/// the error anticommutes with stabilizer generator `i`.
pub fn syndrome(code: &RandomCode, error: &[bool]) -> Result<Vec<bool>, QeccError> {
    check_width(code, error)?;
    let generators = code.generators();
    (0..generators.height())
        .map(|row| symplectic_product(&generators.row(row)?, error))
        .collect()
}

/// Logical operators the `error` anticommutes with: bit `j` refers to column
/// `j` of the logical table (X_j for `j < k`, Z_{j-k} otherwise).
pub fn logical_action(code: &RandomCode, error: &[bool]) -> Result<Vec<bool>, QeccError> {
    check_width(code, error)?;
    let logicals = code.logicals();
    (0..logicals.length())
        .map(|col| symplectic_product(&logicals.column(col)?, error))
        .collect()
}
