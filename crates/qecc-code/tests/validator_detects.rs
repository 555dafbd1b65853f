use qecc_code::validate::{check_independence, check_logical_algebra, check_logicals, check_stabilizers};
use qecc_code::{CodeParameters, RandomCode};
use qecc_core::{QeccError, RngHandle, SymplecticMatrix};

fn code(n: usize, k: usize, r: usize) -> RandomCode {
    let params = CodeParameters::new(n, k, r).unwrap();
    RandomCode::generate(params, &mut RngHandle::from_seed(2024)).unwrap()
}

fn validation_code(err: QeccError) -> String {
    match err {
        QeccError::Validation(info) => info.code,
        other => panic!("unexpected error variant: {other:?}"),
    }
}

#[test]
fn flipped_d_bit_breaks_stabilizers() {
    let (mut generators, _) = code(6, 1, 3).into_parts();
    // Row 3 meets row 0 only through column n + 0.
    generators.flip(3, 6).unwrap();
    let err = check_stabilizers(&generators).unwrap_err();
    assert_eq!(validation_code(err.clone()), "stabilizer-anticommute");
    assert_eq!(err.info().context.get("row_a").map(String::as_str), Some("0"));
    assert_eq!(err.info().context.get("row_b").map(String::as_str), Some("3"));
}

#[test]
fn corrupted_logical_is_reported() {
    let (generators, mut logicals) = code(6, 1, 3).into_parts();
    // Z support on qubit 0 anticommutes with the X identity of row 0.
    logicals.flip(6, 0).unwrap();
    let err = check_logicals(&generators, &logicals).unwrap_err();
    assert_eq!(validation_code(err.clone()), "logical-anticommute");
    assert_eq!(err.info().context.get("stabilizer").map(String::as_str), Some("0"));
    assert_eq!(err.info().context.get("logical").map(String::as_str), Some("0"));
}

#[test]
fn missing_partner_breaks_algebra() {
    let (_, mut logicals) = code(7, 2, 3).into_parts();
    // Drop the Z on qubit n - k of Z_0.
    logicals.set(2 * 7 - 2, 2, false).unwrap();
    let err = check_logical_algebra(&logicals).unwrap_err();
    assert_eq!(validation_code(err), "logical-algebra-broken");
}

#[test]
fn dependent_rows_are_rejected() {
    let rows = vec!["1100".to_string(), "1100".to_string()];
    let matrix = SymplecticMatrix::from_bit_strings(4, &rows).unwrap();
    assert_eq!(validation_code(check_independence(&matrix).unwrap_err()), "rank-deficient");
}

#[test]
fn mismatched_shapes_are_matrix_errors() {
    let generators = SymplecticMatrix::new(2, 8);
    let logicals = SymplecticMatrix::new(6, 2);
    assert!(matches!(
        check_logicals(&generators, &logicals),
        Err(QeccError::Matrix(_))
    ));
}
