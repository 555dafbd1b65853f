use qecc_core::errors::{ErrorInfo, QeccError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("n", "5")
        .with_context("reason", "example")
}

#[test]
fn params_error_surface() {
    let err = QeccError::Params(sample_info("P001", "k exceeds n"));
    assert_eq!(err.code(), "P001");
    assert!(err.info().context.contains_key("n"));
}

#[test]
fn arena_error_surface() {
    let err = QeccError::Arena(sample_info("A001", "arena exhausted"));
    assert_eq!(err.info().code, "A001");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn matrix_error_surface() {
    let err = QeccError::Matrix(sample_info("M001", "row out of range"));
    assert_eq!(err.code(), "M001");
}

#[test]
fn validation_error_surface() {
    let err = QeccError::Validation(sample_info("V001", "rows anticommute"));
    assert_eq!(err.code(), "V001");
}

#[test]
fn display_includes_context_and_hint() {
    let err = QeccError::Config(
        ErrorInfo::new("C001", "missing field")
            .with_context("field", "n")
            .with_hint("add n to the batch entry"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("config error: missing field (code: C001)"));
    assert!(rendered.contains("field=n"));
    assert!(rendered.contains("hint: add n to the batch entry"));
}

#[test]
fn errors_round_trip_json() {
    let err = QeccError::Serde(sample_info("S001", "schema mismatch"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Serde\""));
    let decoded: QeccError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
