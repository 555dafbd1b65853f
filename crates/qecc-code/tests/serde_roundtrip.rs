use qecc_code::serde::{from_bytes, from_json, to_bytes, to_json};
use qecc_code::{CodeParameters, RandomCode};
use qecc_core::RngHandle;

fn sample(k: usize) -> RandomCode {
    let params = CodeParameters::new(9, k, 4).unwrap();
    RandomCode::generate(params, &mut RngHandle::from_seed(77)).unwrap()
}

#[test]
fn json_round_trip_preserves_hash() {
    let code = sample(2);
    let json = to_json(&code).unwrap();
    let restored = from_json(&json).unwrap();

    assert_eq!(code.canonical_hash(), restored.canonical_hash());
    assert_eq!(restored.generators(), code.generators());
    assert_eq!(restored.logicals(), code.logicals());
    assert_eq!(restored.repair_report(), code.repair_report());
    assert_eq!(restored.provenance().seed, Some(77));
    assert_eq!(restored.provenance().code_hash, code.canonical_hash());
    assert!(json.contains("\"correction_probability\": null"));
}

#[test]
fn binary_round_trip_preserves_hash() {
    let code = sample(1);
    let bytes = to_bytes(&code).unwrap();
    let restored = from_bytes(&bytes).unwrap();
    assert_eq!(code.canonical_hash(), restored.canonical_hash());
}

#[test]
fn zero_logical_code_round_trips() {
    let code = sample(0);
    let restored = from_json(&to_json(&code).unwrap()).unwrap();
    assert_eq!(restored.logicals().length(), 0);
    assert_eq!(restored.logicals().height(), 18);
}

#[test]
fn tampered_rows_fail_hash_check() {
    let code = sample(2);
    let mut value: serde_json::Value = serde_json::from_str(&to_json(&code).unwrap()).unwrap();
    let row = value["generators"][0].as_str().unwrap().to_string();
    let flipped: String = row
        .chars()
        .enumerate()
        .map(|(idx, ch)| match (idx, ch) {
            (4, '0') => '1',
            (4, _) => '0',
            (_, ch) => ch,
        })
        .collect();
    value["generators"][0] = serde_json::Value::String(flipped);

    let err = from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.code(), "hash-mismatch");
}

fn flip_bit(row: &str, idx: usize) -> String {
    row.chars()
        .enumerate()
        .map(|(pos, ch)| match (pos == idx, ch) {
            (true, '0') => '1',
            (true, _) => '0',
            (false, ch) => ch,
        })
        .collect()
}

#[test]
fn blank_hash_is_rejected_even_for_edited_rows() {
    let code = sample(2);
    let mut value: serde_json::Value = serde_json::from_str(&to_json(&code).unwrap()).unwrap();
    let row = value["generators"][0].as_str().unwrap().to_string();
    value["generators"][0] = serde_json::Value::String(flip_bit(&row, 4));
    value["provenance"]["code_hash"] = serde_json::Value::String(String::new());

    let err = from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.code(), "hash-missing");

    value["provenance"]
        .as_object_mut()
        .unwrap()
        .remove("code_hash");
    let err = from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.code(), "hash-missing");
}

#[test]
fn stale_provenance_hash_is_replaced_on_write() {
    let code = sample(1);
    let mut provenance = code.provenance().clone();
    provenance.code_hash = "0".repeat(64);
    let (generators, logicals) = code.clone().into_parts();
    let relabelled = RandomCode::from_parts(
        code.params(),
        generators,
        logicals,
        code.schema_version(),
        provenance,
    )
    .unwrap();

    let restored = from_bytes(&to_bytes(&relabelled).unwrap()).unwrap();
    assert_eq!(restored.provenance().code_hash, code.canonical_hash());
}

#[test]
fn wrong_shapes_are_rejected() {
    let code = sample(2);
    let mut value: serde_json::Value = serde_json::from_str(&to_json(&code).unwrap()).unwrap();
    value["generators"].as_array_mut().unwrap().pop();
    let err = from_json(&value.to_string()).unwrap_err();
    assert_eq!(err.code(), "shape-mismatch");

    assert_eq!(from_json("{").unwrap_err().code(), "json-deserialize");
}
