use qecc_core::provenance::{RunProvenance, SchemaVersion};

#[test]
fn provenance_round_trip_json() {
    let mut provenance = RunProvenance::from_seed(99);
    provenance.label = "n5-k1-r3".into();
    provenance.code_hash = "abc".into();

    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, provenance);
    assert!(decoded.tool_versions.contains_key("qecc-core"));
}

#[test]
fn provenance_defaults_missing_fields() {
    let decoded: RunProvenance = serde_json::from_str(r#"{"seed": 4}"#).expect("deserialize");
    assert_eq!(decoded.seed, Some(4));
    assert!(decoded.code_hash.is_empty());
    assert!(decoded.tool_versions.is_empty());
}

#[test]
fn provenance_without_seed_round_trips() {
    let provenance = RunProvenance::new(None);
    let json = serde_json::to_string(&provenance).expect("serialize");
    assert!(json.contains("\"seed\":null"));
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded.seed, None);

    let bare: RunProvenance = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(bare.seed, None);
}

#[test]
fn schema_version_orders_semantically() {
    assert!(SchemaVersion::new(1, 2, 0) > SchemaVersion::new(1, 1, 9));
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
}
