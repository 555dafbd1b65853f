use std::fs;

use qecc_sim::commands::batch::{run_config, BatchManifest};
use qecc_sim::BatchConfig;
use tempfile::tempdir;

const BATCH: &str = "master_seed: 42\ncodes:\n  - {n: 7, k: 1, r: 3, count: 2}\n  - {n: 9, k: 2, r: 4, label: wide}\n";

#[test]
fn batch_writes_codes_and_manifest() {
    let config = BatchConfig::from_yaml_str(BATCH).unwrap();
    let dir = tempdir().unwrap();
    let manifest = run_config(&config, dir.path()).unwrap();

    let files: Vec<&str> = manifest.codes.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(files, ["n7-k1-r3-000.json", "n7-k1-r3-001.json", "wide-000.json"]);
    assert_ne!(manifest.codes[0].seed, manifest.codes[1].seed);

    for entry in &manifest.codes {
        let json = fs::read_to_string(dir.path().join(&entry.file)).unwrap();
        let code = qecc_code::from_json(&json).unwrap();
        assert_eq!(code.params(), entry.params);
        assert_eq!(code.canonical_hash(), entry.hash);
        assert_eq!(code.provenance().seed, Some(entry.seed));
    }

    let stored: BatchManifest =
        serde_json::from_str(&fs::read_to_string(dir.path().join("manifest.json")).unwrap())
            .unwrap();
    assert_eq!(stored, manifest);
}

#[test]
fn batch_is_deterministic_per_master_seed() {
    let config = BatchConfig::from_yaml_str(BATCH).unwrap();
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let a = run_config(&config, first.path()).unwrap();
    let b = run_config(&config, second.path()).unwrap();
    assert_eq!(a, b);
    for entry in &a.codes {
        assert_eq!(
            fs::read(first.path().join(&entry.file)).unwrap(),
            fs::read(second.path().join(&entry.file)).unwrap()
        );
    }
}

#[test]
fn invalid_entry_aborts_before_writing_codes() {
    let config =
        BatchConfig::from_yaml_str("codes:\n  - {n: 8, r: 3}\n  - {n: 4, k: 4, r: 3}\n").unwrap();
    let dir = tempdir().unwrap();
    let err = run_config(&config, dir.path()).unwrap_err();
    assert!(err.to_string().contains("logical-exceeds-physical"));
    assert!(!dir.path().join("manifest.json").exists());
}
