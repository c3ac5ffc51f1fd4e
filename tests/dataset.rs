//! Loader boundary tests: the scoring core never validates, so the JSON
//! loader has to.

use std::path::PathBuf;

use modelrank::input::{DatasetError, load_records};

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("modelrank-{}-{tag}.json", std::process::id()))
}

fn write_and_load(tag: &str, body: &str) -> Result<Vec<modelrank::Record>, DatasetError> {
    let path = temp_path(tag);
    std::fs::write(&path, body).unwrap();
    let result = load_records(&path);
    let _ = std::fs::remove_file(&path);
    result
}

#[test]
fn loads_a_well_formed_dataset() {
    let records = write_and_load(
        "ok",
        r#"[
            {"name": "model-a", "privacy": 10.0, "efficiency": 20.0, "openness": 30.0, "qsar": 40.0},
            {"name": "model-b", "privacy": 0.0, "efficiency": 100.0, "openness": 55.5, "qsar": 1.0}
        ]"#,
    )
    .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].name, "model-b");
    assert_eq!(records[1].efficiency, 100.0);
}

#[test]
fn rejects_empty_array() {
    assert!(matches!(
        write_and_load("empty", "[]"),
        Err(DatasetError::Empty)
    ));
}

#[test]
fn rejects_duplicate_names() {
    let result = write_and_load(
        "dup",
        r#"[
            {"name": "same", "privacy": 1.0, "efficiency": 1.0, "openness": 1.0, "qsar": 1.0},
            {"name": "same", "privacy": 2.0, "efficiency": 2.0, "openness": 2.0, "qsar": 2.0}
        ]"#,
    );
    match result {
        Err(DatasetError::DuplicateName(name)) => assert_eq!(name, "same"),
        other => panic!("expected DuplicateName, got {other:?}"),
    }
}

#[test]
fn rejects_scores_outside_range() {
    let result = write_and_load(
        "range",
        r#"[{"name": "hot", "privacy": 120.0, "efficiency": 1.0, "openness": 1.0, "qsar": 1.0}]"#,
    );
    assert!(matches!(
        result,
        Err(DatasetError::ScoreOutOfRange {
            criterion: "privacy",
            ..
        })
    ));
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(
        write_and_load("parse", "{not json"),
        Err(DatasetError::Parse(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let result = load_records(&temp_path("never-written"));
    assert!(matches!(result, Err(DatasetError::Io(_))));
}
