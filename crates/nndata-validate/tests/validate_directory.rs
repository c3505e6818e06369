//! Integration test: validate directories of recorded episodes end to end.
//!
//! Episodes are written the way the recorder writes them, with the full set
//! of optional fields, so these tests also cover decoding of recorder lines.

use std::path::Path;

use nndata_core::{
    DecisionRecord, DecisionType, OutcomeRecord, RecordKind, CARD_FEATURES, STATE_SIZE,
};
use nndata_validate::{validate_directory, DiscoveryError, ValidationConfig, ValidationError};
use serde_json::Value;

/// Serialize a record body as one episode line carrying its `type` tag.
fn line(kind: RecordKind, mut body: Value) -> String {
    body["type"] = Value::from(kind.as_str());
    body.to_string()
}

fn decision_line(d: &DecisionRecord) -> String {
    line(RecordKind::Decision, serde_json::to_value(d).expect("decision serializes"))
}

/// A decision as the recorder writes it, with every optional field set.
fn recorded_decision(turn: i64, num_options: i64, chosen_index: i64) -> String {
    let mut d = DecisionRecord::new(vec![0.25; STATE_SIZE], chosen_index, num_options);
    d.turn = Some(turn);
    d.phase = Some("COMBAT_DECLARE_ATTACKERS".to_string());
    d.decision_type = Some(DecisionType::Attack.to_string());
    d.options = Some(vec![vec![0.5; CARD_FEATURES]; num_options as usize]);
    decision_line(&d)
}

fn recorded_outcome(result: f64) -> String {
    let mut o = OutcomeRecord::new(result);
    o.turns = Some(9);
    o.reason = Some("life total reached 0".to_string());
    line(RecordKind::Outcome, serde_json::to_value(&o).expect("outcome serializes"))
}

fn write_episode(dir: &Path, name: &str, lines: &[String]) {
    let mut content = String::new();
    for l in lines {
        content.push_str(l);
        content.push('\n');
    }
    std::fs::write(dir.join(name), content).expect("write episode");
}

#[test]
fn test_all_valid_files_succeed() {
    let dir = tempfile::tempdir().unwrap();
    write_episode(
        dir.path(),
        "game_a.jsonl",
        &[recorded_decision(1, 3, 2), recorded_outcome(1.0)],
    );
    write_episode(
        dir.path(),
        "game_b.jsonl",
        &[
            recorded_decision(1, 2, 0),
            recorded_decision(2, 4, 3),
            recorded_decision(3, 1, 0),
            recorded_outcome(0.0),
        ],
    );

    let report = validate_directory(dir.path(), &ValidationConfig::default()).unwrap();
    assert_eq!(report.total, 2);
    assert!(report.is_success());

    let counts: Vec<_> = report.files.iter().map(|f| f.status.decisions()).collect();
    assert_eq!(counts, vec![Some(1), Some(3)]);
    assert_eq!(report.files[1].status.to_string(), "OK (3 decisions)");
}

#[test]
fn test_one_invalid_file_fails_run() {
    let dir = tempfile::tempdir().unwrap();
    write_episode(
        dir.path(),
        "game_ok.jsonl",
        &[recorded_decision(1, 3, 2), recorded_outcome(1.0)],
    );
    write_episode(
        dir.path(),
        "game_bad.jsonl",
        &[recorded_decision(1, 3, 3), recorded_outcome(1.0)],
    );

    let report = validate_directory(dir.path(), &ValidationConfig::default()).unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.failed, 1);
    assert!(!report.is_success());

    let bad = report.failures().next().expect("one failure");
    assert!(bad.path.ends_with("game_bad.jsonl"));
    assert!(bad
        .status
        .to_string()
        .contains("chosenIndex 3 >= numOptions 3"));
}

#[test]
fn test_failure_does_not_stop_later_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("a_empty.jsonl"), "").unwrap();
    std::fs::write(dir.path().join("b_garbage.jsonl"), "not json\nstill not json\n").unwrap();
    write_episode(
        dir.path(),
        "c_good.jsonl",
        &[recorded_decision(1, 1, 0), recorded_outcome(0.0)],
    );

    let report = validate_directory(dir.path(), &ValidationConfig::default()).unwrap();
    assert_eq!(report.total, 3);
    assert_eq!(report.failed, 2);
    assert!(report.files[2].status.is_ok());
    assert!(matches!(
        report.files[0].status.error(),
        Some(ValidationError::InsufficientLines { found: 0 })
    ));
    assert!(matches!(
        report.files[1].status.error(),
        Some(ValidationError::Parse { line: 0, .. })
    ));
}

#[test]
fn test_no_matching_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("game.json"), "{}").unwrap();

    let err = validate_directory(dir.path(), &ValidationConfig::default()).unwrap_err();
    assert!(matches!(err, DiscoveryError::NoFiles { .. }));
}

#[test]
fn test_custom_extension() {
    let dir = tempfile::tempdir().unwrap();
    write_episode(
        dir.path(),
        "game.ndjson",
        &[recorded_decision(1, 2, 1), recorded_outcome(1.0)],
    );

    let config = ValidationConfig::default().with_extension("ndjson");
    let report = validate_directory(dir.path(), &config).unwrap();
    assert_eq!(report.total, 1);
    assert!(report.is_success());
}

#[test]
fn test_strict_mode_flags_recorder_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let mut d = DecisionRecord::new(vec![0.0; STATE_SIZE], 0, 2);
    d.decision_type = Some("DRAW_STEP".to_string());
    write_episode(
        dir.path(),
        "game.jsonl",
        &[decision_line(&d), recorded_outcome(1.0)],
    );

    let lenient = validate_directory(dir.path(), &ValidationConfig::default()).unwrap();
    assert!(lenient.is_success());

    let strict = ValidationConfig::default().with_strict(true);
    let report = validate_directory(dir.path(), &strict).unwrap();
    assert_eq!(report.failed, 1);
    assert_eq!(
        report.files[0].status.to_string(),
        r#"ERROR: unknown decisionType "DRAW_STEP""#
    );
}
