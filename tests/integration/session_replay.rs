//! Replay of recorded sessions matches direct calls.

use penhub::payload::GroupRoster;
use penhub::session::{replay_file, ReplayReport};
use penhub::{GroupKey, StrokeHub};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

const SESSION: &str = r#"
{"event": "initPenData", "data": {"groupInfo": [{"groupnum": 1, "stuIds": ["s1", "s2"]}, {"groupnum": 2, "stuIds": ["s3"]}]}}
{"event": "handleFreeGroup", "data": {"userid": "s4", "groupnum": 2}}
{"event": "handleFreeGroup", "data": {"userid": "s4", "groupnum": 2}}
{"event": "receivePenData", "data": {"userid": "s4", "groupnum": 2, "points": [{"x": 1, "y": 1}]}}
{"event": "receivePenData", "data": {"userid": "s1", "groupnum": 1, "points": [{"x": 2, "y": 2}]}}
{"event": "receivePenData", "data": {"userid": "s4", "groupnum": 2, "points": [{"x": 3, "y": 3}]}}
{"event": "receivePenData", "data": {"userid": "s4", "groupnum": 0, "points": [{"x": 9, "y": 9}]}}
"#;

#[test]
fn test_replay_matches_direct_calls() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.jsonl");
    fs::write(&path, SESSION).unwrap();

    let replayed = StrokeHub::new();
    let report = replay_file(&replayed, &path).unwrap();
    assert_eq!(
        report,
        ReplayReport {
            applied: 6,
            ignored: 1,
            failed: 0
        }
    );

    let direct = StrokeHub::new();
    direct.initialize(vec![
        GroupRoster::new(1u32, ["s1", "s2"]),
        GroupRoster::new(2u32, ["s3"]),
    ]);
    direct.join_free_group("s4", &GroupKey::from(2u32)).unwrap();
    direct.receive_stroke_data("s4", &GroupKey::from(2u32), vec![json!({"x": 1, "y": 1})]);
    direct.receive_stroke_data("s1", &GroupKey::from(1u32), vec![json!({"x": 2, "y": 2})]);
    direct.receive_stroke_data("s4", &GroupKey::from(2u32), vec![json!({"x": 3, "y": 3})]);

    assert_eq!(replayed.get_all(), direct.get_all());
    assert_eq!(
        replayed.get_by_user_id("s4").unwrap().points,
        vec![json!({"x": 1, "y": 1}), json!({"x": 3, "y": 3})]
    );
}

#[test]
fn test_replay_missing_file_is_io_error() {
    let hub = StrokeHub::new();
    let result = replay_file(&hub, std::path::Path::new("/definitely/not/here.jsonl"));
    assert!(matches!(result, Err(penhub::error::ApiError::Io(_))));
}
