//! End-to-end scenarios driven through the wire payloads.

use penhub::{GroupKey, IngestOutcome, StrokeHub, StudentStrokeRecord};
use serde_json::json;

fn roster() -> serde_json::Value {
    json!({"groupInfo": [{"groupnum": 1, "stuIds": ["s1", "s2"]}]})
}

#[test]
fn test_roster_initialization_lists_students_in_order() {
    let hub = StrokeHub::new();
    hub.initialize_from_value(&roster()).unwrap();

    assert_eq!(
        serde_json::to_value(hub.get_by_group(&GroupKey::from(1u32))).unwrap(),
        json!([{"userId": "s1", "points": []}, {"userId": "s2", "points": []}])
    );
}

#[test]
fn test_points_reach_student_after_roster() {
    let hub = StrokeHub::new();
    hub.initialize_from_value(&roster()).unwrap();
    hub.receive_from_value(&json!({"userid": "s1", "groupnum": 1, "points": ["p1", "p2"]}))
        .unwrap();

    assert_eq!(
        hub.get_by_user_id("s1").unwrap().points,
        vec![json!("p1"), json!("p2")]
    );
}

#[test]
fn test_free_group_join_is_idempotent() {
    let hub = StrokeHub::new();
    let join = json!({"userid": "s9", "groupnum": 99});
    hub.join_from_value(&join).unwrap();
    let first = hub.get_by_group(&GroupKey::from(99u32));
    hub.join_from_value(&join).unwrap();

    assert_eq!(first, vec![StudentStrokeRecord::new("s9")]);
    assert_eq!(hub.get_by_group(&GroupKey::from(99u32)), first);
}

#[test]
fn test_points_for_missing_group_are_dropped() {
    let hub = StrokeHub::new();
    hub.initialize_from_value(&roster()).unwrap();
    let before = hub.get_all();

    let outcome = hub
        .receive_from_value(&json!({"userid": "s1", "groupnum": 5, "points": [1]}))
        .unwrap();

    assert!(matches!(outcome, IngestOutcome::Ignored(_)));
    assert!(hub.get_by_group(&GroupKey::from(5u32)).is_empty());
    assert_eq!(hub.get_all(), before);
}

#[test]
fn test_string_and_numeric_group_numbers_address_one_group() {
    let hub = StrokeHub::new();
    hub.initialize_from_value(&roster()).unwrap();
    hub.receive_from_value(&json!({"userid": "s2", "groupnum": "1", "points": [7]}))
        .unwrap();
    hub.join_from_value(&json!({"userid": "s3", "groupnum": "1"}))
        .unwrap();

    let group = hub.get_by_group(&GroupKey::from(1u32));
    assert_eq!(group.len(), 3);
    assert_eq!(group[1].points, vec![json!(7)]);
}

#[test]
fn test_reinitialization_discards_points() {
    let hub = StrokeHub::new();
    hub.initialize_from_value(&roster()).unwrap();
    hub.receive_from_value(&json!({"userid": "s1", "groupnum": 1, "points": [1]}))
        .unwrap();
    hub.initialize_from_value(&roster()).unwrap();

    assert!(hub.get_all().iter().all(|r| r.points.is_empty()));
}

#[test]
fn test_malformed_roster_leaves_store_cleared() {
    let hub = StrokeHub::new();
    hub.initialize_from_value(&roster()).unwrap();

    assert!(hub.initialize_from_value(&json!({"groupInfo": null})).is_err());
    assert!(hub.initialize_from_value(&json!("garbage")).is_err());
    assert!(hub.get_all().is_empty());
}
