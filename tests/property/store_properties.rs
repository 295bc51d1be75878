//! Property-based tests for store invariants

use penhub::payload::GroupRoster;
use penhub::{GroupKey, StrokeStore};
use proptest::prelude::*;
use serde_json::{json, Value};

fn roster_strategy() -> impl Strategy<Value = Vec<GroupRoster>> {
    prop::collection::vec(
        (1u32..20, prop::collection::vec("[a-e][0-9]", 0..6)),
        0..6,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .map(|(group, ids)| GroupRoster::new(group, ids))
            .collect()
    })
}

proptest! {
    /// Points for a known student end up as the concatenation of every batch.
    #[test]
    fn prop_batches_concatenate_in_call_order(
        batches in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..5), 0..10)
    ) {
        let mut store = StrokeStore::new();
        let group = GroupKey::from(1u32);
        store.join_free_group("s1", &group).unwrap();

        let mut expected: Vec<Value> = Vec::new();
        for batch in &batches {
            let points: Vec<Value> = batch.iter().map(|n| json!(n)).collect();
            expected.extend(points.iter().cloned());
            store.receive_stroke_data("s1", &group, points);
        }

        prop_assert_eq!(store.get_by_user_id("s1").unwrap().points, expected);
    }

    /// The flat view has one entry per record across all groups.
    #[test]
    fn prop_get_all_length_is_sum_of_groups(rosters in roster_strategy()) {
        let mut store = StrokeStore::new();
        store.initialize(rosters);

        let total: usize = store
            .group_keys()
            .iter()
            .map(|key| store.get_by_group(key).len())
            .sum();
        prop_assert_eq!(store.get_all().len(), total);
        prop_assert_eq!(store.student_count(), total);
    }

    /// No group ever holds two records for one student.
    #[test]
    fn prop_user_ids_unique_within_group(
        rosters in roster_strategy(),
        joins in prop::collection::vec((1u32..20, "[a-e][0-9]"), 0..20)
    ) {
        let mut store = StrokeStore::new();
        store.initialize(rosters);
        for (group, user) in &joins {
            store.join_free_group(user, &GroupKey::from(*group)).unwrap();
        }

        for key in store.group_keys() {
            let mut ids: Vec<String> =
                store.get_by_group(&key).into_iter().map(|r| r.user_id).collect();
            let before = ids.len();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);
        }
    }

    /// Initializing twice with the same roster looks like initializing once.
    #[test]
    fn prop_initialize_is_idempotent(rosters in roster_strategy()) {
        let mut once = StrokeStore::new();
        once.initialize(rosters.clone());

        let mut twice = StrokeStore::new();
        twice.initialize(rosters.clone());
        twice.join_free_group("zz", &GroupKey::from(1u32)).unwrap();
        twice.initialize(rosters);

        prop_assert_eq!(once.get_all(), twice.get_all());
        prop_assert_eq!(once.group_keys(), twice.group_keys());
    }

    /// Lookup by id agrees with a manual scan of the flat view.
    #[test]
    fn prop_get_by_user_id_matches_scan(rosters in roster_strategy(), user in "[a-e][0-9]") {
        let mut store = StrokeStore::new();
        store.initialize(rosters);
        let scanned = store.get_all().into_iter().find(|r| r.user_id == user);
        prop_assert_eq!(store.get_by_user_id(&user), scanned);
    }

    /// Batches for students outside the group never change the store.
    #[test]
    fn prop_unknown_student_is_noop(rosters in roster_strategy(), group in 1u32..20) {
        let mut store = StrokeStore::new();
        store.initialize(rosters);
        let before = store.get_all();
        store.receive_stroke_data("not-on-roster", &GroupKey::from(group), vec![json!(1)]);
        prop_assert_eq!(store.get_all(), before);
    }
}
