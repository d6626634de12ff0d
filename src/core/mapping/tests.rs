use super::*;

fn ids(values: &[&str]) -> Vec<NodeId> {
    values.iter().map(|v| v.to_string()).collect()
}

fn multi(id: &str) -> MappingSlot {
    MappingSlot::new(id, id.to_uppercase())
}

fn single(id: &str) -> MappingSlot {
    MappingSlot::new(id, id.to_uppercase()).with_allow_multiple(false)
}

#[test]
fn test_assign_appends_in_given_order() {
    let mut mapping = Mapping::new();
    assert!(mapping.assign_to_slot(&ids(&["n1"]), &multi("s1")));
    assert!(mapping.assign_to_slot(&ids(&["n3", "n2"]), &multi("s1")));
    assert_eq!(mapping.node_ids("s1"), ids(&["n1", "n3", "n2"]).as_slice());
}

#[test]
fn test_assign_moves_node_between_slots() {
    let mut mapping = Mapping::from_entries([("a", vec!["n1", "n2"]), ("b", vec!["n3"])]);
    mapping.assign_to_slot(&ids(&["n1"]), &multi("b"));
    assert_eq!(mapping.node_ids("a"), ids(&["n2"]).as_slice());
    assert_eq!(mapping.node_ids("b"), ids(&["n3", "n1"]).as_slice());
    assert_eq!(mapping.slot_of("n1"), Some("b"));
}

#[test]
fn test_assign_into_single_slot_replaces_occupant() {
    let mut mapping = Mapping::new();
    mapping.assign_to_slot(&ids(&["n1"]), &single("s1"));
    mapping.assign_to_slot(&ids(&["n2"]), &single("s1"));
    assert_eq!(mapping.node_ids("s1"), ids(&["n2"]).as_slice());
    assert!(!mapping.contains_node("n1"));
}

#[test]
fn test_assign_multiple_into_single_slot_is_rejected() {
    let mut mapping = Mapping::new();
    assert!(!mapping.assign_to_slot(&ids(&["n1", "n2"]), &single("s1")));
    assert_eq!(mapping, Mapping::new());
}

#[test]
fn test_rejected_assign_does_not_pop_nodes() {
    let mut mapping = Mapping::from_entries([("a", vec!["n1", "n2"])]);
    let before = mapping.clone();
    mapping.assign_to_slot(&ids(&["n1", "n2"]), &single("s1"));
    assert_eq!(mapping, before);
}

#[test]
fn test_assign_repeated_id_into_single_slot_is_rejected() {
    let mut mapping = Mapping::new();
    assert!(!mapping.assign_to_slot(&ids(&["n1", "n1"]), &single("s1")));
    assert!(mapping.is_empty());
}

#[test]
fn test_assign_repeated_id_into_multi_slot_counts_once() {
    let mut mapping = Mapping::new();
    assert!(mapping.assign_to_slot(&ids(&["n1", "n2", "n1"]), &multi("s1")));
    assert_eq!(mapping.node_ids("s1"), ids(&["n1", "n2"]).as_slice());
}

#[test]
fn test_reassign_to_same_slot_moves_to_end() {
    let mut mapping = Mapping::from_entries([("a", vec!["n1", "n2"])]);
    mapping.assign_to_slot(&ids(&["n1"]), &multi("a"));
    assert_eq!(mapping.node_ids("a"), ids(&["n2", "n1"]).as_slice());
}

#[test]
fn test_remove_node_is_idempotent() {
    let mut mapping = Mapping::from_entries([("a", vec!["n1", "n2"])]);
    assert!(mapping.remove_node("n1", "a"));
    assert!(!mapping.remove_node("n1", "a"));
    assert!(!mapping.remove_node("n1", "unbekannt"));
    assert_eq!(mapping.node_ids("a"), ids(&["n2"]).as_slice());
}

#[test]
fn test_remove_from_any_slot_scans_all_slots() {
    let mut mapping = Mapping::from_entries([("a", vec!["n1"]), ("b", vec!["n2", "n3"])]);
    assert!(mapping.remove_from_any_slot("n3"));
    assert!(!mapping.remove_from_any_slot("n9"));
    assert_eq!(mapping.node_ids("b"), ids(&["n2"]).as_slice());
}

#[test]
fn test_remove_from_any_slot_removes_repeated_occurrences() {
    let mut mapping = Mapping::from_entries([("a", vec!["n1", "n2", "n1"])]);
    assert!(mapping.remove_from_any_slot("n1"));
    assert_eq!(mapping.node_ids("a"), ids(&["n2"]).as_slice());
    assert!(!mapping.contains_node("n1"));
}

#[test]
fn test_clear_slot_twice_equals_once() {
    let mut once = Mapping::from_entries([("a", vec!["n1", "n2"])]);
    once.clear_slot("a");
    let mut twice = once.clone();
    twice.clear_slot("a");
    assert_eq!(once, twice);
    assert!(once.node_ids("a").is_empty());
}

#[test]
fn test_duplicate_detection_on_verbatim_mapping() {
    let mapping = Mapping::from_entries([("a", vec!["n1"]), ("b", vec!["n1", "n2"])]);
    assert_eq!(mapping.duplicate_node_ids(), vec!["n1"]);
    assert!(Mapping::from_entries([("a", vec!["n1"])])
        .duplicate_node_ids()
        .is_empty());
}

#[test]
fn test_serializes_as_plain_object() {
    let mapping = Mapping::from_entries([("s1", vec!["n2"]), ("s0", vec![])]);
    let json = serde_json::to_string(&mapping).expect("Mapping sollte serialisierbar sein");
    assert_eq!(json, r#"{"s1":["n2"],"s0":[]}"#);

    let parsed: Mapping = serde_json::from_str(&json).expect("Roundtrip sollte klappen");
    assert_eq!(parsed, mapping);
}
