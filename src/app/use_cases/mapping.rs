//! Use-Case: Zuordnung von Nodes zu Slots (Mapping-Store-Operationen).
//!
//! Jede Funktion prüft zuerst gegen den unveränderten Zustand und ersetzt das
//! Mapping nur, wenn sich tatsächlich etwas ändert (CoW via `Arc`).
//! Rückgabewert: `true`, wenn das Mapping verändert wurde.

use crate::app::MappingState;
use crate::core::{Mapping, NodeId};
use std::sync::Arc;

/// Ersetzt das gesamte Mapping verbatim.
pub fn set_mapping(state: &mut MappingState, mapping: Mapping) -> bool {
    let duplicates = mapping.duplicate_node_ids();
    if !duplicates.is_empty() {
        log::warn!(
            "Gesetztes Mapping enthält Nodes in mehreren Slots: {:?}",
            duplicates
        );
    }
    if *state.mapping == mapping {
        return false;
    }
    state.mapping = Arc::new(mapping);
    true
}

/// Verschiebt Node(s) in einen Slot.
///
/// Unbekannte Slots werden ignoriert. Mehrere Nodes in einen Einzel-Slot
/// werden still abgewiesen.
pub fn assign_to_slot(state: &mut MappingState, node_ids: &[NodeId], slot_id: &str) -> bool {
    let Some(slot) = state.registry.slot(slot_id).cloned() else {
        log::debug!("AssignToSlot: unbekannter Slot '{}'", slot_id);
        return false;
    };

    if !slot.accepts_batch(node_ids.len()) {
        log::warn!(
            "{} Nodes für Einzel-Slot '{}' abgewiesen",
            node_ids.len(),
            slot.id
        );
        return false;
    }

    // Neuen Wert bauen und nur bei echter Änderung übernehmen
    let mut next = Mapping::clone(&state.mapping);
    if !next.assign_to_slot(node_ids, &slot) || next == *state.mapping {
        return false;
    }
    state.mapping = Arc::new(next);
    true
}

/// Entfernt einen Node aus einem bestimmten Slot.
pub fn remove_node(state: &mut MappingState, node_id: &str, slot_id: &str) -> bool {
    if !state.mapping.slot_contains(slot_id, node_id) {
        return false;
    }
    state.mapping_mut().remove_node(node_id, slot_id)
}

/// Entfernt Node(s) aus allen Slots (zurück in den freien Pool).
pub fn remove_from_any_slot(state: &mut MappingState, node_ids: &[NodeId]) -> bool {
    let assigned: Vec<&NodeId> = node_ids
        .iter()
        .filter(|id| state.mapping.contains_node(id))
        .collect();
    if assigned.is_empty() {
        return false;
    }

    let assigned: Vec<NodeId> = assigned.into_iter().cloned().collect();
    let mapping = state.mapping_mut();
    let mut changed = false;
    for id in &assigned {
        changed |= mapping.remove_from_any_slot(id);
    }
    changed
}

/// Leert einen Slot. Unbekannte Slots (weder in Registry noch Mapping) werden ignoriert.
pub fn clear_slot(state: &mut MappingState, slot_id: &str) -> bool {
    let known = state.registry.slot(slot_id).is_some() || state.mapping.contains_slot(slot_id);
    if !known {
        log::debug!("ClearSlot: unbekannter Slot '{}'", slot_id);
        return false;
    }
    if state.mapping.contains_slot(slot_id) && state.mapping.node_ids(slot_id).is_empty() {
        return false;
    }
    state.mapping_mut().clear_slot(slot_id);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MappingNode, SlotSpec};

    fn ids(values: &[&str]) -> Vec<NodeId> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn state() -> MappingState {
        MappingState::from_data(
            vec![MappingNode::new("n1", "A"), MappingNode::new("n2", "B")],
            vec![
                SlotSpec {
                    allow_multiple: Some(false),
                    ..SlotSpec::new("s1", "S1")
                },
                SlotSpec::new("s2", "S2"),
            ],
            None,
        )
    }

    #[test]
    fn scenario_single_slot_rejects_then_replaces() {
        let mut state = state();

        assert!(!assign_to_slot(&mut state, &ids(&["n1", "n2"]), "s1"));
        assert!(state.mapping.is_empty());

        assert!(assign_to_slot(&mut state, &ids(&["n1"]), "s1"));
        assert!(assign_to_slot(&mut state, &ids(&["n2"]), "s1"));
        assert_eq!(state.mapping.node_ids("s1"), ids(&["n2"]).as_slice());
        assert!(!state.mapping.contains_node("n1"));
    }

    #[test]
    fn repeated_id_into_single_slot_is_rejected() {
        let mut state = state();
        assert!(!assign_to_slot(&mut state, &ids(&["n1", "n1"]), "s1"));
        assert!(state.mapping.is_empty());
    }

    #[test]
    fn unknown_slot_is_ignored() {
        let mut state = state();
        assert!(!assign_to_slot(&mut state, &ids(&["n1"]), "fehlt"));
        assert!(!clear_slot(&mut state, "fehlt"));
        assert!(state.mapping.is_empty());
    }

    #[test]
    fn repeated_assign_to_single_slot_is_noop() {
        let mut state = state();
        assign_to_slot(&mut state, &ids(&["n1"]), "s1");
        let before = Arc::clone(&state.mapping);
        assert!(!assign_to_slot(&mut state, &ids(&["n1"]), "s1"));
        assert!(Arc::ptr_eq(&before, &state.mapping));
    }

    #[test]
    fn mutation_does_not_touch_shared_snapshot() {
        let mut state = state();
        assign_to_slot(&mut state, &ids(&["n1"]), "s2");
        let snapshot = state.clone();

        assign_to_slot(&mut state, &ids(&["n2"]), "s2");
        assert_eq!(snapshot.mapping.node_ids("s2"), ids(&["n1"]).as_slice());
        assert_eq!(state.mapping.node_ids("s2"), ids(&["n1", "n2"]).as_slice());
    }

    #[test]
    fn remove_and_clear_report_changes() {
        let mut state = state();
        assign_to_slot(&mut state, &ids(&["n1", "n2"]), "s2");

        assert!(remove_node(&mut state, "n1", "s2"));
        assert!(!remove_node(&mut state, "n1", "s2"));
        assert!(clear_slot(&mut state, "s2"));
        assert!(!clear_slot(&mut state, "s2"));
        assert!(state.mapping.node_ids("s2").is_empty());
    }

    #[test]
    fn remove_from_any_slot_frees_nodes() {
        let mut state = state();
        assign_to_slot(&mut state, &ids(&["n1"]), "s1");
        assign_to_slot(&mut state, &ids(&["n2"]), "s2");

        assert!(remove_from_any_slot(&mut state, &ids(&["n1", "n2", "n9"])));
        assert!(state.mapping.assigned_node_ids().is_empty());
        assert!(!remove_from_any_slot(&mut state, &ids(&["n1"])));
    }

    #[test]
    fn set_mapping_replaces_verbatim() {
        let mut state = state();
        let mapping = Mapping::from_entries([("s9", vec!["x"])]);
        assert!(set_mapping(&mut state, mapping.clone()));
        assert_eq!(*state.mapping, mapping);
        assert!(!set_mapping(&mut state, mapping));
    }
}
