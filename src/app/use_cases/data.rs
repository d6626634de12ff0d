//! Use-Case: Registry-Daten setzen und Slot-Sichtbarkeit ändern.

use crate::app::MappingState;
use crate::core::{EntityRegistry, MappingNode, SlotSpec};
use std::sync::Arc;

/// Ersetzt Nodes und Slots. Das Mapping bleibt unangetastet, die Selektion
/// wird aufgehoben, da sie auf alte Nodes zeigen kann.
pub fn set_data(state: &mut MappingState, nodes: Vec<MappingNode>, slots: Vec<SlotSpec>) {
    state.registry = Arc::new(EntityRegistry::new(nodes, slots));
    super::selection::clear_selection(state);
    log::info!(
        "Daten gesetzt: {} Nodes, {} Slots",
        state.registry.node_count(),
        state.registry.slot_count()
    );
}

/// Leert die Registry.
pub fn clear_data(state: &mut MappingState) {
    state.registry = Arc::new(EntityRegistry::default());
    super::selection::clear_selection(state);
}

/// Setzt die Sichtbarkeit eines Slots. Gibt `true` zurück, wenn sie sich geändert hat.
pub fn set_slot_visible(state: &mut MappingState, slot_id: &str, visible: bool) -> bool {
    if !state.registry.would_change_visibility(slot_id, visible) {
        return false;
    }
    state.registry_mut().set_slot_visible(slot_id, visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_data_clears_stale_selection() {
        let mut state = MappingState::new();
        state.selection.nodes_mut().push(MappingNode::new("alt", "Alt"));

        set_data(
            &mut state,
            vec![MappingNode::new("n1", "A")],
            vec![SlotSpec::new("s1", "S1")],
        );

        assert_eq!(state.node_count(), 1);
        assert_eq!(state.slot_count(), 1);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn visibility_toggle_keeps_snapshot_intact() {
        let mut state = MappingState::from_data(vec![], vec![SlotSpec::new("s1", "S1")], None);
        let snapshot = state.clone();

        assert!(set_slot_visible(&mut state, "s1", false));
        assert!(!set_slot_visible(&mut state, "s1", false));
        assert!(snapshot.registry.slot("s1").is_some_and(|s| s.visible));
        assert!(state.registry.slot("s1").is_some_and(|s| !s.visible));
    }

    #[test]
    fn clear_data_empties_registry() {
        let mut state =
            MappingState::from_data(vec![MappingNode::new("n1", "A")], vec![], None);
        clear_data(&mut state);
        assert_eq!(state.node_count(), 0);
    }
}
