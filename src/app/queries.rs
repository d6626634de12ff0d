//! Abgeleitete Sichten: reine Abfragen auf Registry, Mapping und Selektion.
//!
//! Alle Funktionen sind seiteneffektfrei und total. Unbekannte IDs liefern
//! leere Ergebnisse. IDs im Mapping ohne Registry-Eintrag werden übersprungen.

use crate::app::MappingState;
use crate::core::{MappingNode, MappingSlot, NodeId, SlotRef};

/// Alle Nodes, die in keinem Slot stehen (Registry-Reihenfolge).
pub fn free_nodes(state: &MappingState) -> Vec<&MappingNode> {
    let assigned = state.mapping.assigned_node_ids();
    state
        .registry
        .nodes()
        .filter(|node| !assigned.contains(node.id.as_str()))
        .collect()
}

/// Nodes eines Slots in Mapping-Reihenfolge.
pub fn nodes_in_slot<'a>(state: &'a MappingState, slot_id: &str) -> Vec<&'a MappingNode> {
    state
        .mapping
        .node_ids(slot_id)
        .iter()
        .filter_map(|id| state.registry.node(id))
        .collect()
}

/// Nodes eines Kontexts (Slot oder freier Pool).
pub fn nodes_in<'a>(state: &'a MappingState, context: &SlotRef) -> Vec<&'a MappingNode> {
    match context {
        SlotRef::Free => free_nodes(state),
        SlotRef::Slot(slot_id) => nodes_in_slot(state, slot_id),
    }
}

/// Node-IDs eines Kontexts.
pub fn node_ids_in(state: &MappingState, context: &SlotRef) -> Vec<NodeId> {
    match context {
        SlotRef::Free => free_nodes(state)
            .into_iter()
            .map(|node| node.id.clone())
            .collect(),
        SlotRef::Slot(slot_id) => state.mapping.node_ids(slot_id).to_vec(),
    }
}

/// Alle übrigen Slots mit ihren Nodes (für "Ersetzen"-Angebote in Auswahllisten).
pub fn nodes_in_other_slots<'a>(
    state: &'a MappingState,
    exclude_slot_id: &str,
) -> Vec<(&'a MappingSlot, Vec<&'a MappingNode>)> {
    state
        .registry
        .slots()
        .filter(|slot| slot.id != exclude_slot_id)
        .map(|slot| (slot, nodes_in_slot(state, &slot.id)))
        .collect()
}

/// Ist der Node Teil der aktuellen Selektion?
pub fn is_selected(state: &MappingState, node_id: &str) -> bool {
    state.selection.contains(node_id)
}

/// Node-IDs, die beim Ziehen von `node_id` mitbewegt werden.
///
/// Bei nicht-leerer Selektion zieht jeder Node die ganze Gruppe.
pub fn drag_batch(state: &MappingState, node_id: &str) -> Vec<NodeId> {
    if state.selection.is_empty() {
        vec![node_id.to_string()]
    } else {
        state.selection.node_ids()
    }
}

/// Anzahl Nodes, die ein Drop bewegen würde (mindestens 1).
pub fn drop_batch_len(state: &MappingState) -> usize {
    state.selection.len().max(1)
}

/// Prüft, ob ein Drop auf das Ziel zulässig wäre.
///
/// Der freie Pool nimmt immer an. Unbekannte oder ausgeblendete Slots nie.
pub fn can_drop(state: &MappingState, target: &SlotRef) -> bool {
    match target {
        SlotRef::Free => true,
        SlotRef::Slot(slot_id) => state
            .registry
            .slot(slot_id)
            .is_some_and(|slot| can_drop_to_slot(state, slot)),
    }
}

/// Prüft Sichtbarkeit und Kardinalität eines Slots gegen die aktuelle Selektion.
pub fn can_drop_to_slot(state: &MappingState, slot: &MappingSlot) -> bool {
    slot.visible && slot.accepts_batch(drop_batch_len(state))
}

/// Pflicht-Slots ohne zugeordnete Nodes.
pub fn unfilled_required_slots(state: &MappingState) -> Vec<&MappingSlot> {
    state
        .registry
        .slots()
        .filter(|slot| slot.required && nodes_in_slot(state, &slot.id).is_empty())
        .collect()
}
