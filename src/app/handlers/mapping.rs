//! Handler für Mapping-Store-Operationen.

use crate::app::use_cases;
use crate::app::MappingState;
use crate::core::{Mapping, NodeId};

/// Ersetzt das Mapping verbatim.
pub fn set_mapping(state: &mut MappingState, mapping: Mapping) {
    if use_cases::mapping::set_mapping(state, mapping) {
        log::debug!("Mapping ersetzt ({} Slots)", state.mapping.len());
    }
}

/// Verschiebt Node(s) in einen Slot.
pub fn assign_to_slot(state: &mut MappingState, node_ids: &[NodeId], slot_id: &str) {
    if use_cases::mapping::assign_to_slot(state, node_ids, slot_id) {
        log::debug!("{:?} -> Slot '{}'", node_ids, slot_id);
    }
}

/// Entfernt einen Node aus einem Slot.
pub fn remove_node(state: &mut MappingState, node_id: &str, slot_id: &str) {
    if use_cases::mapping::remove_node(state, node_id, slot_id) {
        log::debug!("'{}' aus Slot '{}' entfernt", node_id, slot_id);
    }
}

/// Gibt Node(s) in den freien Pool zurück.
pub fn remove_from_any_slot(state: &mut MappingState, node_ids: &[NodeId]) {
    if use_cases::mapping::remove_from_any_slot(state, node_ids) {
        log::debug!("{:?} in den freien Pool verschoben", node_ids);
    }
}

/// Leert einen Slot.
pub fn clear_slot(state: &mut MappingState, slot_id: &str) {
    if use_cases::mapping::clear_slot(state, slot_id) {
        log::debug!("Slot '{}' geleert", slot_id);
    }
}
