//! Handler für Registry-Daten.

use crate::app::use_cases;
use crate::app::MappingState;
use crate::core::{MappingNode, SlotSpec};

/// Ersetzt Nodes und Slots.
pub fn set_data(state: &mut MappingState, nodes: Vec<MappingNode>, slots: Vec<SlotSpec>) {
    use_cases::data::set_data(state, nodes, slots);
}

/// Leert die Registry.
pub fn clear_data(state: &mut MappingState) {
    use_cases::data::clear_data(state);
    log::info!("Daten geleert");
}

/// Setzt die Sichtbarkeit eines Slots; `true`, wenn sie sich geändert hat.
pub fn set_slot_visible(state: &mut MappingState, slot_id: &str, visible: bool) -> bool {
    let changed = use_cases::data::set_slot_visible(state, slot_id, visible);
    if changed {
        log::debug!("Slot '{}' sichtbar: {}", slot_id, visible);
    }
    changed
}
