//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::{MappingState, SelectionMode};
use crate::core::MappingNode;

/// Wechselt den Selektionsmodus.
pub fn change_mode(state: &mut MappingState, mode: SelectionMode) {
    if state.selection.mode != mode {
        log::trace!("Selektionsmodus: {:?}", mode);
    }
    use_cases::selection::change_mode(state, mode);
}

/// Klick auf einen Node.
pub fn toggle(state: &mut MappingState, node: MappingNode, context: &[MappingNode]) {
    use_cases::selection::toggle_selection(state, node, context);
    log::debug!("{} Nodes selektiert", state.selection.len());
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut MappingState) {
    use_cases::selection::clear_selection(state);
}
