//! Use-Case: Mehrfachselektion per Klick (Single / Ctrl-Cmd / Shift-Bereich).

use crate::app::{MappingState, SelectionMode};
use crate::core::MappingNode;

/// Setzt den Selektionsmodus.
pub fn change_mode(state: &mut MappingState, mode: SelectionMode) {
    state.selection.mode = mode;
}

/// Hebt die Selektion auf (idempotent).
pub fn clear_selection(state: &mut MappingState) {
    if !state.selection.is_empty() {
        state.selection.nodes_mut().clear();
    }
}

/// (De)selektiert einen Node gemäß aktuellem Modus.
///
/// `context` sind die Nodes im selben Slot bzw. im freien Pool und werden nur
/// für die Bereichsselektion gebraucht. Anker ist das letzte Element der
/// bisherigen Selektion. Steht der Anker nicht im Kontext, beginnt die Selektion
/// neu bei `node`; steht `node` selbst nicht im Kontext, bleibt sie unverändert.
pub fn toggle_selection(state: &mut MappingState, node: MappingNode, context: &[MappingNode]) {
    match state.selection.mode {
        SelectionMode::Single => {
            let only_this = state.selection.len() == 1
                && state.selection.anchor().is_some_and(|n| n.id == node.id);
            let selected = state.selection.nodes_mut();
            selected.clear();
            if !only_this {
                selected.push(node);
            }
        }
        SelectionMode::OnCtrlCmd => {
            let selected = state.selection.nodes_mut();
            match selected.iter().position(|n| n.id == node.id) {
                Some(pos) => {
                    selected.remove(pos);
                }
                None => selected.push(node),
            }
        }
        SelectionMode::OnShift => {
            let Some(anchor) = state.selection.anchor() else {
                state.selection.nodes_mut().push(node);
                return;
            };

            let anchor_index = context.iter().position(|n| n.id == anchor.id);
            let Some(target_index) = context.iter().position(|n| n.id == node.id) else {
                log::debug!("Node '{}' nicht im Kontext, Selektion unverändert", node.id);
                return;
            };

            let range = match anchor_index {
                Some(anchor_index) => {
                    let from = anchor_index.min(target_index);
                    let to = anchor_index.max(target_index);
                    context[from..=to].to_vec()
                }
                None => vec![node],
            };
            *state.selection.nodes_mut() = range;
        }
    }
}
