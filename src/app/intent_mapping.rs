//! Mapping von View-Gesten (Intents) auf mutierende Commands.
//!
//! Hier passiert die gesamte Auflösung gegen den aktuellen Zustand:
//! Drag-Batch aus der Selektion, Drop-Zulässigkeit und Klick-Kontext.

use super::queries;
use super::{MappingCommand, MappingIntent, MappingState, SelectionMode};
use crate::core::SlotRef;

/// Übersetzt einen `MappingIntent` in eine Sequenz ausführbarer `MappingCommand`s.
pub fn map_intent_to_commands(state: &MappingState, intent: MappingIntent) -> Vec<MappingCommand> {
    match intent {
        MappingIntent::DataProvided {
            nodes,
            slots,
            mapping,
        } => {
            let mut commands = vec![MappingCommand::SetData { nodes, slots }];
            if let Some(mapping) = mapping {
                commands.push(MappingCommand::SetMapping { mapping });
            }
            commands
        }
        MappingIntent::SetMappingRequested { mapping } => {
            vec![MappingCommand::SetMapping { mapping }]
        }
        MappingIntent::NodeDropped { node_id, target } => {
            // Ein abgewiesener Drop gilt als abgebrochener Drag: keine Mutation
            if !queries::can_drop(state, &target) {
                log::debug!("Drop von '{}' auf {:?} abgewiesen", node_id, target);
                return Vec::new();
            }
            let node_ids = queries::drag_batch(state, &node_id);
            let drop = match target {
                SlotRef::Free => MappingCommand::RemoveFromAnySlot { node_ids },
                SlotRef::Slot(slot_id) => MappingCommand::AssignToSlot { node_ids, slot_id },
            };
            vec![drop, MappingCommand::ClearSelection]
        }
        MappingIntent::NodeClicked { node_id, slot_id } => {
            let Some(node) = state.registry.node(&node_id).cloned() else {
                log::debug!("Klick auf unbekannten Node '{}'", node_id);
                return Vec::new();
            };
            let context = queries::nodes_in(state, &SlotRef::from_option(slot_id))
                .into_iter()
                .cloned()
                .collect();
            vec![MappingCommand::ToggleSelection { node, context }]
        }
        MappingIntent::RemoveNodeFromSlotRequested { node_id, slot_id } => vec![
            MappingCommand::RemoveNode { node_id, slot_id },
            MappingCommand::ClearSelection,
        ],
        MappingIntent::ClearSlotRequested { slot_id } => {
            vec![MappingCommand::ClearSlot { slot_id }]
        }
        MappingIntent::AddNodeToSlotRequested { node_id, slot_id } => {
            vec![MappingCommand::AssignToSlot {
                node_ids: vec![node_id],
                slot_id,
            }]
        }
        MappingIntent::ModifiersChanged { ctrl_cmd, shift } => {
            vec![MappingCommand::ChangeSelectionMode {
                mode: SelectionMode::from_modifiers(ctrl_cmd, shift),
            }]
        }
        MappingIntent::ClickedOutside | MappingIntent::ClearSelectionRequested => {
            vec![MappingCommand::ClearSelection]
        }
        MappingIntent::SlotVisibilityChangeRequested { slot_id, visible } => {
            vec![MappingCommand::SetSlotVisible { slot_id, visible }]
        }
    }
}
