//! Mapping-Controller für zentrale Event-Verarbeitung.

use super::handlers;
use super::mapping_view;
use super::observers::{Observers, SlotVisibilityChange, SubscriptionId};
use super::{MappingCommand, MappingIntent, MappingState};
use crate::core::MappingObject;
use crate::shared::MappingView;
use std::sync::Arc;

/// Orchestriert View-Gesten und Use-Cases auf den MappingState und
/// benachrichtigt Subscriber über committete Änderungen.
#[derive(Default, Debug)]
pub struct MappingController {
    mapping_observers: Observers<MappingObject>,
    visibility_observers: Observers<SlotVisibilityChange>,
}

impl MappingController {
    /// Erstellt einen neuen Controller ohne Subscriber.
    pub fn new() -> Self {
        Self::default()
    }

    /// Meldet einen Callback für Mapping-Änderungen an (`onMappingChange`).
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&MappingObject) + 'static,
    ) -> SubscriptionId {
        self.mapping_observers.subscribe(callback)
    }

    /// Meldet einen Mapping-Callback ab.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.mapping_observers.unsubscribe(id)
    }

    /// Meldet einen Callback für Sichtbarkeitsänderungen an (`onVisibleChange`).
    pub fn subscribe_visibility(
        &mut self,
        mut callback: impl FnMut(&str, bool) + 'static,
    ) -> SubscriptionId {
        self.visibility_observers
            .subscribe(move |change: &SlotVisibilityChange| {
                callback(&change.slot_id, change.visible)
            })
    }

    /// Meldet einen Sichtbarkeits-Callback ab.
    pub fn unsubscribe_visibility(&mut self, id: SubscriptionId) -> bool {
        self.visibility_observers.unsubscribe(id)
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut MappingState, intent: MappingIntent) {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command);
        }
    }

    /// Führt einen mutierenden Command auf dem MappingState aus.
    ///
    /// Subscriber erhalten den neuen Mapping-Snapshot genau dann, wenn sich
    /// das Mapping inhaltlich geändert hat.
    pub fn handle_command(&mut self, state: &mut MappingState, command: MappingCommand) {
        state.command_log.record(command.clone());
        log::debug!("Command: {:?}", command);

        let before = Arc::clone(&state.mapping);
        let visibility_change = apply(state, command);

        if !Arc::ptr_eq(&before, &state.mapping) && *before != *state.mapping {
            self.mapping_observers.notify(&state.mapping);
        }
        if let Some(change) = visibility_change {
            self.visibility_observers.notify(&change);
        }
    }

    /// Baut die Mapping-View aus dem aktuellen MappingState.
    pub fn build_view(&self, state: &MappingState) -> MappingView {
        mapping_view::build(state)
    }
}

/// Reine Übergangsfunktion: `(state, command) -> state`.
///
/// Vorherige Klone des Zustands bleiben durch Copy-on-Write unverändert.
pub fn reduce(mut state: MappingState, command: MappingCommand) -> MappingState {
    apply(&mut state, command);
    state
}

/// Dispatcht an die Feature-Handler in `handlers/`.
fn apply(state: &mut MappingState, command: MappingCommand) -> Option<SlotVisibilityChange> {
    match command {
        // === Registry ===
        MappingCommand::SetData { nodes, slots } => handlers::data::set_data(state, nodes, slots),
        MappingCommand::ClearData => handlers::data::clear_data(state),
        MappingCommand::SetSlotVisible { slot_id, visible } => {
            if handlers::data::set_slot_visible(state, &slot_id, visible) {
                return Some(SlotVisibilityChange { slot_id, visible });
            }
        }

        // === Mapping ===
        MappingCommand::SetMapping { mapping } => handlers::mapping::set_mapping(state, mapping),
        MappingCommand::AssignToSlot { node_ids, slot_id } => {
            handlers::mapping::assign_to_slot(state, &node_ids, &slot_id)
        }
        MappingCommand::RemoveNode { node_id, slot_id } => {
            handlers::mapping::remove_node(state, &node_id, &slot_id)
        }
        MappingCommand::RemoveFromAnySlot { node_ids } => {
            handlers::mapping::remove_from_any_slot(state, &node_ids)
        }
        MappingCommand::ClearSlot { slot_id } => handlers::mapping::clear_slot(state, &slot_id),

        // === Selektion ===
        MappingCommand::ChangeSelectionMode { mode } => {
            handlers::selection::change_mode(state, mode)
        }
        MappingCommand::ToggleSelection { node, context } => {
            handlers::selection::toggle(state, node, &context)
        }
        MappingCommand::ClearSelection => handlers::selection::clear(state),
    }
    None
}
