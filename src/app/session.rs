//! Mapping-Session: besitzt Zustand und Controller einer Widget-Instanz.
//!
//! Mehrere Sessions teilen nichts; jede Instanz wird separat konstruiert.

use super::observers::SubscriptionId;
use super::queries;
use super::{MappingCommand, MappingController, MappingIntent, MappingState, SelectionState};
use crate::core::{
    Mapping, MappingNode, MappingObject, MappingSlot, NodeId, SlotId, SlotRef, SlotSpec,
};
use crate::shared::{MappingOptions, MappingView};

/// Befehls- und Abfrage-Oberfläche für die View-Schicht.
#[derive(Debug, Default)]
pub struct MappingSession {
    state: MappingState,
    controller: MappingController,
}

impl MappingSession {
    /// Erstellt eine Session mit Standard-Optionen.
    pub fn new(
        nodes: Vec<MappingNode>,
        slots: Vec<SlotSpec>,
        initial_mapping: Option<Mapping>,
    ) -> Self {
        Self::with_options(MappingOptions::default(), nodes, slots, initial_mapping)
    }

    /// Erstellt eine Session mit eigenen Optionen.
    pub fn with_options(
        options: MappingOptions,
        nodes: Vec<MappingNode>,
        slots: Vec<SlotSpec>,
        initial_mapping: Option<Mapping>,
    ) -> Self {
        let mut state = MappingState::with_options(options);
        let mut controller = MappingController::new();
        controller.handle_intent(
            &mut state,
            MappingIntent::DataProvided {
                nodes,
                slots,
                mapping: initial_mapping,
            },
        );
        log::info!(
            "Mapping-Session gestartet: {} Nodes, {} Slots",
            state.node_count(),
            state.slot_count()
        );
        Self { state, controller }
    }

    /// Read-only Zugriff auf den Zustand
    pub fn state(&self) -> &MappingState {
        &self.state
    }

    /// Verarbeitet eine Geste.
    pub fn dispatch(&mut self, intent: MappingIntent) {
        self.controller.handle_intent(&mut self.state, intent);
    }

    /// Führt einen Command direkt aus.
    pub fn execute(&mut self, command: MappingCommand) {
        self.controller.handle_command(&mut self.state, command);
    }

    // ── Subscriptions ─────────────────────────────────────────────

    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&MappingObject) + 'static,
    ) -> SubscriptionId {
        self.controller.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.controller.unsubscribe(id)
    }

    pub fn subscribe_visibility(
        &mut self,
        callback: impl FnMut(&str, bool) + 'static,
    ) -> SubscriptionId {
        self.controller.subscribe_visibility(callback)
    }

    pub fn unsubscribe_visibility(&mut self, id: SubscriptionId) -> bool {
        self.controller.unsubscribe_visibility(id)
    }

    // ── Gesten ────────────────────────────────────────────────────

    /// Drop eines gezogenen Nodes auf einen Slot oder den freien Pool.
    pub fn on_drop_to_slot(&mut self, dragged_node_id: impl Into<NodeId>, target: SlotRef) {
        self.dispatch(MappingIntent::NodeDropped {
            node_id: dragged_node_id.into(),
            target,
        });
    }

    /// Klick auf einen Node im Slot (`None` = freier Pool).
    pub fn on_select_node_in_slot(&mut self, node_id: impl Into<NodeId>, slot_id: Option<&str>) {
        self.dispatch(MappingIntent::NodeClicked {
            node_id: node_id.into(),
            slot_id: slot_id.map(str::to_string),
        });
    }

    pub fn on_remove_node_from_slot(
        &mut self,
        node_id: impl Into<NodeId>,
        slot_id: impl Into<SlotId>,
    ) {
        self.dispatch(MappingIntent::RemoveNodeFromSlotRequested {
            node_id: node_id.into(),
            slot_id: slot_id.into(),
        });
    }

    pub fn on_clear_slot(&mut self, slot_id: impl Into<SlotId>) {
        self.dispatch(MappingIntent::ClearSlotRequested {
            slot_id: slot_id.into(),
        });
    }

    /// Node über die Auswahlliste eines Slots hinzufügen.
    pub fn on_add_node_in_slot(
        &mut self,
        node_id: impl Into<NodeId>,
        slot_id: impl Into<SlotId>,
    ) {
        self.dispatch(MappingIntent::AddNodeToSlotRequested {
            node_id: node_id.into(),
            slot_id: slot_id.into(),
        });
    }

    /// Modifier-Zustand nach Key-Down/Key-Up.
    pub fn on_modifiers_changed(&mut self, ctrl_cmd: bool, shift: bool) {
        self.dispatch(MappingIntent::ModifiersChanged { ctrl_cmd, shift });
    }

    /// Klick außerhalb des Widgets.
    pub fn on_click_outside(&mut self) {
        self.dispatch(MappingIntent::ClickedOutside);
    }

    pub fn set_slot_visible(&mut self, slot_id: impl Into<SlotId>, visible: bool) {
        self.dispatch(MappingIntent::SlotVisibilityChangeRequested {
            slot_id: slot_id.into(),
            visible,
        });
    }

    pub fn set_mapping(&mut self, mapping: Mapping) {
        self.dispatch(MappingIntent::SetMappingRequested { mapping });
    }

    // ── Abfragen ──────────────────────────────────────────────────

    pub fn can_drop_to_slot(&self, target: &SlotRef) -> bool {
        queries::can_drop(&self.state, target)
    }

    /// Aktueller Mapping-Snapshot
    pub fn mapping(&self) -> &MappingObject {
        &self.state.mapping
    }

    pub fn selection(&self) -> &SelectionState {
        &self.state.selection
    }

    pub fn free_nodes(&self) -> Vec<&MappingNode> {
        queries::free_nodes(&self.state)
    }

    pub fn nodes_in_slot(&self, slot_id: &str) -> Vec<&MappingNode> {
        queries::nodes_in_slot(&self.state, slot_id)
    }

    pub fn nodes_in_other_slots(
        &self,
        exclude_slot_id: &str,
    ) -> Vec<(&MappingSlot, Vec<&MappingNode>)> {
        queries::nodes_in_other_slots(&self.state, exclude_slot_id)
    }

    pub fn unfilled_required_slots(&self) -> Vec<&MappingSlot> {
        queries::unfilled_required_slots(&self.state)
    }

    /// Baut die View für den Renderer.
    pub fn view(&self) -> MappingView {
        self.controller.build_view(&self.state)
    }
}
