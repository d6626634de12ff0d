//! Mapping-View als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und die View-Schicht sie konsumiert.

use crate::core::{MappingNode, MappingSlot};

/// Ein Node, wie er in einem Slot oder im freien Pool gezeichnet wird.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeView {
    pub node: MappingNode,
    /// Node ist Teil der aktuellen Mehrfachselektion
    pub selected: bool,
}

/// Der freie Pool (alle nicht zugeordneten Nodes)
#[derive(Debug, Clone, PartialEq)]
pub struct PoolView {
    /// Überschrift des Pools (aus den Optionen)
    pub label: String,
    pub nodes: Vec<NodeView>,
}

/// Ein sichtbarer Slot mit seinen aufgelösten Nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotView {
    pub slot: MappingSlot,
    pub nodes: Vec<NodeView>,
    /// Ein Drop der aktuellen Selektion wäre zulässig
    pub droppable: bool,
    /// Pflicht-Slot ohne Inhalt
    pub missing_required: bool,
}

/// Read-only Daten für einen Render-Durchlauf.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingView {
    pub free_pool: PoolView,
    /// Nur sichtbare Slots, in Registrierungsreihenfolge
    pub slots: Vec<SlotView>,
    /// Anzahl selektierter Nodes
    pub selection_len: usize,
}

impl MappingView {
    /// Sucht die View eines Slots.
    pub fn slot(&self, slot_id: &str) -> Option<&SlotView> {
        self.slots.iter().find(|view| view.slot.id == slot_id)
    }

    /// Gibt zurück, ob alle Pflicht-Slots befüllt sind.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|view| !view.missing_required)
    }
}
