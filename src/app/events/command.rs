use crate::app::SelectionMode;
use crate::core::{Mapping, MappingNode, NodeId, SlotId, SlotSpec};

/// Commands sind atomare, mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum MappingCommand {
    // === Registry ===
    /// Nodes und Slots ersetzen
    SetData {
        nodes: Vec<MappingNode>,
        slots: Vec<SlotSpec>,
    },
    /// Registry leeren
    ClearData,
    /// Sichtbarkeit eines Slots setzen
    SetSlotVisible { slot_id: SlotId, visible: bool },

    // === Mapping-Store ===
    /// Mapping verbatim ersetzen (keine Validierung)
    SetMapping { mapping: Mapping },
    /// Node(s) in einen Slot verschieben
    AssignToSlot {
        node_ids: Vec<NodeId>,
        slot_id: SlotId,
    },
    /// Einzelnen Node aus einem Slot entfernen
    RemoveNode { node_id: NodeId, slot_id: SlotId },
    /// Node(s) aus allen Slots entfernen (zurück in den freien Pool)
    RemoveFromAnySlot { node_ids: Vec<NodeId> },
    /// Slot leeren
    ClearSlot { slot_id: SlotId },

    // === Selektion ===
    /// Selektionsmodus setzen
    ChangeSelectionMode { mode: SelectionMode },
    /// Node gemäß Modus (de)selektieren; `context` = Nodes im selben Slot/Pool
    ToggleSelection {
        node: MappingNode,
        context: Vec<MappingNode>,
    },
    /// Selektion aufheben
    ClearSelection,
}
