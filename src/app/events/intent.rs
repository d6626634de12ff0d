use crate::core::{Mapping, MappingNode, SlotId, SlotRef, SlotSpec};
use serde::Deserialize;

/// Intents sind Gesten aus der View-Schicht ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MappingIntent {
    /// Session (neu) initialisieren: Nodes, Slots und optional ein Start-Mapping
    DataProvided {
        nodes: Vec<MappingNode>,
        slots: Vec<SlotSpec>,
        #[serde(default)]
        mapping: Option<Mapping>,
    },
    /// Mapping komplett ersetzen
    SetMappingRequested { mapping: Mapping },
    /// Gezogener Node wurde auf einem Slot oder dem freien Pool abgelegt
    NodeDropped { node_id: String, target: SlotRef },
    /// Node angeklickt (im Slot oder, ohne `slot_id`, im freien Pool)
    NodeClicked {
        node_id: String,
        #[serde(default)]
        slot_id: Option<SlotId>,
    },
    /// Schließen-Button eines Tags im Slot
    RemoveNodeFromSlotRequested { node_id: String, slot_id: SlotId },
    /// Slot leeren (Clear-Button der Auswahlliste)
    ClearSlotRequested { slot_id: SlotId },
    /// Node über die Auswahlliste eines Slots hinzufügen
    AddNodeToSlotRequested { node_id: String, slot_id: SlotId },
    /// Modifier-Tasten haben sich geändert (Key-Down / Key-Up)
    ModifiersChanged { ctrl_cmd: bool, shift: bool },
    /// Klick außerhalb des Widgets bzw. Fokusverlust
    ClickedOutside,
    /// Selektion explizit aufheben
    ClearSelectionRequested,
    /// Sichtbarkeit eines Slots umschalten
    SlotVisibilityChangeRequested { slot_id: SlotId, visible: bool },
}
