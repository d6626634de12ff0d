use crate::core::MappingNode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Wie ein Klick mit der bestehenden Selektion kombiniert wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    /// Klick ersetzt die Selektion (erneuter Klick hebt sie auf)
    #[default]
    Single,
    /// Shift gedrückt: Bereichsselektion ab Anker
    OnShift,
    /// Ctrl (bzw. Cmd auf macOS) gedrückt: einzelne Nodes umschalten
    OnCtrlCmd,
}

impl SelectionMode {
    /// Leitet den Modus aus dem Modifier-Zustand ab. Ctrl/Cmd hat Vorrang vor Shift.
    pub fn from_modifiers(ctrl_cmd: bool, shift: bool) -> Self {
        if ctrl_cmd {
            SelectionMode::OnCtrlCmd
        } else if shift {
            SelectionMode::OnShift
        } else {
            SelectionMode::Single
        }
    }
}

/// Auswahlbezogener Sessionzustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Nodes in Auswahlreihenfolge; das letzte Element ist der Bereichs-Anker
    /// (Arc für O(1)-Clone bei Zustands-Snapshots)
    pub selected_nodes: Arc<Vec<MappingNode>>,
    /// Aktueller Selektionsmodus
    pub mode: SelectionMode,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt eine mutable Referenz auf die Selektion zurück (CoW: klont nur wenn nötig).
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut Vec<MappingNode> {
        Arc::make_mut(&mut self.selected_nodes)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected_nodes.len()
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.selected_nodes.iter().any(|node| node.id == node_id)
    }

    /// Anker für die Bereichsselektion (zuletzt hinzugefügter Node)
    pub fn anchor(&self) -> Option<&MappingNode> {
        self.selected_nodes.last()
    }

    /// IDs der Selektion in Auswahlreihenfolge
    pub fn node_ids(&self) -> Vec<String> {
        self.selected_nodes.iter().map(|node| node.id.clone()).collect()
    }
}
