//! Mapping-Node: ein ziehbares, eindeutig identifiziertes Element.

use serde::{Deserialize, Serialize};

/// ID eines Nodes (vom Aufrufer vergeben, eindeutig pro Session)
pub type NodeId = String;

/// Ein zuordenbares Element mit Anzeige-Label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MappingNode {
    /// Eindeutige ID
    pub id: NodeId,
    /// Anzeige-Label (wird vom Renderer interpretiert)
    pub label: String,
}

impl MappingNode {
    /// Erstellt einen neuen Node.
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
