//! Entity-Registry: kanonische Liste aller Nodes und Slots einer Session.

use super::{MappingNode, MappingSlot, SlotSpec};
use indexmap::IndexMap;

/// Hält Nodes und Slots in Registrierungsreihenfolge.
///
/// Identität und Flags (außer `visible`) sind nach der Registrierung fest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityRegistry {
    nodes: IndexMap<String, MappingNode>,
    slots: IndexMap<String, MappingSlot>,
}

impl EntityRegistry {
    /// Erstellt eine Registry; fehlende Slot-Flags werden mit Defaults gefüllt.
    ///
    /// Doppelte IDs: der erste Eintrag gewinnt, spätere werden verworfen.
    pub fn new(
        nodes: impl IntoIterator<Item = MappingNode>,
        slots: impl IntoIterator<Item = SlotSpec>,
    ) -> Self {
        let mut registry = Self::default();
        for node in nodes {
            if registry.nodes.contains_key(&node.id) {
                log::warn!("Doppelte Node-ID '{}' ignoriert", node.id);
                continue;
            }
            registry.nodes.insert(node.id.clone(), node);
        }
        for spec in slots {
            if registry.slots.contains_key(&spec.id) {
                log::warn!("Doppelte Slot-ID '{}' ignoriert", spec.id);
                continue;
            }
            let slot = spec.resolve();
            registry.slots.insert(slot.id.clone(), slot);
        }
        registry
    }

    /// Alle Nodes in Registrierungsreihenfolge
    pub fn nodes(&self) -> impl Iterator<Item = &MappingNode> {
        self.nodes.values()
    }

    /// Alle Slots in Registrierungsreihenfolge
    pub fn slots(&self) -> impl Iterator<Item = &MappingSlot> {
        self.slots.values()
    }

    /// Nur sichtbare Slots
    pub fn visible_slots(&self) -> impl Iterator<Item = &MappingSlot> {
        self.slots.values().filter(|slot| slot.visible)
    }

    pub fn node(&self, node_id: &str) -> Option<&MappingNode> {
        self.nodes.get(node_id)
    }

    pub fn slot(&self, slot_id: &str) -> Option<&MappingSlot> {
        self.slots.get(slot_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Ändert die Sichtbarkeit eines Slots.
    ///
    /// Gibt `true` zurück, wenn sich die Sichtbarkeit tatsächlich geändert hat.
    /// Unbekannte Slots und das Ausblenden von Pflicht-Slots werden ignoriert.
    pub fn set_slot_visible(&mut self, slot_id: &str, visible: bool) -> bool {
        let Some(slot) = self.slots.get_mut(slot_id) else {
            return false;
        };
        if slot.required && !visible {
            log::warn!("Pflicht-Slot '{}' kann nicht ausgeblendet werden", slot_id);
            return false;
        }
        if slot.visible == visible {
            return false;
        }
        slot.visible = visible;
        true
    }

    /// Prüft ohne Mutation, ob `set_slot_visible` etwas ändern würde.
    pub fn would_change_visibility(&self, slot_id: &str, visible: bool) -> bool {
        self.slots
            .get(slot_id)
            .is_some_and(|slot| slot.visible != visible && (visible || !slot.required))
    }
}
