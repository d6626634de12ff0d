//! Mapping-Store: Zuordnung Slot-ID -> geordnete Node-IDs.
//!
//! Zentrale Invariante: eine Node-ID steht höchstens in einer Sequenz.
//! Alle mutierenden Operationen halten sie ein; nur `from_entries`
//! (verbatim gesetztes Mapping) überlässt die Konsistenz dem Aufrufer.

use super::{MappingSlot, NodeId, SlotId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Slot-ID -> Node-IDs in Einfügereihenfolge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: IndexMap<SlotId, Vec<NodeId>>,
}

/// Serialisierbarer Mapping-Snapshot, wie ihn Subscriber erhalten.
pub type MappingObject = Mapping;

impl Mapping {
    /// Erstellt ein leeres Mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt Einträge unverändert (keine Validierung gegen die Registry).
    pub fn from_entries<I, S, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<N>)>,
        S: Into<SlotId>,
        N: Into<NodeId>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(slot, nodes)| (slot.into(), nodes.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Node-IDs eines Slots (leer, wenn unbekannt)
    pub fn node_ids(&self, slot_id: &str) -> &[NodeId] {
        self.entries.get(slot_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Alle Einträge in Slot-Reihenfolge
    pub fn iter(&self) -> impl Iterator<Item = (&SlotId, &Vec<NodeId>)> {
        self.entries.iter()
    }

    /// Gibt zurück, ob für den Slot ein Eintrag existiert (auch leer).
    pub fn contains_slot(&self, slot_id: &str) -> bool {
        self.entries.contains_key(slot_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Slot, in dem der Node aktuell steht
    pub fn slot_of(&self, node_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, ids)| ids.iter().any(|id| id == node_id))
            .map(|(slot_id, _)| slot_id.as_str())
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.slot_of(node_id).is_some()
    }

    pub fn slot_contains(&self, slot_id: &str, node_id: &str) -> bool {
        self.node_ids(slot_id).iter().any(|id| id == node_id)
    }

    /// Menge aller zugeordneten Node-IDs
    pub fn assigned_node_ids(&self) -> HashSet<&str> {
        self.entries
            .values()
            .flat_map(|ids| ids.iter().map(String::as_str))
            .collect()
    }

    /// Node-IDs, die mehrfach vorkommen (leer bei konsistentem Mapping)
    pub fn duplicate_node_ids(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for id in self.entries.values().flatten() {
            if !seen.insert(id.as_str()) && !duplicates.contains(&id.as_str()) {
                duplicates.push(id.as_str());
            }
        }
        duplicates
    }

    /// Entfernt doppelte IDs, erste Vorkommen bleiben in Reihenfolge.
    pub fn dedup_ids(node_ids: &[NodeId]) -> Vec<NodeId> {
        let mut unique: Vec<NodeId> = Vec::with_capacity(node_ids.len());
        for id in node_ids {
            if !unique.contains(id) {
                unique.push(id.clone());
            }
        }
        unique
    }

    /// Setzt Node(s) in einen Slot und entfernt sie vorher aus jedem anderen Slot.
    ///
    /// Mehr als eine ID für einen Einzel-Slot wird still abgewiesen (`false`),
    /// auch wenn es dieselbe ID mehrfach ist.
    pub fn assign_to_slot(&mut self, node_ids: &[NodeId], slot: &MappingSlot) -> bool {
        if !slot.accepts_batch(node_ids.len()) {
            return false;
        }
        let incoming = Self::dedup_ids(node_ids);

        for id in &incoming {
            self.remove_from_any_slot(id);
        }

        if slot.allow_multiple {
            self.entries
                .entry(slot.id.clone())
                .or_default()
                .extend(incoming);
        } else {
            self.entries.insert(slot.id.clone(), incoming);
        }
        true
    }

    /// Entfernt einen Node aus dem genannten Slot. Gibt `true` zurück, wenn er dort stand.
    pub fn remove_node(&mut self, node_id: &str, slot_id: &str) -> bool {
        let Some(ids) = self.entries.get_mut(slot_id) else {
            return false;
        };
        let before = ids.len();
        ids.retain(|id| id != node_id);
        ids.len() != before
    }

    /// Entfernt einen Node aus allen Slots, auch mehrfache Vorkommen.
    pub fn remove_from_any_slot(&mut self, node_id: &str) -> bool {
        let mut removed = false;
        for ids in self.entries.values_mut() {
            let before = ids.len();
            ids.retain(|id| id != node_id);
            removed |= ids.len() != before;
        }
        removed
    }

    /// Leert die Sequenz eines Slots (legt sie bei Bedarf leer an).
    pub fn clear_slot(&mut self, slot_id: &str) {
        match self.entries.get_mut(slot_id) {
            Some(ids) => ids.clear(),
            None => {
                self.entries.insert(slot_id.to_string(), Vec::new());
            }
        }
    }
}

#[cfg(test)]
mod tests;
