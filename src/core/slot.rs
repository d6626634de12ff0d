//! Slot-Typen: Drop-Ziele mit Kardinalität und Sichtbarkeit.

use serde::{Deserialize, Serialize};

/// ID eines Slots
pub type SlotId = String;

/// Vollständig aufgelöster Slot (alle optionalen Flags gesetzt)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSlot {
    /// Eindeutige ID
    pub id: SlotId,
    /// Anzeige-Label
    pub label: String,
    /// Slot nimmt mehrere Nodes auf (sonst höchstens einen)
    pub allow_multiple: bool,
    /// Pflicht-Slot (kann nicht ausgeblendet werden)
    pub required: bool,
    /// Slot wird angezeigt
    pub visible: bool,
}

impl MappingSlot {
    /// Erstellt einen Slot mit Standardwerten (multiple, optional, sichtbar).
    pub fn new(id: impl Into<SlotId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            allow_multiple: true,
            required: false,
            visible: true,
        }
    }

    /// Setzt die Kardinalität.
    pub fn with_allow_multiple(mut self, allow_multiple: bool) -> Self {
        self.allow_multiple = allow_multiple;
        self
    }

    /// Prüft, ob `batch_len` Nodes gemeinsam in diesen Slot passen.
    pub fn accepts_batch(&self, batch_len: usize) -> bool {
        self.allow_multiple || batch_len <= 1
    }
}

/// Slot-Beschreibung wie vom Aufrufer geliefert (Flags optional).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSpec {
    pub id: SlotId,
    pub label: String,
    #[serde(default)]
    pub allow_multiple: Option<bool>,
    #[serde(default)]
    pub required: Option<bool>,
    #[serde(default)]
    pub visible: Option<bool>,
}

impl SlotSpec {
    /// Erstellt eine Beschreibung ohne gesetzte Flags.
    pub fn new(id: impl Into<SlotId>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            allow_multiple: None,
            required: None,
            visible: None,
        }
    }

    /// Füllt fehlende Flags mit den Standardwerten auf.
    pub fn resolve(self) -> MappingSlot {
        MappingSlot {
            id: self.id,
            label: self.label,
            allow_multiple: self.allow_multiple.unwrap_or(true),
            required: self.required.unwrap_or(false),
            visible: self.visible.unwrap_or(true),
        }
    }
}

/// Verweis auf einen Kontext: der freie Pool oder ein konkreter Slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum SlotRef {
    /// Implizite Menge aller nicht zugeordneten Nodes
    Free,
    /// Ein registrierter Slot
    Slot(SlotId),
}

impl SlotRef {
    /// Baut einen Verweis aus einer optionalen Slot-ID (None = freier Pool).
    pub fn from_option(slot_id: Option<SlotId>) -> Self {
        slot_id.map_or(SlotRef::Free, SlotRef::Slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_resolves_defaults() {
        let slot = SlotSpec::new("s1", "S1").resolve();
        assert!(slot.allow_multiple);
        assert!(!slot.required);
        assert!(slot.visible);
    }

    #[test]
    fn spec_keeps_explicit_flags() {
        let spec = SlotSpec {
            allow_multiple: Some(false),
            required: Some(true),
            visible: Some(false),
            ..SlotSpec::new("s1", "S1")
        };
        let slot = spec.resolve();
        assert!(!slot.allow_multiple);
        assert!(slot.required);
        assert!(!slot.visible);
    }

    #[test]
    fn single_slot_rejects_batches() {
        let slot = MappingSlot::new("s1", "S1").with_allow_multiple(false);
        assert!(slot.accepts_batch(0));
        assert!(slot.accepts_batch(1));
        assert!(!slot.accepts_batch(2));
        assert!(MappingSlot::new("s2", "S2").accepts_batch(5));
    }

    #[test]
    fn slot_spec_deserializes_camel_case() {
        let spec: SlotSpec =
            serde_json::from_str(r#"{"id":"s1","label":"S1","allowMultiple":false}"#)
                .expect("SlotSpec sollte parsebar sein");
        assert_eq!(spec.allow_multiple, Some(false));
        assert_eq!(spec.required, None);
    }
}
