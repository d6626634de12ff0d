use crate::app::CommandLog;
use crate::core::{EntityRegistry, Mapping, MappingNode, SlotSpec};
use crate::shared::MappingOptions;
use std::sync::Arc;

use super::SelectionState;

/// Hauptzustand einer Mapping-Session
///
/// Registry, Mapping und Selektion liegen hinter `Arc`: ein Clone teilt sie,
/// Mutationen laufen über `Arc::make_mut` (Copy-on-Write).
#[derive(Clone, Debug)]
pub struct MappingState {
    /// Kanonische Nodes und Slots
    pub registry: Arc<EntityRegistry>,
    /// Slot -> Node-IDs
    pub mapping: Arc<Mapping>,
    /// Transiente Mehrfachselektion
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: MappingOptions,
}

impl MappingState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(MappingOptions::default())
    }

    /// Erstellt einen leeren Zustand mit den gegebenen Optionen.
    pub fn with_options(options: MappingOptions) -> Self {
        Self {
            registry: Arc::new(EntityRegistry::default()),
            mapping: Arc::new(Mapping::new()),
            selection: SelectionState::new(),
            command_log: CommandLog::with_capacity(options.command_log_max_entries),
            options,
        }
    }

    /// Erstellt einen Zustand aus Session-Eingaben (Nodes, Slots, optionales Mapping).
    pub fn from_data(
        nodes: Vec<MappingNode>,
        slots: Vec<SlotSpec>,
        initial_mapping: Option<Mapping>,
    ) -> Self {
        let mut state = Self::new();
        state.registry = Arc::new(EntityRegistry::new(nodes, slots));
        if let Some(mapping) = initial_mapping {
            state.mapping = Arc::new(mapping);
        }
        state
    }

    /// Mutable Registry (CoW)
    #[inline]
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        Arc::make_mut(&mut self.registry)
    }

    /// Mutables Mapping (CoW)
    #[inline]
    pub fn mapping_mut(&mut self) -> &mut Mapping {
        Arc::make_mut(&mut self.mapping)
    }

    /// Anzahl registrierter Nodes (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.registry.node_count()
    }

    /// Anzahl registrierter Slots (für UI-Anzeige)
    pub fn slot_count(&self) -> usize {
        self.registry.slot_count()
    }
}

impl Default for MappingState {
    fn default() -> Self {
        Self::new()
    }
}
