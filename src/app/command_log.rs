//! Begrenztes Command-Log zur Nachvollziehbarkeit ausgeführter Schritte.

use super::MappingCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Debug, Clone)]
pub struct CommandLog {
    entries: Vec<MappingCommand>,
    max_entries: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    const DEFAULT_MAX_ENTRIES: usize = 1000;

    /// Erstellt ein leeres Command-Log mit Standardgrenze.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Erstellt ein leeres Command-Log mit eigener Grenze (mindestens 2).
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(2),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Bei voller Grenze wird die ältere Hälfte verworfen.
    pub fn record(&mut self, command: MappingCommand) {
        if self.entries.len() >= self.max_entries {
            self.entries.drain(..self.max_entries / 2);
        }
        self.entries.push(command);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[MappingCommand] {
        &self.entries
    }

    /// Zuletzt ausgeführter Command
    pub fn last(&self) -> Option<&MappingCommand> {
        self.entries.last()
    }
}
