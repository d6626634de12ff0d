//! Zentrale Konfiguration für Mapping-Sessions.
//!
//! `MappingOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Anzeige ─────────────────────────────────────────────────────────

/// Standard-Überschrift des freien Pools.
pub const FREE_SLOT_LABEL: &str = "Available";

// ── Command-Log ─────────────────────────────────────────────────────

/// Maximale Anzahl geloggter Commands pro Session.
pub const COMMAND_LOG_MAX_ENTRIES: usize = 1000;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Session-Optionen.
/// Wird als `data_mapping.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingOptions {
    /// Überschrift des freien Pools
    pub free_slot_label: String,
    /// Grenze des Command-Logs
    pub command_log_max_entries: usize,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            free_slot_label: FREE_SLOT_LABEL.to_string(),
            command_log_max_entries: COMMAND_LOG_MAX_ENTRIES,
        }
    }
}

impl MappingOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt sie oder ist sie fehlerhaft,
    /// werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("data-mapping-replay"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("data_mapping.toml")
    }
}
