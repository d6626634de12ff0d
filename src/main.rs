//! Data-Mapping Replay.
//!
//! Spielt eine aufgezeichnete Gesten-Folge (JSON) gegen eine headless
//! Mapping-Session ab und gibt das finale Mapping als JSON aus.

use anyhow::Context;
use data_mapping_core::{
    Mapping, MappingIntent, MappingNode, MappingOptions, MappingSession, SlotSpec,
};
use serde::Deserialize;

/// Aufbau einer Replay-Datei
#[derive(Debug, Deserialize)]
struct ReplayFile {
    nodes: Vec<MappingNode>,
    slots: Vec<SlotSpec>,
    #[serde(default)]
    mapping: Option<Mapping>,
    #[serde(default)]
    intents: Vec<MappingIntent>,
}

fn main() -> anyhow::Result<()> {
    ReplayRunner::run()
}

struct ReplayRunner;

impl ReplayRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Data-Mapping Replay v{} startet...", env!("CARGO_PKG_VERSION"));

        let path = std::env::args()
            .nth(1)
            .context("Aufruf: data-mapping-replay <replay.json>")?;
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Replay-Datei nicht lesbar: {}", path))?;
        let replay: ReplayFile = serde_json::from_str(&content)
            .with_context(|| format!("Replay-Datei fehlerhaft: {}", path))?;

        // Optionen aus TOML laden (oder Standardwerte)
        let options = MappingOptions::load_from_file(&MappingOptions::config_path());

        let mut session =
            MappingSession::with_options(options, replay.nodes, replay.slots, replay.mapping);
        session.subscribe(|mapping| match serde_json::to_string(mapping) {
            Ok(json) => log::info!("Mapping geändert: {}", json),
            Err(e) => log::warn!("Mapping nicht serialisierbar: {}", e),
        });

        let intent_count = replay.intents.len();
        for intent in replay.intents {
            session.dispatch(intent);
        }
        log::info!("{} Gesten abgespielt", intent_count);

        for slot in session.unfilled_required_slots() {
            log::warn!("Pflicht-Slot '{}' ist leer", slot.id);
        }

        println!("{}", serde_json::to_string_pretty(session.mapping())?);
        Ok(())
    }
}
