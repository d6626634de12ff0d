//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und der View-Schicht geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

mod mapping_view;
pub mod options;

pub use mapping_view::{MappingView, NodeView, PoolView, SlotView};
pub use options::MappingOptions;
pub use options::{COMMAND_LOG_MAX_ENTRIES, FREE_SLOT_LABEL};
