//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod mapping_view;
pub mod observers;
pub mod queries;
pub mod session;
/// Session-Zustand (Registry, Mapping, Selektion)
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::{reduce, MappingController};
pub use events::{MappingCommand, MappingIntent};
pub use mapping_view::build as build_mapping_view;
pub use observers::{SlotVisibilityChange, SubscriptionId};
pub use session::MappingSession;
pub use state::{MappingState, SelectionMode, SelectionState};
