//! Application State — zentrale Datenhaltung einer Mapping-Session.

mod app_state;
mod selection;

pub use app_state::MappingState;
pub use selection::{SelectionMode, SelectionState};
