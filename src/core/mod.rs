//! Core-Domänentypen: Nodes, Slots, Registry und Mapping-Store.

pub mod mapping;
pub mod node;
pub mod registry;
pub mod slot;

pub use mapping::{Mapping, MappingObject};
pub use node::{MappingNode, NodeId};
pub use registry::EntityRegistry;
pub use slot::{MappingSlot, SlotId, SlotRef, SlotSpec};
