//! Data-Mapping Core Library.
//! Zustandsmaschine für Drag-and-Drop-Zuordnung von Nodes zu Slots,
//! als Library exportiert für View-Schichten und Tests.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    build_mapping_view, reduce, MappingCommand, MappingController, MappingIntent, MappingSession,
    MappingState, SelectionMode, SelectionState, SubscriptionId,
};
pub use core::{
    EntityRegistry, Mapping, MappingNode, MappingObject, MappingSlot, NodeId, SlotId, SlotRef,
    SlotSpec,
};
pub use shared::{MappingOptions, MappingView, NodeView, PoolView, SlotView};
