//! Use-Cases: die eigentlichen Zustandsübergänge auf dem MappingState.

pub mod data;
pub mod mapping;
pub mod selection;
