//! MappingIntent- und MappingCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::MappingCommand;
pub use intent::MappingIntent;
