//! # Sud World
//!
//! The data side of the sud interactive-fiction engine: rooms, items, the
//! player character, the event model and the command/message tables.
//! Nothing in this crate performs I/O or drives the game loop; `sud_engine`
//! evaluates events against a game built from these types.

pub mod commands;
pub mod entities;
pub mod events;
pub mod variables;

pub use commands::*;
pub use entities::*;
pub use events::*;
pub use variables::*;
