//! # Sud Engine
//!
//! Drives a game built from `sud_world` data. Each turn reads one line of
//! player input, runs every matching event and renders the result.
//!
//! ## Core Components
//!
//! - **game**: the `Game` aggregate, world mutation helpers and the turn pass
//! - **dispatch**: how each event action mutates the game
//! - **scripts**: registry of authored event behaviour, looked up by tag
//! - **persistence**: `GameManager`, save stores and the save file format
//! - **console**: the line-oriented I/O seam used by the game loop
//! - **config** / **content**: TOML configuration and JSON room definitions

pub mod config;
pub mod console;
pub mod content;
pub mod dispatch;
pub mod error;
pub mod game;
pub mod persistence;
pub mod scripts;

pub use config::*;
pub use console::*;
pub use content::*;
pub use dispatch::*;
pub use error::*;
pub use game::*;
pub use persistence::*;
pub use scripts::*;
