//! Errors raised while playing a game.

use sud_world::{ItemId, RoomId};
use thiserror::Error;

use crate::persistence::PersistenceError;

/// Failures that stop the current turn.
///
/// Unmatched input is not an error; it is reported to the player as a
/// gameplay message. Everything here points at an authoring bug or a broken
/// environment and is propagated to the caller of the game loop.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("item is not held by the player: {0}")]
    ItemNotHeld(ItemId),

    #[error("user-defined variable not set: {0}")]
    VariableNotSet(String),

    #[error("no script registered under tag: {0}")]
    ScriptNotFound(String),

    #[error("the player has not been placed in a room")]
    NoCurrentRoom,

    #[error("game is not linked to a game manager")]
    ManagerNotLinked,

    /// Raised by authored scripts.
    #[error("script error: {0}")]
    Script(String),

    #[error("console error: {0}")]
    Console(#[from] std::io::Error),

    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}
