//! What an event does once its condition holds.

use serde::{Deserialize, Serialize};

use crate::entities::{ItemId, RoomId};

/// The success action of an event. Executed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Move the player and render the destination.
    MoveTo(RoomId),
    ShowMessage(String),
    /// Render the current room.
    DescribeRoom,
    /// Show the description of an item.
    DescribeItem(ItemId),
    /// Move the item from the current room into the inventory, award its
    /// score and retire the triggering event.
    PickUp(ItemId),
    /// Run the item's own use behaviour.
    UseItem(ItemId),
    /// Replace two held items by a third.
    Combine {
        first: ItemId,
        second: ItemId,
        result: ItemId,
    },
    /// Run an authored script registered under this tag.
    Script(String),
    ShowScore,
    ShowInventory,
    ShowStats,
    ShowHelp,
    QuitGame,
    SaveGame,
    LoadGame,
}
