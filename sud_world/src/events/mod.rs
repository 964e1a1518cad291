//! The event model - condition/action pairs evaluated every turn.
//!
//! Every interactive behaviour in a game is an [`Event`]: built-in commands,
//! room transitions, item pick-ups and authored puzzle logic alike. The
//! engine evaluates events against the last input line; this module only
//! describes them.

mod action;
mod condition;

pub use action::*;
pub use condition::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::commands::{
    aliases, complex_map, simple_map, CMD_GAME_LOAD, CMD_GAME_QUIT, CMD_GAME_SAVE,
    CMD_ITEM_COMBINE, CMD_ITEM_GET, CMD_ITEM_USE, CMD_LOOK, CMD_SHOW_HELP, CMD_SHOW_INVENTORY,
    CMD_SHOW_SCORE, CMD_SHOW_STATS,
};
use crate::entities::{Item, ItemId, RoomId};

/// Unique identifier for events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Create a new random event ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A condition paired with the action to run when it holds.
///
/// Events are compared by [`EventId`]; two events with the same condition
/// and action are still distinct entries in an event list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub condition: Condition,
    pub action: Action,
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

impl Event {
    /// Create an event from any condition and action.
    pub fn new(condition: Condition, action: Action) -> Self {
        Self {
            id: EventId::new(),
            condition,
            action,
        }
    }

    /// An event triggered by typing one of `commands`.
    pub fn command<I, S>(commands: I, action: Action) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Condition::command(commands), action)
    }

    /// Move the player to `destination` when one of `commands` is typed.
    pub fn transition<I, S>(commands: I, destination: impl Into<RoomId>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::command(commands, Action::MoveTo(destination.into()))
    }

    /// Print a fixed message when one of `commands` is typed.
    pub fn show_message<I, S>(commands: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::command(commands, Action::ShowMessage(message.into()))
    }

    /// Run the script registered as `script` when one of `commands` is typed.
    pub fn scripted_command<I, S>(commands: I, script: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::command(commands, Action::Script(script.into()))
    }

    /// Run a script whenever `condition` holds.
    pub fn scripted(condition: Condition, script: impl Into<String>) -> Self {
        Self::new(condition, Action::Script(script.into()))
    }

    /// Run a script while the player is in one of `rooms`.
    pub fn on_location<I, R>(rooms: I, script: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RoomId>,
    {
        let rooms = rooms.into_iter().map(Into::into).collect();
        Self::scripted(Condition::Location(rooms), script)
    }

    /// Run a script once the score has reached `threshold`.
    pub fn on_score(threshold: u32, script: impl Into<String>) -> Self {
        Self::scripted(Condition::Score(threshold), script)
    }

    /// Built-in "look": describe the current room.
    pub fn look_room() -> Self {
        Self::command(aliases(CMD_LOOK), Action::DescribeRoom)
    }

    /// "look key", "examine key", ... shows the item description.
    pub fn look_item(item: ItemId, item_name: &str) -> Self {
        Self::command(simple_map(CMD_LOOK, item_name), Action::DescribeItem(item))
    }

    /// "get key", "take key", ... picks the item up from the current room.
    pub fn pick_up(item: ItemId, item_name: &str) -> Self {
        Self::command(simple_map(CMD_ITEM_GET, item_name), Action::PickUp(item))
    }

    /// "use key", "u key" runs the item's use behaviour.
    pub fn use_item(item: ItemId, item_name: &str) -> Self {
        Self::command(simple_map(CMD_ITEM_USE, item_name), Action::UseItem(item))
    }

    /// Combine two held items into `result`, in either noun order.
    pub fn combine(first: &Item, second: &Item, result: &Item) -> Self {
        let commands = complex_map(CMD_ITEM_COMBINE, &first.name, &second.name);
        Self::new(
            Condition::All(vec![
                Condition::Command(commands),
                Condition::HoldsItem(first.id),
                Condition::HoldsItem(second.id),
            ]),
            Action::Combine {
                first: first.id,
                second: second.id,
                result: result.id,
            },
        )
    }

    /// Use two held items together; the script decides what happens.
    pub fn use_item_with_item(first: &Item, second: &Item, script: impl Into<String>) -> Self {
        let commands = complex_map(CMD_ITEM_USE, &first.name, &second.name);
        Self::scripted(
            Condition::All(vec![
                Condition::Command(commands),
                Condition::HoldsItem(first.id),
                Condition::HoldsItem(second.id),
            ]),
            script,
        )
    }

    /// Built-in "score".
    pub fn show_score() -> Self {
        Self::command(aliases(CMD_SHOW_SCORE), Action::ShowScore)
    }

    /// Built-in "i" / "inv": list what the player carries.
    pub fn show_inventory() -> Self {
        Self::command(aliases(CMD_SHOW_INVENTORY), Action::ShowInventory)
    }

    /// Built-in "stats": rooms visited out of the total.
    pub fn show_stats() -> Self {
        Self::command(aliases(CMD_SHOW_STATS), Action::ShowStats)
    }

    /// Built-in "h" / "?".
    pub fn show_help() -> Self {
        Self::command(aliases(CMD_SHOW_HELP), Action::ShowHelp)
    }

    /// Built-in "quit": say goodbye and stop the game.
    pub fn quit_game() -> Self {
        Self::command(aliases(CMD_GAME_QUIT), Action::QuitGame)
    }

    /// Built-in "save" into the manager's default slot.
    pub fn save_game() -> Self {
        Self::command(aliases(CMD_GAME_SAVE), Action::SaveGame)
    }

    /// Built-in "load" / "resume" from the manager's default slot.
    pub fn load_game() -> Self {
        Self::command(aliases(CMD_GAME_LOAD), Action::LoadGame)
    }

    /// Command aliases that trigger this event, if it is command driven.
    pub fn commands(&self) -> Option<&[String]> {
        self.condition.aliases()
    }

    /// Destination room if this event is a transition.
    pub fn destination(&self) -> Option<&RoomId> {
        match &self.action {
            Action::MoveTo(room) => Some(room),
            _ => None,
        }
    }

    /// Whether firing this event moves the player.
    pub fn is_transition(&self) -> bool {
        self.destination().is_some()
    }

    /// Script tag run by this event, if any.
    pub fn script(&self) -> Option<&str> {
        match &self.action {
            Action::Script(tag) => Some(tag),
            _ => None,
        }
    }
}
