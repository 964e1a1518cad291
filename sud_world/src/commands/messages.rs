//! Message templates shown to the player.

use serde::{Deserialize, Serialize};

/// Every user-facing string the engine emits on its own.
///
/// Missing fields fall back to the defaults when deserialized, so a config
/// file only needs to list the messages it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub prompt: String,
    pub invalid_command: String,
    pub help: String,
    pub room_items: String,
    /// Exit line is `"{room_exits_lead} {room} {room_exits_using} {aliases}"`.
    pub room_exits_lead: String,
    pub room_exits_using: String,
    pub player_inventory: String,
    pub player_stats: String,
    pub player_score: String,
    pub game_start: String,
    pub game_resume: String,
    pub game_end: String,
    pub item_retrieved: String,
    pub item_combined: String,
    pub game_saved: String,
    pub save_failed: String,
    pub load_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            prompt: "~$>".to_string(),
            invalid_command: "Invalid input".to_string(),
            help: "THIS IS THE HELP TEXT".to_string(),
            room_items: "You see".to_string(),
            room_exits_lead: "You may go to".to_string(),
            room_exits_using: "using".to_string(),
            player_inventory: "You have:".to_string(),
            player_stats: "Rooms visited:".to_string(),
            player_score: "Your score is".to_string(),
            game_start: "Welcome".to_string(),
            game_resume: "welcome back".to_string(),
            game_end: "Goodbye!".to_string(),
            item_retrieved: "You get".to_string(),
            item_combined: "Items successfully combined!".to_string(),
            game_saved: "Game saved.".to_string(),
            save_failed: "The game could not be saved.".to_string(),
            load_failed: "The saved game could not be loaded.".to_string(),
        }
    }
}
