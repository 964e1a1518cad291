//! The save file format.
//!
//! A save is a JSON envelope naming the format and schema version, with the
//! whole game under the `data` key:
//!
//! ```text
//! { "format": "sud-save", "version": 1, "data": { ...game... } }
//! ```
//!
//! The envelope is checked before the game itself is decoded, so a file from
//! another schema version is rejected instead of half-parsed.

use serde::{Deserialize, Serialize};
use sud_world::FlagValue;

use super::PersistenceError;
use crate::game::Game;

pub const SAVE_FORMAT: &str = "sud-save";
pub const SAVE_VERSION: u32 = 1;

#[derive(Serialize)]
struct SaveFileRef<'a> {
    format: &'a str,
    version: u32,
    data: &'a Game,
}

#[derive(Deserialize)]
struct SaveFile {
    format: String,
    version: u32,
    data: serde_json::Value,
}

/// Serialize a game into a save document.
///
/// JSON has no NaN or infinity, so a variable holding one is refused here
/// instead of producing a save that cannot be read back.
pub fn encode(game: &Game) -> Result<String, PersistenceError> {
    if let Some((key, _)) = game
        .variables()
        .iter()
        .find(|(_, value)| matches!(value, FlagValue::Float(f) if !f.is_finite()))
    {
        return Err(PersistenceError::NonFiniteNumber(key.to_string()));
    }

    let file = SaveFileRef {
        format: SAVE_FORMAT,
        version: SAVE_VERSION,
        data: game,
    };
    Ok(serde_json::to_string_pretty(&file)?)
}

/// Decode a save document. The returned game is not running and has no
/// scripts or manager attached.
pub fn decode(contents: &str) -> Result<Game, PersistenceError> {
    let file: SaveFile = serde_json::from_str(contents)?;
    if file.format != SAVE_FORMAT {
        return Err(PersistenceError::UnknownFormat(file.format));
    }
    if file.version != SAVE_VERSION {
        return Err(PersistenceError::IncompatibleVersion {
            found: file.version,
            expected: SAVE_VERSION,
        });
    }
    Ok(serde_json::from_value(file.data)?)
}
