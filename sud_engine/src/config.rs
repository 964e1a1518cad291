//! TOML game configuration.
//!
//! ```toml
//! player_default_name = "Alex"
//! save_path = "saves/slot1.json"
//! start_room = "1"
//!
//! [game]
//! save_enabled = true
//! show_room_exits = false
//!
//! [messages]
//! prompt = ">"
//! invalid_command = "I don't understand."
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use sud_world::Messages;

use crate::game::{Game, GameSettings};
use crate::persistence::DEFAULT_SAVE_SLOT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Used when the player does not give a name.
    pub player_default_name: String,
    /// Save slot used by the save/load commands.
    pub save_path: String,
    /// Room the player starts in. The first room when unset.
    pub start_room: Option<String>,
    pub game: GameSettings,
    pub messages: Messages,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_default_name: "Player".to_string(),
            save_path: DEFAULT_SAVE_SLOT.to_string(),
            start_room: None,
            game: GameSettings::default(),
            messages: Messages::default(),
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// An empty game with these settings and messages.
    pub fn new_game(&self, player_name: Option<&str>) -> Game {
        let name = match player_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.player_default_name.as_str(),
        };
        Game::with_settings(name, self.game).with_messages(self.messages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.save_path, DEFAULT_SAVE_SLOT);
    }

    #[test]
    fn test_partial_overrides() {
        let config = GameConfig::from_toml_str(
            r#"
            player_default_name = "Alex"
            start_room = "2"

            [game]
            save_enabled = false

            [messages]
            invalid_command = "Huh?"
            "#,
        )
        .unwrap();

        assert_eq!(config.player_default_name, "Alex");
        assert_eq!(config.start_room.as_deref(), Some("2"));
        assert!(!config.game.save_enabled);
        assert!(config.game.show_room_exits);
        assert_eq!(config.messages.invalid_command, "Huh?");
        assert_eq!(config.messages.prompt, Messages::default().prompt);
    }

    #[test]
    fn test_new_game_player_name() {
        let config = GameConfig::from_toml_str("player_default_name = \"Alex\"").unwrap();
        assert_eq!(config.new_game(None).player().name, "Alex");
        assert_eq!(config.new_game(Some("  ")).player().name, "Alex");
        assert_eq!(config.new_game(Some("Sam")).player().name, "Sam");
    }

    #[test]
    fn test_new_game_without_save_commands() {
        let config = GameConfig::from_toml_str("[game]\nsave_enabled = false").unwrap();
        let with_save = GameConfig::default().new_game(None);
        let without = config.new_game(None);
        assert_eq!(
            with_save.global_events().len(),
            without.global_events().len() + 2
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = GameConfig::from_toml_str("save_path = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "save_path = \"slot.json\"").unwrap();
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.save_path, "slot.json");

        let missing = GameConfig::from_file(file.path().with_extension("missing"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }
}
