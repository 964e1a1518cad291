//! JSON room definitions.
//!
//! A content file is a list of rooms. Transitions refer to other rooms by
//! id, so the world is built in two passes: every room is created first,
//! then the transitions are linked.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use sud_world::{Item, Room, RoomId, DEFAULT_SCORE_VALUE};

use crate::game::Game;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot read content {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate room id: {0}")]
    DuplicateRoom(RoomId),

    #[error("room {room} has an exit to unknown room {destination}")]
    UnknownDestination { room: RoomId, destination: RoomId },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDefinition {
    pub id: RoomId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub transitions: Vec<TransitionDefinition>,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDefinition {
    pub destination: RoomId,
    pub commands: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_score_value")]
    pub score_value: u32,
    /// Script run when the item is used.
    #[serde(default)]
    pub use_script: Option<String>,
}

fn default_score_value() -> u32 {
    DEFAULT_SCORE_VALUE
}

impl ItemDefinition {
    fn build(&self) -> Item {
        let item = Item::new(&self.name, &self.description).with_score_value(self.score_value);
        match &self.use_script {
            Some(script) => item.with_use_script(script),
            None => item,
        }
    }
}

pub fn parse_rooms(source: &str) -> Result<Vec<RoomDefinition>, ContentError> {
    Ok(serde_json::from_str(source)?)
}

pub fn load_rooms(path: impl AsRef<Path>) -> Result<Vec<RoomDefinition>, ContentError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rooms(&source)
}

/// Linked rooms and the items placed in them.
#[derive(Debug, Clone)]
pub struct World {
    pub rooms: Vec<Room>,
    pub items: Vec<Item>,
}

pub fn build_world(definitions: &[RoomDefinition]) -> Result<World, ContentError> {
    let mut ids = HashSet::new();
    for def in definitions {
        if !ids.insert(&def.id) {
            return Err(ContentError::DuplicateRoom(def.id.clone()));
        }
    }

    let mut rooms = Vec::with_capacity(definitions.len());
    let mut items = Vec::new();
    for def in definitions {
        let mut room = Room::new(def.id.clone(), &def.name, &def.description);
        for item_def in &def.items {
            let item = item_def.build();
            room.add_item(&item);
            items.push(item);
        }
        rooms.push(room);
    }

    for (room, def) in rooms.iter_mut().zip(definitions) {
        for transition in &def.transitions {
            if !ids.contains(&transition.destination) {
                return Err(ContentError::UnknownDestination {
                    room: def.id.clone(),
                    destination: transition.destination.clone(),
                });
            }
            room.add_transition(
                transition.commands.iter().cloned(),
                transition.destination.clone(),
            );
        }
    }

    debug!(rooms = rooms.len(), items = items.len(), "world built");
    Ok(World { rooms, items })
}

/// Build `definitions` and add the result to `game`.
///
/// Room ids must not clash with rooms the game already has. Nothing is added
/// on error.
pub fn install(game: &mut Game, definitions: &[RoomDefinition]) -> Result<(), ContentError> {
    if let Some(def) = definitions
        .iter()
        .find(|def| game.get_room_by_id(def.id.as_str()).is_some())
    {
        return Err(ContentError::DuplicateRoom(def.id.clone()));
    }

    let world = build_world(definitions)?;
    game.add_rooms(world.rooms);
    game.add_items(world.items);
    Ok(())
}
