//! The player character.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{GameEntity, ItemId, RoomId};

/// The player character.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub description: String,
    pub score: u32,
    /// Held items in pick-up order.
    pub inventory: Vec<ItemId>,
    /// None until the player is first placed.
    pub current_room: Option<RoomId>,
    pub visited_rooms: HashSet<RoomId>,
}

impl Player {
    /// Create a new player with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            score: 0,
            inventory: Vec::new(),
            current_room: None,
            visited_rooms: HashSet::new(),
        }
    }

    pub fn increase_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    /// Duplicates are not rejected; callers go through the game helpers.
    pub fn add_item(&mut self, item: ItemId) {
        self.inventory.push(item);
    }

    pub fn has_item(&self, item: ItemId) -> bool {
        self.inventory.contains(&item)
    }

    /// Remove the first occurrence of `item`. Returns false if not held.
    pub fn remove_item(&mut self, item: ItemId) -> bool {
        match self.inventory.iter().position(|i| *i == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.inventory
    }

    /// Move to `room` and record it as visited.
    pub fn move_to_room(&mut self, room: RoomId) {
        self.visited_rooms.insert(room.clone());
        self.current_room = Some(room);
    }

    pub fn has_visited_room(&self, room: &RoomId) -> bool {
        self.visited_rooms.contains(room)
    }

    /// Number of distinct rooms visited.
    pub fn visited_rooms_amount(&self) -> usize {
        self.visited_rooms.len()
    }
}

impl GameEntity for Player {
    fn entity_id(&self) -> String {
        self.name.clone()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}
