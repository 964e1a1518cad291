//! Item definitions.

use serde::{Deserialize, Serialize};

use super::{GameEntity, ItemId};
use crate::events::Event;

/// Something the player can pick up, carry and use.
///
/// Each item owns two derived events built at construction: one to look at
/// it and one to use it. They only take part in the game while the player
/// holds the item; the engine adds them to the global event list on pick-up
/// and removes them when the item leaves the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Points awarded when the player picks the item up.
    pub score_value: u32,
    /// Script tag implementing the item's use behaviour. Using an item
    /// without one does nothing.
    pub use_script: Option<String>,
    look_event: Event,
    use_event: Event,
}

/// Points an item is worth unless set otherwise.
pub const DEFAULT_SCORE_VALUE: u32 = 1;

impl Item {
    /// Create a new item worth [`DEFAULT_SCORE_VALUE`] points, together with
    /// its look/use events.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let id = ItemId::new();
        let name = name.into();
        Self {
            id,
            look_event: Event::look_item(id, &name),
            use_event: Event::use_item(id, &name),
            name,
            description: description.into(),
            score_value: DEFAULT_SCORE_VALUE,
            use_script: None,
        }
    }

    /// Set the points awarded on pick-up.
    pub fn with_score_value(mut self, score_value: u32) -> Self {
        self.score_value = score_value;
        self
    }

    /// Set the script run by "use <item>".
    pub fn with_use_script(mut self, script: impl Into<String>) -> Self {
        self.use_script = Some(script.into());
        self
    }

    pub fn look_item_event(&self) -> &Event {
        &self.look_event
    }

    pub fn use_item_event(&self) -> &Event {
        &self.use_event
    }
}

impl GameEntity for Item {
    fn entity_id(&self) -> String {
        self.id.to_string()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}
