//! Rooms and their local events.

use serde::{Deserialize, Serialize};

use super::{GameEntity, Item, ItemId, RoomId};
use crate::events::{Event, EventId};

/// A location in the game world.
///
/// Local events are evaluated only while the player is in the room.
/// Transitions are local events too, stored in the same list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    local_events: Vec<Event>,
    items: Vec<ItemId>,
}

impl Room {
    /// Create an empty room with no exits, events or items.
    pub fn new(
        id: impl Into<RoomId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            local_events: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Append a local event. Returns its id.
    pub fn add_local_event(&mut self, event: Event) -> EventId {
        let id = event.id;
        self.local_events.push(event);
        id
    }

    /// Remove a local event by id.
    pub fn remove_local_event(&mut self, id: EventId) -> Option<Event> {
        let index = self.local_events.iter().position(|e| e.id == id)?;
        Some(self.local_events.remove(index))
    }

    pub fn has_local_event(&self, id: EventId) -> bool {
        self.local_events.iter().any(|e| e.id == id)
    }

    pub fn local_events(&self) -> &[Event] {
        &self.local_events
    }

    /// Add a transition to `destination` triggered by `commands`.
    pub fn add_transition<I, S>(&mut self, commands: I, destination: impl Into<RoomId>) -> EventId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_local_event(Event::transition(commands, destination))
    }

    /// Local events that move the player elsewhere.
    pub fn transitions(&self) -> impl Iterator<Item = &Event> {
        self.local_events.iter().filter(|e| e.is_transition())
    }

    /// Place an item here together with the local event that picks it up.
    pub fn add_item(&mut self, item: &Item) -> EventId {
        self.items.push(item.id);
        self.add_local_event(Event::pick_up(item.id, &item.name))
    }

    /// Remove an item from the room. Its pick-up event is left in place.
    pub fn remove_item(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|i| *i == id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn has_item(&self, id: ItemId) -> bool {
        self.items.contains(&id)
    }
}

impl GameEntity for Room {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Action;

    #[test]
    fn test_add_item_creates_pick_up_event() {
        let mut room = Room::new("1", "Street", "An empty street");
        let key = Item::new("key", "A brass key").with_score_value(5);

        let event_id = room.add_item(&key);

        assert!(room.has_item(key.id));
        assert!(room.has_local_event(event_id));
        assert_eq!(room.local_events()[0].action, Action::PickUp(key.id));
    }

    #[test]
    fn test_remove_item_keeps_pick_up_event() {
        let mut room = Room::new("1", "Street", "An empty street");
        let key = Item::new("key", "A brass key").with_score_value(5);
        let event_id = room.add_item(&key);

        assert!(room.remove_item(key.id));
        assert!(!room.has_item(key.id));
        assert!(room.has_local_event(event_id));
        assert!(!room.remove_item(key.id));
    }

    #[test]
    fn test_transitions_filter() {
        let mut room = Room::new("2", "Home", "Your apartment");
        room.add_transition(["go outside", "leave"], "1");
        room.add_local_event(Event::show_message(["look window"], "Cobwebs."));
        room.add_transition(["go to bathroom"], "3");

        let destinations: Vec<_> = room
            .transitions()
            .filter_map(|t| t.destination())
            .map(|d| d.as_str())
            .collect();
        assert_eq!(destinations, vec!["1", "3"]);
    }

    #[test]
    fn test_remove_local_event() {
        let mut room = Room::new("3", "Bathroom", "Gross");
        let id = room.add_local_event(Event::show_message(["open"], "Empty."));
        assert!(room.remove_local_event(id).is_some());
        assert!(room.remove_local_event(id).is_none());
        assert!(room.local_events().is_empty());
    }
}
