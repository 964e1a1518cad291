//! The game aggregate - world graph, global events, variables and run state.

mod render;
mod turn;

pub use turn::*;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use sud_world::{
    Event, EventId, FlagValue, Item, ItemId, Messages, Player, Room, RoomId, Variables,
};

use crate::error::GameError;
use crate::persistence::{ManagerLink, PersistenceRequest};
use crate::scripts::ScriptRegistry;

/// Per-game toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Adds the built-in save/load commands.
    pub save_enabled: bool,
    /// List the items lying in a room when it is rendered.
    pub show_room_items: bool,
    /// List the exits of a room when it is rendered.
    pub show_room_exits: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            save_enabled: true,
            show_room_items: true,
            show_room_exits: true,
        }
    }
}

/// The aggregate root of a running adventure.
///
/// The game owns every room and item by value. Events refer to rooms and
/// items by id and resolve them against these collections when they fire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    player: Player,
    /// Insertion order. Ids are expected to be unique but not checked.
    rooms: Vec<Room>,
    /// Every item known to the game, wherever it currently is.
    items: Vec<Item>,
    /// Insertion order is evaluation order.
    global_events: Vec<Event>,
    variables: Variables,
    settings: GameSettings,
    messages: Messages,
    /// Set once the game has been started. Saves of game data that was
    /// never played are started again on load rather than resumed.
    #[serde(default)]
    started: bool,

    #[serde(skip)]
    state: RunState,
    #[serde(skip)]
    last_input: String,
    #[serde(skip)]
    output: Vec<String>,
    #[serde(skip)]
    scripts: ScriptRegistry,
    // Reattached by the manager after every load, never persisted.
    #[serde(skip)]
    manager: Option<ManagerLink>,
}

impl Game {
    /// Create a game with default settings.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self::with_settings(player_name, GameSettings::default())
    }

    /// Create a game and install the built-in global events.
    pub fn with_settings(player_name: impl Into<String>, settings: GameSettings) -> Self {
        let mut global_events = vec![
            Event::look_room(),
            Event::show_score(),
            Event::quit_game(),
            Event::show_inventory(),
            Event::show_stats(),
            Event::show_help(),
        ];
        if settings.save_enabled {
            global_events.push(Event::save_game());
            global_events.push(Event::load_game());
        }

        Self {
            player: Player::new(player_name),
            rooms: Vec::new(),
            items: Vec::new(),
            global_events,
            variables: Variables::new(),
            settings,
            messages: Messages::default(),
            started: false,
            state: RunState::NotStarted,
            last_input: String::new(),
            output: Vec::new(),
            scripts: ScriptRegistry::new(),
            manager: None,
        }
    }

    /// Replace the message table.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Display and save toggles.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Text shown to the player.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Change messages after construction.
    pub fn messages_mut(&mut self) -> &mut Messages {
        &mut self.messages
    }

    /// The player character.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct access to the player. Move items with
    /// [`Game::add_item_to_player`] instead so their events follow.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    /// Append rooms in order.
    pub fn add_rooms(&mut self, rooms: impl IntoIterator<Item = Room>) {
        self.rooms.extend(rooms);
    }

    pub fn add_room(&mut self, room: Room) {
        self.rooms.push(room);
    }

    /// Rooms in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// First room whose id equals `id`, or `None`.
    pub fn get_room_by_id(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id.as_str() == id)
    }

    pub fn get_room_by_id_mut(&mut self, id: &str) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.id.as_str() == id)
    }

    fn room_mut(&mut self, id: &RoomId) -> Result<&mut Room, GameError> {
        self.get_room_by_id_mut(id.as_str())
            .ok_or_else(|| GameError::RoomNotFound(id.clone()))
    }

    /// The room the player stands in.
    pub fn current_room(&self) -> Result<&Room, GameError> {
        let id = self
            .player
            .current_room
            .as_ref()
            .ok_or(GameError::NoCurrentRoom)?;
        self.get_room_by_id(id.as_str())
            .ok_or_else(|| GameError::RoomNotFound(id.clone()))
    }

    pub fn current_room_mut(&mut self) -> Result<&mut Room, GameError> {
        let id = self
            .player
            .current_room
            .clone()
            .ok_or(GameError::NoCurrentRoom)?;
        self.room_mut(&id)
    }

    /// Place the player in a room, marking it visited.
    pub fn move_player_to(&mut self, room: impl Into<RoomId>) -> Result<(), GameError> {
        let room = room.into();
        if self.get_room_by_id(room.as_str()).is_none() {
            return Err(GameError::RoomNotFound(room));
        }
        debug!(room = %room, "player moved");
        self.player.move_to_room(room);
        Ok(())
    }

    /// Add a local event to a room.
    pub fn add_local_event(&mut self, room: &RoomId, event: Event) -> Result<EventId, GameError> {
        Ok(self.room_mut(room)?.add_local_event(event))
    }

    /// Link `room` to `destination`. Both rooms must already exist.
    pub fn add_transition<I, S>(
        &mut self,
        room: &RoomId,
        commands: I,
        destination: impl Into<RoomId>,
    ) -> Result<EventId, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let destination = destination.into();
        if self.get_room_by_id(destination.as_str()).is_none() {
            return Err(GameError::RoomNotFound(destination));
        }
        Ok(self.room_mut(room)?.add_transition(commands, destination))
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// Register an item with the game without placing it anywhere.
    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = item.id;
        self.items.push(item);
        id
    }

    pub fn add_items(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }

    /// Register an item and put it in a room with its pick-up event.
    pub fn place_item(&mut self, room: &RoomId, item: Item) -> Result<ItemId, GameError> {
        self.room_mut(room)?.add_item(&item);
        Ok(self.add_item(item))
    }

    pub fn item(&self, id: ItemId) -> Result<&Item, GameError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(GameError::ItemNotFound(id))
    }

    /// Every registered item.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Give an item to the player and activate its look/use events.
    pub fn add_item_to_player(&mut self, id: ItemId) -> Result<(), GameError> {
        let item = self.item(id)?;
        let look = item.look_item_event().clone();
        let use_event = item.use_item_event().clone();

        self.player.add_item(id);
        self.global_events.push(look);
        self.global_events.push(use_event);
        Ok(())
    }

    /// Take an item from the player and retire its look/use events.
    pub fn remove_item_from_player(&mut self, id: ItemId) -> Result<(), GameError> {
        let item = self.item(id)?;
        let look = item.look_item_event().id;
        let use_event = item.use_item_event().id;

        if !self.player.remove_item(id) {
            return Err(GameError::ItemNotHeld(id));
        }
        self.remove_global_event(look);
        self.remove_global_event(use_event);
        Ok(())
    }

    // =========================================================================
    // Global events
    // =========================================================================

    pub fn add_global_event(&mut self, event: Event) -> EventId {
        let id = event.id;
        self.global_events.push(event);
        id
    }

    pub fn remove_global_event(&mut self, id: EventId) -> Option<Event> {
        let index = self.global_events.iter().position(|e| e.id == id)?;
        Some(self.global_events.remove(index))
    }

    pub fn has_global_event(&self, id: EventId) -> bool {
        self.global_events.iter().any(|e| e.id == id)
    }

    /// Global events in evaluation order.
    pub fn global_events(&self) -> &[Event] {
        &self.global_events
    }

    // =========================================================================
    // User-defined variables
    // =========================================================================

    pub fn set_user_defined_variable(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FlagValue>,
    ) {
        self.variables.set(key, value);
    }

    /// Look up a variable. An unset key is an error, not a default.
    pub fn get_user_defined_variable(&self, key: &str) -> Result<&FlagValue, GameError> {
        self.variables
            .get(key)
            .ok_or_else(|| GameError::VariableNotSet(key.to_string()))
    }

    /// Non-failing lookup.
    pub fn user_defined_variable(&self, key: &str) -> Option<&FlagValue> {
        self.variables.get(key)
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    // =========================================================================
    // Scripts
    // =========================================================================

    /// Register a closure as the script for `tag`.
    pub fn register_script<F>(&mut self, tag: impl Into<String>, script: F)
    where
        F: Fn(&mut Game, &Event) -> Result<(), GameError> + 'static,
    {
        self.scripts.register(tag, script);
    }

    pub fn scripts(&self) -> &ScriptRegistry {
        &self.scripts
    }

    pub fn set_scripts(&mut self, scripts: ScriptRegistry) {
        self.scripts = scripts;
    }

    /// Run the script registered under `tag` for `event`.
    pub fn run_script(&mut self, tag: &str, event: &Event) -> Result<(), GameError> {
        let script = self
            .scripts
            .get(tag)
            .ok_or_else(|| GameError::ScriptNotFound(tag.to_string()))?;
        script.run(self, event)
    }

    /// Every script tag referenced anywhere in the world.
    pub fn script_tags(&self) -> BTreeSet<String> {
        let room_events = self.rooms.iter().flat_map(|room| room.local_events());
        let mut tags: BTreeSet<String> = self
            .global_events
            .iter()
            .chain(room_events)
            .filter_map(|event| event.script())
            .map(str::to_string)
            .collect();
        tags.extend(self.items.iter().filter_map(|item| item.use_script.clone()));
        tags
    }

    // =========================================================================
    // Persistence hooks
    // =========================================================================

    /// Ask the manager to save into its default slot after this turn.
    pub fn save_game(&mut self) -> Result<(), GameError> {
        let link = self.manager.as_mut().ok_or(GameError::ManagerNotLinked)?;
        let slot = link.slot().to_string();
        link.request(PersistenceRequest::Save(slot));
        Ok(())
    }

    pub fn save_game_as(&mut self, slot: impl Into<String>) -> Result<(), GameError> {
        let link = self.manager.as_mut().ok_or(GameError::ManagerNotLinked)?;
        link.request(PersistenceRequest::Save(slot.into()));
        Ok(())
    }

    /// Ask the manager to load its default slot after this turn.
    pub fn load_game(&mut self) -> Result<(), GameError> {
        let link = self.manager.as_mut().ok_or(GameError::ManagerNotLinked)?;
        let slot = link.slot().to_string();
        link.request(PersistenceRequest::Load(slot));
        Ok(())
    }

    pub fn load_game_from(&mut self, slot: impl Into<String>) -> Result<(), GameError> {
        let link = self.manager.as_mut().ok_or(GameError::ManagerNotLinked)?;
        link.request(PersistenceRequest::Load(slot.into()));
        Ok(())
    }

    pub fn is_manager_linked(&self) -> bool {
        self.manager.is_some()
    }

    pub(crate) fn set_game_mgr(&mut self, link: ManagerLink) {
        self.manager = Some(link);
    }

    pub(crate) fn clear_game_mgr(&mut self) -> Option<ManagerLink> {
        self.manager.take()
    }

    pub(crate) fn take_request(&mut self) -> Option<PersistenceRequest> {
        self.manager.as_mut().and_then(ManagerLink::take_request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_game() -> Game {
        let mut game = Game::new("Tester");
        game.add_rooms([
            Room::new("1", "Street", "A silent street."),
            Room::new("2", "Home", "Your apartment."),
        ]);
        game
    }

    #[test]
    fn test_builtin_global_events() {
        let game = Game::new("Tester");
        assert_eq!(game.global_events().len(), 8);

        let game = Game::with_settings(
            "Tester",
            GameSettings {
                save_enabled: false,
                ..Default::default()
            },
        );
        assert_eq!(game.global_events().len(), 6);
    }

    #[test]
    fn test_get_room_by_id() {
        let game = two_room_game();
        assert_eq!(game.get_room_by_id("2").map(|r| r.name.as_str()), Some("Home"));
        assert!(game.get_room_by_id("3").is_none());
        assert!(game.get_room_by_id("").is_none());
    }

    #[test]
    fn test_get_room_by_id_returns_first_duplicate() {
        let mut game = two_room_game();
        game.add_room(Room::new("1", "Shadow Street", "A copy."));
        assert_eq!(game.get_room_by_id("1").map(|r| r.name.as_str()), Some("Street"));
    }

    #[test]
    fn test_move_player_requires_existing_room() {
        let mut game = two_room_game();
        assert!(matches!(game.current_room(), Err(GameError::NoCurrentRoom)));
        assert!(matches!(
            game.move_player_to("9"),
            Err(GameError::RoomNotFound(id)) if id.as_str() == "9"
        ));

        game.move_player_to("2").unwrap();
        assert_eq!(game.current_room().unwrap().name, "Home");
    }

    #[test]
    fn test_add_transition_checks_destination() {
        let mut game = two_room_game();
        let street = RoomId::from("1");
        assert!(game.add_transition(&street, ["go home"], "2").is_ok());
        assert!(matches!(
            game.add_transition(&street, ["go nowhere"], "404"),
            Err(GameError::RoomNotFound(_))
        ));
        assert_eq!(game.get_room_by_id("1").unwrap().transitions().count(), 1);
    }

    #[test]
    fn test_item_transfer_activates_events() {
        let mut game = two_room_game();
        let lighter = game.add_item(Item::new("lighter", "A plastic lighter"));
        let baseline = game.global_events().len();

        game.add_item_to_player(lighter).unwrap();
        assert!(game.player().has_item(lighter));
        assert_eq!(game.global_events().len(), baseline + 2);

        game.remove_item_from_player(lighter).unwrap();
        assert!(!game.player().has_item(lighter));
        assert_eq!(game.global_events().len(), baseline);

        assert!(matches!(
            game.remove_item_from_player(lighter),
            Err(GameError::ItemNotHeld(_))
        ));
    }

    #[test]
    fn test_unknown_item_is_an_error() {
        let mut game = two_room_game();
        assert!(matches!(
            game.add_item_to_player(ItemId::new()),
            Err(GameError::ItemNotFound(_))
        ));
    }

    #[test]
    fn test_user_defined_variables() {
        let mut game = Game::new("Tester");
        game.set_user_defined_variable("cabinet_opened", false);

        assert_eq!(
            game.get_user_defined_variable("cabinet_opened").unwrap(),
            &FlagValue::Bool(false)
        );
        assert!(matches!(
            game.get_user_defined_variable("men"),
            Err(GameError::VariableNotSet(key)) if key == "men"
        ));
        assert!(game.user_defined_variable("men").is_none());
    }

    #[test]
    fn test_script_tags_cover_events_and_items() {
        let mut game = two_room_game();
        game.add_global_event(Event::on_score(10, "bonus"));
        game.add_local_event(&RoomId::from("2"), Event::scripted_command(["open"], "cabinet"))
            .unwrap();
        game.add_item(Item::new("bomb", "Home made").with_use_script("throw"));

        let tags: Vec<_> = game.script_tags().into_iter().collect();
        assert_eq!(tags, vec!["bonus", "cabinet", "throw"]);
    }

    #[test]
    fn test_persistence_hooks_need_a_manager() {
        let mut game = Game::new("Tester");
        assert!(!game.is_manager_linked());
        assert!(matches!(game.save_game(), Err(GameError::ManagerNotLinked)));
        assert!(matches!(game.load_game(), Err(GameError::ManagerNotLinked)));
        assert!(matches!(
            game.save_game_as("a.json"),
            Err(GameError::ManagerNotLinked)
        ));
        assert!(matches!(
            game.load_game_from("a.json"),
            Err(GameError::ManagerNotLinked)
        ));
    }

    #[test]
    fn test_messages_can_be_edited_in_place() {
        let mut game = two_room_game();
        game.move_player_to("1").unwrap();
        game.messages_mut().invalid_command = "Huh?".to_string();
        game.process_input("dance").unwrap();
        assert_eq!(game.take_output(), vec!["Huh?"]);
    }
}
