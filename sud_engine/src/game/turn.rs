//! Run state and the per-turn evaluation pass.

use tracing::debug;

use sud_world::{Event, RoomId};

use super::Game;
use crate::dispatch::EventBehavior;
use crate::error::GameError;

/// Where the game loop stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    NotStarted,
    Running,
    /// Stopped without quitting, e.g. while a saved game is swapped in.
    Paused,
    /// The player quit.
    Quit,
}

/// Outcome of one processed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Number of events that fired, global and local together.
    pub matched: usize,
}

impl Game {
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// The raw line the current turn is evaluating.
    pub fn last_input(&self) -> &str {
        &self.last_input
    }

    /// Render the current room and enter the running state.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.show_current_room()?;
        self.state = RunState::Running;
        self.started = true;
        Ok(())
    }

    /// Whether [`Game::start`] ever ran on this game, across saves.
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// Re-enter the running state without rendering.
    pub fn resume_game(&mut self) {
        self.state = RunState::Running;
    }

    /// Stop (not quit) the game. The current pass still finishes.
    pub fn stop_game(&mut self) {
        self.state = RunState::Paused;
    }

    /// Stop the game and say goodbye.
    pub fn quit_game(&mut self) {
        self.state = RunState::Quit;
        self.show_exit_message();
    }

    /// Evaluate one line of input.
    ///
    /// Every global event is checked in list order, then every local event of
    /// the room the player is in once the global pass is over. All matching
    /// events fire, not just the first. Each pass walks the list as it was
    /// when the pass began: events removed meanwhile are skipped and events
    /// added meanwhile wait for the next turn. If nothing fired the invalid
    /// input message is shown.
    pub fn process_input(&mut self, input: &str) -> Result<TurnReport, GameError> {
        debug!(input, "processing turn");
        self.last_input = input.to_string();
        let mut matched = 0;

        let global_events = self.global_events.clone();
        for event in &global_events {
            if !self.has_global_event(event.id) {
                continue;
            }
            matched += self.fire_if_triggered(event)?;
        }

        let room_id = self.current_room()?.id.clone();
        let local_events = self.current_room()?.local_events().to_vec();
        for event in &local_events {
            if !self.room_still_has(&room_id, event) {
                continue;
            }
            matched += self.fire_if_triggered(event)?;
        }

        if matched == 0 {
            debug!(input, "no event matched");
            self.show_error_message();
        }
        Ok(TurnReport { matched })
    }

    fn fire_if_triggered(&mut self, event: &Event) -> Result<usize, GameError> {
        if !event.check_conditions(self) {
            return Ok(0);
        }
        event.on_success(self)?;
        Ok(1)
    }

    fn room_still_has(&self, room: &RoomId, event: &Event) -> bool {
        self.get_room_by_id(room.as_str())
            .is_some_and(|r| r.has_local_event(event.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sud_world::{Item, Room};

    fn street_game() -> Game {
        let mut game = Game::new("Tester");
        game.add_rooms([
            Room::new("1", "Street", "A silent street."),
            Room::new("2", "Home", "Your apartment."),
        ]);
        game.add_transition(&RoomId::from("1"), ["go home"], "2").unwrap();
        game.add_transition(&RoomId::from("2"), ["leave"], "1").unwrap();
        game.move_player_to("1").unwrap();
        game
    }

    #[test]
    fn test_start_renders_and_runs() {
        let mut game = street_game();
        assert_eq!(game.state(), RunState::NotStarted);
        assert!(!game.has_started());
        game.start().unwrap();
        assert!(game.is_running());
        assert!(game.has_started());
        assert_eq!(game.take_output()[0], "A silent street.");
    }

    #[test]
    fn test_start_without_room_fails() {
        let mut game = Game::new("Nowhere");
        assert!(matches!(game.start(), Err(GameError::NoCurrentRoom)));
        assert_eq!(game.state(), RunState::NotStarted);
        assert!(!game.has_started());
    }

    #[test]
    fn test_unmatched_input_shows_one_error() {
        let mut game = street_game();
        game.start().unwrap();
        game.take_output();

        let report = game.process_input("dance").unwrap();
        assert_eq!(report.matched, 0);
        assert_eq!(game.take_output(), vec!["Invalid input"]);
        assert_eq!(game.player().current_room, Some(RoomId::from("1")));
        assert_eq!(game.player().score, 0);
    }

    #[test]
    fn test_transition_moves_player() {
        let mut game = street_game();
        let report = game.process_input("go home").unwrap();
        assert_eq!(report.matched, 1);
        assert_eq!(game.player().current_room, Some(RoomId::from("2")));
        assert!(game.player().has_visited_room(&RoomId::from("2")));
    }

    #[test]
    fn test_local_events_come_from_room_after_global_pass() {
        let mut game = street_game();
        // A global event moving the player means the new room's locals are evaluated.
        game.add_global_event(Event::transition(["teleport"], "2"));
        game.add_local_event(
            &RoomId::from("2"),
            Event::show_message(["teleport"], "You arrive dizzy."),
        )
        .unwrap();

        let report = game.process_input("teleport").unwrap();
        assert_eq!(report.matched, 2);
        assert!(game.take_output().contains(&"You arrive dizzy.".to_string()));
    }

    #[test]
    fn test_events_added_during_pass_wait_for_next_turn() {
        let mut game = street_game();
        game.register_script("spawn", |game: &mut Game, _event: &Event| {
            game.add_global_event(Event::show_message(["ring"], "spawned"));
            Ok(())
        });
        game.add_global_event(Event::scripted_command(["ring"], "spawn"));

        let report = game.process_input("ring").unwrap();
        assert_eq!(report.matched, 1);

        let report = game.process_input("ring").unwrap();
        assert_eq!(report.matched, 2);
    }

    #[test]
    fn test_events_removed_during_pass_are_skipped() {
        let mut game = street_game();
        let victim = Event::show_message(["bell"], "should not fire");
        let victim_id = victim.id;
        game.register_script("remove_next", move |game: &mut Game, _event: &Event| {
            game.remove_global_event(victim_id);
            Ok(())
        });
        game.add_global_event(Event::scripted_command(["bell"], "remove_next"));
        game.add_global_event(victim);

        let report = game.process_input("bell").unwrap();
        assert_eq!(report.matched, 1);
        assert!(!game.take_output().contains(&"should not fire".to_string()));
    }

    #[test]
    fn test_quit_stops_and_says_goodbye() {
        let mut game = street_game();
        game.start().unwrap();
        game.take_output();

        game.process_input("qq").unwrap();
        assert_eq!(game.state(), RunState::Quit);
        assert_eq!(game.take_output(), vec!["Goodbye!"]);
    }

    #[test]
    fn test_stop_and_resume() {
        let mut game = street_game();
        game.start().unwrap();
        game.take_output();
        game.stop_game();
        assert_eq!(game.state(), RunState::Paused);
        game.resume_game();
        assert!(game.is_running());
        assert!(game.take_output().is_empty());
    }

    #[test]
    fn test_process_input_without_room_fails() {
        let mut game = Game::new("Nowhere");
        game.add_item(Item::new("key", "A key"));
        assert!(matches!(
            game.process_input("look"),
            Err(GameError::NoCurrentRoom)
        ));
    }
}
