//! Event evaluation - how each action mutates the game.

use tracing::debug;

use sud_world::{Action, Event, EventId, ItemId};

use crate::error::GameError;
use crate::game::Game;

/// The two-step contract every event honours during a turn.
pub trait EventBehavior {
    /// Does the event fire for the game's last input?
    fn check_conditions(&self, game: &Game) -> bool;

    /// Apply the event's effect.
    fn on_success(&self, game: &mut Game) -> Result<(), GameError>;
}

impl EventBehavior for Event {
    fn check_conditions(&self, game: &Game) -> bool {
        self.condition.is_met(game.last_input(), game.player())
    }

    fn on_success(&self, game: &mut Game) -> Result<(), GameError> {
        debug!(event = %self.id, action = ?self.action, "event fired");
        match &self.action {
            Action::MoveTo(destination) => {
                game.move_player_to(destination.clone())?;
                game.show_current_room()
            }
            Action::ShowMessage(message) => {
                game.show_message(message.clone());
                Ok(())
            }
            Action::DescribeRoom => game.show_current_room(),
            Action::DescribeItem(item) => {
                let description = game.item(*item)?.description.clone();
                game.show_message(description);
                Ok(())
            }
            Action::PickUp(item) => pick_up(game, self.id, *item),
            Action::UseItem(item) => use_item(game, self, *item),
            Action::Combine {
                first,
                second,
                result,
            } => combine(game, *first, *second, *result),
            Action::Script(tag) => game.run_script(tag, self),
            Action::ShowScore => {
                game.show_score();
                Ok(())
            }
            Action::ShowInventory => game.show_player_inventory(),
            Action::ShowStats => {
                game.show_player_stats();
                Ok(())
            }
            Action::ShowHelp => {
                game.show_help();
                Ok(())
            }
            Action::QuitGame => {
                game.quit_game();
                Ok(())
            }
            Action::SaveGame => game.save_game(),
            Action::LoadGame => game.load_game(),
        }
    }
}

/// Move an item from the current room into the inventory. The pick-up
/// event retires itself so the same command cannot match again.
fn pick_up(game: &mut Game, event: EventId, item: ItemId) -> Result<(), GameError> {
    let (name, score_value) = {
        let item = game.item(item)?;
        (item.name.clone(), item.score_value)
    };

    game.add_item_to_player(item)?;
    game.player_mut().increase_score(score_value);
    let lead = game.messages().item_retrieved.clone();
    game.show_message_list(&[lead.as_str(), name.as_str()]);

    let room = game.current_room_mut()?;
    room.remove_local_event(event);
    room.remove_item(item);
    Ok(())
}

fn use_item(game: &mut Game, event: &Event, item: ItemId) -> Result<(), GameError> {
    match game.item(item)?.use_script.clone() {
        Some(tag) => game.run_script(&tag, event),
        None => Ok(()),
    }
}

/// Swap two held items for `result`. Everything is checked before the
/// inventory is touched, so a failed combination changes nothing.
fn combine(
    game: &mut Game,
    first: ItemId,
    second: ItemId,
    result: ItemId,
) -> Result<(), GameError> {
    game.item(result)?;
    for component in [first, second] {
        game.item(component)?;
        if !game.player().has_item(component) {
            return Err(GameError::ItemNotHeld(component));
        }
    }

    game.remove_item_from_player(first)?;
    game.remove_item_from_player(second)?;
    game.add_item_to_player(result)?;
    let message = game.messages().item_combined.clone();
    game.show_message(message);
    Ok(())
}
