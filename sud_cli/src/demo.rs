//! The bundled demo adventure: five rooms, a cabinet, a wounded man and
//! two endings.

use sud_engine::{Game, GameError, ScriptRegistry};
use sud_world::{Event, Room, RoomId};

const CABINET_OPENED: &str = "cabinet_opened";
const CHECK_MEN: &str = "check_men";
const USE_ALCOHOL: &str = "use_alcohol";

const CABINET: &str = "cabinet";
const MEET_MAN: &str = "meet_man";
const ALCOHOL: &str = "alcohol";
const ENDING_BAD: &str = "ending_bad";
const ENDING_GOOD: &str = "ending_good";

/// Scripts referenced by the demo. Saved demo games need them to load.
pub fn scripts() -> ScriptRegistry {
    let mut registry = ScriptRegistry::new();
    registry.register(CABINET, open_cabinet);
    registry.register(MEET_MAN, meet_man);
    registry.register(ALCOHOL, craft_bomb);
    registry.register(ENDING_BAD, ending_bad);
    registry.register(ENDING_GOOD, ending_good);
    registry
}

/// Add the demo world to `game` and put the player on the street.
pub fn install_demo(game: &mut Game) -> Result<(), GameError> {
    game.add_rooms([
        Room::new(
            "1",
            "Street",
            "You stand by the doorstep of your old apartment. The sun is setting and \
             there is nobody around, everything is silent... far to the north is the square.",
        ),
        Room::new(
            "2",
            "Home",
            "Your apartment has seen better times. Dirty clothes and garbage are piled \
             everywhere and cobwebs cover the windows. You left the bathroom door open, again...",
        ),
        Room::new(
            "3",
            "Bathroom",
            "The bathroom is as gross as the rest of your home. Under the sink there is a \
             small medicine cabinet. Behind you is the living room.",
        ),
        Room::new(
            "4",
            "Park",
            "The square is deserted. A path crosses it from north to south and in the \
             middle of it a man is lying down. The street leading home is to the south, \
             the park's only food stand to the north.",
        ),
        Room::new(
            "5",
            "Foodstand",
            "Tables have been thrown to the floor and there are blood stains everywhere, \
             especially near the kitchen door. It is ajar. Strange noises come from inside...",
        ),
    ]);

    let street = RoomId::from("1");
    let home = RoomId::from("2");
    let bathroom = RoomId::from("3");
    let park = RoomId::from("4");
    let stand = RoomId::from("5");

    game.add_transition(&street, ["go home", "enter home"], "2")?;
    game.add_transition(&home, ["go outside", "leave"], "1")?;
    game.add_transition(&home, ["go to bathroom", "enter bathroom"], "3")?;
    game.add_transition(&bathroom, ["go to living room", "go back", "back", "go home"], "2")?;
    game.add_transition(&street, ["go to park", "north", "n"], "4")?;
    game.add_transition(&park, ["south", "go to street", "s"], "1")?;
    game.add_transition(&park, ["north", "n", "follow road", "go to stand"], "5")?;
    game.add_transition(&stand, ["s", "park", "south"], "4")?;

    game.set_user_defined_variable(CABINET_OPENED, false);
    game.set_user_defined_variable(CHECK_MEN, false);
    game.set_user_defined_variable(USE_ALCOHOL, false);

    game.add_local_event(&bathroom, Event::scripted_command(["open", "open cabinet"], CABINET))?;
    game.add_local_event(&park, Event::scripted_command(["look men", "examine men"], MEET_MAN))?;
    game.add_local_event(
        &stand,
        Event::show_message(
            ["look food stand", "examine food stand", "look stand", "check stand"],
            "You lean in to look inside the trailer. A few steps away one of the employees \
             crouches next to a coworker lying in a pool of blood... \
             He seems to be chewing an arm...",
        ),
    )?;
    game.add_local_event(&stand, Event::scripted_command(["enter"], ENDING_BAD))?;
    game.add_local_event(&stand, Event::scripted_command(["throw bomb", "use bomb"], ENDING_GOOD))?;

    game.move_player_to(street)
}

fn flag(game: &Game, name: &str) -> Result<bool, GameError> {
    Ok(game.get_user_defined_variable(name)?.is_truthy())
}

fn open_cabinet(game: &mut Game, _event: &Event) -> Result<(), GameError> {
    if flag(game, CABINET_OPENED)? {
        game.show_message("You already checked there...");
        return Ok(());
    }
    game.set_user_defined_variable(CABINET_OPENED, true);
    game.show_message(
        "Inside the cabinet you find an almost full bottle of medicinal alcohol and some \
         bandages. You decide to take them with you...",
    );
    game.player_mut().increase_score(1);
    // The bottle can only be used once it has been found.
    game.add_global_event(Event::scripted_command(["use alcohol"], ALCOHOL));
    Ok(())
}

fn meet_man(game: &mut Game, _event: &Event) -> Result<(), GameError> {
    if flag(game, CHECK_MEN)? {
        game.show_message("He's not carrying anything else...");
        return Ok(());
    }
    game.set_user_defined_variable(CHECK_MEN, true);
    game.show_message(
        "The man has deep wounds, like bite marks, along his face and both arms. \
         In his pocket you find a lighter.",
    );
    game.player_mut().increase_score(1);
    Ok(())
}

fn craft_bomb(game: &mut Game, _event: &Event) -> Result<(), GameError> {
    if flag(game, USE_ALCOHOL)? {
        game.show_message("Your bomb is ready...");
        return Ok(());
    }
    game.set_user_defined_variable(USE_ALCOHOL, true);
    game.show_message(
        "With the bandages and the alcohol you craft a sort of home made bomb... wow",
    );
    game.player_mut().increase_score(1);
    Ok(())
}

fn ending_bad(game: &mut Game, _event: &Event) -> Result<(), GameError> {
    game.show_message(
        "When you open the door one of the employees turns around. His face is covered \
         with blood and his eyes are completely white. Moaning, he walks towards you with \
         clumsy steps. Fear keeps you from reacting and he pounces on you...",
    );
    finish(game);
    Ok(())
}

fn ending_good(game: &mut Game, _event: &Event) -> Result<(), GameError> {
    if !(flag(game, CHECK_MEN)? && flag(game, USE_ALCOHOL)?) {
        game.show_message("You may have missed something...");
        return Ok(());
    }
    game.player_mut().increase_score(1);
    game.show_message(
        "You light the bandages and throw your home made bomb through the door. The \
         creature runs off awkwardly and falls, writhing in pain. You are not sure it is \
         dead, but at least you no longer feel helpless.",
    );
    finish(game);
    Ok(())
}

fn finish(game: &mut Game) {
    let line = format!("And so the story of {} ends. The final score was:", game.player().name);
    game.show_message(line);
    game.show_score();
    game.quit_game();
}

#[cfg(test)]
mod tests {
    use super::*;
    use sud_engine::{GameManager, MemoryStore, RunState};

    fn demo_manager() -> GameManager<MemoryStore> {
        let mut game = Game::new("Alex");
        game.set_scripts(scripts());
        install_demo(&mut game).unwrap();
        GameManager::new(game, MemoryStore::new())
    }

    fn play(manager: &mut GameManager<MemoryStore>, inputs: &[&str]) -> Vec<String> {
        inputs
            .iter()
            .flat_map(|input| manager.play_turn(input).unwrap())
            .collect()
    }

    #[test]
    fn test_good_ending() {
        let mut manager = demo_manager();
        let output = play(
            &mut manager,
            &[
                "go home",
                "go to bathroom",
                "open cabinet",
                "use alcohol",
                "back",
                "leave",
                "n",
                "look men",
                "n",
                "throw bomb",
            ],
        );

        assert_eq!(manager.game().state(), RunState::Quit);
        assert_eq!(manager.game().player().score, 4);
        assert!(output.iter().any(|l| l == "And so the story of Alex ends. The final score was:"));
        assert_eq!(output.last().map(String::as_str), Some("Goodbye!"));
        assert!(!output.iter().any(|l| l == "Invalid input"));
    }

    #[test]
    fn test_bomb_needs_preparation() {
        let mut manager = demo_manager();
        manager.game_mut().start().unwrap();
        let output = play(&mut manager, &["n", "n", "use bomb"]);
        assert_eq!(output.last().map(String::as_str), Some("You may have missed something..."));
        assert!(manager.game().is_running());
    }

    #[test]
    fn test_bad_ending() {
        let mut manager = demo_manager();
        play(&mut manager, &["n", "n", "enter"]);
        assert_eq!(manager.game().state(), RunState::Quit);
        assert_eq!(manager.game().player().score, 0);
    }

    #[test]
    fn test_alcohol_only_after_cabinet() {
        let mut manager = demo_manager();
        assert_eq!(play(&mut manager, &["use alcohol"]), vec!["Invalid input"]);

        play(&mut manager, &["go home", "go to bathroom"]);
        let first = play(&mut manager, &["open"]);
        assert_eq!(first.len(), 1);
        assert_eq!(play(&mut manager, &["open"]), vec!["You already checked there..."]);
        assert_eq!(manager.game().player().score, 1);
        assert_eq!(play(&mut manager, &["use alcohol"]).len(), 1);
        assert_eq!(manager.game().player().score, 2);
    }

    #[test]
    fn test_demo_save_requires_scripts() {
        let mut manager = demo_manager();
        play(&mut manager, &["go home", "go to bathroom", "open", "save"]);

        let store = manager.store().clone();
        let mut fresh = GameManager::new(Game::new("Nobody"), store);
        assert!(fresh.load_game_data("save.json").is_err());

        fresh.game_mut().set_scripts(scripts());
        fresh.load_game_data("save.json").unwrap();
        assert_eq!(fresh.game().player().name, "Alex");
        assert_eq!(fresh.play_turn("use alcohol").unwrap().len(), 1);
    }
}
