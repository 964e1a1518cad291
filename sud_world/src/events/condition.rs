//! Event trigger predicates.

use serde::{Deserialize, Serialize};

use crate::entities::{ItemId, Player, RoomId};

/// When an event fires.
///
/// Conditions only look at the last raw input line and the player, so they
/// can be evaluated without access to the rest of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// The input equals one of the aliases exactly. No trimming or case folding.
    Command(Vec<String>),
    /// The player stands in one of the rooms.
    Location(Vec<RoomId>),
    /// The player's score has reached the threshold.
    Score(u32),
    /// The player currently holds the item.
    HoldsItem(ItemId),
    /// Every nested condition holds.
    All(Vec<Condition>),
}

impl Condition {
    /// Build a command condition from any list of aliases.
    pub fn command<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Condition::Command(aliases.into_iter().map(Into::into).collect())
    }

    /// Check the condition against the last input and the player.
    pub fn is_met(&self, input: &str, player: &Player) -> bool {
        match self {
            Condition::Command(aliases) => aliases.iter().any(|alias| alias == input),
            Condition::Location(rooms) => player
                .current_room
                .as_ref()
                .is_some_and(|current| rooms.contains(current)),
            Condition::Score(threshold) => player.score >= *threshold,
            Condition::HoldsItem(item) => player.has_item(*item),
            Condition::All(conditions) => conditions.iter().all(|c| c.is_met(input, player)),
        }
    }

    /// The command aliases this condition listens for, if any.
    pub fn aliases(&self) -> Option<&[String]> {
        match self {
            Condition::Command(aliases) => Some(aliases),
            Condition::All(conditions) => conditions.iter().find_map(Condition::aliases),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_requires_exact_match() {
        let player = Player::new("Tester");
        let condition = Condition::command(["look", "examine"]);

        assert!(condition.is_met("look", &player));
        assert!(condition.is_met("examine", &player));
        assert!(!condition.is_met("Look", &player));
        assert!(!condition.is_met(" look", &player));
        assert!(!condition.is_met("look around", &player));
    }

    #[test]
    fn test_empty_command_never_matches() {
        let player = Player::new("Tester");
        let condition = Condition::Command(Vec::new());
        assert!(!condition.is_met("", &player));
        assert!(!condition.is_met("look", &player));
    }

    #[test]
    fn test_location_condition() {
        let mut player = Player::new("Tester");
        let condition = Condition::Location(vec![RoomId::from("park")]);
        assert!(!condition.is_met("", &player));

        player.move_to_room(RoomId::from("park"));
        assert!(condition.is_met("", &player));

        player.move_to_room(RoomId::from("street"));
        assert!(!condition.is_met("", &player));
    }

    #[test]
    fn test_score_condition() {
        let mut player = Player::new("Tester");
        let condition = Condition::Score(3);
        player.increase_score(2);
        assert!(!condition.is_met("", &player));
        player.increase_score(1);
        assert!(condition.is_met("", &player));
    }

    #[test]
    fn test_all_condition_and_aliases() {
        let mut player = Player::new("Tester");
        let lighter = ItemId::new();
        let condition = Condition::All(vec![
            Condition::command(["light fuse"]),
            Condition::HoldsItem(lighter),
        ]);

        assert!(!condition.is_met("light fuse", &player));
        player.add_item(lighter);
        assert!(condition.is_met("light fuse", &player));
        assert_eq!(condition.aliases(), Some(&["light fuse".to_string()][..]));
        assert_eq!(Condition::Score(1).aliases(), None);
    }
}
