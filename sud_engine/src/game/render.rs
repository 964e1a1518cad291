//! Line-oriented output. Lines are buffered until the driver drains them.

use super::Game;
use crate::error::GameError;

impl Game {
    pub fn show_message(&mut self, message: impl Into<String>) {
        self.output.push(message.into());
    }

    /// Join the parts with single spaces and show them as one line.
    pub fn show_message_list(&mut self, parts: &[&str]) {
        self.output.push(parts.join(" "));
    }

    /// Drain the buffered output lines.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }

    pub(crate) fn append_output(&mut self, lines: Vec<String>) {
        self.output.extend(lines);
    }

    /// Room description, then exits and items when enabled.
    pub fn show_current_room(&mut self) -> Result<(), GameError> {
        let room = self.current_room()?;
        let mut lines = vec![room.description.clone()];

        if self.settings.show_room_exits {
            for transition in room.transitions() {
                let Some(destination) = transition.destination() else {
                    continue;
                };
                let destination = self
                    .get_room_by_id(destination.as_str())
                    .ok_or_else(|| GameError::RoomNotFound(destination.clone()))?;
                let commands = transition.commands().unwrap_or_default();
                lines.push(format!(
                    "{} {} {} {:?}",
                    self.messages.room_exits_lead,
                    destination.name,
                    self.messages.room_exits_using,
                    commands
                ));
            }
        }

        if self.settings.show_room_items {
            for id in room.items() {
                let item = self.item(*id)?;
                lines.push(format!("{} {}", self.messages.room_items, item.name));
            }
        }

        self.output.extend(lines);
        Ok(())
    }

    pub fn show_error_message(&mut self) {
        let line = self.messages.invalid_command.clone();
        self.show_message(line);
    }

    pub fn show_player_inventory(&mut self) -> Result<(), GameError> {
        let mut lines = vec![self.messages.player_inventory.clone()];
        for id in self.player.items() {
            lines.push(self.item(*id)?.name.clone());
        }
        self.output.extend(lines);
        Ok(())
    }

    pub fn show_score(&mut self) {
        let line = format!("{} {}", self.messages.player_score, self.player.score);
        self.show_message(line);
    }

    /// Exploration progress as visited/total rooms.
    pub fn show_player_stats(&mut self) {
        let line = format!(
            "{} {}/{}",
            self.messages.player_stats,
            self.player.visited_rooms_amount(),
            self.rooms.len()
        );
        self.show_message(line);
    }

    pub fn show_help(&mut self) {
        let line = self.messages.help.clone();
        self.show_message(line);
    }

    pub fn show_welcome_message(&mut self) {
        let line = self.messages.game_start.clone();
        self.show_message(line);
    }

    pub fn show_welcome_back_message(&mut self) {
        let line = self.messages.game_resume.clone();
        self.show_message(line);
    }

    pub fn show_exit_message(&mut self) {
        let line = self.messages.game_end.clone();
        self.show_message(line);
    }
}
