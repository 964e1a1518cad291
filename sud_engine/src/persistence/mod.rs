//! Persistence - snapshot and restore a whole game.
//!
//! [`GameManager`] owns the running game and a [`SaveStore`]. The game only
//! holds a [`ManagerLink`]: save/load commands fired during a turn queue a
//! request on the link, and the manager carries it out once the turn is
//! over. The link is never persisted; the manager attaches a fresh one to
//! every game it restores.

mod snapshot;
mod store;

pub use snapshot::*;
pub use store::*;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::console::Console;
use crate::error::GameError;
use crate::game::Game;

pub const DEFAULT_SAVE_SLOT: &str = "save.json";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("save slot not found: {0}")]
    Missing(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt save data: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("not a sud save file (format '{0}')")]
    UnknownFormat(String),

    #[error("incompatible save version {found}, expected {expected}")]
    IncompatibleVersion { found: u32, expected: u32 },

    #[error("save refers to an unregistered script: {0}")]
    UnknownScript(String),

    #[error("variable '{0}' holds a number that cannot be saved")]
    NonFiniteNumber(String),
}

/// Work the manager should do after the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceRequest {
    Save(String),
    Load(String),
}

/// The game's handle on its manager.
#[derive(Debug, Clone)]
pub struct ManagerLink {
    slot: String,
    pending: Option<PersistenceRequest>,
}

impl ManagerLink {
    pub(crate) fn new(slot: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            pending: None,
        }
    }

    /// Default save slot.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    pub(crate) fn request(&mut self, request: PersistenceRequest) {
        self.pending = Some(request);
    }

    pub(crate) fn take_request(&mut self) -> Option<PersistenceRequest> {
        self.pending.take()
    }
}

/// Owns a game, saves and restores it, and drives its loop.
pub struct GameManager<S: SaveStore = FileStore> {
    game: Game,
    store: S,
    slot: String,
}

impl<S: SaveStore> GameManager<S> {
    /// Take ownership of `game` and link it to this manager.
    pub fn new(mut game: Game, store: S) -> Self {
        game.set_game_mgr(ManagerLink::new(DEFAULT_SAVE_SLOT));
        Self {
            game,
            store,
            slot: DEFAULT_SAVE_SLOT.to_string(),
        }
    }

    /// Use `slot` as the default for save/load commands.
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = slot.into();
        self.game.set_game_mgr(ManagerLink::new(self.slot.clone()));
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn into_game(self) -> Game {
        self.game
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Replace the managed game and link it.
    pub fn link_with_game(&mut self, mut game: Game) {
        game.set_game_mgr(ManagerLink::new(self.slot.clone()));
        self.game = game;
    }

    // =========================================================================
    // Game loop
    // =========================================================================

    /// Render the current room and play until the game stops.
    pub fn run_game(&mut self, console: &mut dyn Console) -> Result<(), GameError> {
        self.game.start()?;
        self.play(console)
    }

    /// Continue playing without rendering the room again.
    pub fn resume_game(&mut self, console: &mut dyn Console) -> Result<(), GameError> {
        self.game.resume_game();
        self.play(console)
    }

    fn play(&mut self, console: &mut dyn Console) -> Result<(), GameError> {
        self.flush(console)?;
        while self.game.is_running() {
            let prompt = self.game.messages().prompt.clone();
            let Some(line) = console.read_line(&prompt)? else {
                debug!("input closed, stopping game");
                self.game.stop_game();
                break;
            };
            self.turn(&line)?;
            self.flush(console)?;
        }
        self.flush(console)
    }

    fn flush(&mut self, console: &mut dyn Console) -> Result<(), GameError> {
        for line in self.game.take_output() {
            console.write_line(&line)?;
        }
        Ok(())
    }

    /// Process one input line, carry out any save/load it asked for and
    /// return the lines produced.
    pub fn play_turn(&mut self, input: &str) -> Result<Vec<String>, GameError> {
        self.turn(input)?;
        Ok(self.game.take_output())
    }

    fn turn(&mut self, input: &str) -> Result<(), GameError> {
        self.game.process_input(input)?;
        self.handle_pending();
        Ok(())
    }

    fn handle_pending(&mut self) {
        let Some(request) = self.game.take_request() else {
            return;
        };
        match request {
            PersistenceRequest::Save(slot) => match self.save_game(&slot) {
                Ok(()) => {
                    let line = self.game.messages().game_saved.clone();
                    self.game.show_message(line);
                }
                Err(err) => {
                    error!(slot = %slot, error = %err, "save failed");
                    let line = format!("{} ({})", self.game.messages().save_failed, err);
                    self.game.show_message(line);
                }
            },
            PersistenceRequest::Load(slot) => match self.load_game_data(&slot) {
                Ok(()) => {
                    self.game.show_welcome_back_message();
                    self.game.resume_game();
                }
                Err(err) => {
                    error!(slot = %slot, error = %err, "load failed");
                    let line = format!("{} ({})", self.game.messages().load_failed, err);
                    self.game.show_message(line);
                }
            },
        }
    }

    // =========================================================================
    // Save / load
    // =========================================================================

    /// Write the whole game into `slot`. The manager link is detached while
    /// encoding and always reattached.
    pub fn save_game(&mut self, slot: &str) -> Result<(), PersistenceError> {
        let link = self.game.clear_game_mgr();
        let encoded = snapshot::encode(&self.game);
        if let Some(link) = link {
            self.game.set_game_mgr(link);
        }

        self.store.write(slot, &encoded?)?;
        info!(slot, "game saved");
        Ok(())
    }

    /// Replace the current game with the one saved in `slot`, leaving it
    /// stopped.
    ///
    /// All or nothing: the save is read, decoded and checked against the
    /// registered scripts before the current game is touched. On any error
    /// the current game is left exactly as it was.
    pub fn load_game_data(&mut self, slot: &str) -> Result<(), PersistenceError> {
        let contents = self.store.read(slot)?;
        let mut restored = snapshot::decode(&contents)?;

        let scripts = self.game.scripts().clone();
        if let Some(tag) = restored
            .script_tags()
            .into_iter()
            .find(|tag| !scripts.contains(tag))
        {
            return Err(PersistenceError::UnknownScript(tag));
        }

        self.game.stop_game();
        restored.set_scripts(scripts);
        restored.append_output(self.game.take_output());
        restored.stop_game();
        self.link_with_game(restored);
        info!(slot, "game loaded");
        Ok(())
    }

    /// Load `slot` and play it.
    ///
    /// A game that was saved while being played welcomes the player back and
    /// resumes. One that was never started, such as freshly built game data,
    /// is started from its current room instead.
    pub fn load_game(&mut self, slot: &str, console: &mut dyn Console) -> Result<(), GameError> {
        self.load_game_data(slot)?;
        if self.game.has_started() {
            self.game.show_welcome_back_message();
            self.resume_game(console)
        } else {
            self.game.show_welcome_message();
            self.run_game(console)
        }
    }
}
