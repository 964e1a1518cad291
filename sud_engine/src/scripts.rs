//! Authored event behaviour.
//!
//! Scripted events and item use behaviour are stored in the game as plain
//! tags so that they survive a save/load cycle. The behaviour itself lives
//! in a [`ScriptRegistry`] that is supplied again when a game is restored.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use sud_world::Event;

use crate::error::GameError;
use crate::game::Game;

/// Success action of an authored event.
pub trait Script {
    /// Run against the game. `event` is the event that fired.
    fn run(&self, game: &mut Game, event: &Event) -> Result<(), GameError>;
}

impl<F> Script for F
where
    F: Fn(&mut Game, &Event) -> Result<(), GameError>,
{
    fn run(&self, game: &mut Game, event: &Event) -> Result<(), GameError> {
        self(game, event)
    }
}

/// Tag -> script lookup table.
#[derive(Clone, Default)]
pub struct ScriptRegistry {
    scripts: HashMap<String, Rc<dyn Script>>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure under `tag`, replacing any previous entry.
    pub fn register<F>(&mut self, tag: impl Into<String>, script: F)
    where
        F: Fn(&mut Game, &Event) -> Result<(), GameError> + 'static,
    {
        self.insert(tag, script);
    }

    /// Register any [`Script`] implementation under `tag`.
    pub fn insert(&mut self, tag: impl Into<String>, script: impl Script + 'static) {
        self.scripts.insert(tag.into(), Rc::new(script));
    }

    pub fn get(&self, tag: &str) -> Option<Rc<dyn Script>> {
        self.scripts.get(tag).cloned()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.scripts.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<_> = self.scripts.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

impl fmt::Debug for ScriptRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptRegistry")
            .field("tags", &self.tags())
            .finish()
    }
}
