//! Built-in command aliases and alias derivation.
//!
//! Commands are matched by exact string comparison against the raw input
//! line, so every phrase the player may type has to be enumerated up front.
//! `simple_map` and `complex_map` expand verb tables into those phrases.

mod messages;

pub use messages::*;

pub const CMD_LOOK: &[&str] = &["look", "examine", "inspect"];
pub const CMD_SHOW_SCORE: &[&str] = &["score"];
pub const CMD_SHOW_INVENTORY: &[&str] = &["i", "inv"];
pub const CMD_SHOW_HELP: &[&str] = &["h", "?"];
pub const CMD_SHOW_STATS: &[&str] = &["stats", "st"];
pub const CMD_GAME_LOAD: &[&str] = &["load", "resume"];
pub const CMD_GAME_SAVE: &[&str] = &["save"];
pub const CMD_GAME_QUIT: &[&str] = &["quit", "exit", "qq"];
pub const CMD_ITEM_USE: &[&str] = &["use", "u"];
pub const CMD_ITEM_GET: &[&str] = &["get", "pickup", "take"];
pub const CMD_ITEM_COMBINE: &[&str] = &["combine", "merge"];

pub const DEFAULT_CONNECTOR: &str = " ";

/// Convert an alias table into owned strings.
pub fn aliases<S: AsRef<str>>(commands: &[S]) -> Vec<String> {
    commands.iter().map(|c| c.as_ref().to_string()).collect()
}

/// One alias per verb: `"get sword"`, `"take sword"`, ...
pub fn simple_map<S: AsRef<str>>(verbs: &[S], noun: &str) -> Vec<String> {
    simple_map_with(verbs, noun, DEFAULT_CONNECTOR)
}

/// Like [`simple_map`] with a custom connector between verb and noun.
pub fn simple_map_with<S: AsRef<str>>(verbs: &[S], noun: &str, connector: &str) -> Vec<String> {
    verbs
        .iter()
        .map(|verb| format!("{}{}{}", verb.as_ref(), connector, noun))
        .collect()
}

/// Aliases for a two-noun interaction in both noun orders.
pub fn complex_map<S: AsRef<str>>(verbs: &[S], first: &str, second: &str) -> Vec<String> {
    complex_map_with(verbs, first, second, DEFAULT_CONNECTOR)
}

/// Two-noun aliases with `connector` between the nouns.
///
/// The verb is always joined to its first noun with [`DEFAULT_CONNECTOR`];
/// `connector` only sits between the two nouns. The forward order comes
/// first (`"v first{connector}second"` for every verb), followed by the
/// reversed order (`"v second{connector}first"` for every verb).
pub fn complex_map_with<S: AsRef<str>>(
    verbs: &[S],
    first: &str,
    second: &str,
    connector: &str,
) -> Vec<String> {
    let mut expression = simple_map_with(simple_map(verbs, first).as_slice(), second, connector);
    for phrase in simple_map(verbs, second) {
        expression.push(format!("{}{}{}", phrase, connector, first));
    }
    expression
}
