//! Keyed storage for save files.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use super::PersistenceError;

/// Somewhere a serialized game can be written to and read back from.
pub trait SaveStore {
    fn write(&mut self, slot: &str, contents: &str) -> Result<(), PersistenceError>;

    /// Read a slot. A slot that was never written is [`PersistenceError::Missing`].
    fn read(&self, slot: &str) -> Result<String, PersistenceError>;

    fn exists(&self, slot: &str) -> bool;
}

/// Save files on disk, one file per slot under a root directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store relative to the working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn path_for(&self, slot: &str) -> PathBuf {
        self.root.join(slot)
    }
}

impl SaveStore for FileStore {
    fn write(&mut self, slot: &str, contents: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(slot);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)?;
        Ok(())
    }

    fn read(&self, slot: &str) -> Result<String, PersistenceError> {
        match fs::read_to_string(self.path_for(slot)) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(PersistenceError::Missing(slot.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn exists(&self, slot: &str) -> bool {
        self.path_for(slot).is_file()
    }
}

/// In-memory slots, for tests and throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw contents of a slot.
    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    /// Overwrite a slot with arbitrary contents.
    pub fn insert(&mut self, slot: impl Into<String>, contents: impl Into<String>) {
        self.slots.insert(slot.into(), contents.into());
    }
}

impl SaveStore for MemoryStore {
    fn write(&mut self, slot: &str, contents: &str) -> Result<(), PersistenceError> {
        self.insert(slot, contents);
        Ok(())
    }

    fn read(&self, slot: &str) -> Result<String, PersistenceError> {
        self.slots
            .get(slot)
            .cloned()
            .ok_or_else(|| PersistenceError::Missing(slot.to_string()))
    }

    fn exists(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(!store.exists("save.json"));
        store.write("save.json", "{}").unwrap();
        assert!(store.exists("save.json"));
        assert_eq!(store.read("save.json").unwrap(), "{}");
    }

    #[test]
    fn test_file_store_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.write("slots/one.json", "1").unwrap();
        assert!(dir.path().join("slots").join("one.json").is_file());
    }

    #[test]
    fn test_file_store_missing_slot() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.read("nothing.json"),
            Err(PersistenceError::Missing(slot)) if slot == "nothing.json"
        ));
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(matches!(store.read("a"), Err(PersistenceError::Missing(_))));
        store.write("a", "data").unwrap();
        assert_eq!(store.get("a"), Some("data"));
        assert!(store.exists("a"));
    }
}
