//! User-defined variables - author-controlled flags and counters.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Flag value types for puzzle state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlagValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl FlagValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FlagValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            FlagValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FlagValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Loose truthiness: false, 0, 0.0 and "" are false.
    pub fn is_truthy(&self) -> bool {
        match self {
            FlagValue::Bool(value) => *value,
            FlagValue::Int(value) => *value != 0,
            FlagValue::Float(value) => *value != 0.0,
            FlagValue::String(value) => !value.is_empty(),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<i64> for FlagValue {
    fn from(value: i64) -> Self {
        FlagValue::Int(value)
    }
}

impl From<f64> for FlagValue {
    fn from(value: f64) -> Self {
        FlagValue::Float(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::String(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::String(value)
    }
}

/// Key-value store of user-defined variables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    values: HashMap<String, FlagValue>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FlagValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FlagValue> {
        self.values.get(key)
    }

    /// All variables, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Unset a variable, returning its last value.
    pub fn remove(&mut self, key: &str) -> Option<FlagValue> {
        self.values.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut vars = Variables::new();
        vars.set("cabinet_opened", false);
        vars.set("visits", 3_i64);

        assert_eq!(vars.get("cabinet_opened"), Some(&FlagValue::Bool(false)));
        assert_eq!(vars.get("visits").and_then(FlagValue::as_int), Some(3));
        assert!(vars.get("missing").is_none());
    }

    #[test]
    fn test_overwrite() {
        let mut vars = Variables::new();
        vars.set("door", "locked");
        vars.set("door", "open");
        assert_eq!(vars.get("door").and_then(FlagValue::as_str), Some("open"));
        assert_eq!(vars.len(), 1);
    }

    #[test]
    fn test_remove_and_iter() {
        let mut vars = Variables::new();
        vars.set("ratio", 0.25);
        vars.set("door", "open");

        assert_eq!(vars.get("ratio").and_then(FlagValue::as_float), Some(0.25));
        assert_eq!(vars.iter().count(), 2);

        assert_eq!(vars.remove("door"), Some(FlagValue::from("open")));
        assert_eq!(vars.remove("door"), None);
        assert!(!vars.contains("door"));
        assert_eq!(vars.iter().collect::<Vec<_>>(), vec![("ratio", &FlagValue::Float(0.25))]);
    }

    #[test]
    fn test_truthiness() {
        assert!(FlagValue::Bool(true).is_truthy());
        assert!(!FlagValue::Int(0).is_truthy());
        assert!(FlagValue::Float(0.5).is_truthy());
        assert!(!FlagValue::from("").is_truthy());
    }
}
