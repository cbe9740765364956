//! Option store with change tracking.
//!
//! Every mutation goes through [`OptionStore::set`], which compares the new
//! value against the default snapshot and records the option name in the
//! changed set. Only changed options are compiled into switches.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::options::registry::{find_option, is_internal, OPTIONS};
use crate::options::value::{OptionKind, OptionValue};

/// Errors that can occur when mutating options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    #[error("Unknown option '{name}'")]
    UnknownOption { name: String },

    #[error("Option '{name}' expects a {expected:?} value, got {got:?}")]
    KindMismatch {
        name: String,
        expected: OptionKind,
        got: OptionValue,
    },
}

/// Job configuration with defaults and a changed set.
#[derive(Debug, Clone)]
pub struct OptionStore {
    values: BTreeMap<&'static str, OptionValue>,
    defaults: BTreeMap<&'static str, OptionValue>,
    changed: Vec<&'static str>,
}

impl OptionStore {
    pub fn new() -> Self {
        let mut store = Self {
            values: BTreeMap::new(),
            defaults: BTreeMap::new(),
            changed: Vec::new(),
        };
        store.reset();
        store
    }

    /// Restore every option to its hardcoded default and clear the changed set.
    pub fn reset(&mut self) {
        self.values = OPTIONS
            .iter()
            .map(|d| (d.name, d.default.to_value()))
            .collect();
        self.defaults = self.values.clone();
        self.changed.clear();
        tracing::debug!("Options reset to defaults");
    }

    /// Current value of `name`, if it is a known option.
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    /// Default recorded for `name` at construction or last reset.
    pub fn default_of(&self, name: &str) -> Option<&OptionValue> {
        self.defaults.get(name)
    }

    /// Assign `value` to `name`.
    ///
    /// If the value differs from the recorded default and the option is not
    /// consumed positionally, the name is appended to the changed set. An
    /// option set several times is appended once per differing assignment.
    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) -> Result<(), OptionError> {
        let def = find_option(name).ok_or_else(|| OptionError::UnknownOption {
            name: name.to_string(),
        })?;
        let value = value.into();
        let value = value
            .clone()
            .coerce(def.kind)
            .ok_or_else(|| OptionError::KindMismatch {
                name: name.to_string(),
                expected: def.kind,
                got: value,
            })?;

        let differs = self.defaults.get(def.name) != Some(&value);
        if differs && !is_internal(def.name) {
            self.changed.push(def.name);
        }
        self.values.insert(def.name, value);
        Ok(())
    }

    /// Names changed from default, in order of assignment.
    pub fn changed(&self) -> &[&'static str] {
        &self.changed
    }

    pub fn is_changed(&self, name: &str) -> bool {
        self.changed.iter().any(|n| *n == name)
    }

    // -- positional inputs ----------------------------------------------------

    pub fn hash_file(&self) -> Option<&Path> {
        self.values.get("hash_file").and_then(OptionValue::as_path)
    }

    /// Hash type as configured: a numeric code or a human-readable name.
    pub fn hash_type(&self) -> String {
        self.values
            .get("hash_type")
            .map(ToString::to_string)
            .unwrap_or_else(|| "0".to_string())
    }

    pub fn words_files(&self) -> &[PathBuf] {
        self.values
            .get("words_files")
            .map(OptionValue::as_path_list)
            .unwrap_or(&[])
    }

    pub fn rules_files(&self) -> &[PathBuf] {
        self.values
            .get("rules_files")
            .map(OptionValue::as_path_list)
            .unwrap_or(&[])
    }

    pub fn masks_file(&self) -> Option<&Path> {
        self.values.get("masks_file").and_then(OptionValue::as_path)
    }

    pub fn mask(&self) -> Option<&str> {
        self.values.get("mask").and_then(OptionValue::as_text)
    }

    pub fn add_dictionary(&mut self, path: impl Into<PathBuf>) {
        self.push_path("words_files", path.into());
    }

    pub fn add_rules_file(&mut self, path: impl Into<PathBuf>) {
        self.push_path("rules_files", path.into());
    }

    pub fn clear_words(&mut self) {
        self.values
            .insert("words_files", OptionValue::PathList(Vec::new()));
    }

    pub fn clear_rules(&mut self) {
        self.values
            .insert("rules_files", OptionValue::PathList(Vec::new()));
    }

    fn push_path(&mut self, name: &'static str, path: PathBuf) {
        match self.values.get_mut(name) {
            Some(OptionValue::PathList(list)) => list.push(path),
            _ => {
                self.values.insert(name, OptionValue::PathList(vec![path]));
            }
        }
    }

    // -- session & output -----------------------------------------------------

    pub fn session(&self) -> &str {
        self.values
            .get("session")
            .and_then(OptionValue::as_text)
            .unwrap_or("default_session")
    }

    pub fn outfile(&self) -> Option<&Path> {
        self.values.get("outfile").and_then(OptionValue::as_path)
    }

    /// Output separator; the first character of the `separator` option.
    pub fn separator(&self) -> char {
        self.values
            .get("separator")
            .and_then(OptionValue::as_text)
            .and_then(|s| s.chars().next())
            .unwrap_or(':')
    }
}

impl Default for OptionStore {
    fn default() -> Self {
        Self::new()
    }
}
