//! Argument assembler: the engine command line in one place.

use std::path::{Path, PathBuf};

use crate::args::attack::AttackMode;
use crate::args::switches::{render, to_dashed};
use crate::options::OptionStore;

/// Compile the changed options into switch tokens.
///
/// Options are visited in the order they were changed; an option changed
/// twice is emitted twice.
pub fn compile_options(store: &OptionStore) -> Vec<String> {
    tracing::debug!("Building argv from {} changed option(s)", store.changed().len());
    store
        .changed()
        .iter()
        .flat_map(|name| {
            let value = store.get(name).map(ToString::to_string).unwrap_or_default();
            render(&to_dashed(name), &value)
        })
        .collect()
}

/// Builder for the engine argument vector.
///
/// Final layout: `-m <code> -a <mode> <hash source> <inputs...> <switches...> <rules...>`.
#[derive(Debug, Clone)]
pub struct ArgAssembler {
    head: Vec<String>,
    switches: Vec<String>,
    tail: Vec<String>,
}

impl ArgAssembler {
    /// Start with the fixed positional tokens of an attack.
    pub fn new(hash_code: &str, mode: AttackMode, hash_source: &Path) -> Self {
        let head = vec![
            "-m".to_string(),
            hash_code.to_string(),
            "-a".to_string(),
            mode.number().to_string(),
            hash_source.display().to_string(),
        ];
        Self {
            head,
            switches: Vec::new(),
            tail: Vec::new(),
        }
    }

    /// Mode-specific positional inputs (dictionaries, masks).
    pub fn with_inputs(mut self, inputs: &[String]) -> Self {
        self.head.extend(inputs.iter().cloned());
        self
    }

    /// Switches for every changed option.
    pub fn with_options(mut self, store: &OptionStore) -> Self {
        self.switches.extend(compile_options(store));
        self
    }

    /// `-r <path>` for each rules file that exists.
    ///
    /// Relative paths are resolved against `install_dir`; missing files are
    /// skipped.
    pub fn with_rules(mut self, rules: &[PathBuf], install_dir: &Path) -> Self {
        tracing::debug!("{} rules file(s) specified, verifying", rules.len());
        for rules_file in rules {
            let resolved = if rules_file.is_absolute() {
                rules_file.clone()
            } else {
                install_dir.join(rules_file)
            };
            if resolved.is_file() {
                tracing::debug!("Rules file {} found", resolved.display());
                self.tail.push("-r".into());
                self.tail.push(resolved.display().to_string());
            } else {
                tracing::warn!("Rules file {} not found, skipping", resolved.display());
            }
        }
        self
    }

    /// Build the final argument list.
    pub fn build(self) -> Vec<String> {
        let mut args = self.head;
        args.extend(self.switches);
        args.extend(self.tail);
        args
    }
}
