//! Pipeline: options + attack mode → ready-to-run argument vector.

use std::path::{Path, PathBuf};

use crate::args::assembler::ArgAssembler;
use crate::args::attack::AttackMode;
use crate::hash_types;
use crate::options::OptionStore;

/// A compiled attack, ready to hand to the process supervisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackJob {
    pub mode: AttackMode,
    /// Resolved numeric hash-type code.
    pub hash_code: String,
    /// File holding the target hashes.
    pub hash_source: PathBuf,
    /// Mode-specific positional inputs, in command-line order.
    pub inputs: Vec<String>,
    /// Full argument vector, excluding the program itself.
    pub args: Vec<String>,
}

impl AttackJob {
    /// Render `program` followed by the arguments, space separated.
    pub fn command_line(&self, program: &Path) -> String {
        let mut parts = vec![program.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Hash code for the configured hash type, resolving names through the catalog.
pub fn resolve_hash_code(store: &OptionStore) -> String {
    let hash_type = store.hash_type();
    if hash_types::is_known_code(&hash_type) {
        hash_type
    } else {
        hash_types::resolve(&hash_type)
    }
}

/// Compile `mode` against the current options.
///
/// Returns `None` when an input the mode requires is missing: the hash
/// source, the dictionaries, or a mask for the hybrid modes.
pub fn compile_job(store: &OptionStore, mode: AttackMode, install_dir: &Path) -> Option<AttackJob> {
    let Some(hash_source) = store.hash_file() else {
        tracing::warn!("{} attack: no hash file configured", mode);
        return None;
    };

    let inputs = match mode_inputs(store, mode) {
        Ok(inputs) => inputs,
        Err(missing) => {
            tracing::warn!("{} attack: {}", mode, missing);
            return None;
        }
    };

    let hash_code = resolve_hash_code(store);
    let mut assembler = ArgAssembler::new(&hash_code, mode, hash_source)
        .with_inputs(&inputs)
        .with_options(store);
    if mode == AttackMode::Straight {
        assembler = assembler.with_rules(store.rules_files(), install_dir);
    }

    Some(AttackJob {
        mode,
        hash_code,
        hash_source: hash_source.to_path_buf(),
        inputs,
        args: assembler.build(),
    })
}

fn mode_inputs(store: &OptionStore, mode: AttackMode) -> Result<Vec<String>, &'static str> {
    let words: Vec<String> = store
        .words_files()
        .iter()
        .map(|p| p.display().to_string())
        .collect();
    let first_word = || words.first().cloned().ok_or("no dictionary configured");

    match mode {
        AttackMode::Straight | AttackMode::BruteForce => Ok(vec![first_word()?]),
        AttackMode::Combinator => match words.as_slice() {
            [first, second, ..] => Ok(vec![first.clone(), second.clone()]),
            _ => Err("two dictionaries required"),
        },
        AttackMode::HybridDictMask => {
            let mask = mask_input(store)?;
            Ok(vec![first_word()?, mask])
        }
        AttackMode::HybridMaskDict => {
            let word = first_word()?;
            Ok(vec![mask_input(store)?, word])
        }
    }
}

/// Mask file if configured, else the literal mask.
fn mask_input(store: &OptionStore) -> Result<String, &'static str> {
    if let Some(file) = store.masks_file() {
        return Ok(file.display().to_string());
    }
    store
        .mask()
        .map(str::to_string)
        .ok_or("no mask or mask file configured")
}
