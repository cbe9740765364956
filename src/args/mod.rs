//! Command compilation for the cracking engine.
//!
//! ```text
//! OptionStore (changed set) → switches ┐
//! AttackMode + positional inputs ──────┴→ Assemble → AttackJob
//! ```
//!
//! Each stage is a pure function over the option store, so the compiled
//! argument vector can be inspected without spawning anything.

mod assembler;
mod attack;
mod pipeline;
mod switches;

pub use assembler::{compile_options, ArgAssembler};
pub use attack::AttackMode;
pub use pipeline::{compile_job, resolve_hash_code, AttackJob};
pub use switches::{render, switch_form, to_dashed, SwitchForm, EQUALS_REQUIRED, SHORT_SWITCHES};
