//! Control layer for an external password-cracking engine.
//!
//! Options are collected in an [`options::OptionStore`], compiled into an
//! argument vector by [`args`], and run under a [`process::ProcessSupervisor`].
//! Checkpoint and result files are read back through [`restore`] and
//! [`results`]. [`session::CrackSession`] ties these together.

pub mod args;
pub mod config;
pub mod hash_types;
pub mod options;
pub mod process;
pub mod restore;
pub mod results;
pub mod session;

pub use session::CrackSession;
