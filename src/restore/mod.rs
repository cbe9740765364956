//! Engine checkpoint ("restore") file decoding.

mod decoder;
mod snapshot;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use decoder::{PointerWidth, RestoreDecoder, CWD_LEN, PLACEHOLDER_BINARY};
pub use snapshot::RestoreSnapshot;

/// Errors that can occur while reading a checkpoint file.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("Restore file '{path}' not found")]
    NotFound { path: PathBuf },

    #[error("Failed to open restore file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Restore record truncated at field '{field}'")]
    Truncated { field: &'static str },

    #[error("Failed to read restore file: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },
}

/// Conventional checkpoint path of a session: `<install_dir>/<session>.restore`.
pub fn restore_path(install_dir: &Path, session: &str) -> PathBuf {
    install_dir.join(format!("{}.restore", session))
}
