use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::process::{engine_binary_name, GpuBackend};
use crate::restore::PointerWidth;
use crate::results::DEFAULT_SEPARATOR;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub restore: RestoreConfig,
    #[serde(default)]
    pub results: ResultsConfig,
}

/// Where the engine lives and how it is launched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Engine installation directory (default: ".").
    #[serde(default = "default_install_dir")]
    pub install_dir: PathBuf,
    /// GPU backend flavour of the engine build (default: cuda).
    #[serde(default)]
    pub backend: GpuBackend,
    /// Explicit executable, overriding the backend-derived name.
    #[serde(default)]
    pub binary: Option<PathBuf>,
    /// Working directory of the child (default: `install_dir`).
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

/// Checkpoint decoding settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreConfig {
    /// Pointer width of the engine build that wrote the file (4 or 8).
    #[serde(default)]
    pub pointer_width: PointerWidth,
}

/// Output-file parsing settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsConfig {
    #[serde(default = "default_separator")]
    pub separator: char,
}

fn default_install_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            install_dir: default_install_dir(),
            backend: GpuBackend::default(),
            binary: None,
            working_dir: None,
        }
    }
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
        }
    }
}

impl EngineConfig {
    /// Executable to launch: the override when set, otherwise the
    /// backend-derived name.
    ///
    /// Relative names are resolved against `install_dir` and made absolute,
    /// so the result does not depend on the child's working directory.
    pub fn program(&self) -> PathBuf {
        let name = self
            .binary
            .clone()
            .unwrap_or_else(|| PathBuf::from(engine_binary_name(self.backend)));
        if name.is_absolute() {
            return name;
        }
        let joined = match name.strip_prefix(".") {
            Ok(stripped) => self.install_dir.join(stripped),
            Err(_) => self.install_dir.join(&name),
        };
        std::path::absolute(&joined).unwrap_or(joined)
    }

    /// Directory the child runs in.
    pub fn working_dir(&self) -> &Path {
        self.working_dir.as_deref().unwrap_or(&self.install_dir)
    }
}
