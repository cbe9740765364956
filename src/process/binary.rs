use serde::{Deserialize, Serialize};

/// GPU backend flavour of the engine build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GpuBackend {
    #[default]
    Cuda,
    #[serde(alias = "ocl")]
    OpenCl,
}

impl GpuBackend {
    fn prefix(self) -> &'static str {
        match self {
            GpuBackend::Cuda => "cudaHashcat",
            GpuBackend::OpenCl => "oclHashcat",
        }
    }
}

/// Pointer width of the running target, as the engine names its builds.
pub fn target_bits() -> &'static str {
    if cfg!(target_pointer_width = "64") {
        "64"
    } else {
        "32"
    }
}

/// Engine executable name for this OS, architecture and backend.
///
/// Windows builds are `<prefix><bits>.exe`; elsewhere `./<prefix><bits>.bin`.
pub fn engine_binary_name(backend: GpuBackend) -> String {
    if cfg!(windows) {
        format!("{}{}.exe", backend.prefix(), target_bits())
    } else {
        format!("./{}{}.bin", backend.prefix(), target_bits())
    }
}
