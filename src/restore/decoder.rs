//! Decoder for the engine's fixed-layout checkpoint record.
//!
//! Record layout, little-endian:
//!
//! ```text
//! offset  width  field
//! 0       4      version
//! 4       256    cwd (NUL padded)
//! 260     4      pid
//! 264     4      dictionary position
//! 268     4      mask position
//! 272     8      password candidate counter
//! 280     4      argc
//! 284     4      argv pointer              (4-byte pointers)
//! 284     4+8    padding + argv pointer    (8-byte pointers)
//! ```
//!
//! The record is followed by the original argument vector as newline
//! terminated text.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::restore::snapshot::RestoreSnapshot;
use crate::restore::RestoreError;

/// Width of the working-directory field.
pub const CWD_LEN: usize = 256;

/// Stand-in for the first argument when no binary name can be recovered.
pub const PLACEHOLDER_BINARY: &str = "oclHashcat";

/// `word.word` token, e.g. `oclHashcat64.bin`.
static BINARY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+\.\w+").expect("binary name pattern is valid"));

/// Width of the native pointer stored in the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PointerWidth {
    Four,
    Eight,
}

impl PointerWidth {
    /// Pointer width of the running target.
    pub fn native() -> Self {
        if cfg!(target_pointer_width = "64") {
            PointerWidth::Eight
        } else {
            PointerWidth::Four
        }
    }

    pub fn bytes(self) -> usize {
        match self {
            PointerWidth::Four => 4,
            PointerWidth::Eight => 8,
        }
    }

    /// Alignment padding between `argc` and the pointer.
    fn padding(self) -> usize {
        match self {
            PointerWidth::Four => 0,
            PointerWidth::Eight => 4,
        }
    }
}

impl Default for PointerWidth {
    fn default() -> Self {
        Self::native()
    }
}

impl TryFrom<u8> for PointerWidth {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(PointerWidth::Four),
            8 => Ok(PointerWidth::Eight),
            other => Err(format!("pointer width must be 4 or 8, got {}", other)),
        }
    }
}

impl From<PointerWidth> for u8 {
    fn from(value: PointerWidth) -> Self {
        value.bytes() as u8
    }
}

/// Reads checkpoint files for a given pointer width.
#[derive(Debug, Clone, Copy, Default)]
pub struct RestoreDecoder {
    pointer_width: PointerWidth,
}

impl RestoreDecoder {
    pub fn new(pointer_width: PointerWidth) -> Self {
        Self { pointer_width }
    }

    pub fn pointer_width(&self) -> PointerWidth {
        self.pointer_width
    }

    /// Size of the fixed record in bytes.
    pub fn record_len(&self) -> usize {
        4 + CWD_LEN + 4 + 4 + 4 + 8 + 4 + self.pointer_width.padding() + self.pointer_width.bytes()
    }

    /// Decode the checkpoint file at `path`.
    pub fn read(&self, path: &Path) -> Result<RestoreSnapshot, RestoreError> {
        let file = File::open(path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                RestoreError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                RestoreError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;
        self.decode(file)
    }

    /// Decode a checkpoint record followed by its argument tail.
    pub fn decode<R: Read>(&self, reader: R) -> Result<RestoreSnapshot, RestoreError> {
        let mut fields = FieldReader { inner: reader };

        let version = fields.u32("version")?;
        let cwd = nul_terminated(&fields.bytes::<CWD_LEN>("cwd")?);
        let pid = fields.u32("pid")?;
        let dict_pos = fields.u32("dictpos")?;
        let mask_pos = fields.u32("maskpos")?;
        let pw_cur = fields.u64("pw_cur")?;
        let argc = fields.u32("argc")?;
        let argv_ptr = match self.pointer_width {
            PointerWidth::Four => u64::from(fields.u32("argv")?),
            PointerWidth::Eight => {
                fields.bytes::<4>("argv")?;
                fields.u64("argv")?
            }
        };

        let mut tail = Vec::new();
        fields
            .inner
            .read_to_end(&mut tail)
            .map_err(|source| RestoreError::Read { source })?;
        let argv = recover_argv(&String::from_utf8_lossy(&tail));

        Ok(RestoreSnapshot {
            version,
            cwd,
            pid,
            dict_pos,
            mask_pos,
            pw_cur,
            argc,
            argv_ptr,
            argv,
        })
    }
}

struct FieldReader<R> {
    inner: R,
}

impl<R: Read> FieldReader<R> {
    fn bytes<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], RestoreError> {
        let mut buf = [0u8; N];
        self.inner.read_exact(&mut buf).map_err(|source| {
            if source.kind() == ErrorKind::UnexpectedEof {
                RestoreError::Truncated { field }
            } else {
                RestoreError::Read { source }
            }
        })?;
        Ok(buf)
    }

    fn u32(&mut self, field: &'static str) -> Result<u32, RestoreError> {
        self.bytes::<4>(field).map(u32::from_le_bytes)
    }

    fn u64(&mut self, field: &'static str) -> Result<u64, RestoreError> {
        self.bytes::<8>(field).map(u64::from_le_bytes)
    }
}

fn nul_terminated(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

/// Split the tail into lines and reduce the first one to the binary name.
fn recover_argv(tail: &str) -> Vec<String> {
    let mut argv: Vec<String> = tail.lines().map(|l| l.trim_end().to_string()).collect();
    if let Some(first) = argv.first_mut() {
        *first = binary_name(first).unwrap_or_else(|| PLACEHOLDER_BINARY.to_string());
    }
    argv
}

/// First `word.word` token of `line`, e.g. `oclHashcat64.bin`.
fn binary_name(line: &str) -> Option<String> {
    BINARY_NAME.find(line).map(|m| m.as_str().to_string())
}
