use serde::{Deserialize, Serialize};

/// Decoded contents of an engine checkpoint file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreSnapshot {
    /// Binary format version.
    pub version: u32,
    /// Working directory of the checkpointed run.
    pub cwd: String,
    /// Process id of the checkpointed run.
    pub pid: u32,
    /// Position in the dictionary list.
    pub dict_pos: u32,
    /// Position in the mask list.
    pub mask_pos: u32,
    /// Password candidate counter.
    pub pw_cur: u64,
    /// Number of stored original arguments.
    pub argc: u32,
    /// Raw value of the original argument pointer. Meaningless outside the
    /// process that wrote it.
    pub argv_ptr: u64,
    /// Original argument vector recovered from the text tail.
    pub argv: Vec<String>,
}

impl RestoreSnapshot {
    /// Snapshot fields as ordered `(name, value)` pairs.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("version_bin", self.version.to_string()),
            ("cwd", self.cwd.clone()),
            ("pid", self.pid.to_string()),
            ("dictpos", self.dict_pos.to_string()),
            ("maskpos", self.mask_pos.to_string()),
            ("pw_cur", self.pw_cur.to_string()),
            ("argc", self.argc.to_string()),
            ("argv", self.argv.join(" ")),
        ]
    }
}
