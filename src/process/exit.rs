use std::fmt;
use std::process::ExitStatus;

/// Meaning of an engine exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineExit {
    /// `-2`: GPU watchdog alarm aborted the run.
    GpuWatchdog,
    /// `-1`: error.
    Error,
    /// `0`: every target hash was cracked.
    Cracked,
    /// `1`: keyspace exhausted without cracking every target.
    Exhausted,
    /// `2`: aborted by the user or an external request.
    Aborted,
    /// Any code outside the documented set (including signal deaths).
    Other(i32),
}

impl EngineExit {
    pub fn from_code(code: i32) -> Self {
        match code {
            -2 => EngineExit::GpuWatchdog,
            -1 => EngineExit::Error,
            0 => EngineExit::Cracked,
            1 => EngineExit::Exhausted,
            2 => EngineExit::Aborted,
            other => EngineExit::Other(other),
        }
    }

    pub fn code(self) -> i32 {
        match self {
            EngineExit::GpuWatchdog => -2,
            EngineExit::Error => -1,
            EngineExit::Cracked => 0,
            EngineExit::Exhausted => 1,
            EngineExit::Aborted => 2,
            EngineExit::Other(code) => code,
        }
    }

    /// Whether the code is one the engine documents.
    pub fn is_documented(self) -> bool {
        !matches!(self, EngineExit::Other(_))
    }

    pub fn description(self) -> &'static str {
        match self {
            EngineExit::GpuWatchdog => "GPU watchdog alarm",
            EngineExit::Error => "error",
            EngineExit::Cracked => "all hashes cracked",
            EngineExit::Exhausted => "keyspace exhausted",
            EngineExit::Aborted => "aborted",
            EngineExit::Other(_) => "unexpected exit",
        }
    }
}

impl fmt::Display for EngineExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}

/// Exit code of a finished child, in the engine's signed convention.
///
/// On unix the status byte is sign-extended, so 255 reads as `-1` and 254
/// as `-2`. A child killed by a signal reports the negated signal number.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(code) = status.code() {
            return i32::from(code as u8 as i8);
        }
        status.signal().map(|sig| -sig).unwrap_or(-1)
    }

    #[cfg(not(unix))]
    {
        status.code().unwrap_or(-1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_codes() {
        for code in -2..=2 {
            let exit = EngineExit::from_code(code);
            assert!(exit.is_documented());
            assert_eq!(exit.code(), code);
        }
        assert!(!EngineExit::from_code(-9).is_documented());
    }

    #[cfg(unix)]
    #[test]
    fn unix_status_bytes_are_sign_extended() {
        use std::os::unix::process::ExitStatusExt;

        // wait(2) status encodes the exit byte in bits 8..16
        assert_eq!(exit_code_of(ExitStatus::from_raw(255 << 8)), -1);
        assert_eq!(exit_code_of(ExitStatus::from_raw(254 << 8)), -2);
        assert_eq!(exit_code_of(ExitStatus::from_raw(1 << 8)), 1);
        assert_eq!(exit_code_of(ExitStatus::from_raw(9)), -9);
    }
}
