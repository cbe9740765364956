//! Process supervisor: at most one live engine child at a time.

use std::path::{Path, PathBuf};

use crate::process::exit::EngineExit;
use crate::process::handle::ProcessHandle;
use crate::process::SupervisorError;

/// Lifecycle of the supervised process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorState {
    /// Nothing started yet.
    Idle,
    Running,
    /// Child finished with this exit code.
    Exited(i32),
}

/// Interactive keys understood by the engine on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKey {
    Status,
    Pause,
    Resume,
    Checkpoint,
}

impl EngineKey {
    fn byte(self) -> u8 {
        match self {
            EngineKey::Status => b's',
            EngineKey::Pause => b'p',
            EngineKey::Resume => b'r',
            EngineKey::Checkpoint => b'c',
        }
    }
}

/// Result of [`ProcessSupervisor::stop`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// No process was ever started.
    Idle,
    /// The child had already exited with this code.
    AlreadyExited(i32),
    /// The child was killed.
    Terminated { code: Option<i32> },
    /// Killing failed, but the child had exited with a documented code
    /// in the meantime.
    RaceAccepted { code: i32 },
    /// Killing failed and the child's state is unexplained.
    Abnormal { code: Option<i32>, error: String },
}

impl StopOutcome {
    pub fn is_abnormal(&self) -> bool {
        matches!(self, StopOutcome::Abnormal { .. })
    }

    /// Exit code known after stopping, if any.
    pub fn code(&self) -> Option<i32> {
        match self {
            StopOutcome::Idle => None,
            StopOutcome::AlreadyExited(code) | StopOutcome::RaceAccepted { code } => Some(*code),
            StopOutcome::Terminated { code } | StopOutcome::Abnormal { code, .. } => *code,
        }
    }
}

/// Spawns the engine and exposes non-blocking access to its output.
pub struct ProcessSupervisor {
    program: PathBuf,
    working_dir: Option<PathBuf>,
    handle: Option<ProcessHandle>,
}

impl ProcessSupervisor {
    pub fn new(program: PathBuf, working_dir: Option<PathBuf>) -> Self {
        Self {
            program,
            working_dir,
            handle: None,
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Launch the engine with `args`, stopping any running child first.
    pub fn start(&mut self, args: &[String]) -> Result<(), SupervisorError> {
        if self.is_running() {
            tracing::info!("Engine already running, stopping it before restart");
        }
        if self.handle.is_some() {
            self.stop();
        }
        tracing::info!("Starting engine: {} {}", self.program.display(), args.join(" "));

        let handle = ProcessHandle::spawn(&self.program, args, self.working_dir.as_deref())?;
        tracing::debug!("Engine started with pid {}", handle.pid());
        self.handle = Some(handle);
        Ok(())
    }

    /// Next stdout line with trailing whitespace removed, if one is queued.
    pub fn stdout(&self) -> Option<String> {
        self.handle
            .as_ref()
            .and_then(|h| h.stdout().try_pop())
            .map(|line| line.trim_end().to_string())
    }

    /// Next stderr line with trailing whitespace removed, if one is queued.
    pub fn stderr(&self) -> Option<String> {
        self.handle
            .as_ref()
            .and_then(|h| h.stderr().try_pop())
            .map(|line| line.trim_end().to_string())
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state(), SupervisorState::Running)
    }

    /// Exit code of the last child; `None` while it runs or before any start.
    pub fn exit_code(&self) -> Option<i32> {
        self.handle.as_ref().and_then(ProcessHandle::exit_code)
    }

    pub fn exit_status(&self) -> Option<EngineExit> {
        self.exit_code().map(EngineExit::from_code)
    }

    pub fn state(&self) -> SupervisorState {
        match &self.handle {
            None => SupervisorState::Idle,
            Some(handle) => match handle.exit_code() {
                None => SupervisorState::Running,
                Some(code) => SupervisorState::Exited(code),
            },
        }
    }

    pub fn pid(&self) -> Option<u32> {
        self.handle.as_ref().map(ProcessHandle::pid)
    }

    /// Send an interactive key to the running engine.
    pub fn send_key(&self, key: EngineKey) -> Result<(), SupervisorError> {
        let Some(handle) = self.handle.as_ref().filter(|_| self.is_running()) else {
            return Err(SupervisorError::NotRunning);
        };
        handle
            .send_input(&[key.byte(), b'\n'])
            .map_err(SupervisorError::Input)
    }

    /// Forcibly terminate the child if it is running.
    ///
    /// A kill failure only counts as abnormal when the child's exit code is
    /// unknown or outside the documented set; a child that finished on its
    /// own (e.g. exhausted its keyspace) while being stopped is accepted.
    pub fn stop(&mut self) -> StopOutcome {
        let Some(handle) = self.handle.as_mut() else {
            return StopOutcome::Idle;
        };

        let mut outcome = match handle.exit_code() {
            Some(code) => StopOutcome::AlreadyExited(code),
            None => {
                tracing::info!("Stopping engine process {}", handle.pid());
                match handle.kill() {
                    Ok(()) => StopOutcome::Terminated { code: None },
                    Err(err) => {
                        let code = handle.exit_code();
                        match code {
                            Some(code) if EngineExit::from_code(code).is_documented() => {
                                StopOutcome::RaceAccepted { code }
                            }
                            _ => {
                                tracing::error!(
                                    "Failed to stop engine process {}: {} (check for a zombie process)",
                                    handle.pid(),
                                    err
                                );
                                StopOutcome::Abnormal {
                                    code,
                                    error: err.to_string(),
                                }
                            }
                        }
                    }
                }
            }
        };

        if !outcome.is_abnormal() {
            handle.reap();
            if let StopOutcome::Terminated { code } = &mut outcome {
                *code = handle.exit_code();
            }
        }
        match outcome.code() {
            Some(code) => tracing::info!("Engine exited: {}", EngineExit::from_code(code)),
            None => tracing::info!("Engine exit code unknown"),
        }
        outcome
    }
}

impl Drop for ProcessSupervisor {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
