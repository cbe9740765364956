//! Cracking session: options, compiler and supervisor behind one owner.

use std::path::{Path, PathBuf};

use crate::args::{compile_job, AttackJob, AttackMode};
use crate::config::Config;
use crate::options::OptionStore;
use crate::process::{EngineExit, EngineKey, ProcessSupervisor, StopOutcome, SupervisorError};
use crate::restore::{restore_path, RestoreDecoder, RestoreSnapshot};
use crate::results::{read_results, ResultRecord};

/// Drives one engine installation.
///
/// Dropping the session stops any running child.
pub struct CrackSession {
    config: Config,
    options: OptionStore,
    supervisor: ProcessSupervisor,
    last_job: Option<AttackJob>,
}

impl CrackSession {
    pub fn new(config: Config) -> Self {
        let supervisor = ProcessSupervisor::new(
            config.engine.program(),
            Some(config.engine.working_dir().to_path_buf()),
        );
        Self {
            config,
            options: OptionStore::new(),
            supervisor,
            last_job: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn options(&self) -> &OptionStore {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut OptionStore {
        &mut self.options
    }

    pub fn supervisor(&self) -> &ProcessSupervisor {
        &self.supervisor
    }

    /// Job compiled by the most recent attack or dry run.
    pub fn last_job(&self) -> Option<&AttackJob> {
        self.last_job.as_ref()
    }

    /// Reset every option to its default.
    pub fn reset(&mut self) {
        self.options.reset();
    }

    /// Compile `mode` without launching anything.
    pub fn dry_run(&mut self, mode: AttackMode) -> Option<AttackJob> {
        let job = compile_job(&self.options, mode, &self.config.engine.install_dir)?;
        tracing::info!(
            "Dry run: {}",
            job.command_line(self.supervisor.program())
        );
        self.last_job = Some(job.clone());
        Some(job)
    }

    /// Compile `mode` and launch the engine with it.
    ///
    /// `Ok(None)` means a required input was missing and nothing was started.
    pub fn attack(&mut self, mode: AttackMode) -> Result<Option<AttackJob>, SupervisorError> {
        let Some(job) = compile_job(&self.options, mode, &self.config.engine.install_dir) else {
            return Ok(None);
        };
        tracing::info!("Starting {} attack", mode);
        tracing::debug!("Using cmd: {}", job.command_line(self.supervisor.program()));
        self.supervisor.start(&job.args)?;
        self.last_job = Some(job.clone());
        Ok(Some(job))
    }

    pub fn straight(&mut self) -> Result<Option<AttackJob>, SupervisorError> {
        self.attack(AttackMode::Straight)
    }

    pub fn combinator(&mut self) -> Result<Option<AttackJob>, SupervisorError> {
        self.attack(AttackMode::Combinator)
    }

    pub fn brute_force(&mut self) -> Result<Option<AttackJob>, SupervisorError> {
        self.attack(AttackMode::BruteForce)
    }

    pub fn hybrid_dict_mask(&mut self) -> Result<Option<AttackJob>, SupervisorError> {
        self.attack(AttackMode::HybridDictMask)
    }

    pub fn hybrid_mask_dict(&mut self) -> Result<Option<AttackJob>, SupervisorError> {
        self.attack(AttackMode::HybridMaskDict)
    }

    // -- supervision ------------------------------------------------------------

    pub fn stdout(&self) -> Option<String> {
        self.supervisor.stdout()
    }

    pub fn stderr(&self) -> Option<String> {
        self.supervisor.stderr()
    }

    pub fn is_running(&self) -> bool {
        self.supervisor.is_running()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.supervisor.exit_code()
    }

    pub fn exit_status(&self) -> Option<EngineExit> {
        self.supervisor.exit_status()
    }

    pub fn send_key(&self, key: EngineKey) -> Result<(), SupervisorError> {
        self.supervisor.send_key(key)
    }

    pub fn stop(&mut self) -> StopOutcome {
        self.supervisor.stop()
    }

    // -- session files ----------------------------------------------------------

    /// `<install_dir>/<session>.restore` for the configured session name.
    pub fn restore_file(&self) -> PathBuf {
        restore_path(&self.config.engine.install_dir, self.options.session())
    }

    /// Decode the session's checkpoint file.
    pub fn restore_snapshot(&self) -> Option<RestoreSnapshot> {
        self.read_restore(&self.restore_file())
    }

    /// Decode the checkpoint at `path`; failures are logged and yield `None`.
    pub fn read_restore(&self, path: &Path) -> Option<RestoreSnapshot> {
        let decoder = RestoreDecoder::new(self.config.restore.pointer_width);
        match decoder.read(path) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                tracing::warn!("{}", err);
                None
            }
        }
    }

    /// Separator of the output file.
    ///
    /// A `separator` option changed on this session is passed to the engine
    /// and wins; otherwise the configured `[results] separator` applies.
    pub fn results_separator(&self) -> char {
        if self.options.is_changed("separator") {
            self.options.separator()
        } else {
            self.config.results.separator
        }
    }

    /// Cracked records from the configured output file.
    ///
    /// Relative output paths are taken from the engine's working directory.
    /// Without an output file a single empty record is returned.
    pub fn results(&self, fields: &[&str]) -> Vec<ResultRecord> {
        let Some(outfile) = self.options.outfile() else {
            tracing::warn!("No output file configured");
            return vec![ResultRecord::new()];
        };
        let path = self.config.engine.working_dir().join(outfile);
        read_results(&path, fields, self.results_separator())
    }
}
