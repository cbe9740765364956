use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread;

use parking_lot::Mutex;

use crate::process::exit::exit_code_of;
use crate::process::queue::LineQueue;
use crate::process::SupervisorError;

/// A live engine process with its two output readers.
///
/// The reader threads only touch their own queue and end when the child
/// closes the stream.
pub struct ProcessHandle {
    child: Mutex<Child>,
    stdin: Mutex<Option<ChildStdin>>,
    exit_code: Mutex<Option<i32>>,
    stdout: LineQueue,
    stderr: LineQueue,
    readers: Vec<thread::JoinHandle<()>>,
    pid: u32,
}

impl ProcessHandle {
    pub fn spawn(
        program: &Path,
        args: &[String],
        working_dir: Option<&Path>,
    ) -> Result<Self, SupervisorError> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = working_dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|source| SupervisorError::Spawn {
            program: program.to_path_buf(),
            source,
        })?;
        let pid = child.id();

        let stdout_pipe = child.stdout.take().ok_or(SupervisorError::MissingPipe("stdout"))?;
        let stderr_pipe = child.stderr.take().ok_or(SupervisorError::MissingPipe("stderr"))?;
        let stdin = child.stdin.take();

        let stdout = LineQueue::new();
        let stderr = LineQueue::new();
        let readers = vec![
            spawn_reader(stdout_pipe, stdout.clone(), "stdout")?,
            spawn_reader(stderr_pipe, stderr.clone(), "stderr")?,
        ];

        Ok(Self {
            child: Mutex::new(child),
            stdin: Mutex::new(stdin),
            exit_code: Mutex::new(None),
            stdout,
            stderr,
            readers,
            pid,
        })
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Exit code once the child has finished; `None` while it runs.
    pub fn exit_code(&self) -> Option<i32> {
        let mut cached = self.exit_code.lock();
        if cached.is_some() {
            return *cached;
        }
        match self.child.lock().try_wait() {
            Ok(Some(status)) => {
                *cached = Some(exit_code_of(status));
                *cached
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!("Failed to poll engine process {}: {}", self.pid, err);
                None
            }
        }
    }

    /// Forcibly terminate the child.
    pub fn kill(&self) -> io::Result<()> {
        self.child.lock().kill()
    }

    /// Write raw bytes to the child's stdin.
    pub fn send_input(&self, bytes: &[u8]) -> io::Result<()> {
        let mut stdin = self.stdin.lock();
        let Some(stdin) = stdin.as_mut() else {
            return Ok(());
        };
        stdin.write_all(bytes)?;
        stdin.flush()
    }

    pub fn stdout(&self) -> &LineQueue {
        &self.stdout
    }

    pub fn stderr(&self) -> &LineQueue {
        &self.stderr
    }

    /// Close stdin and reap the child.
    ///
    /// Readers that already reached end of stream are joined. The rest are
    /// detached: a grandchild may still hold the pipes open, and they keep
    /// filling their queues until it closes them. Call only after the child
    /// has exited or been killed.
    pub fn reap(&mut self) {
        self.stdin.lock().take();
        {
            let mut child = self.child.lock();
            match child.wait() {
                Ok(status) => {
                    let mut cached = self.exit_code.lock();
                    if cached.is_none() {
                        *cached = Some(exit_code_of(status));
                    }
                }
                Err(err) => tracing::warn!("Failed to reap engine process {}: {}", self.pid, err),
            }
        }
        for reader in self.readers.drain(..) {
            if reader.is_finished() {
                let _ = reader.join();
            } else {
                tracing::debug!("Engine {} output still open, detaching reader", self.pid);
            }
        }
    }
}

fn spawn_reader<R>(
    stream: R,
    queue: LineQueue,
    name: &'static str,
) -> Result<thread::JoinHandle<()>, SupervisorError>
where
    R: Read + Send + 'static,
{
    thread::Builder::new()
        .name(format!("engine-{}", name))
        .spawn(move || {
            let mut reader = BufReader::new(stream);
            let mut line = Vec::new();
            loop {
                line.clear();
                match reader.read_until(b'\n', &mut line) {
                    Ok(0) => break,
                    Ok(_) => queue.push(String::from_utf8_lossy(&line).into_owned()),
                    Err(err) => {
                        tracing::debug!("Engine {} read failed: {}", name, err);
                        break;
                    }
                }
            }
            tracing::trace!("Engine {} reached end of stream", name);
        })
        .map_err(SupervisorError::ReaderThread)
}
