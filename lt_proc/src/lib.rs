//! ABOUTME: Process-table queries for test harnesses via ps, pgrep, and kill
//! ABOUTME: Blocking runner for short external commands with captured output

use lt_core::{Error, Result};
use metrics::{counter, histogram};
use std::{
    path::PathBuf,
    process::{Command, ExitStatus, Stdio},
    time::{Duration, Instant},
};
use tracing::{debug, instrument};

pub mod table;

pub use table::{get_command_by_pid, get_pids_by_pattern, terminate, ProcessTable, SystemProcessTable};

/// Command specification for process execution
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Program to execute, looked up on PATH when relative
    pub program: PathBuf,
    /// Command line arguments
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Add command line arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args.extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    fn program_name(&self) -> String {
        self.program
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}

/// Result of command execution
#[derive(Debug)]
pub struct CommandResult {
    /// Exit status of the command
    pub status: ExitStatus,
    /// Captured stdout, lossily decoded
    pub stdout: String,
    /// Total execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Check if the command succeeded (exit code 0)
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get the exit code if available
    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// Run a command to completion and capture its output
///
/// Blocks until the program exits. Stderr is discarded. Only failing to
/// start the program is an error; a non-zero exit is reported through
/// [`CommandResult::status`].
#[instrument(skip(spec), fields(program = %spec.program.display(), args = ?spec.args))]
pub fn run_capture(spec: &CommandSpec) -> Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());

    let output = cmd.output().map_err(|e| {
        Error::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to run command {}: {}", spec.program.display(), e),
        ))
    })?;

    let duration = start.elapsed();
    let result = CommandResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        duration,
    };

    let program_name = spec.program_name();
    histogram!("command_duration_seconds", "program" => program_name.clone())
        .record(duration.as_secs_f64());
    if !result.success() {
        counter!("command_failure_total",
            "program" => program_name,
            "exit_code" => result.exit_code().unwrap_or(-1).to_string())
        .increment(1);
    }

    debug!(
        duration_ms = duration.as_millis() as u64,
        exit_code = result.exit_code(),
        stdout_bytes = result.stdout.len(),
        "Command finished"
    );

    Ok(result)
}
