//! ABOUTME: The process table as seen by a test harness
//! ABOUTME: Trait boundary so tests can swap the OS for a fake

use crate::{run_capture, CommandSpec};
use metrics::counter;
use tracing::{debug, warn};

/// Queries and signals against the OS process table
///
/// Every operation is best-effort: a missing process or a failed signal
/// shows up as empty output, never as an error.
pub trait ProcessTable {
    /// Command line of `pid`, or an empty string when there is no such process
    fn command_by_pid(&self, pid: u32) -> String;

    /// PIDs whose full command line matches `pattern`
    fn pids_by_pattern(&self, pattern: &str) -> Vec<u32>;

    /// Ask `pid` to terminate with SIGTERM
    fn terminate(&self, pid: u32);
}

/// [`ProcessTable`] backed by `ps`, `pgrep`, and `kill`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessTable;

impl SystemProcessTable {
    pub fn new() -> Self {
        Self
    }

    /// Stdout of `spec`, or empty when the program could not be started
    fn stdout_of(&self, query: &'static str, spec: CommandSpec) -> String {
        counter!("process_query_total", "query" => query).increment(1);
        match run_capture(&spec) {
            Ok(result) => result.stdout,
            Err(e) => {
                warn!(query, error = %e, "Process query could not run");
                String::new()
            }
        }
    }
}

impl ProcessTable for SystemProcessTable {
    fn command_by_pid(&self, pid: u32) -> String {
        let spec = CommandSpec::new("ps").args(["-p", &pid.to_string(), "-o", "command="]);
        let out = self.stdout_of("command_by_pid", spec);
        out.trim_end_matches(['\r', '\n']).to_string()
    }

    fn pids_by_pattern(&self, pattern: &str) -> Vec<u32> {
        let spec = CommandSpec::new("pgrep").args(["-f", pattern]);
        let pids: Vec<u32> = self
            .stdout_of("pids_by_pattern", spec)
            .lines()
            .filter_map(|line| line.trim().parse().ok())
            .collect();
        debug!(pattern, matches = pids.len(), "Looked up PIDs by pattern");
        pids
    }

    fn terminate(&self, pid: u32) {
        let spec = CommandSpec::new("kill").args(["-SIGTERM", &pid.to_string()]);
        self.stdout_of("terminate", spec);
    }
}

/// Command line of `pid` according to `ps`
pub fn get_command_by_pid(pid: u32) -> String {
    SystemProcessTable.command_by_pid(pid)
}

/// PIDs matching `pattern` according to `pgrep -f`
pub fn get_pids_by_pattern(pattern: &str) -> Vec<u32> {
    SystemProcessTable.pids_by_pattern(pattern)
}

/// Send SIGTERM to `pid` with `kill`
pub fn terminate(pid: u32) {
    SystemProcessTable.terminate(pid)
}
