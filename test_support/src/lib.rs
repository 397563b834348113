//! ABOUTME: Shared testing utilities and helper functions
//! ABOUTME: Fake process table and JSON fixtures for all crates

use lt_proc::ProcessTable;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// A string of `len` copies of `c`
pub fn long_string(c: char, len: usize) -> String {
    std::iter::repeat(c).take(len).collect()
}

/// Wrap `text` in an SGR color code and a reset
pub fn colored(code: &str, text: &str) -> String {
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

/// A node-API style payload with long strings at several depths
pub fn nested_payload() -> Value {
    json!({
        "transaction_id": long_string('f', 64),
        "processed": {
            "id": long_string('a', 120),
            "block_num": 42,
            "action_traces": [
                {
                    "receiver": "eosio.token",
                    "data": long_string('d', 200),
                    "console": ""
                },
                long_string('s', 150),
                [ { "hex": long_string('0', 90) } ]
            ],
            "except": null
        },
        "elapsed": 1234
    })
}

/// In-memory [`ProcessTable`] for tests that must not touch the OS
#[derive(Debug, Default)]
pub struct FakeProcessTable {
    commands: RefCell<BTreeMap<u32, String>>,
    terminated: RefCell<Vec<u32>>,
}

impl FakeProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a running process
    pub fn with_process(self, pid: u32, command: &str) -> Self {
        self.commands.borrow_mut().insert(pid, command.to_string());
        self
    }

    /// PIDs passed to [`ProcessTable::terminate`], in call order
    pub fn terminated(&self) -> Vec<u32> {
        self.terminated.borrow().clone()
    }

    /// Whether `pid` is still registered
    pub fn is_running(&self, pid: u32) -> bool {
        self.commands.borrow().contains_key(&pid)
    }
}

impl ProcessTable for FakeProcessTable {
    fn command_by_pid(&self, pid: u32) -> String {
        self.commands.borrow().get(&pid).cloned().unwrap_or_default()
    }

    fn pids_by_pattern(&self, pattern: &str) -> Vec<u32> {
        self.commands
            .borrow()
            .iter()
            .filter(|(_, command)| command.contains(pattern))
            .map(|(pid, _)| *pid)
            .collect()
    }

    fn terminate(&self, pid: u32) {
        self.terminated.borrow_mut().push(pid);
        self.commands.borrow_mut().remove(&pid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_process_table() {
        let table = FakeProcessTable::new()
            .with_process(10, "nodeos --config-dir /tmp/node_00")
            .with_process(11, "nodeos --config-dir /tmp/node_01")
            .with_process(20, "keosd --http-server-address 127.0.0.1:8899");

        assert_eq!(table.pids_by_pattern("nodeos"), vec![10, 11]);
        assert_eq!(table.command_by_pid(20), "keosd --http-server-address 127.0.0.1:8899");

        table.terminate(11);
        assert_eq!(table.terminated(), vec![11]);
        assert!(!table.is_running(11));
        assert_eq!(table.command_by_pid(11), "");
    }

    #[test]
    fn test_fixtures() {
        assert_eq!(long_string('x', 3), "xxx");
        assert_eq!(colored("31", "hi"), "\x1b[31mhi\x1b[0m");
        assert_eq!(nested_payload()["processed"]["block_num"], 42);
    }
}
