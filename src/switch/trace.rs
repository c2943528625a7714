// SPDX-License-Identifier: MIT

//! Diagnostic sinks for switch registration events

use std::cell::RefCell;
use std::rc::Rc;

/// Prefix carried by every trace line
pub const TRACE_PREFIX: &str = "[switch-output]";

/// Receives registration events while tracing is enabled
pub trait TraceSink {
    fn emit(&mut self, event: &str);
}

/// Render an event the way every sink prints it
pub fn format_event(event: &str) -> String {
    format!("{} {}", TRACE_PREFIX, event)
}

/// Prints trace lines to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl TraceSink for StdoutSink {
    fn emit(&mut self, event: &str) {
        println!("{}", format_event(event));
    }
}

/// Routes trace lines through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl TraceSink for LogSink {
    fn emit(&mut self, event: &str) {
        log::info!(target: "switch", "{}", format_event(event));
    }
}

/// Collects trace lines in memory.
///
/// Clones share the same buffer, so a clone handed to a `Switch` can be
/// inspected afterwards through the original.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl TraceSink for MemorySink {
    fn emit(&mut self, event: &str) {
        self.lines.borrow_mut().push(format_event(event));
    }
}
