// SPDX-License-Identifier: MIT

//! The switch state machine
//!
//! A `Switch` holds one subject and latches on the first clause that fires.
//! It is single-threaded by construction: all state is plain owned fields,
//! handlers run inline before the registering call returns, and the trace
//! sink is not required to be `Send`. Share one across threads only behind
//! the caller's own lock.

use std::fmt;

use super::evaluator::evaluate;
use super::op::OperatorSymbol;
use super::operand::Operand;
use super::trace::{StdoutSink, TraceSink};
use crate::config::SwitchConfig;
use crate::error::SwitchError;

/// Fluent switch over a single subject
pub struct Switch<T> {
    subject: T,
    matched: bool,
    default_registered: bool,
    case_count: usize,
    trace: bool,
    sink: Box<dyn TraceSink>,
}

impl<T: Operand> Switch<T> {
    /// Create an untraced switch over `subject`
    pub fn new(subject: T) -> Self {
        Self {
            subject,
            matched: false,
            default_registered: false,
            case_count: 0,
            trace: false,
            sink: Box::new(StdoutSink),
        }
    }

    /// Create a switch with tracing set up from `config`
    pub fn with_config(subject: T, config: &SwitchConfig) -> Self {
        let mut switch = Self::new(subject);
        switch.trace = config.trace;
        switch.sink = config.trace_target.sink();
        switch
    }

    /// Replace the sink trace lines are written to
    pub fn with_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Turn registration tracing on or off
    pub fn set_trace(&mut self, enabled: bool) -> &mut Self {
        self.trace = enabled;
        self
    }

    /// Register a case clause.
    ///
    /// The clause is always counted (and traced). Only while the switch is
    /// unmatched is the operator resolved and evaluated; on a hit the switch
    /// latches and `handler` runs once with `candidate`.
    pub fn add_case<O, F>(
        &mut self,
        candidate: T,
        op: O,
        handler: F,
    ) -> Result<&mut Self, SwitchError>
    where
        O: OperatorSymbol,
        F: FnOnce(T),
    {
        self.case_count += 1;
        if self.trace {
            let event = format!("Registered case # {}", self.case_count);
            self.sink.emit(&event);
        }

        if self.matched {
            return Ok(self);
        }

        let op = op.resolve()?;
        if evaluate(op, &self.subject, &candidate)? {
            log::debug!(
                "Switch on {:?} matched case #{} ({} {:?})",
                self.subject,
                self.case_count,
                op,
                candidate
            );
            self.matched = true;
            handler(candidate);
        }

        Ok(self)
    }

    /// Register the default clause.
    ///
    /// A second registration is always an error. Otherwise the default runs
    /// with `None` if nothing has matched yet, and is silently ignored if a
    /// case already fired.
    pub fn set_default<F>(&mut self, handler: F) -> Result<&mut Self, SwitchError>
    where
        F: FnOnce(Option<T>),
    {
        if self.default_registered {
            return Err(SwitchError::DuplicateDefault);
        }

        if self.matched {
            log::debug!(
                "Switch on {:?} already matched, default ignored",
                self.subject
            );
            return Ok(self);
        }

        if self.trace {
            self.sink.emit("Registered default case");
        }
        log::debug!("Switch on {:?} fell through to default", self.subject);

        self.default_registered = true;
        self.matched = true;
        handler(None);

        Ok(self)
    }

    pub fn subject(&self) -> &T {
        &self.subject
    }

    /// Whether a case or the default has fired
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub fn default_registered(&self) -> bool {
        self.default_registered
    }

    /// Number of `add_case` calls so far, matched or not
    pub fn case_count(&self) -> usize {
        self.case_count
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace
    }
}

impl<T: fmt::Debug> fmt::Debug for Switch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Switch")
            .field("subject", &self.subject)
            .field("matched", &self.matched)
            .field("default_registered", &self.default_registered)
            .field("case_count", &self.case_count)
            .field("trace", &self.trace)
            .finish_non_exhaustive()
    }
}
