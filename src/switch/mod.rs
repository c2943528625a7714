// SPDX-License-Identifier: MIT

//! Fluent switch
//!
//! A `Switch` is built by chaining clauses at the call site:
//! - `add_case(candidate, op, handler)` - compare subject and candidate
//! - `set_default(handler)` - runs if no earlier clause fired
//!
//! The first matching clause wins; everything after it is a no-op.

mod dispatcher;
mod evaluator;
mod op;
mod operand;
mod trace;

pub use dispatcher::Switch;
pub use evaluator::evaluate;
pub use op::{CompareOp, OperatorSymbol};
pub use operand::{Operand, Unordered};
pub use trace::{format_event, LogSink, MemorySink, StdoutSink, TraceSink, TRACE_PREFIX};
