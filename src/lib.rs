// SPDX-License-Identifier: MIT

//! Fluent, expression-based switch.
//!
//! ```rust
//! use fluent_switch::{CompareOp, Switch};
//!
//! let mut hit = None;
//! Switch::new(5)
//!     .add_case(10, CompareOp::Eq, |_| hit = Some("ten"))?
//!     .add_case(3, ">", |_| hit = Some("above three"))?
//!     .set_default(|_| hit = Some("default"))?;
//! assert_eq!(hit, Some("above three"));
//! # Ok::<(), fluent_switch::SwitchError>(())
//! ```

pub mod config;
pub mod error;
pub mod switch;

pub use config::{SwitchConfig, TraceTarget};
pub use error::{ConfigError, SwitchError};
pub use switch::{
    CompareOp, LogSink, MemorySink, Operand, OperatorSymbol, StdoutSink, Switch, TraceSink,
    Unordered,
};
