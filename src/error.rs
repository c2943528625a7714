// SPDX-License-Identifier: MIT

//! Typed errors for fluent-switch
//!
//! Dispatch errors are programmer misuse and abort the registration call
//! that raised them. Configuration errors come from loading `SwitchConfig`.

use thiserror::Error;

use crate::switch::CompareOp;

/// Errors raised while registering clauses on a `Switch`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwitchError {
    /// Operator symbol outside the fixed table
    #[error("Unknown operation: {0}")]
    UnknownOperator(String),

    /// A second default clause on the same switch
    #[error("Default was already registered")]
    DuplicateDefault,

    /// Ordering operator requested on values without an ordering
    #[error("Cannot compare {subject} {op} {candidate}: values are not ordered")]
    NotComparable {
        op: CompareOp,
        subject: String,
        candidate: String,
    },
}

impl SwitchError {
    /// Create an unknown operator error
    pub fn unknown_operator(symbol: impl Into<String>) -> Self {
        Self::UnknownOperator(symbol.into())
    }

    /// Create a not comparable error from the offending pair
    pub fn not_comparable<T: std::fmt::Debug>(op: CompareOp, subject: &T, candidate: &T) -> Self {
        Self::NotComparable {
            op,
            subject: format!("{:?}", subject),
            candidate: format!("{:?}", candidate),
        }
    }
}

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable holds a value we cannot interpret
    #[error("Invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
