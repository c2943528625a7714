// SPDX-License-Identifier: MIT

//! Relational operators and their symbol table

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::str::FromStr;

use crate::error::SwitchError;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    /// ==
    Eq,
    /// !=
    NotEq,
    /// >
    Gt,
    /// <
    Lt,
    /// <=
    Lte,
    /// >=
    Gte,
}

impl CompareOp {
    /// Every operator, in table order
    pub const ALL: [CompareOp; 6] = [
        CompareOp::NotEq,
        CompareOp::Eq,
        CompareOp::Gt,
        CompareOp::Lt,
        CompareOp::Lte,
        CompareOp::Gte,
    ];

    /// The operator's symbol, e.g. `>=`
    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::NotEq => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::Gte => ">=",
        }
    }

    /// The operator's snake-case name, e.g. `greater_than_or_equal`
    pub fn name(&self) -> &'static str {
        match self {
            CompareOp::Eq => "equal",
            CompareOp::NotEq => "not_equal",
            CompareOp::Gt => "greater_than",
            CompareOp::Lt => "less_than",
            CompareOp::Lte => "less_than_or_equal",
            CompareOp::Gte => "greater_than_or_equal",
        }
    }

    /// Whether the operator needs an ordering rather than equality
    pub fn is_ordering(&self) -> bool {
        !matches!(self, CompareOp::Eq | CompareOp::NotEq)
    }
}

impl std::fmt::Display for CompareOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Symbol, name and upper-case name for every operator
static SYMBOLS: Lazy<HashMap<String, CompareOp>> = Lazy::new(|| {
    let mut table = HashMap::new();
    for op in CompareOp::ALL {
        table.insert(op.symbol().to_string(), op);
        table.insert(op.name().to_string(), op);
        table.insert(op.name().to_uppercase(), op);
    }
    table
});

impl FromStr for CompareOp {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SYMBOLS
            .get(s)
            .copied()
            .ok_or_else(|| SwitchError::unknown_operator(s))
    }
}

/// Anything accepted as the operator of a case clause.
///
/// Resolution is deferred until the clause is actually evaluated, so a bad
/// symbol on a switch that already matched goes unnoticed.
pub trait OperatorSymbol {
    fn resolve(&self) -> Result<CompareOp, SwitchError>;
}

impl OperatorSymbol for CompareOp {
    fn resolve(&self) -> Result<CompareOp, SwitchError> {
        Ok(*self)
    }
}

impl OperatorSymbol for &str {
    fn resolve(&self) -> Result<CompareOp, SwitchError> {
        self.parse()
    }
}

impl OperatorSymbol for String {
    fn resolve(&self) -> Result<CompareOp, SwitchError> {
        self.parse()
    }
}
