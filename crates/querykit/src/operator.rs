//! Comparison operator registry.
//!
//! Condition terms name their comparison with a symbol such as `$gt`. This module
//! maps the eight supported symbols to SQL operator tokens through a static table.
//!
//! # Example
//! ```ignore
//! use querykit::operator::{resolve, Op};
//!
//! assert_eq!(resolve("$gte")?, ">=");
//! assert_eq!(Op::from_symbol("$nin")?, Op::NotIn);
//! assert!(resolve("$like").is_err());
//! # Ok::<(), querykit::QueryError>(())
//! ```

use crate::error::{QueryError, QueryResult};
use std::fmt;

/// Comparison operator for condition terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal: column = value
    Eq,
    /// Not equal: column != value
    Ne,
    /// Greater than: column > value
    Gt,
    /// Greater than or equal: column >= value
    Gte,
    /// Less than: column < value
    Lt,
    /// Less than or equal: column <= value
    Lte,
    /// Set membership: column IN (list)
    In,
    /// Set exclusion: column NOT IN (list)
    NotIn,
}

/// Symbol, operator and SQL token for every supported comparison.
static OPERATOR_TABLE: [(&str, Op, &str); 8] = [
    ("$eq", Op::Eq, "="),
    ("$ne", Op::Ne, "!="),
    ("$gt", Op::Gt, ">"),
    ("$gte", Op::Gte, ">="),
    ("$lt", Op::Lt, "<"),
    ("$lte", Op::Lte, "<="),
    ("$in", Op::In, "IN"),
    ("$nin", Op::NotIn, "NOT IN"),
];

impl Op {
    /// All supported operators, in table order.
    pub const ALL: [Op; 8] = [
        Op::Eq,
        Op::Ne,
        Op::Gt,
        Op::Gte,
        Op::Lt,
        Op::Lte,
        Op::In,
        Op::NotIn,
    ];

    fn entry(self) -> &'static (&'static str, Op, &'static str) {
        // Variant order matches the table layout.
        &OPERATOR_TABLE[self as usize]
    }

    /// The symbolic name used in condition descriptions (e.g. `$gte`).
    pub fn symbol(self) -> &'static str {
        self.entry().0
    }

    /// The SQL operator token (e.g. `>=`).
    pub fn token(self) -> &'static str {
        self.entry().2
    }

    /// Whether the operand renders as a parenthesized list.
    pub fn is_list(self) -> bool {
        matches!(self, Op::In | Op::NotIn)
    }

    /// Look up an operator by its symbol.
    pub fn from_symbol(symbol: &str) -> QueryResult<Self> {
        OPERATOR_TABLE
            .iter()
            .find(|(s, _, _)| *s == symbol)
            .map(|(_, op, _)| *op)
            .ok_or_else(|| QueryError::unsupported_operator(symbol))
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Resolve an operator symbol to its SQL token.
///
/// Fails with [`QueryError::UnsupportedOperator`] for anything outside the table.
pub fn resolve(symbol: &str) -> QueryResult<&'static str> {
    Op::from_symbol(symbol).map(Op::token)
}
