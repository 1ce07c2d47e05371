//! Convenient imports for typical `querykit` usage.
//!
//! ```ignore
//! use querykit::prelude::*;
//! ```

pub use crate::{BuilderConfig, Executor, Op, Outcome, QueryError, QueryResult, Row, Value};
pub use crate::qb::{
    BuiltQuery, Condition, SqlStatement, StatementBuilder, StatementKind, Term, term,
};
