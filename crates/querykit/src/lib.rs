//! # querykit
//!
//! A small SQL statement construction engine.
//!
//! ## Features
//!
//! - **One chainable builder**: SELECT, UPDATE, INSERT and DELETE from a single
//!   [`StatementBuilder`](qb::StatementBuilder)
//! - **Condition trees**: column terms with `$`-operators plus nested AND/OR groups
//! - **Inline or parameterized output**: quoted literals via `build()`, `$n`
//!   placeholders with bound values via `build_query()`
//! - **Pluggable execution**: anything implementing [`Executor`], including
//!   `tokio_postgres::Client`
//! - **Statement logging**: built SQL is emitted on the `querykit.sql` tracing target
//!
//! ## Query Builder (qb)
//!
//! ```ignore
//! use querykit::qb::{self, Condition, Term, term};
//! use querykit::Row;
//!
//! // SELECT
//! let sql = qb::select(&["id", "name"])
//!     .from("users")
//!     .where_clause(vec![
//!         Condition::from(term("status", "active")),
//!         Condition::or([Term::new().gte("age", 18), term("guardian", true)]),
//!     ])
//!     .build()?;
//!
//! // INSERT, parameterized
//! let query = qb::insert_into("users")
//!     .values(Row::new().col("id", 1).col("name", "A"))
//!     .build_query()?;
//! client.execute(&query.sql, &query.params_ref()).await?;
//! ```
//!
//! Conditions can also come from JSON:
//!
//! ```ignore
//! let cond = querykit::qb::condition::from_json(&serde_json::json!({
//!     "$or": [{"a": 1}, {"age": {"$gt": 5}}]
//! }))?;
//! assert_eq!(cond.to_sql(), "(a = '1' OR age > '5')");
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod operator;
pub mod prelude;
pub mod qb;
pub mod row;
pub mod sql_log;
pub mod value;

pub use config::BuilderConfig;
pub use error::{QueryError, QueryResult};
pub use executor::{Executor, Outcome, TextRow};
pub use operator::{Op, resolve};
pub use row::Row;
pub use value::Value;

// Re-export qb module for easy access
pub use qb::{
    BuiltQuery, Condition, SqlStatement, StatementBuilder, StatementKind, Term, builder,
    delete_from, insert_into, select, term, update,
};
