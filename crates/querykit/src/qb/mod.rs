//! Statement builder (QB) for querykit.
//!
//! One [`StatementBuilder`] covers all four statement kinds. Chain methods record
//! clause state; [`StatementBuilder::build`] picks the kind and renders the text.
//!
//! # Features
//!
//! - **Condition trees**: terms, AND/OR groups, nested to any depth
//! - **Operator registry**: `$eq`, `$ne`, `$gt`, `$gte`, `$lt`, `$lte`, `$in`, `$nin`
//! - **Two outputs**: inline quoted literals ([`StatementBuilder::build`]) or `$n`
//!   placeholders with bound values ([`StatementBuilder::build_query`])
//!
//! # Usage
//!
//! ```ignore
//! use querykit::qb::{self, Condition, Term, term};
//! use querykit::Row;
//!
//! // SELECT
//! let sql = qb::select(&["id", "name"])
//!     .from("users")
//!     .where_clause(Condition::or([term("role", "admin"), Term::new().gt("age", 30)]))
//!     .order_by(&["name"])
//!     .build()?;
//!
//! // UPDATE
//! let sql = qb::update("users")
//!     .set(Row::new().col("name", "Bob"))
//!     .where_clause(term("id", 1))
//!     .build()?;
//!
//! // INSERT
//! let query = qb::insert_into("users")
//!     .values(Row::new().col("id", 1).col("name", "A"))
//!     .values(Row::new().col("id", 2).col("name", "B"))
//!     .build_query()?;
//! client.execute(&query.sql, &query.params_ref()).await?;
//!
//! // DELETE
//! qb::delete_from("users")
//!     .where_clause(term("id", 1))
//!     .execute(&client)
//!     .await?;
//! ```

pub mod condition;
mod param;
mod statement;
mod traits;

#[cfg(test)]
mod tests;

pub use condition::{Condition, IntoConditions, Operand, Term, compile, compile_with, term};
pub use param::{BuiltQuery, InlineWriter, ParamList, StatementKind, ValueWriter};
pub use statement::StatementBuilder;
pub use traits::SqlStatement;

/// Create an empty statement builder.
pub fn builder() -> StatementBuilder {
    StatementBuilder::new()
}

/// Start a SELECT with the given columns (`*` when empty).
///
/// # Example
/// ```ignore
/// let sql = querykit::qb::select(&["id"]).from("users").build()?;
/// ```
pub fn select(cols: &[&str]) -> StatementBuilder {
    StatementBuilder::new().select(cols)
}

/// Start an UPDATE of `table`.
pub fn update(table: &str) -> StatementBuilder {
    StatementBuilder::new().update(table)
}

/// Start an INSERT into `table`.
pub fn insert_into(table: &str) -> StatementBuilder {
    StatementBuilder::new().insert_into(table)
}

/// Start a DELETE from `table`.
pub fn delete_from(table: &str) -> StatementBuilder {
    StatementBuilder::new().delete_from(table)
}
