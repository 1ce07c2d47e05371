//! Trait definitions for statement builders.

use crate::error::QueryResult;
use crate::executor::{Executor, Outcome};
use crate::qb::param::BuiltQuery;
use crate::qb::statement::StatementBuilder;

/// Base trait for anything that finalizes into SQL.
///
/// Provides building in both output forms and execution through an [`Executor`].
pub trait SqlStatement: Sync {
    /// Build the SQL string with inline literals.
    fn build_sql(&self) -> QueryResult<String>;

    /// Build the SQL string with `$n` placeholders and the bound values.
    fn build_query(&self) -> QueryResult<BuiltQuery>;

    /// Build, then run the text through `conn`.
    fn execute(
        &self,
        conn: &impl Executor,
    ) -> impl std::future::Future<Output = QueryResult<Outcome>> + Send {
        async move {
            let sql = self.build_sql()?;
            conn.execute(&sql).await
        }
    }
}

impl SqlStatement for StatementBuilder {
    fn build_sql(&self) -> QueryResult<String> {
        StatementBuilder::build(self)
    }

    fn build_query(&self) -> QueryResult<BuiltQuery> {
        StatementBuilder::build_query(self)
    }
}
