//! Execution backends for built statements.
//!
//! Statement builders only produce text. An [`Executor`] is the single capability
//! needed to run that text somewhere; the crate ships an implementation for
//! [`tokio_postgres::Client`] and tests supply in-memory ones.

use crate::error::QueryResult;
use crate::sql_log::log_executed_statement;
use tokio_postgres::SimpleQueryMessage;

/// One returned row, as column names and text values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextRow {
    pub columns: Vec<String>,
    pub values: Vec<Option<String>>,
}

impl TextRow {
    /// Look up a value by column name.
    ///
    /// Returns `None` both for a missing column and for SQL `NULL`.
    pub fn get(&self, column: &str) -> Option<&str> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.values.get(idx)?.as_deref()
    }
}

/// Result of running one statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Returned rows (empty for commands without a result set).
    pub rows: Vec<TextRow>,
    /// Rows affected or returned, as reported by the server.
    pub affected: u64,
}

/// Something that can run SQL text.
///
/// The `tokio_postgres::Client` implementation logs each statement on the
/// `querykit.sql` target, truncated to
/// [`DEFAULT_MAX_LOGGED_SQL_LENGTH`](crate::config::DEFAULT_MAX_LOGGED_SQL_LENGTH) bytes.
pub trait Executor: Send + Sync {
    /// Run one statement.
    fn execute(&self, sql: &str) -> impl std::future::Future<Output = QueryResult<Outcome>> + Send;
}

impl Executor for tokio_postgres::Client {
    async fn execute(&self, sql: &str) -> QueryResult<Outcome> {
        log_executed_statement(sql);

        let messages = tokio_postgres::Client::simple_query(self, sql).await?;
        let mut outcome = Outcome::default();
        for message in messages {
            match message {
                SimpleQueryMessage::Row(row) => {
                    let columns = row.columns().iter().map(|c| c.name().to_string()).collect();
                    let values = (0..row.len())
                        .map(|i| row.get(i).map(str::to_string))
                        .collect();
                    outcome.rows.push(TextRow { columns, values });
                }
                SimpleQueryMessage::CommandComplete(n) => outcome.affected += n,
                _ => {}
            }
        }
        Ok(outcome)
    }
}
