//! `tracing` events for built and executed statements.

use crate::config::{BuilderConfig, DEFAULT_MAX_LOGGED_SQL_LENGTH};
use crate::qb::StatementKind;

/// Tracing target for every SQL event this crate emits.
pub const SQL_TARGET: &str = "querykit.sql";

/// Cut `sql` to at most `max_bytes`, backing off to a char boundary.
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

pub(crate) fn truncate_sql(sql: &str, max: Option<usize>) -> String {
    match max {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

/// Emit the debug event for a freshly built statement.
pub(crate) fn log_built_statement(
    config: &BuilderConfig,
    kind: StatementKind,
    sql: &str,
    param_count: usize,
) {
    if !config.log_statements {
        return;
    }
    let sql = truncate_sql(sql, config.max_logged_sql_length);
    tracing::debug!(target: SQL_TARGET, kind = ?kind, param_count, sql = %sql, "built statement");
}

/// Emit the debug event for a statement about to run on an executor.
///
/// Executors see only SQL text, not the builder, so this always uses the default
/// truncation and ignores per-builder settings.
pub(crate) fn log_executed_statement(sql: &str) {
    let sql = truncate_sql(sql, Some(DEFAULT_MAX_LOGGED_SQL_LENGTH));
    tracing::debug!(target: SQL_TARGET, sql = %sql, "executing statement");
}

/// Emit the warning for an insert row rendered in its own column order.
pub(crate) fn log_misaligned_row(config: &BuilderConfig, table: &str, row: usize) {
    if !config.log_statements {
        return;
    }
    tracing::warn!(
        target: SQL_TARGET,
        table,
        row,
        "insert row columns differ from the first row; rendering in row order"
    );
}
