//! Chainable statement builder covering SELECT, UPDATE, INSERT and DELETE.

use crate::config::BuilderConfig;
use crate::error::{QueryError, QueryResult};
use crate::qb::condition::{Condition, IntoConditions, compile_list};
use crate::qb::param::{BuiltQuery, InlineWriter, ParamList, StatementKind, ValueWriter};
use crate::row::Row;
use crate::sql_log::{log_built_statement, log_misaligned_row};
use crate::value::Value;

/// One `JOIN <table> ON <predicate>` entry.
#[derive(Debug)]
struct Join {
    table: String,
    on: Vec<Condition>,
}

/// Accumulates clause state for one statement and renders it on demand.
///
/// Every chain method consumes the builder and returns it, so a builder has a single
/// owner from configuration to finalization. The statement kind is not fixed up
/// front: [`build`](Self::build) picks it from whichever fields are populated, in
/// the order select, update, insert, delete.
///
/// # Example
/// ```ignore
/// use querykit::qb::{self, term};
///
/// let sql = qb::select(&["id", "name"])
///     .from("users")
///     .where_clause(term("status", "active"))
///     .build()?;
/// assert_eq!(sql, "SELECT id, name FROM users WHERE status = 'active'");
/// ```
#[derive(Debug, Default)]
pub struct StatementBuilder {
    config: BuilderConfig,
    select_cols: Vec<String>,
    from_table: Option<String>,
    joins: Vec<Join>,
    where_conditions: Vec<Condition>,
    order_by: Vec<String>,
    group_by: Vec<String>,
    update_table: Option<String>,
    set_values: Row,
    insert_table: Option<String>,
    rows: Vec<Row>,
    cases: Vec<(String, String)>,
    delete_table: Option<String>,
}

fn owned(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|c| c.to_string()).collect()
}

impl StatementBuilder {
    /// Create an empty builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with the given configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The builder's configuration.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    // ==================== SELECT ====================

    /// Set SELECT columns. An empty list selects `*`.
    pub fn select(mut self, cols: &[&str]) -> Self {
        self.select_cols = if cols.is_empty() {
            vec!["*".to_string()]
        } else {
            owned(cols)
        };
        self
    }

    /// Set the source table.
    pub fn from(mut self, table: &str) -> Self {
        self.from_table = Some(table.to_string());
        self
    }

    /// Add `JOIN <table> ON <predicate>`.
    ///
    /// The predicate is compiled like a WHERE clause, so OR groups are allowed.
    pub fn join(mut self, table: &str, on: impl IntoConditions) -> Self {
        self.joins.push(Join {
            table: table.to_string(),
            on: on.into_conditions(),
        });
        self
    }

    /// Set WHERE conditions, replacing any earlier ones.
    ///
    /// A sequence is ANDed without surrounding parentheses.
    pub fn where_clause(mut self, conditions: impl IntoConditions) -> Self {
        self.where_conditions = conditions.into_conditions();
        self
    }

    /// Set ORDER BY columns.
    pub fn order_by(mut self, cols: &[&str]) -> Self {
        self.order_by = owned(cols);
        self
    }

    /// Set GROUP BY columns.
    pub fn group_by(mut self, cols: &[&str]) -> Self {
        self.group_by = owned(cols);
        self
    }

    /// Store `(when, then)` fragments for [`case_sql`](Self::case_sql).
    ///
    /// Fragments are raw SQL and are not compiled.
    pub fn case(mut self, pairs: &[(&str, &str)]) -> Self {
        self.cases = pairs
            .iter()
            .map(|(when, then)| (when.to_string(), then.to_string()))
            .collect();
        self
    }

    // ==================== UPDATE ====================

    /// Set the UPDATE target table.
    pub fn update(mut self, table: &str) -> Self {
        self.update_table = Some(table.to_string());
        self
    }

    /// Merge values into the SET list; later values for a column win.
    pub fn set(mut self, values: Row) -> Self {
        self.set_values.merge(values);
        self
    }

    // ==================== INSERT ====================

    /// Set the INSERT target table.
    pub fn insert_into(mut self, table: &str) -> Self {
        self.insert_table = Some(table.to_string());
        self
    }

    /// Append one row to insert.
    pub fn values(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    // ==================== DELETE ====================

    /// Set the DELETE target table.
    pub fn delete_from(mut self, table: &str) -> Self {
        self.delete_table = Some(table.to_string());
        self
    }

    // ==================== Finalize ====================

    /// The statement kind [`build`](Self::build) would produce.
    pub fn statement_kind(&self) -> QueryResult<StatementKind> {
        if !self.select_cols.is_empty() && self.from_table.is_some() {
            Ok(StatementKind::Select)
        } else if self.update_table.is_some() && !self.set_values.is_empty() {
            Ok(StatementKind::Update)
        } else if self.insert_table.is_some() && !self.rows.is_empty() {
            Ok(StatementKind::Insert)
        } else if self.delete_table.is_some() {
            Ok(StatementKind::Delete)
        } else {
            Err(QueryError::invalid_statement(
                "no statement kind has its required fields set \
                 (select+from, update+set, insert_into+values, or delete_from)",
            ))
        }
    }

    /// Render the statement with inline quoted literals.
    pub fn build(&self) -> QueryResult<String> {
        let (kind, sql) = self.render(&mut InlineWriter)?;
        log_built_statement(&self.config, kind, &sql, 0);
        Ok(sql)
    }

    /// Render the statement with `$n` placeholders.
    pub fn build_query(&self) -> QueryResult<BuiltQuery> {
        let mut params = ParamList::new();
        let (kind, sql) = self.render(&mut params)?;
        log_built_statement(&self.config, kind, &sql, params.len());
        Ok(BuiltQuery::new(kind, sql, params.into_values()))
    }

    /// Render the stored case pairs as `CASE WHEN .. THEN .. END`.
    pub fn case_sql(&self) -> Option<String> {
        if self.cases.is_empty() {
            return None;
        }
        let arms: Vec<String> = self
            .cases
            .iter()
            .map(|(when, then)| format!("WHEN {when} THEN {then}"))
            .collect();
        Some(format!("CASE {} END", arms.join(" ")))
    }

    fn render(&self, writer: &mut impl ValueWriter) -> QueryResult<(StatementKind, String)> {
        let kind = self.statement_kind()?;
        let sql = match kind {
            StatementKind::Select => self.render_select(writer),
            StatementKind::Update => self.render_update(writer),
            StatementKind::Insert => self.render_insert(writer)?,
            StatementKind::Delete => self.render_delete(writer),
        };
        Ok((kind, sql))
    }

    fn where_sql(&self, writer: &mut impl ValueWriter) -> Option<String> {
        if self.where_conditions.is_empty() {
            return None;
        }
        Some(format!(
            "WHERE {}",
            compile_list(&self.where_conditions, writer).join(" AND ")
        ))
    }

    fn render_select(&self, writer: &mut impl ValueWriter) -> String {
        let mut parts = vec![format!("SELECT {}", self.select_cols.join(", "))];
        if let Some(table) = &self.from_table {
            parts.push(format!("FROM {table}"));
        }
        for join in &self.joins {
            let predicate = if join.on.is_empty() {
                "1=1".to_string()
            } else {
                compile_list(&join.on, writer).join(" AND ")
            };
            parts.push(format!("JOIN {} ON {predicate}", join.table));
        }
        parts.extend(self.where_sql(writer));
        if !self.order_by.is_empty() {
            parts.push(format!("ORDER BY {}", self.order_by.join(", ")));
        }
        if !self.group_by.is_empty() {
            parts.push(format!("GROUP BY {}", self.group_by.join(", ")));
        }
        parts.join(" ")
    }

    fn render_update(&self, writer: &mut impl ValueWriter) -> String {
        let table = self.update_table.as_deref().unwrap_or_default();
        let assignments: Vec<String> = self
            .set_values
            .iter()
            .map(|(col, value)| format!("{col} = {}", writer.write_value(value)))
            .collect();
        let mut parts = vec![format!("UPDATE {table} SET {}", assignments.join(", "))];
        parts.extend(self.where_sql(writer));
        parts.join(" ")
    }

    fn render_insert(&self, writer: &mut impl ValueWriter) -> QueryResult<String> {
        let table = self.insert_table.as_deref().unwrap_or_default();
        let columns = match self.rows.first() {
            Some(first) if !first.is_empty() => first.columns(),
            _ => {
                return Err(QueryError::invalid_statement(format!(
                    "insert into {table} has no columns in its first row"
                )));
            }
        };

        let mut tuples = Vec::with_capacity(self.rows.len());
        for (idx, row) in self.rows.iter().enumerate() {
            let values: Vec<&Value> = match aligned_values(row, &columns) {
                Some(values) => values,
                None if self.config.strict_insert_rows => {
                    return Err(QueryError::malformed_insert_rows(
                        idx,
                        &columns,
                        &row.columns(),
                    ));
                }
                None => {
                    log_misaligned_row(&self.config, table, idx);
                    row.values().collect()
                }
            };
            let rendered: Vec<String> = values.into_iter().map(|v| writer.write_value(v)).collect();
            tuples.push(format!("({})", rendered.join(", ")));
        }

        Ok(format!(
            "INSERT INTO {table} ({}) VALUES {}",
            columns.join(", "),
            tuples.join(", ")
        ))
    }

    fn render_delete(&self, writer: &mut impl ValueWriter) -> String {
        let table = self.delete_table.as_deref().unwrap_or_default();
        let mut parts = vec![format!("DELETE FROM {table}")];
        parts.extend(self.where_sql(writer));
        parts.join(" ")
    }
}

/// The row's values in `columns` order, or `None` when its column set differs.
fn aligned_values<'a>(row: &'a Row, columns: &[&str]) -> Option<Vec<&'a Value>> {
    if row.len() != columns.len() {
        return None;
    }
    columns.iter().map(|c| row.get(c)).collect()
}
