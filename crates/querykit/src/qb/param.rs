//! Value writers and parameter storage.
//!
//! Every place a literal lands in the output goes through a [`ValueWriter`]. The same
//! compiler produces either quoted inline literals or `$n` placeholders, depending on
//! the writer it is given.

use crate::value::Value;
use serde::Serialize;
use tokio_postgres::types::ToSql;

/// Strategy for rendering a value into SQL text.
pub trait ValueWriter {
    /// Render one value.
    fn write_value(&mut self, value: &Value) -> String;

    /// Render a parenthesized list, as used by `IN` / `NOT IN`.
    fn write_list(&mut self, items: &[Value]) -> String {
        let rendered: Vec<String> = items.iter().map(|v| self.write_value(v)).collect();
        format!("({})", rendered.join(", "))
    }
}

/// Renders values as single-quoted literals: `'<text>'`.
///
/// No escaping is applied; use [`ParamList`] for untrusted input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineWriter;

impl ValueWriter for InlineWriter {
    fn write_value(&mut self, value: &Value) -> String {
        format!("'{value}'")
    }
}

/// A collection of bound values; renders each as the next `$n` placeholder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamList {
    params: Vec<Value>,
}

impl ParamList {
    /// Create a new empty parameter list.
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Add a value and return its 1-based index.
    pub fn push(&mut self, value: Value) -> usize {
        self.params.push(value);
        self.params.len()
    }

    /// Get the current parameter count.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get all parameters as references for tokio-postgres.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }

    /// Take the collected values.
    pub fn into_values(self) -> Vec<Value> {
        self.params
    }
}

impl ValueWriter for ParamList {
    fn write_value(&mut self, value: &Value) -> String {
        let idx = self.push(value.clone());
        format!("${idx}")
    }
}

/// The four statement shapes a builder can finalize into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementKind {
    Select,
    Update,
    Insert,
    Delete,
}

impl StatementKind {
    /// The leading SQL keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Update => "UPDATE",
            StatementKind::Insert => "INSERT",
            StatementKind::Delete => "DELETE",
        }
    }
}

/// The result of building a statement with placeholders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery {
    pub kind: StatementKind,
    pub sql: String,
    pub params: Vec<Value>,
}

impl BuiltQuery {
    /// Create a new built query.
    pub fn new(kind: StatementKind, sql: String, params: Vec<Value>) -> Self {
        Self { kind, sql, params }
    }

    /// Get parameters as references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }
}
