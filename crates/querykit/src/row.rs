//! Ordered column/value mappings used for SET payloads and insert rows.

use crate::error::{QueryError, QueryResult};
use crate::value::Value;

/// An insertion-ordered mapping from column name to [`Value`].
///
/// Setting a column that is already present replaces its value in place, so the
/// column keeps its original position.
///
/// # Example
/// ```ignore
/// use querykit::Row;
///
/// let row = Row::new().col("id", 1).col("name", "A");
/// assert_eq!(row.columns(), vec!["id", "name"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    entries: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column (consuming form, for chaining).
    pub fn col(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Set a column, replacing any earlier value for the same column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Merge another row into this one; later values win.
    pub fn merge(&mut self, other: Row) {
        for (column, value) in other.entries {
            self.insert(column, value);
        }
    }

    /// Look up a column's value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether both rows name the same set of columns, in any order.
    pub fn same_columns(&self, other: &Row) -> bool {
        self.len() == other.len() && self.entries.iter().all(|(c, _)| other.get(c).is_some())
    }

    /// Build a row from a JSON object, keeping the object's key order.
    pub fn from_json(json: &serde_json::Value) -> QueryResult<Self> {
        let object = json.as_object().ok_or_else(|| {
            QueryError::invalid_condition(format!("expected an object of column values, got {json}"))
        })?;
        let mut row = Row::new();
        for (column, value) in object {
            row.insert(column.as_str(), Value::from_json(value)?);
        }
        Ok(row)
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}
