//! Condition trees and their compiler.
//!
//! A [`Condition`] is one of:
//! - [`Condition::Term`]: column comparisons, implicitly ANDed, never parenthesized;
//! - [`Condition::And`]: children joined by `AND`, wrapped in parentheses;
//! - [`Condition::Or`]: children joined by `OR`, wrapped in parentheses.
//!
//! Compilation is a pure function of the tree. Values go through a
//! [`ValueWriter`], so the same tree renders either with inline literals
//! ([`compile`]) or with `$n` placeholders ([`compile_with`] and a [`ParamList`]).
//!
//! [`ParamList`]: crate::qb::ParamList

use crate::error::{QueryError, QueryResult};
use crate::operator::Op;
use crate::qb::param::{InlineWriter, ValueWriter};
use crate::value::Value;

/// Right-hand side of a term entry.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// Bare literal: rendered as equality.
    Value(Value),
    /// Explicit operator and its operand.
    Op(Op, Value),
}

/// A set of column comparisons that are implicitly ANDed.
///
/// Entries keep insertion order; naming a column twice replaces the earlier entry.
///
/// # Example
/// ```ignore
/// use querykit::qb::Term;
///
/// let term = Term::new().eq("status", "active").gt("age", 18);
/// // status = 'active' AND age > '18'
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Term {
    entries: Vec<(String, Operand)>,
}

impl Term {
    /// Create an empty term.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, column: impl Into<String>, operand: Operand) -> Self {
        let column = column.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = operand,
            None => self.entries.push((column, operand)),
        }
        self
    }

    /// Add a bare literal: column = value
    pub fn value(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, Operand::Value(value.into()))
    }

    /// Add an explicit operator comparison.
    pub fn op(self, column: impl Into<String>, op: Op, value: impl Into<Value>) -> Self {
        self.push(column, Operand::Op(op, value.into()))
    }

    /// Add a comparison named by its operator symbol (e.g. `$gte`).
    pub fn op_symbol(
        self,
        column: impl Into<String>,
        symbol: &str,
        value: impl Into<Value>,
    ) -> QueryResult<Self> {
        let op = Op::from_symbol(symbol)?;
        Ok(self.op(column, op, value))
    }

    /// Add: column = value
    pub fn eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.value(column, value)
    }

    /// Add: column != value
    pub fn ne(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Op::Ne, value)
    }

    /// Add: column > value
    pub fn gt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Op::Gt, value)
    }

    /// Add: column >= value
    pub fn gte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Op::Gte, value)
    }

    /// Add: column < value
    pub fn lt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Op::Lt, value)
    }

    /// Add: column <= value
    pub fn lte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.op(column, Op::Lte, value)
    }

    /// Add: column IN (values...)
    pub fn in_list<T: Into<Value>>(self, column: impl Into<String>, values: Vec<T>) -> Self {
        self.op(column, Op::In, values)
    }

    /// Add: column NOT IN (values...)
    pub fn not_in<T: Into<Value>>(self, column: impl Into<String>, values: Vec<T>) -> Self {
        self.op(column, Op::NotIn, values)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[(String, Operand)] {
        &self.entries
    }
}

/// Shorthand for a single-entry equality term.
pub fn term(column: impl Into<String>, value: impl Into<Value>) -> Term {
    Term::new().value(column, value)
}

/// A boolean condition tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    Term(Term),
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl Condition {
    /// Create an AND group.
    pub fn and(children: impl IntoIterator<Item = impl Into<Condition>>) -> Self {
        Condition::And(children.into_iter().map(Into::into).collect())
    }

    /// Create an OR group.
    pub fn or(children: impl IntoIterator<Item = impl Into<Condition>>) -> Self {
        Condition::Or(children.into_iter().map(Into::into).collect())
    }

    /// Nesting depth counted in AND/OR groups; a bare term has depth 0.
    pub fn group_depth(&self) -> usize {
        match self {
            Condition::Term(_) => 0,
            Condition::And(children) | Condition::Or(children) => {
                1 + children.iter().map(Condition::group_depth).max().unwrap_or(0)
            }
        }
    }

    /// Compile with inline quoted literals.
    pub fn to_sql(&self) -> String {
        compile(self)
    }
}

impl From<Term> for Condition {
    fn from(term: Term) -> Self {
        Condition::Term(term)
    }
}

/// Anything accepted where a condition argument is expected.
///
/// A single condition yields one entry; a sequence yields one entry per element,
/// which callers AND-join without extra parentheses.
pub trait IntoConditions {
    fn into_conditions(self) -> Vec<Condition>;
}

impl IntoConditions for Condition {
    fn into_conditions(self) -> Vec<Condition> {
        vec![self]
    }
}

impl IntoConditions for Term {
    fn into_conditions(self) -> Vec<Condition> {
        vec![Condition::Term(self)]
    }
}

impl IntoConditions for Vec<Condition> {
    fn into_conditions(self) -> Vec<Condition> {
        self
    }
}

impl IntoConditions for Vec<Term> {
    fn into_conditions(self) -> Vec<Condition> {
        self.into_iter().map(Condition::Term).collect()
    }
}

// ==================== Compiler ====================

/// Compile a condition with inline quoted literals.
pub fn compile(condition: &Condition) -> String {
    compile_with(condition, &mut InlineWriter)
}

/// Compile a condition, rendering values through `writer`.
pub fn compile_with(condition: &Condition, writer: &mut impl ValueWriter) -> String {
    match condition {
        Condition::Or(children) => compile_group(children, " OR ", "1=0", writer),
        Condition::And(children) => compile_group(children, " AND ", "1=1", writer),
        Condition::Term(term) => compile_term(term, writer),
    }
}

/// Compile a sequence into one fragment per element.
pub fn compile_list(conditions: &[Condition], writer: &mut impl ValueWriter) -> Vec<String> {
    conditions.iter().map(|c| compile_with(c, writer)).collect()
}

fn compile_group(
    children: &[Condition],
    separator: &str,
    empty: &str,
    writer: &mut impl ValueWriter,
) -> String {
    if children.is_empty() {
        return format!("({empty})");
    }
    format!("({})", compile_list(children, writer).join(separator))
}

fn compile_term(term: &Term, writer: &mut impl ValueWriter) -> String {
    if term.is_empty() {
        return "1=1".to_string();
    }
    term.entries
        .iter()
        .map(|(column, operand)| compile_entry(column, operand, writer))
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn compile_entry(column: &str, operand: &Operand, writer: &mut impl ValueWriter) -> String {
    match operand {
        Operand::Value(value) => format!("{column} = {}", writer.write_value(value)),
        // `IN ()` is not valid SQL: an empty set matches nothing, excluding it matches all.
        Operand::Op(Op::In, value) if value.as_items().is_empty() => "1=0".to_string(),
        Operand::Op(Op::NotIn, value) if value.as_items().is_empty() => "1=1".to_string(),
        Operand::Op(op, value) if op.is_list() => {
            format!("{column} {} {}", op.token(), writer.write_list(value.as_items()))
        }
        Operand::Op(op, value) => {
            format!("{column} {} {}", op.token(), writer.write_value(value))
        }
    }
}

// ==================== JSON input ====================

/// Parse one condition from its JSON description.
///
/// - `{"$or": [...]}` / `{"$and": [...]}` (sole key) → group
/// - `{"col": value, "col2": {"$gt": 5}}` → term
/// - a top-level array is not a single condition; see [`conditions_from_json`].
pub fn from_json(json: &serde_json::Value) -> QueryResult<Condition> {
    let object = json.as_object().ok_or_else(|| {
        QueryError::invalid_condition(format!("expected an object, got {json}"))
    })?;

    if object.len() == 1 {
        if let Some((key, children)) = object.iter().next() {
            if key == "$or" || key == "$and" {
                let items = children.as_array().ok_or_else(|| {
                    QueryError::invalid_condition(format!("{key} expects an array"))
                })?;
                let parsed = items
                    .iter()
                    .map(from_json)
                    .collect::<QueryResult<Vec<_>>>()?;
                return Ok(if key == "$or" {
                    Condition::Or(parsed)
                } else {
                    Condition::And(parsed)
                });
            }
        }
    }

    let mut term = Term::new();
    for (column, value) in object {
        if column == "$or" || column == "$and" {
            return Err(QueryError::invalid_condition(format!(
                "{column} must be the only key of its object"
            )));
        }
        term = match value {
            serde_json::Value::Object(operator) => {
                let mut ops = operator.iter();
                match (ops.next(), ops.next()) {
                    (Some((symbol, operand)), None) => {
                        term.op_symbol(column.as_str(), symbol, Value::from_json(operand)?)?
                    }
                    _ => {
                        return Err(QueryError::invalid_condition(format!(
                            "operator object for {column} must have exactly one key"
                        )));
                    }
                }
            }
            other => term.value(column.as_str(), Value::from_json(other)?),
        };
    }
    Ok(Condition::Term(term))
}

/// Parse a condition argument: an array is a sequence, anything else a single condition.
pub fn conditions_from_json(json: &serde_json::Value) -> QueryResult<Vec<Condition>> {
    match json {
        serde_json::Value::Array(items) => items.iter().map(from_json).collect(),
        other => Ok(vec![from_json(other)?]),
    }
}
