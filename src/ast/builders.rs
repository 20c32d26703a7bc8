//! Ergonomic builder functions for condition trees.
//!
//! Each function returns a [`Condition`] so predicates and groups compose
//! freely without spelling out the structs.
//!
//! # Example
//! ```
//! use qail_where::ast::builders::*;
//! use qail_where::ast::LogicalOp;
//!
//! let filter = vec![
//!     eq("id", 1),
//!     like("position", "%manager%"),
//!     group(LogicalOp::Or, [eq("doc_number", "89013"), eq("region", "ATLANTA")]),
//! ];
//! assert_eq!(filter.len(), 3);
//! ```

use crate::ast::{Condition, Group, LogicalOp, Operand, Operator, Predicate, Value};

fn single(column: impl Into<String>, op: Operator, value: impl Into<Value>) -> Condition {
    Condition::Leaf(Predicate {
        column: column.into(),
        op,
        operand: Operand::Single(value.into()),
    })
}

fn nullary(column: impl Into<String>, op: Operator) -> Condition {
    Condition::Leaf(Predicate {
        column: column.into(),
        op,
        operand: Operand::None,
    })
}

fn range(
    column: impl Into<String>,
    op: Operator,
    lo: impl Into<Value>,
    hi: impl Into<Value>,
) -> Condition {
    Condition::Leaf(Predicate {
        column: column.into(),
        op,
        operand: Operand::Pair(lo.into(), hi.into()),
    })
}

fn list<I>(column: impl Into<String>, op: Operator, values: I) -> Condition
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Condition::Leaf(Predicate {
        column: column.into(),
        op,
        operand: Operand::List(values.into_iter().map(Into::into).collect()),
    })
}

// ==================== Comparisons ====================

/// `column = value`
pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    single(column, Operator::Eq, value)
}

/// `column != value`
pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    single(column, Operator::Ne, value)
}

/// `column > value`
pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    single(column, Operator::Gt, value)
}

/// `column < value`
pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    single(column, Operator::Lt, value)
}

/// `column >= value`
pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    single(column, Operator::Gte, value)
}

/// `column <= value`
pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    single(column, Operator::Lte, value)
}

// ==================== Pattern Matching ====================

/// `column LIKE pattern`
pub fn like(column: impl Into<String>, pattern: impl Into<Value>) -> Condition {
    single(column, Operator::Like, pattern)
}

/// `column NOT LIKE pattern`
pub fn not_like(column: impl Into<String>, pattern: impl Into<Value>) -> Condition {
    single(column, Operator::NotLike, pattern)
}

// ==================== NULL Checks ====================

/// `column IS NULL`
pub fn is_null(column: impl Into<String>) -> Condition {
    nullary(column, Operator::IsNull)
}

/// `column IS NOT NULL`
pub fn is_not_null(column: impl Into<String>) -> Condition {
    nullary(column, Operator::IsNotNull)
}

// ==================== Ranges & Lists ====================

/// `column BETWEEN lo AND hi`
pub fn between(
    column: impl Into<String>,
    lo: impl Into<Value>,
    hi: impl Into<Value>,
) -> Condition {
    range(column, Operator::Between, lo, hi)
}

/// `column NOT BETWEEN lo AND hi`
pub fn not_between(
    column: impl Into<String>,
    lo: impl Into<Value>,
    hi: impl Into<Value>,
) -> Condition {
    range(column, Operator::NotBetween, lo, hi)
}

/// `column IN (values...)`. The list may be empty.
pub fn in_list<I>(column: impl Into<String>, values: I) -> Condition
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    list(column, Operator::In, values)
}

/// `column NOT IN (values...)`
pub fn not_in<I>(column: impl Into<String>, values: I) -> Condition
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    list(column, Operator::NotIn, values)
}

// ==================== Groups ====================

/// Nested conditions joined by `relation`, rendered in parentheses.
pub fn group(relation: LogicalOp, conditions: impl IntoIterator<Item = Condition>) -> Condition {
    Condition::Group(Group {
        relation,
        children: conditions.into_iter().collect(),
    })
}

/// `(a AND b AND ...)`
pub fn and(conditions: impl IntoIterator<Item = Condition>) -> Condition {
    group(LogicalOp::And, conditions)
}

/// `(a OR b OR ...)`
pub fn or(conditions: impl IntoIterator<Item = Condition>) -> Condition {
    group(LogicalOp::Or, conditions)
}
