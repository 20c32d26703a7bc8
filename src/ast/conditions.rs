use serde::{Deserialize, Serialize};
use crate::ast::{Arity, LogicalOp, Operator, Value};

/// One node of a condition tree: a single predicate or a nested group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    Leaf(Predicate),
    Group(Group),
}

/// A single comparison, e.g. `salary >= ?`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    /// Column name or raw SQL expression, emitted verbatim
    pub column: String,
    /// Comparison operator
    pub op: Operator,
    /// Value(s) bound to the placeholders
    #[serde(default)]
    pub operand: Operand,
}

/// Conditions joined by one relation and rendered inside parentheses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub relation: LogicalOp,
    #[serde(default)]
    pub children: Vec<Condition>,
}

/// Values carried by a predicate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operand {
    /// Nothing to bind (`IS NULL`)
    #[default]
    None,
    Single(Value),
    /// `(lo, hi)` for `BETWEEN`
    Pair(Value, Value),
    /// Elements of an `IN` list, possibly empty
    List(Vec<Value>),
}

impl Operand {
    pub fn arity(&self) -> Arity {
        match self {
            Operand::None => Arity::Nullary,
            Operand::Single(_) => Arity::Unary,
            Operand::Pair(..) => Arity::Range,
            Operand::List(_) => Arity::List,
        }
    }
}

impl Condition {
    pub fn is_group(&self) -> bool {
        matches!(self, Condition::Group(_))
    }

    /// Number of values this condition binds when every node is well formed.
    pub fn param_count(&self) -> usize {
        match self {
            Condition::Leaf(p) => match &p.operand {
                Operand::None => 0,
                Operand::Single(_) => 1,
                Operand::Pair(..) => 2,
                Operand::List(values) => values.len(),
            },
            Condition::Group(g) => g.children.iter().map(Condition::param_count).sum(),
        }
    }

    /// Nesting depth; a leaf is 0, a group one more than its deepest child.
    pub fn depth(&self) -> usize {
        match self {
            Condition::Leaf(_) => 0,
            Condition::Group(g) => 1 + g.children.iter().map(Condition::depth).max().unwrap_or(0),
        }
    }
}

impl From<Predicate> for Condition {
    fn from(p: Predicate) -> Self {
        Condition::Leaf(p)
    }
}

impl From<Group> for Condition {
    fn from(g: Group) -> Self {
        Condition::Group(g)
    }
}
