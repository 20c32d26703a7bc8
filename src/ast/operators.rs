use serde::{Deserialize, Serialize};

/// Logical operator between conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogicalOp {
    #[default]
    And,
    Or,
}

impl LogicalOp {
    /// SQL keyword used to join sibling conditions.
    pub fn as_sql(self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

impl std::fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Equal (=)
    Eq,
    /// Not equal (!=, <>)
    Ne,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
    /// LIKE pattern match
    Like,
    /// NOT LIKE pattern match
    NotLike,
    /// IN list
    In,
    /// NOT IN list
    NotIn,
    /// BETWEEN x AND y
    Between,
    /// NOT BETWEEN x AND y
    NotBetween,
    /// IS NULL
    IsNull,
    /// IS NOT NULL
    IsNotNull,
}

/// Shape of the operand an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No value (`IS NULL`).
    Nullary,
    /// Exactly one value.
    Unary,
    /// A `(lo, hi)` pair.
    Range,
    /// Any number of values, including none.
    List,
}

impl Arity {
    pub fn describe(self) -> &'static str {
        match self {
            Arity::Nullary => "no",
            Arity::Unary => "a single",
            Arity::Range => "a (lo, hi) pair",
            Arity::List => "a list",
        }
    }
}

impl Operator {
    /// SQL text for the operator. `Ne` renders as `!=` here; the combinator
    /// can be configured to emit `<>` instead.
    pub fn as_sql(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Gte => ">=",
            Operator::Lt => "<",
            Operator::Lte => "<=",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
            Operator::In => "IN",
            Operator::NotIn => "NOT IN",
            Operator::Between => "BETWEEN",
            Operator::NotBetween => "NOT BETWEEN",
            Operator::IsNull => "IS NULL",
            Operator::IsNotNull => "IS NOT NULL",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Operator::IsNull | Operator::IsNotNull => Arity::Nullary,
            Operator::Between | Operator::NotBetween => Arity::Range,
            Operator::In | Operator::NotIn => Arity::List,
            Operator::Eq
            | Operator::Ne
            | Operator::Gt
            | Operator::Gte
            | Operator::Lt
            | Operator::Lte
            | Operator::Like
            | Operator::NotLike => Arity::Unary,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Sort order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Reads a direction string. Only `DESC`/`desc` select descending order,
    /// anything else falls back to ascending.
    pub fn from_direction(direction: &str) -> Self {
        match direction {
            "DESC" | "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_sql_text() {
        assert_eq!(Operator::Eq.to_string(), "=");
        assert_eq!(Operator::Ne.to_string(), "!=");
        assert_eq!(Operator::Gte.to_string(), ">=");
        assert_eq!(Operator::NotLike.to_string(), "NOT LIKE");
        assert_eq!(Operator::IsNotNull.to_string(), "IS NOT NULL");
        assert_eq!(Operator::NotBetween.to_string(), "NOT BETWEEN");
    }

    #[test]
    fn test_operator_arity() {
        assert_eq!(Operator::IsNull.arity(), Arity::Nullary);
        assert_eq!(Operator::Like.arity(), Arity::Unary);
        assert_eq!(Operator::Between.arity(), Arity::Range);
        assert_eq!(Operator::NotIn.arity(), Arity::List);
    }

    #[test]
    fn test_logical_op_keyword() {
        assert_eq!(LogicalOp::And.to_string(), "AND");
        assert_eq!(LogicalOp::Or.to_string(), "OR");
        assert_eq!(LogicalOp::default(), LogicalOp::And);
    }

    #[test]
    fn test_sort_order_from_direction() {
        assert_eq!(SortOrder::from_direction("DESC"), SortOrder::Desc);
        assert_eq!(SortOrder::from_direction("desc"), SortOrder::Desc);
        // Mixed case is not recognised.
        assert_eq!(SortOrder::from_direction("Desc"), SortOrder::Asc);
        assert_eq!(SortOrder::from_direction(""), SortOrder::Asc);
    }
}
