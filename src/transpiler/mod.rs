//! SQL transpiler for condition trees.
//!
//! Flattens [`Condition`]s into a parameterized `WHERE` fragment, plus the
//! small clause helpers that usually sit next to it.

pub mod clauses;
pub mod conditions;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use crate::ast::*;
use crate::error::CombineResult;
pub use conditions::{combine, Combiner, ParamContext};

/// Result of transpilation with extracted parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranspileResult {
    /// The SQL template with placeholders (e.g., ? or $1, $2)
    pub sql: String,
    /// The extracted parameter values in order
    pub params: Vec<Value>,
}

impl TranspileResult {
    /// Create a new TranspileResult.
    pub fn new(sql: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            params,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Split into the `(template, params)` pair most drivers take.
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.params)
    }
}

/// Trait for converting AST nodes to parameterized SQL.
pub trait ToSqlParameterized {
    /// Convert to SQL with extracted parameters (default configuration).
    fn to_sql_parameterized(&self) -> CombineResult<TranspileResult> {
        self.to_sql_parameterized_with(&Combiner::default())
    }
    /// Convert to SQL with extracted parameters using a configured combiner.
    fn to_sql_parameterized_with(&self, combiner: &Combiner) -> CombineResult<TranspileResult>;
}

impl ToSqlParameterized for Condition {
    fn to_sql_parameterized_with(&self, combiner: &Combiner) -> CombineResult<TranspileResult> {
        combiner.combine(std::slice::from_ref(self), LogicalOp::And)
    }
}
