//! Error types for combining conditions and loading configuration.

use std::path::PathBuf;
use thiserror::Error;
use crate::ast::Operator;

/// Errors raised while flattening a condition tree.
///
/// Any error aborts the whole call; no partial SQL is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CombineError {
    #[error("operator {op} on column '{column}' expects {expected} operand, found {found}")]
    OperandMismatch {
        column: String,
        op: Operator,
        expected: &'static str,
        found: &'static str,
    },

    #[error("empty value list for {op} on column '{column}'")]
    EmptyList { column: String, op: Operator },

    #[error("condition nesting exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },
}

/// Errors raised while loading a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type CombineResult<T> = Result<T, CombineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_error_display() {
        let err = CombineError::OperandMismatch {
            column: "age".to_string(),
            op: Operator::Between,
            expected: "a (lo, hi) pair",
            found: "a single",
        };
        assert_eq!(
            err.to_string(),
            "operator BETWEEN on column 'age' expects a (lo, hi) pair operand, found a single"
        );

        let err = CombineError::EmptyList { column: "status".to_string(), op: Operator::In };
        assert!(err.to_string().contains("empty value list for IN"));
    }
}
