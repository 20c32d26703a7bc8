//! # qail-where
//!
//! Composable filter conditions flattened into a parameterized SQL fragment,
//! ready to drop into a `WHERE` clause.
//!
//! ## Quick Example
//!
//! ```
//! use qail_where::prelude::*;
//!
//! let conditions = vec![
//!     eq("id", 1),
//!     like("position", "%manager%"),
//!     group(LogicalOp::Or, [eq("doc_number", "89013"), eq("region", "ATLANTA")]),
//! ];
//!
//! let result = combine(&conditions, LogicalOp::And).unwrap();
//! assert_eq!(result.sql, "id = ? AND position LIKE ? AND (doc_number = ? OR region = ?)");
//! assert_eq!(result.params.len(), 4);
//! ```
//!
//! The template and parameters go to whatever driver executes the query;
//! this crate never touches a database.

pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::config::{Config, EmptyListPolicy, NotEqualStyle, PlaceholderStyle};
    pub use crate::error::*;
    pub use crate::transpiler::{combine, Combiner, ToSqlParameterized, TranspileResult};
}

pub use transpiler::{combine, Combiner, TranspileResult};
