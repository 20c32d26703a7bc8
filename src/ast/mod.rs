pub mod operators;
pub mod values;
pub mod conditions;
pub mod builders;

pub use self::operators::{Arity, LogicalOp, Operator, SortOrder};
pub use self::values::Value;
pub use self::conditions::{Condition, Group, Operand, Predicate};
