use crate::ast::builders::*;
use crate::ast::*;
use crate::config::{Config, EmptyListPolicy};
use crate::error::CombineError;
use crate::transpiler::{combine, Combiner};

fn leaf(column: &str, op: Operator, operand: Operand) -> Condition {
    Condition::Leaf(Predicate { column: column.to_string(), op, operand })
}

#[test]
fn test_between_with_single_value_fails() {
    let conds = vec![eq("id", 1), leaf("age", Operator::Between, Operand::Single(Value::Int(18)))];
    let err = combine(&conds, LogicalOp::And).unwrap_err();
    assert_eq!(
        err,
        CombineError::OperandMismatch {
            column: "age".to_string(),
            op: Operator::Between,
            expected: "a (lo, hi) pair",
            found: "a single",
        }
    );
}

#[test]
fn test_scalar_operator_with_list_fails() {
    let cond = leaf("id", Operator::Eq, Operand::List(vec![Value::Int(1), Value::Int(2)]));
    let err = combine(&[cond], LogicalOp::And).unwrap_err();
    assert!(matches!(err, CombineError::OperandMismatch { op: Operator::Eq, .. }));
}

#[test]
fn test_null_check_with_value_fails() {
    let cond = leaf("deleted_at", Operator::IsNull, Operand::Single(Value::Null));
    let err = combine(&[cond], LogicalOp::And).unwrap_err();
    assert!(matches!(
        err,
        CombineError::OperandMismatch { op: Operator::IsNull, expected: "no", .. }
    ));
}

#[test]
fn test_in_without_list_fails() {
    let cond = leaf("status", Operator::In, Operand::None);
    assert!(combine(&[cond], LogicalOp::Or).is_err());
}

#[test]
fn test_mismatch_inside_group_fails_whole_call() {
    let conds = vec![
        eq("id", 1),
        or([eq("a", 1), leaf("b", Operator::Like, Operand::None)]),
    ];
    let err = combine(&conds, LogicalOp::And).unwrap_err();
    assert!(matches!(err, CombineError::OperandMismatch { ref column, .. } if column == "b"));
}

#[test]
fn test_empty_list_rejected_by_policy() {
    let combiner = Combiner::new(Config {
        empty_list: EmptyListPolicy::Reject,
        ..Config::default()
    });
    let err = combiner
        .combine(&[in_list("status", Vec::<&str>::new())], LogicalOp::And)
        .unwrap_err();
    assert_eq!(
        err,
        CombineError::EmptyList { column: "status".to_string(), op: Operator::In }
    );

    // Non-empty lists are unaffected.
    let ok = combiner.combine(&[in_list("status", ["a"])], LogicalOp::And).unwrap();
    assert_eq!(ok.sql, "status IN (?)");
}

#[test]
fn test_depth_limit() {
    let combiner = Combiner::new(Config { max_depth: 3, ..Config::default() });

    let three = and([or([and([eq("x", 1)])])]);
    assert_eq!(combiner.combine(&[three], LogicalOp::And).unwrap().sql, "(((x = ?)))");

    let four = and([and([or([and([eq("x", 1)])])])]);
    let err = combiner.combine(&[four], LogicalOp::And).unwrap_err();
    assert_eq!(err, CombineError::DepthExceeded { max: 3 });
}
