use tracing::{debug, trace};
use crate::ast::*;
use crate::config::{Config, EmptyListPolicy, NotEqualStyle, PlaceholderStyle};
use crate::error::{CombineError, CombineResult};
use super::TranspileResult;

/// Context for parameterized query building.
#[derive(Debug, Default)]
pub struct ParamContext {
    /// Current parameter index (1-based for Postgres $1, $2, etc.)
    pub index: usize,
    /// Collected parameter values in order
    pub params: Vec<Value>,
}

impl ParamContext {
    pub fn new() -> Self {
        Self { index: 0, params: Vec::new() }
    }

    /// Add a value and return the placeholder for it.
    pub fn add_param(&mut self, value: Value, style: PlaceholderStyle) -> String {
        self.index += 1;
        self.params.push(value);
        style.placeholder(self.index)
    }
}

/// Flattens condition trees into a SQL template and its parameters.
#[derive(Debug, Clone, Default)]
pub struct Combiner {
    config: Config,
}

impl Combiner {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Join `conditions` with `relation` into one fragment.
    ///
    /// Placeholders appear in the template in the same order as the returned
    /// parameters. Empty input yields an empty template.
    pub fn combine(
        &self,
        conditions: &[Condition],
        relation: LogicalOp,
    ) -> CombineResult<TranspileResult> {
        let mut ctx = ParamContext::new();
        match self.write_sequence(conditions, relation, 0, &mut ctx) {
            Ok(sql) => {
                debug!(
                    conditions = conditions.len(),
                    params = ctx.params.len(),
                    %relation,
                    "combined conditions"
                );
                Ok(TranspileResult::new(sql, ctx.params))
            }
            Err(err) => {
                debug!(error = %err, "failed to combine conditions");
                Err(err)
            }
        }
    }

    fn write_sequence(
        &self,
        conditions: &[Condition],
        relation: LogicalOp,
        depth: usize,
        ctx: &mut ParamContext,
    ) -> CombineResult<String> {
        let mut parts = Vec::with_capacity(conditions.len());
        for cond in conditions {
            let fragment = match cond {
                Condition::Leaf(pred) => self.write_predicate(pred, ctx)?,
                Condition::Group(group) => self.write_group(group, depth + 1, ctx)?,
            };
            if !fragment.is_empty() {
                trace!(%fragment, "emit");
                parts.push(fragment);
            }
        }
        Ok(parts.join(&format!(" {} ", relation.as_sql())))
    }

    fn write_group(
        &self,
        group: &Group,
        depth: usize,
        ctx: &mut ParamContext,
    ) -> CombineResult<String> {
        if depth > self.config.max_depth {
            return Err(CombineError::DepthExceeded { max: self.config.max_depth });
        }
        let inner = self.write_sequence(&group.children, group.relation, depth, ctx)?;
        if inner.is_empty() {
            // Nothing inside; skip the group instead of emitting "()"
            return Ok(String::new());
        }
        Ok(format!("({})", inner))
    }

    fn write_predicate(&self, pred: &Predicate, ctx: &mut ParamContext) -> CombineResult<String> {
        let expected = pred.op.arity();
        let found = pred.operand.arity();
        if expected != found {
            return Err(CombineError::OperandMismatch {
                column: pred.column.clone(),
                op: pred.op,
                expected: expected.describe(),
                found: found.describe(),
            });
        }

        let col = &pred.column;
        let op = self.operator_sql(pred.op);
        let style = self.config.placeholder;

        let sql = match &pred.operand {
            Operand::None => format!("{} {}", col, op),
            Operand::Single(value) => {
                let p = ctx.add_param(value.clone(), style);
                format!("{} {} {}", col, op, p)
            }
            Operand::Pair(lo, hi) => {
                let lo = ctx.add_param(lo.clone(), style);
                let hi = ctx.add_param(hi.clone(), style);
                format!("{} {} {} AND {}", col, op, lo, hi)
            }
            Operand::List(values) if values.is_empty() => match self.config.empty_list {
                EmptyListPolicy::FalsePredicate => {
                    // IN () matches nothing, NOT IN () matches everything
                    let constant = if pred.op == Operator::NotIn { "1 = 1" } else { "1 = 0" };
                    constant.to_string()
                }
                EmptyListPolicy::Reject => {
                    return Err(CombineError::EmptyList { column: col.clone(), op: pred.op });
                }
            },
            Operand::List(values) => {
                let placeholders: Vec<String> = values
                    .iter()
                    .map(|v| ctx.add_param(v.clone(), style))
                    .collect();
                format!("{} {} ({})", col, op, placeholders.join(", "))
            }
        };
        Ok(sql)
    }

    fn operator_sql(&self, op: Operator) -> &'static str {
        match (op, self.config.not_equal) {
            (Operator::Ne, NotEqualStyle::Ansi) => "<>",
            (op, _) => op.as_sql(),
        }
    }
}

/// Combine `conditions` with the default configuration.
pub fn combine(conditions: &[Condition], relation: LogicalOp) -> CombineResult<TranspileResult> {
    Combiner::default().combine(conditions, relation)
}
