//! Query runner - evaluates a validated query as a left fold over the FROM list.
//!
//! For each FROM table, in order:
//! 1. Column-vs-literal conditions on that table are pushed down as a filter.
//! 2. The filtered table is joined into the accumulator using the column-vs-column
//!    conditions linking the two, picking hash, nested-loop or cross join.
//!
//! Conditions never consumed by either step (both columns in one table) are
//! applied to the final accumulator, then the SELECT projection runs.

use crate::ast::{Condition, Op, Query, Term};
use crate::binder::{resolve_position, validate};
use crate::error::{QueryError, Result};
use crate::eval::{ResolvedCondition, ResolvedTerm};
use crate::executor::{
    CrossJoin, FilterExecutor, HashJoin, JoinOperator, NestedLoopJoin, ProjectExecutor,
};
use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use sqleval_core::schema::{ColumnDef, ColumnRef, Table};

/// Which join algorithms the executor may pick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinPolicy {
    /// Hash join when an equality links the two sides, else nested loop or cross.
    #[default]
    Auto,
    /// Never build a hash index.
    NestedLoopOnly,
}

/// Executor configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecutorOptions {
    pub join_policy: JoinPolicy,
}

impl ExecutorOptions {
    pub fn with_join_policy(mut self, join_policy: JoinPolicy) -> Self {
        self.join_policy = join_policy;
        self
    }
}

/// Join algorithm picked for one fold step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JoinStrategy {
    Hash,
    NestedLoop,
    Cross,
}

/// Picks the join algorithm for a set of join conditions.
pub fn choose_strategy(conditions: &[ResolvedCondition], policy: JoinPolicy) -> JoinStrategy {
    if conditions.is_empty() {
        JoinStrategy::Cross
    } else if policy == JoinPolicy::Auto && conditions.iter().any(|c| c.op == Op::Eq) {
        JoinStrategy::Hash
    } else {
        JoinStrategy::NestedLoop
    }
}

/// Evaluates queries against bound tables.
#[derive(Clone, Debug, Default)]
pub struct QueryExecutor {
    options: ExecutorOptions,
}

impl QueryExecutor {
    /// Creates an executor with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an executor with the given options.
    pub fn with_options(options: ExecutorOptions) -> Self {
        Self { options }
    }

    /// Returns the executor options.
    pub fn options(&self) -> &ExecutorOptions {
        &self.options
    }

    /// Validates and evaluates `query`. `tables` are bound and in FROM order.
    pub fn execute(&self, tables: &[Table], query: &Query) -> Result<Table> {
        validate(tables, query)?;

        let mut consumed = vec![false; query.conditions.len()];
        let mut accumulator: Option<Table> = None;

        for table in tables {
            let filter = FilterExecutor::new(filter_conditions(
                table,
                &query.conditions,
                &mut consumed,
            ));
            let filtered = filter.execute(table);
            tracing::debug!(
                input_rows = table.len(),
                output_rows = filtered.len(),
                "filtered table"
            );

            accumulator = Some(match accumulator {
                None => filtered,
                Some(left) => self.join(&left, &filtered, &query.conditions, &mut consumed),
            });
        }

        let mut accumulator = accumulator.unwrap_or_default();

        let residual = residual_conditions(&accumulator, &query.conditions, &consumed)?;
        if !residual.is_empty() {
            tracing::debug!(conditions = residual.len(), "applying residual conditions");
            accumulator = FilterExecutor::new(residual).execute(&accumulator);
        }

        let projection = ProjectExecutor::from_selectors(&accumulator, &query.select)?;
        Ok(projection.execute(accumulator))
    }

    fn join(
        &self,
        left: &Table,
        right: &Table,
        conditions: &[Condition],
        consumed: &mut [bool],
    ) -> Table {
        let mut linking = join_conditions(left, right, conditions, consumed);
        let strategy = choose_strategy(&linking, self.options.join_policy);

        let operator: Box<dyn JoinOperator> = match strategy {
            JoinStrategy::Hash => {
                let position = linking
                    .iter()
                    .position(|c| c.op == Op::Eq)
                    .unwrap_or_default();
                let index_condition = linking.remove(position);
                Box::new(HashJoin::new(index_condition, linking))
            }
            JoinStrategy::NestedLoop => Box::new(NestedLoopJoin::new(linking)),
            JoinStrategy::Cross => Box::new(CrossJoin),
        };

        let joined = operator.execute(left, right);
        tracing::debug!(
            ?strategy,
            left_rows = left.len(),
            right_rows = right.len(),
            output_rows = joined.len(),
            "joined table into accumulator"
        );
        joined
    }
}

/// Evaluates `query` against `tables` with default options.
pub fn evaluate(tables: &[Table], query: &Query) -> Result<Table> {
    QueryExecutor::new().execute(tables, query)
}

/// Binds each table to its FROM alias, preserving order.
pub fn bind_tables<I, S>(aliased: I) -> Vec<Table>
where
    I: IntoIterator<Item = (S, Table)>,
    S: AsRef<str>,
{
    aliased
        .into_iter()
        .map(|(alias, table)| table.bind(alias.as_ref()))
        .collect()
}

fn column_term(index: usize, column: &ColumnDef) -> ResolvedTerm {
    ResolvedTerm::column(index, column.sql_type())
}

/// Collects the column-vs-literal conditions that apply to `table` alone.
fn filter_conditions(
    table: &Table,
    conditions: &[Condition],
    consumed: &mut [bool],
) -> Vec<ResolvedCondition> {
    let mut resolved = Vec::new();
    for (i, condition) in conditions.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        if let (Term::Column(column_ref), Term::Literal(value)) = (&condition.left, &condition.right)
        {
            if let Some((index, column)) = table.find_column(column_ref) {
                if column.sql_type() == value.sql_type() {
                    resolved.push(ResolvedCondition::new(
                        condition.op,
                        column_term(index, column),
                        ResolvedTerm::Literal(value.clone()),
                    ));
                    consumed[i] = true;
                }
            }
        }
    }
    resolved
}

/// Collects the column-vs-column conditions linking `left` and `right`.
///
/// The resolved left term always indexes `left`'s rows; a condition written the
/// other way round is swapped and its operator inverted.
fn join_conditions(
    left: &Table,
    right: &Table,
    conditions: &[Condition],
    consumed: &mut [bool],
) -> Vec<ResolvedCondition> {
    let mut resolved = Vec::new();
    for (i, condition) in conditions.iter().enumerate() {
        if consumed[i] {
            continue;
        }
        if let Some(join_condition) = resolve_join_condition(left, right, condition) {
            resolved.push(join_condition);
            consumed[i] = true;
        }
    }
    resolved
}

fn resolve_join_condition(
    left: &Table,
    right: &Table,
    condition: &Condition,
) -> Option<ResolvedCondition> {
    let (first, second): (&ColumnRef, &ColumnRef) = match (&condition.left, &condition.right) {
        (Term::Column(first), Term::Column(second)) => (first, second),
        _ => return None,
    };

    if let (Some((li, lc)), Some((ri, rc))) = (left.find_column(first), right.find_column(second)) {
        return Some(ResolvedCondition::new(
            condition.op,
            column_term(li, lc),
            column_term(ri, rc),
        ));
    }

    if let (Some((li, lc)), Some((ri, rc))) = (left.find_column(second), right.find_column(first)) {
        return Some(ResolvedCondition::new(
            condition.op.inverse(),
            column_term(li, lc),
            column_term(ri, rc),
        ));
    }

    None
}

/// Resolves every condition not consumed during the fold against the final schema.
fn residual_conditions(
    accumulator: &Table,
    conditions: &[Condition],
    consumed: &[bool],
) -> Result<Vec<ResolvedCondition>> {
    let mut resolved = Vec::new();
    for (condition, _) in conditions.iter().zip(consumed).filter(|(_, done)| !**done) {
        let left_ref = condition
            .left
            .as_column()
            .ok_or(QueryError::LiteralOnLeftHandSide)?;
        let (li, lt) = resolve_position(accumulator, left_ref)?;
        let right = match &condition.right {
            Term::Column(right_ref) => {
                let (ri, rt) = resolve_position(accumulator, right_ref)?;
                ResolvedTerm::column(ri, rt)
            }
            Term::Literal(value) => ResolvedTerm::Literal(value.clone()),
        };
        resolved.push(ResolvedCondition::new(
            condition.op,
            ResolvedTerm::column(li, lt),
            right,
        ));
    }
    Ok(resolved)
}
