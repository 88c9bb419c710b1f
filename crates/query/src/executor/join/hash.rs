//! Hash Join implementation.

use crate::eval::{all_match, ResolvedCondition};
use crate::executor::JoinOperator;
use alloc::vec::Vec;
use hashbrown::HashMap;
use sqleval_core::schema::Table;
use sqleval_core::{Row, Value};

/// Hash equi-join executor.
///
/// 1. Build phase: index the left (accumulator) rows by the index condition's
///    left-side value. Duplicate keys keep every row.
/// 2. Probe phase: look up each right row's key and emit every matching pair
///    that also satisfies the remaining conditions.
pub struct HashJoin {
    /// The equality condition driving the index.
    index_condition: ResolvedCondition,
    /// Conditions checked after lookup.
    remaining: Vec<ResolvedCondition>,
}

impl HashJoin {
    /// Creates a new hash join executor. `index_condition` must be an equality.
    pub fn new(index_condition: ResolvedCondition, remaining: Vec<ResolvedCondition>) -> Self {
        debug_assert_eq!(index_condition.op, crate::ast::Op::Eq);
        Self {
            index_condition,
            remaining,
        }
    }

    /// Returns the condition used for the index.
    pub fn index_condition(&self) -> &ResolvedCondition {
        &self.index_condition
    }
}

impl JoinOperator for HashJoin {
    fn execute(&self, left: &Table, right: &Table) -> Table {
        // Build phase
        let mut index: HashMap<&Value, Vec<&Row>> = HashMap::with_capacity(left.len());
        for row in left.rows() {
            index
                .entry(self.index_condition.left.value(row))
                .or_default()
                .push(row);
        }
        tracing::trace!(rows = left.len(), keys = index.len(), "built hash join index");

        // Estimate result size for pre-allocation
        let avg_matches_per_key = if !index.is_empty() {
            left.len() / index.len()
        } else {
            1
        };
        let mut rows = Vec::with_capacity(right.len() * avg_matches_per_key);

        // Probe phase
        for right_row in right.rows() {
            let key = self.index_condition.right.value(right_row);
            if let Some(matches) = index.get(key) {
                for left_row in matches {
                    if all_match(&self.remaining, left_row, right_row) {
                        rows.push(Row::concat(left_row, right_row));
                    }
                }
            }
        }

        Table::new_unchecked(left.joined_columns(right), rows)
    }
}
