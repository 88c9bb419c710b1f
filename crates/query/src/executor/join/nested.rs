//! Nested Loop Join implementation.

use crate::eval::{all_match, ResolvedCondition};
use crate::executor::JoinOperator;
use alloc::vec::Vec;
use sqleval_core::schema::Table;
use sqleval_core::Row;

/// Nested Loop Join executor.
///
/// Compares every pair of rows. Used when no join condition is an equality.
pub struct NestedLoopJoin {
    conditions: Vec<ResolvedCondition>,
}

impl NestedLoopJoin {
    /// Creates a new nested loop join executor.
    pub fn new(conditions: Vec<ResolvedCondition>) -> Self {
        Self { conditions }
    }
}

impl JoinOperator for NestedLoopJoin {
    fn execute(&self, left: &Table, right: &Table) -> Table {
        let mut rows = Vec::new();

        for left_row in left.rows() {
            for right_row in right.rows() {
                if all_match(&self.conditions, left_row, right_row) {
                    rows.push(Row::concat(left_row, right_row));
                }
            }
        }

        Table::new_unchecked(left.joined_columns(right), rows)
    }
}
