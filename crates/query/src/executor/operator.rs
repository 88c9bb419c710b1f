//! Operator trait for join execution.

use sqleval_core::schema::Table;

/// A join algorithm combining the accumulator with the next FROM table.
///
/// Output rows are the accumulator's columns followed by the right table's
/// columns. Neither input is modified.
pub trait JoinOperator {
    /// Executes the join and returns the combined table.
    fn execute(&self, left: &Table, right: &Table) -> Table;
}
