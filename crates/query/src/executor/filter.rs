//! Filter executor.

use crate::eval::ResolvedCondition;
use alloc::vec::Vec;
use sqleval_core::schema::Table;
use sqleval_core::Row;

/// Filter executor - keeps the rows satisfying every condition.
pub struct FilterExecutor {
    conditions: Vec<ResolvedCondition>,
}

impl FilterExecutor {
    /// Creates a new filter executor.
    pub fn new(conditions: Vec<ResolvedCondition>) -> Self {
        Self { conditions }
    }

    /// Returns true if there is nothing to filter on.
    pub fn is_noop(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Executes the filter on the input table.
    pub fn execute(&self, input: &Table) -> Table {
        let rows: Vec<Row> = input
            .rows()
            .iter()
            .filter(|row| self.conditions.iter().all(|c| c.evaluate_row(row)))
            .cloned()
            .collect();

        Table::new_unchecked(input.columns().to_vec(), rows)
    }
}
