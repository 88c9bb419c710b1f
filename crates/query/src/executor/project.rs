//! Project executor.

use crate::ast::Selector;
use crate::binder::resolve_position;
use crate::error::Result;
use alloc::vec::Vec;
use sqleval_core::schema::{ColumnDef, Table};

/// Project executor - maps selected columns to named output columns.
pub struct ProjectExecutor {
    /// Column indices to project, in output order.
    column_indices: Vec<usize>,
    /// Output schema.
    columns: Vec<ColumnDef>,
}

impl ProjectExecutor {
    /// Creates a new project executor from explicit positions and output columns.
    pub fn new(column_indices: Vec<usize>, columns: Vec<ColumnDef>) -> Self {
        debug_assert_eq!(column_indices.len(), columns.len());
        Self {
            column_indices,
            columns,
        }
    }

    /// Resolves `selectors` against `input`'s schema.
    ///
    /// Each output column takes the selector's name and the source column's type.
    pub fn from_selectors(input: &Table, selectors: &[Selector]) -> Result<Self> {
        let mut column_indices = Vec::with_capacity(selectors.len());
        let mut columns = Vec::with_capacity(selectors.len());
        for selector in selectors {
            let (index, sql_type) = resolve_position(input, &selector.source)?;
            column_indices.push(index);
            columns.push(ColumnDef::new(selector.name.as_str(), sql_type));
        }
        Ok(Self::new(column_indices, columns))
    }

    /// Executes the projection on the input table. Row order is preserved.
    pub fn execute(&self, input: Table) -> Table {
        let (_, rows) = input.into_parts();
        let rows = rows
            .iter()
            .map(|row| row.project(&self.column_indices))
            .collect();

        Table::new_unchecked(self.columns.clone(), rows)
    }
}
