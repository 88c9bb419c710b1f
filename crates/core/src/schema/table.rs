//! The `Table` value type.
//!
//! Tables are immutable: filtering, joining and projecting produce new tables.
//! Every row's length and per-position value types match the schema.

use super::column::{ColumnDef, ColumnRef};
use crate::error::{Error, Result};
use crate::row::Row;
use alloc::vec::Vec;

/// An ordered schema plus ordered rows.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Table {
    /// Column definitions.
    columns: Vec<ColumnDef>,
    /// Rows, positionally aligned with `columns`.
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table, checking every row against the schema.
    pub fn new(columns: Vec<ColumnDef>, rows: Vec<Row>) -> Result<Self> {
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name() == col.name()) {
                return Err(Error::duplicate_column(col.name()));
            }
        }

        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::row_arity(row_idx, columns.len(), row.len()));
            }
            for (value, col) in row.values().iter().zip(columns.iter()) {
                if value.sql_type() != col.sql_type() {
                    return Err(Error::type_mismatch(row_idx, col.name(), col.sql_type()));
                }
            }
        }

        Ok(Self { columns, rows })
    }

    /// Creates a table without checking rows against the schema.
    ///
    /// Callers derive `rows` from tables that already satisfy their schema
    /// (filter, join and projection results).
    pub fn new_unchecked(columns: Vec<ColumnDef>, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    /// Creates a table with the given schema and no rows.
    pub fn empty(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Binds the table to its FROM alias, qualifying every column with it.
    pub fn bind(self, alias: &str) -> Self {
        let columns = self
            .columns
            .into_iter()
            .map(|c| c.with_qualifier(alias))
            .collect();
        Self {
            columns,
            rows: self.rows,
        }
    }

    /// Returns the columns.
    #[inline]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the table and returns its schema and rows.
    pub fn into_parts(self) -> (Vec<ColumnDef>, Vec<Row>) {
        (self.columns, self.rows)
    }

    /// Returns the number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Finds the first column matching `column_ref`, with its position.
    pub fn find_column(&self, column_ref: &ColumnRef) -> Option<(usize, &ColumnDef)> {
        self.columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.matches(column_ref))
    }

    /// Returns the schema of `self` joined with `other`: left columns, then right.
    pub fn joined_columns(&self, other: &Table) -> Vec<ColumnDef> {
        let mut columns = Vec::with_capacity(self.columns.len() + other.columns.len());
        columns.extend(self.columns.iter().cloned());
        columns.extend(other.columns.iter().cloned());
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SqlType;
    use crate::value::Value;
    use alloc::vec;

    fn schema() -> Vec<ColumnDef> {
        vec![
            ColumnDef::new("id", SqlType::Int),
            ColumnDef::new("name", SqlType::Str),
        ]
    }

    #[test]
    fn test_table_new() {
        let table = Table::new(
            schema(),
            vec![
                Row::new(vec![Value::Int(1), Value::Str("a".into())]),
                Row::new(vec![Value::Int(2), Value::Str("b".into())]),
            ],
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_table_rejects_short_row() {
        let err = Table::new(schema(), vec![Row::new(vec![Value::Int(1)])]).unwrap_err();
        assert_eq!(err, Error::row_arity(0, 2, 1));
    }

    #[test]
    fn test_table_rejects_wrong_cell_type() {
        let err = Table::new(
            schema(),
            vec![
                Row::new(vec![Value::Int(1), Value::Str("a".into())]),
                Row::new(vec![Value::Str("2".into()), Value::Str("b".into())]),
            ],
        )
        .unwrap_err();
        assert_eq!(err, Error::type_mismatch(1, "id", SqlType::Int));
    }

    #[test]
    fn test_table_rejects_duplicate_columns() {
        let err = Table::new(
            vec![
                ColumnDef::new("id", SqlType::Int),
                ColumnDef::new("id", SqlType::Str),
            ],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, Error::duplicate_column("id"));
    }

    #[test]
    fn test_bind_sets_qualifier() {
        let table = Table::empty(schema()).bind("u");
        assert!(table.columns().iter().all(|c| c.qualifier() == Some("u")));
        assert!(table.find_column(&ColumnRef::qualified("u", "name")).is_some());
        assert!(table.find_column(&ColumnRef::qualified("v", "name")).is_none());
    }

    #[test]
    fn test_find_column_position() {
        let table = Table::empty(schema()).bind("u");
        let (idx, col) = table.find_column(&ColumnRef::unqualified("name")).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(col.sql_type(), SqlType::Str);
    }

    #[test]
    fn test_joined_columns() {
        let a = Table::empty(schema()).bind("a");
        let b = Table::empty(vec![ColumnDef::new("val", SqlType::Int)]).bind("b");
        let joined = a.joined_columns(&b);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined[0].qualifier(), Some("a"));
        assert_eq!(joined[2].qualifier(), Some("b"));
    }
}
