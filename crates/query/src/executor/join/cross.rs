//! Cross join (cartesian product).

use crate::executor::JoinOperator;
use alloc::vec::Vec;
use sqleval_core::schema::Table;
use sqleval_core::Row;

/// Cross join executor - pairs every left row with every right row.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrossJoin;

impl JoinOperator for CrossJoin {
    fn execute(&self, left: &Table, right: &Table) -> Table {
        let mut rows = Vec::with_capacity(left.len() * right.len());
        for left_row in left.rows() {
            for right_row in right.rows() {
                rows.push(Row::concat(left_row, right_row));
            }
        }

        Table::new_unchecked(left.joined_columns(right), rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use sqleval_core::schema::ColumnDef;
    use sqleval_core::{SqlType, Value};

    fn table(alias: &str, count: i64) -> Table {
        Table::new(
            vec![ColumnDef::new("n", SqlType::Int)],
            (0..count).map(|i| Row::new(vec![Value::Int(i)])).collect(),
        )
        .unwrap()
        .bind(alias)
    }

    #[test]
    fn test_cross_join_count() {
        let result = CrossJoin.execute(&table("a", 3), &table("b", 4));
        assert_eq!(result.len(), 12);
        assert_eq!(result.column_count(), 2);
        assert_eq!(result.columns()[0].qualifier(), Some("a"));
        assert_eq!(result.columns()[1].qualifier(), Some("b"));
    }

    #[test]
    fn test_cross_join_with_empty_side() {
        let result = CrossJoin.execute(&table("a", 3), &table("b", 0));
        assert!(result.is_empty());
        assert_eq!(result.column_count(), 2);
    }

    #[test]
    fn test_cross_join_row_layout() {
        let result = CrossJoin.execute(&table("a", 1), &table("b", 2));
        assert_eq!(result.rows()[1].values(), &[Value::Int(0), Value::Int(1)]);
    }
}
