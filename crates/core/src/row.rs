//! Row structure for sqleval.
//!
//! A row is an ordered list of values aligned positionally with a table schema.
//! Joined rows are the left row's values followed by the right row's values.

use crate::value::Value;
use alloc::vec::Vec;

/// A row of a table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    /// Creates a new row with the given values.
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Creates the concatenation of two rows (join result).
    pub fn concat(left: &Row, right: &Row) -> Self {
        let mut values = Vec::with_capacity(left.len() + right.len());
        values.extend(left.values.iter().cloned());
        values.extend(right.values.iter().cloned());
        Self { values }
    }

    /// Creates a row holding the values at `indices`, in that order.
    pub fn project(&self, indices: &[usize]) -> Self {
        let values = indices
            .iter()
            .filter_map(|&idx| self.values.get(idx).cloned())
            .collect();
        Self { values }
    }

    /// Returns a reference to the values.
    #[inline]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Consumes the row and returns its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Gets a value at the given column index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns the number of values in this row.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_row_new() {
        let row = Row::new(vec![Value::Int(42), Value::Str("Alice".into())]);
        assert_eq!(row.len(), 2);
        assert!(!row.is_empty());
    }

    #[test]
    fn test_row_get_value() {
        let row = Row::new(vec![Value::Int(1), Value::Str("Alice".into())]);
        assert_eq!(row.get(0), Some(&Value::Int(1)));
        assert_eq!(row.get(1), Some(&Value::Str("Alice".into())));
        assert_eq!(row.get(2), None);
    }

    #[test]
    fn test_row_concat() {
        let left = Row::new(vec![Value::Int(1)]);
        let right = Row::new(vec![Value::Int(2), Value::Str("b".into())]);
        let combined = Row::concat(&left, &right);

        assert_eq!(
            combined.values(),
            &[Value::Int(1), Value::Int(2), Value::Str("b".into())]
        );
        // inputs are untouched
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 2);
    }

    #[test]
    fn test_row_project() {
        let row = Row::new(vec![Value::Int(1), Value::Str("a".into()), Value::Int(3)]);
        let projected = row.project(&[2, 0, 0]);
        assert_eq!(
            projected.values(),
            &[Value::Int(3), Value::Int(1), Value::Int(1)]
        );
    }
}
