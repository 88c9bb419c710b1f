//! Error types for sqleval table construction.

use crate::types::SqlType;
use alloc::string::String;
use core::fmt;

/// Result type alias for sqleval core operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised when a table's rows do not agree with its schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A row has a different number of cells than the schema has columns.
    RowArity {
        /// Zero-based row position.
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A cell's value does not have its column's declared type.
    TypeMismatch {
        /// Zero-based row position.
        row: usize,
        column: String,
        expected: SqlType,
    },
    /// Two columns of the same table share a name.
    DuplicateColumn {
        name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RowArity { row, expected, got } => {
                write!(
                    f,
                    "row {} has {} values, but there are {} columns",
                    row + 1,
                    got,
                    expected
                )
            }
            Error::TypeMismatch {
                row,
                column,
                expected,
            } => {
                let expecting = match expected {
                    SqlType::Int => "an integer",
                    SqlType::Str => "a string",
                };
                write!(
                    f,
                    "row {}: got invalid cell value for column \"{}\"; expecting {}",
                    row + 1,
                    column,
                    expecting
                )
            }
            Error::DuplicateColumn { name } => {
                write!(f, "column \"{}\" is declared more than once", name)
            }
        }
    }
}

impl Error {
    /// Creates a row arity error.
    pub fn row_arity(row: usize, expected: usize, got: usize) -> Self {
        Error::RowArity { row, expected, got }
    }

    /// Creates a cell type mismatch error.
    pub fn type_mismatch(row: usize, column: impl Into<String>, expected: SqlType) -> Self {
        Error::TypeMismatch {
            row,
            column: column.into(),
            expected,
        }
    }

    /// Creates a duplicate column error.
    pub fn duplicate_column(name: impl Into<String>) -> Self {
        Error::DuplicateColumn { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::row_arity(0, 2, 3);
        assert_eq!(err.to_string(), "row 1 has 3 values, but there are 2 columns");

        let err = Error::type_mismatch(4, "name", SqlType::Str);
        assert!(err.to_string().contains("\"name\""));
        assert!(err.to_string().contains("expecting a string"));

        let err = Error::duplicate_column("id");
        assert!(err.to_string().contains("id"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::type_mismatch(1, "age", SqlType::Int);
        match err {
            Error::TypeMismatch { column, expected, .. } => {
                assert_eq!(column, "age");
                assert_eq!(expected, SqlType::Int);
            }
            _ => panic!("Wrong error type"),
        }
    }
}
