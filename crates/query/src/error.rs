//! Errors raised while validating or evaluating a query.

use crate::ast::Op;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use sqleval_core::SqlType;

/// Result type alias for query operations.
pub type Result<T> = core::result::Result<T, QueryError>;

/// A query that cannot be evaluated against the given tables.
///
/// These are deterministic: the same query and tables always fail the same way.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// No visible table exposes the referenced qualifier/name pair.
    UnknownColumnReference {
        qualifier: Option<String>,
        name: String,
    },
    /// More than one visible table exposes a column with that name.
    AmbiguousColumnReference {
        name: String,
        /// Qualifiers of every match, in FROM order.
        qualifiers: Vec<String>,
    },
    /// A condition's left operand is not a column.
    LiteralOnLeftHandSide,
    /// The two operands of a condition have different types.
    IncompatibleConditionTypes {
        op: Op,
        left: SqlType,
        right: SqlType,
    },
    /// An ordering operator was applied to a type without an order.
    UnsupportedOperator { op: Op, sql_type: SqlType },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::UnknownColumnReference {
                qualifier: Some(qualifier),
                ..
            } => {
                write!(f, "ERROR: Unknown table name \"{}\".", qualifier)
            }
            QueryError::UnknownColumnReference {
                qualifier: None,
                name,
            } => {
                write!(f, "ERROR: Unknown column name \"{}\".", name)
            }
            QueryError::AmbiguousColumnReference { name, qualifiers } => {
                write!(
                    f,
                    "ERROR: Column reference \"{}\" is ambiguous; present in multiple tables: ",
                    name
                )?;
                for (i, qualifier) in qualifiers.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{}\"", qualifier)?;
                }
                f.write_str(".")
            }
            QueryError::LiteralOnLeftHandSide => {
                f.write_str("ERROR: Literal not permitted on left-hand side of expression.")
            }
            QueryError::IncompatibleConditionTypes { op, left, right } => {
                write!(
                    f,
                    "ERROR: Incompatible types to \"{}\": {} and {}.",
                    op, left, right
                )
            }
            QueryError::UnsupportedOperator { op, sql_type } => {
                write!(
                    f,
                    "ERROR: Operator \"{}\" is not supported for type {}.",
                    op, sql_type
                )
            }
        }
    }
}

impl QueryError {
    /// Creates an unknown column reference error.
    pub fn unknown_column(qualifier: Option<&str>, name: impl Into<String>) -> Self {
        QueryError::UnknownColumnReference {
            qualifier: qualifier.map(String::from),
            name: name.into(),
        }
    }

    /// Creates an ambiguous column reference error.
    pub fn ambiguous_column(name: impl Into<String>, qualifiers: Vec<String>) -> Self {
        QueryError::AmbiguousColumnReference {
            name: name.into(),
            qualifiers,
        }
    }

    /// Creates an incompatible condition types error.
    pub fn incompatible_types(op: Op, left: SqlType, right: SqlType) -> Self {
        QueryError::IncompatibleConditionTypes { op, left, right }
    }
}
