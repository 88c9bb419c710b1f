//! Typed comparison semantics and resolved conditions.
//!
//! A resolved condition has its column references replaced by row positions,
//! valid against one specific schema. In a join the left term indexes the
//! accumulator's row and the right term the newly joined table's row.

use crate::ast::Op;
use sqleval_core::{Row, SqlType, Value};

/// Compares two values of type `sql_type` with `op`.
///
/// Validation guarantees both values have `sql_type` and that `op` is defined
/// for it. A mismatch here is an engine defect, not a query error.
pub fn compare(op: Op, left: &Value, right: &Value, sql_type: SqlType) -> bool {
    match sql_type {
        SqlType::Int => {
            let (l, r) = match (left, right) {
                (Value::Int(l), Value::Int(r)) => (*l, *r),
                _ => unreachable!("int comparison on {:?} and {:?}", left, right),
            };
            match op {
                Op::Eq => l == r,
                Op::Ne => l != r,
                Op::Lt => l < r,
                Op::Le => l <= r,
                Op::Gt => l > r,
                Op::Ge => l >= r,
            }
        }
        SqlType::Str => {
            let (l, r) = match (left, right) {
                (Value::Str(l), Value::Str(r)) => (l, r),
                _ => unreachable!("str comparison on {:?} and {:?}", left, right),
            };
            match op {
                Op::Eq => l == r,
                Op::Ne => l != r,
                Op::Lt | Op::Le | Op::Gt | Op::Ge => {
                    unreachable!("operator {} is not defined for str", op)
                }
            }
        }
    }
}

/// A term whose column reference has been collapsed to a row position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedTerm {
    Column { index: usize, sql_type: SqlType },
    Literal(Value),
}

impl ResolvedTerm {
    pub fn column(index: usize, sql_type: SqlType) -> Self {
        ResolvedTerm::Column { index, sql_type }
    }

    #[inline]
    pub fn sql_type(&self) -> SqlType {
        match self {
            ResolvedTerm::Column { sql_type, .. } => *sql_type,
            ResolvedTerm::Literal(v) => v.sql_type(),
        }
    }

    /// Returns this term's value for `row`. Literals ignore the row.
    #[inline]
    pub fn value<'a>(&'a self, row: &'a Row) -> &'a Value {
        match self {
            ResolvedTerm::Column { index, .. } => &row.values()[*index],
            ResolvedTerm::Literal(v) => v,
        }
    }
}

/// A condition over resolved terms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedCondition {
    pub op: Op,
    pub left: ResolvedTerm,
    pub right: ResolvedTerm,
    pub sql_type: SqlType,
}

impl ResolvedCondition {
    /// Creates a resolved condition. The comparison type is the right term's type.
    pub fn new(op: Op, left: ResolvedTerm, right: ResolvedTerm) -> Self {
        let sql_type = right.sql_type();
        debug_assert_eq!(left.sql_type(), sql_type);
        Self {
            op,
            left,
            right,
            sql_type,
        }
    }

    /// Evaluates against a pair of rows (join context).
    #[inline]
    pub fn evaluate(&self, left_row: &Row, right_row: &Row) -> bool {
        compare(
            self.op,
            self.left.value(left_row),
            self.right.value(right_row),
            self.sql_type,
        )
    }

    /// Evaluates against a single row (filter context).
    #[inline]
    pub fn evaluate_row(&self, row: &Row) -> bool {
        self.evaluate(row, row)
    }
}

/// Returns true if every condition holds for the row pair.
pub fn all_match(conditions: &[ResolvedCondition], left_row: &Row, right_row: &Row) -> bool {
    conditions.iter().all(|c| c.evaluate(left_row, right_row))
}
