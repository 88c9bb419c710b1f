//! Term and operator definitions.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use sqleval_core::schema::ColumnRef;
use sqleval_core::{SqlType, Value};

/// Comparison operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Op {
    /// Returns the operator to use when the operands are swapped.
    pub fn inverse(self) -> Op {
        match self {
            Op::Eq => Op::Eq,
            Op::Ne => Op::Ne,
            Op::Lt => Op::Gt,
            Op::Le => Op::Ge,
            Op::Gt => Op::Lt,
            Op::Ge => Op::Le,
        }
    }

    /// Returns the operator's query symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Lt => "<",
            Op::Le => "<=",
            Op::Gt => ">",
            Op::Ge => ">=",
        }
    }

    /// Returns whether the operator needs an ordered type.
    pub fn is_ordering(self) -> bool {
        matches!(self, Op::Lt | Op::Le | Op::Gt | Op::Ge)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Op {
    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "=" => Ok(Op::Eq),
            "!=" => Ok(Op::Ne),
            "<" => Ok(Op::Lt),
            "<=" => Ok(Op::Le),
            ">" => Ok(Op::Gt),
            ">=" => Ok(Op::Ge),
            _ => Err(()),
        }
    }
}

/// One side of a condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// Column reference.
    Column(ColumnRef),
    /// Literal value. Its type is the value's own type.
    Literal(Value),
}

impl Term {
    /// Creates a qualified column term.
    pub fn column(table: impl Into<String>, name: impl Into<String>) -> Self {
        Term::Column(ColumnRef::qualified(table, name))
    }

    /// Creates an unqualified column term.
    pub fn unqualified(name: impl Into<String>) -> Self {
        Term::Column(ColumnRef::unqualified(name))
    }

    /// Creates a literal term.
    pub fn literal(value: impl Into<Value>) -> Self {
        Term::Literal(value.into())
    }

    /// Returns the column reference if this is a column term.
    pub fn as_column(&self) -> Option<&ColumnRef> {
        match self {
            Term::Column(c) => Some(c),
            Term::Literal(_) => None,
        }
    }

    /// Returns the literal's type, or None for a column term.
    pub fn literal_type(&self) -> Option<SqlType> {
        match self {
            Term::Column(_) => None,
            Term::Literal(v) => Some(v.sql_type()),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Column(c) => write!(f, "{}", c),
            Term::Literal(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_op_inverse() {
        assert_eq!(Op::Lt.inverse(), Op::Gt);
        assert_eq!(Op::Gt.inverse(), Op::Lt);
        assert_eq!(Op::Le.inverse(), Op::Ge);
        assert_eq!(Op::Ge.inverse(), Op::Le);
        assert_eq!(Op::Eq.inverse(), Op::Eq);
        assert_eq!(Op::Ne.inverse(), Op::Ne);
        for op in [Op::Eq, Op::Ne, Op::Lt, Op::Le, Op::Gt, Op::Ge] {
            assert_eq!(op.inverse().inverse(), op);
        }
    }

    #[test]
    fn test_op_symbol_roundtrip() {
        for op in [Op::Eq, Op::Ne, Op::Lt, Op::Le, Op::Gt, Op::Ge] {
            assert_eq!(op.symbol().parse::<Op>(), Ok(op));
        }
        assert!("==".parse::<Op>().is_err());
    }

    #[test]
    fn test_term_literal_type() {
        assert_eq!(Term::literal(1i64).literal_type(), Some(SqlType::Int));
        assert_eq!(Term::literal("a").literal_type(), Some(SqlType::Str));
        assert_eq!(Term::column("a", "id").literal_type(), None);
    }

    #[test]
    fn test_term_display() {
        assert_eq!(Term::column("a", "id").to_string(), "a.id");
        assert_eq!(Term::literal("x").to_string(), "\"x\"");
    }
}
