//! Query, condition and selector definitions.

use crate::ast::expr::{Op, Term};
use alloc::string::String;
use alloc::vec::Vec;
use sqleval_core::schema::ColumnRef;

/// A WHERE condition. Conditions in a query are conjunctive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Condition {
    pub left: Term,
    pub op: Op,
    pub right: Term,
}

impl Condition {
    pub fn new(left: Term, op: Op, right: Term) -> Self {
        Self { left, op, right }
    }

    /// Returns true if both sides are column references.
    pub fn is_column_pair(&self) -> bool {
        matches!((&self.left, &self.right), (Term::Column(_), Term::Column(_)))
    }
}

/// Maps one bound column to one named output column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    pub source: ColumnRef,
    /// Output column name.
    pub name: String,
}

impl Selector {
    pub fn new(source: ColumnRef, name: impl Into<String>) -> Self {
        Self {
            source,
            name: name.into(),
        }
    }
}

/// A FROM entry: which table to load and the alias it is visible under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableDecl {
    /// Table identifier (file stem for loaders).
    pub source: String,
    /// Alias used as the column qualifier.
    pub name: String,
}

impl TableDecl {
    pub fn new(source: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
        }
    }
}

/// A single query: FROM list, conjunctive WHERE list, SELECT list.
///
/// FROM order is significant: it is the join fold order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    pub from: Vec<TableDecl>,
    pub conditions: Vec<Condition>,
    pub select: Vec<Selector>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a FROM entry.
    pub fn from(mut self, source: impl Into<String>, alias: impl Into<String>) -> Self {
        self.from.push(TableDecl::new(source, alias));
        self
    }

    /// Appends a WHERE condition.
    pub fn filter(mut self, left: Term, op: Op, right: Term) -> Self {
        self.conditions.push(Condition::new(left, op, right));
        self
    }

    /// Appends a SELECT entry.
    pub fn select(mut self, source: ColumnRef, name: impl Into<String>) -> Self {
        self.select.push(Selector::new(source, name));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builder() {
        let query = Query::new()
            .from("a_file", "a")
            .from("b_file", "b")
            .filter(Term::column("a", "id"), Op::Eq, Term::column("b", "id"))
            .select(ColumnRef::qualified("a", "name"), "n");

        assert_eq!(query.from.len(), 2);
        assert_eq!(query.from[1], TableDecl::new("b_file", "b"));
        assert_eq!(query.conditions.len(), 1);
        assert!(query.conditions[0].is_column_pair());
        assert_eq!(query.select[0].name, "n");
    }

    #[test]
    fn test_condition_column_pair() {
        let cond = Condition::new(Term::column("a", "id"), Op::Gt, Term::literal(1i64));
        assert!(!cond.is_column_pair());
    }
}
