//! Column binding and query validation.
//!
//! A column reference binds to every column, across all visible tables, whose
//! name matches and whose qualifier equals the reference's table (or any
//! qualifier when the reference is unqualified). Exactly one match is required.
//!
//! Validation walks every WHERE condition and then every SELECT selector, and
//! stops at the first failure.

use crate::ast::{Condition, Query, Selector, Term};
use crate::error::{QueryError, Result};
use alloc::string::String;
use alloc::vec::Vec;
use sqleval_core::schema::{ColumnDef, ColumnRef, Table};
use sqleval_core::SqlType;

/// Resolves column references against an ordered list of bound tables.
#[derive(Clone, Copy, Debug)]
pub struct Binder<'a> {
    tables: &'a [Table],
}

impl<'a> Binder<'a> {
    /// Creates a binder over the given tables, in FROM order.
    pub fn new(tables: &'a [Table]) -> Self {
        Self { tables }
    }

    /// Resolves a column reference to its unique column definition.
    pub fn resolve_column(&self, column_ref: &ColumnRef) -> Result<&'a ColumnDef> {
        let matches: Vec<&'a ColumnDef> = self
            .tables
            .iter()
            .flat_map(|t| t.columns().iter())
            .filter(|c| c.matches(column_ref))
            .collect();

        match matches.as_slice() {
            [] => Err(QueryError::unknown_column(
                column_ref.table.as_deref(),
                column_ref.name.as_str(),
            )),
            [single] => Ok(*single),
            _ => {
                let qualifiers = matches
                    .iter()
                    .map(|c| String::from(c.qualifier().unwrap_or_default()))
                    .collect();
                Err(QueryError::ambiguous_column(
                    column_ref.name.as_str(),
                    qualifiers,
                ))
            }
        }
    }

    /// Checks one WHERE condition: column on the left, matching operand types,
    /// and an operator defined for that type.
    pub fn check_condition(&self, condition: &Condition) -> Result<()> {
        let left_type = match &condition.left {
            Term::Column(column_ref) => self.resolve_column(column_ref)?.sql_type(),
            Term::Literal(_) => return Err(QueryError::LiteralOnLeftHandSide),
        };

        let right_type = self.term_type(&condition.right)?;

        if left_type != right_type {
            return Err(QueryError::incompatible_types(
                condition.op,
                left_type,
                right_type,
            ));
        }

        if condition.op.is_ordering() && !left_type.is_ordered() {
            return Err(QueryError::UnsupportedOperator {
                op: condition.op,
                sql_type: left_type,
            });
        }

        Ok(())
    }

    /// Checks one SELECT selector.
    pub fn check_selector(&self, selector: &Selector) -> Result<()> {
        self.resolve_column(&selector.source).map(|_| ())
    }

    /// Validates the whole query, returning the first error found.
    pub fn validate(&self, query: &Query) -> Result<()> {
        for condition in &query.conditions {
            self.check_condition(condition)?;
        }
        for selector in &query.select {
            self.check_selector(selector)?;
        }
        Ok(())
    }

    fn term_type(&self, term: &Term) -> Result<SqlType> {
        match term {
            Term::Column(column_ref) => Ok(self.resolve_column(column_ref)?.sql_type()),
            Term::Literal(value) => Ok(value.sql_type()),
        }
    }
}

/// Resolves a column reference across `tables`.
pub fn resolve_column<'a>(tables: &'a [Table], column_ref: &ColumnRef) -> Result<&'a ColumnDef> {
    Binder::new(tables).resolve_column(column_ref)
}

/// Validates `query` against `tables`.
pub fn validate(tables: &[Table], query: &Query) -> Result<()> {
    Binder::new(tables).validate(query)
}

/// Resolves a column reference to its position within one (possibly joined) schema.
pub fn resolve_position(table: &Table, column_ref: &ColumnRef) -> Result<(usize, SqlType)> {
    Binder::new(core::slice::from_ref(table)).resolve_column(column_ref)?;
    // unique at this point, so the first match is the only one
    table
        .find_column(column_ref)
        .map(|(position, column)| (position, column.sql_type()))
        .ok_or_else(|| {
            QueryError::unknown_column(column_ref.table.as_deref(), column_ref.name.as_str())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Op;
    use alloc::vec;
    use sqleval_core::{Row, Value};

    fn tables() -> Vec<Table> {
        let a = Table::new(
            vec![
                ColumnDef::new("id", SqlType::Int),
                ColumnDef::new("name", SqlType::Str),
            ],
            vec![Row::new(vec![Value::Int(1), Value::Str("a".into())])],
        )
        .unwrap()
        .bind("a");
        let b = Table::new(
            vec![
                ColumnDef::new("id", SqlType::Int),
                ColumnDef::new("val", SqlType::Int),
            ],
            vec![Row::new(vec![Value::Int(1), Value::Int(10)])],
        )
        .unwrap()
        .bind("b");
        vec![a, b]
    }

    #[test]
    fn test_resolve_unique_unqualified() {
        let tables = tables();
        let col = resolve_column(&tables, &ColumnRef::unqualified("val")).unwrap();
        assert_eq!(col.qualifier(), Some("b"));
        assert_eq!(col.sql_type(), SqlType::Int);
    }

    #[test]
    fn test_resolve_qualified() {
        let tables = tables();
        let col = resolve_column(&tables, &ColumnRef::qualified("a", "id")).unwrap();
        assert_eq!(col.qualifier(), Some("a"));
    }

    #[test]
    fn test_resolve_unknown() {
        let tables = tables();
        let err = resolve_column(&tables, &ColumnRef::qualified("b", "missing")).unwrap_err();
        assert_eq!(err, QueryError::unknown_column(Some("b"), "missing"));

        let err = resolve_column(&tables, &ColumnRef::qualified("c", "id")).unwrap_err();
        assert_eq!(err, QueryError::unknown_column(Some("c"), "id"));
    }

    #[test]
    fn test_resolve_ambiguous_lists_qualifiers_in_order() {
        let tables = tables();
        let err = resolve_column(&tables, &ColumnRef::unqualified("id")).unwrap_err();
        assert_eq!(
            err,
            QueryError::ambiguous_column("id", vec!["a".into(), "b".into()])
        );
    }

    #[test]
    fn test_same_table_twice_under_two_aliases() {
        let base = tables().remove(0);
        let (columns, rows) = base.into_parts();
        let unbound: Vec<ColumnDef> = columns
            .iter()
            .map(|c| ColumnDef::new(c.name(), c.sql_type()))
            .collect();
        let x = Table::new(unbound.clone(), rows.clone()).unwrap().bind("x");
        let y = Table::new(unbound, rows).unwrap().bind("y");
        let tables = vec![x, y];

        assert!(resolve_column(&tables, &ColumnRef::qualified("y", "name")).is_ok());
        assert!(matches!(
            resolve_column(&tables, &ColumnRef::unqualified("name")),
            Err(QueryError::AmbiguousColumnReference { .. })
        ));
    }

    #[test]
    fn test_literal_on_left() {
        let tables = tables();
        let cond = Condition::new(Term::literal(1i64), Op::Eq, Term::column("a", "id"));
        assert_eq!(
            Binder::new(&tables).check_condition(&cond),
            Err(QueryError::LiteralOnLeftHandSide)
        );
    }

    #[test]
    fn test_incompatible_types() {
        let tables = tables();
        let cond = Condition::new(Term::column("a", "id"), Op::Eq, Term::literal("1"));
        assert_eq!(
            Binder::new(&tables).check_condition(&cond),
            Err(QueryError::incompatible_types(Op::Eq, SqlType::Int, SqlType::Str))
        );

        let cond = Condition::new(Term::column("a", "name"), Op::Ne, Term::column("b", "val"));
        assert_eq!(
            Binder::new(&tables).check_condition(&cond),
            Err(QueryError::incompatible_types(Op::Ne, SqlType::Str, SqlType::Int))
        );
    }

    #[test]
    fn test_ordering_on_strings_rejected() {
        let tables = tables();
        let cond = Condition::new(Term::column("a", "name"), Op::Lt, Term::literal("m"));
        assert_eq!(
            Binder::new(&tables).check_condition(&cond),
            Err(QueryError::UnsupportedOperator {
                op: Op::Lt,
                sql_type: SqlType::Str
            })
        );

        let cond = Condition::new(Term::column("a", "name"), Op::Ne, Term::literal("m"));
        assert!(Binder::new(&tables).check_condition(&cond).is_ok());
    }

    #[test]
    fn test_validate_checks_conditions_before_selectors() {
        let tables = tables();
        let query = Query::new()
            .from("a", "a")
            .from("b", "b")
            .filter(Term::literal(1i64), Op::Eq, Term::column("a", "id"))
            .select(ColumnRef::qualified("b", "missing"), "m");
        assert_eq!(validate(&tables, &query), Err(QueryError::LiteralOnLeftHandSide));
    }

    #[test]
    fn test_validate_selector() {
        let tables = tables();
        let query = Query::new()
            .from("a", "a")
            .from("b", "b")
            .select(ColumnRef::qualified("a", "name"), "n")
            .select(ColumnRef::qualified("b", "missing"), "m");
        assert_eq!(
            validate(&tables, &query),
            Err(QueryError::unknown_column(Some("b"), "missing"))
        );
    }

    #[test]
    fn test_resolve_position_in_joined_schema() {
        let tables = tables();
        let joined = Table::empty(tables[0].joined_columns(&tables[1]));

        assert_eq!(
            resolve_position(&joined, &ColumnRef::qualified("b", "id")).unwrap(),
            (2, SqlType::Int)
        );
        assert_eq!(
            resolve_position(&joined, &ColumnRef::unqualified("name")).unwrap(),
            (1, SqlType::Str)
        );
        assert!(matches!(
            resolve_position(&joined, &ColumnRef::unqualified("id")),
            Err(QueryError::AmbiguousColumnReference { .. })
        ));
    }
}
