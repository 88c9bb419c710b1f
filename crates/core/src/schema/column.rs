//! Column definitions and column references.

use crate::types::SqlType;
use alloc::string::String;
use core::fmt;

/// A reference to a column as written in a query.
///
/// A missing `table` matches a column of that name in any visible table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    /// Table qualifier (the FROM alias), if given.
    pub table: Option<String>,
    /// Column name.
    pub name: String,
}

impl ColumnRef {
    /// Creates a qualified column reference (`table.name`).
    pub fn qualified(table: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            name: name.into(),
        }
    }

    /// Creates an unqualified column reference.
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self {
            table: None,
            name: name.into(),
        }
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table {
            Some(table) => write!(f, "{}.{}", table, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// A column definition in a table schema.
///
/// The qualifier is not part of the persisted schema. It is attached once,
/// when the table is bound to its FROM alias (see `Table::bind`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name.
    name: String,
    /// Data type of the column.
    sql_type: SqlType,
    /// FROM alias of the table this column belongs to.
    qualifier: Option<String>,
}

impl ColumnDef {
    /// Creates a new, unqualified column definition.
    pub fn new(name: impl Into<String>, sql_type: SqlType) -> Self {
        Self {
            name: name.into(),
            sql_type,
            qualifier: None,
        }
    }

    /// Returns a copy of this column carrying `qualifier`.
    pub(crate) fn with_qualifier(mut self, qualifier: &str) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    /// Returns the column name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the data type.
    #[inline]
    pub fn sql_type(&self) -> SqlType {
        self.sql_type
    }

    /// Returns the qualifier assigned at bind time.
    #[inline]
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// Returns whether `column_ref` names this column.
    pub fn matches(&self, column_ref: &ColumnRef) -> bool {
        if column_ref.name != self.name {
            return false;
        }
        match &column_ref.table {
            None => true,
            Some(table) => self.qualifier.as_deref() == Some(table.as_str()),
        }
    }
}
