//! Data type definitions for sqleval.
//!
//! Only two scalar types exist. The set is closed: schemas, literals and
//! resolved terms all carry one of these.

use core::fmt;
use core::str::FromStr;

/// Supported column and literal types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// 64-bit signed integer
    Int,
    /// UTF-8 string
    Str,
}

impl SqlType {
    /// Returns the lower-cased type name used in table files and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            SqlType::Int => "int",
            SqlType::Str => "str",
        }
    }

    /// Returns whether values of this type have a total order usable by
    /// `<`, `<=`, `>` and `>=`.
    pub fn is_ordered(&self) -> bool {
        matches!(self, SqlType::Int)
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SqlType {
    type Err = ();

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s {
            "int" => Ok(SqlType::Int),
            "str" => Ok(SqlType::Str),
            _ => Err(()),
        }
    }
}
