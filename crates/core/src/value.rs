//! Value type definitions for sqleval.
//!
//! This module defines the `Value` enum which represents the content of a
//! single table cell or literal.

use crate::types::SqlType;
use alloc::string::String;
use core::fmt;

/// A value that can be stored in a table cell.
///
/// Equality and hashing are structural, so values can key the hash-join index
/// directly. Values of different types never compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// UTF-8 string
    Str(String),
}

impl Value {
    /// Returns the type of this value.
    #[inline]
    pub fn sql_type(&self) -> SqlType {
        match self {
            Value::Int(_) => SqlType::Int,
            Value::Str(_) => SqlType::Str,
        }
    }

    /// Returns the integer if this is an Int, None otherwise.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a Str, None otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{:?}", v),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_value_type() {
        assert_eq!(Value::Int(1).sql_type(), SqlType::Int);
        assert_eq!(Value::Str("a".into()).sql_type(), SqlType::Str);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Int(42).as_int(), Some(42));
        assert_eq!(Value::Int(42).as_str(), None);
        assert_eq!(Value::from("hi").as_str(), Some("hi"));
        assert_eq!(Value::from("hi").as_int(), None);
    }

    #[test]
    fn test_value_cross_type_inequality() {
        assert_ne!(Value::Int(1), Value::Str("1".into()));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Int(-7).to_string(), "-7");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
    }
}
