//! sqleval Core - value, schema and table types for the sqleval query engine.
//!
//! This crate provides the foundational types shared by the engine and its loaders:
//!
//! - `SqlType`: The two supported scalar types (Int, Str)
//! - `Value`: Runtime cell values
//! - `Row`: An ordered sequence of values, positionally aligned with a schema
//! - `schema`: Column definitions, column references and the `Table` value type
//! - `Error`: Errors raised while constructing tables
//!
//! # Example
//!
//! ```rust
//! use sqleval_core::{SqlType, Value, Row};
//! use sqleval_core::schema::{ColumnDef, Table};
//!
//! let table = Table::new(
//!     vec![
//!         ColumnDef::new("id", SqlType::Int),
//!         ColumnDef::new("name", SqlType::Str),
//!     ],
//!     vec![Row::new(vec![Value::Int(1), Value::Str("Alice".into())])],
//! )
//! .unwrap()
//! .bind("users");
//!
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.columns()[1].qualifier(), Some("users"));
//! ```

#![no_std]

extern crate alloc;

mod error;
mod row;
pub mod schema;
mod types;
mod value;

pub use error::{Error, Result};
pub use row::Row;
pub use types::SqlType;
pub use value::Value;
