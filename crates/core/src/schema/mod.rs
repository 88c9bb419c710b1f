//! Schema module for sqleval.
//!
//! This module contains column definitions, column references and the
//! immutable `Table` value type.

mod column;
mod table;

pub use column::{ColumnDef, ColumnRef};
pub use table::Table;
