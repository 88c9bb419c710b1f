//! AST module for queries.

mod expr;
mod query;

pub use expr::{Op, Term};
pub use query::{Condition, Query, Selector, TableDecl};
pub use sqleval_core::schema::ColumnRef;
