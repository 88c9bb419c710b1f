//! sqleval Query - binding, validation and execution of single relational queries.
//!
//! This crate provides:
//!
//! - `ast`: Query AST (terms, operators, conditions, selectors, FROM entries)
//! - `binder`: Column reference resolution and whole-query validation
//! - `eval`: Typed comparison semantics and resolved (positional) conditions
//! - `executor`: Filter pushdown, hash / nested-loop / cross joins, projection
//!   and the left-to-right fold that ties them together

#![no_std]

extern crate alloc;

pub mod ast;
pub mod binder;
mod error;
pub mod eval;
pub mod executor;

pub use error::{QueryError, Result};
pub use executor::{bind_tables, evaluate, ExecutorOptions, JoinPolicy, QueryExecutor};
