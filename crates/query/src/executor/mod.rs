//! Query executor module.

mod filter;
pub mod join;
mod operator;
mod project;
mod runner;

pub use filter::FilterExecutor;
pub use join::{CrossJoin, HashJoin, NestedLoopJoin};
pub use operator::JoinOperator;
pub use project::ProjectExecutor;
pub use runner::{
    bind_tables, choose_strategy, evaluate, ExecutorOptions, JoinPolicy, JoinStrategy,
    QueryExecutor,
};
