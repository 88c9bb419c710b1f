//! Command-line arguments.

use clap::{Parser, ValueEnum};
use sqleval_query::{ExecutorOptions, JoinPolicy};
use std::path::PathBuf;

/// Evaluate a single JSON-encoded SQL query against a folder of JSON tables.
#[derive(Parser, Debug)]
#[command(name = "sqleval")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Folder holding one `<source>.table.json` file per table
    pub table_folder: PathBuf,

    /// Query file in JSON form
    pub query_file: PathBuf,

    /// Where the result table (or the query error) is written
    pub output_file: PathBuf,

    /// Join strategy policy
    #[arg(long, value_enum, default_value_t = JoinStrategyArg::Auto)]
    pub join_strategy: JoinStrategyArg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum JoinStrategyArg {
    /// Hash join for equality joins, nested loop otherwise
    #[default]
    Auto,
    /// Never build hash indexes
    NestedLoop,
}

impl Args {
    /// Executor options selected by the flags.
    pub fn executor_options(&self) -> ExecutorOptions {
        let policy = match self.join_strategy {
            JoinStrategyArg::Auto => JoinPolicy::Auto,
            JoinStrategyArg::NestedLoop => JoinPolicy::NestedLoopOnly,
        };
        ExecutorOptions::default().with_join_policy(policy)
    }
}
