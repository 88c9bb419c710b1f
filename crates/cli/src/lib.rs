//! sqleval-cli - Runs one JSON query against a folder of JSON tables.
//!
//! ```text
//! sqleval <table-folder> <sql-json-file> <output-file>
//! ```
//!
//! Each FROM entry `{"source": s, "as": a}` loads `<table-folder>/s.table.json`
//! and binds it to alias `a`. The result table is written to the output file;
//! if the query is invalid, the error message is written there instead.

pub mod args;
pub mod error;
pub mod loader;
pub mod writer;

pub use args::{Args, JoinStrategyArg};
pub use error::{CliError, CliResult, FormatError};

use sqleval_query::QueryExecutor;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Loads the inputs named by `args`, evaluates the query and writes the output file.
pub fn run(args: &Args) -> CliResult<()> {
    let query = loader::load_query(&args.query_file)?;
    let tables = loader::load_tables(&args.table_folder, &query)?;

    let executor = QueryExecutor::with_options(args.executor_options());
    let output = &args.output_file;
    let written = match executor.execute(&tables, &query) {
        Ok(table) => {
            tracing::info!(rows = table.len(), columns = table.column_count(), "query evaluated");
            write_output(output, |out| writer::write_table(out, &table))
        }
        Err(err) => {
            tracing::warn!(error = %err, "query rejected");
            write_output(output, |out| out.write_all(err.to_string().as_bytes()))
        }
    };
    written.map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })
}

fn write_output<F>(path: &Path, write: F) -> std::io::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let mut out = BufWriter::new(File::create(path)?);
    write(&mut out)?;
    out.flush()
}
