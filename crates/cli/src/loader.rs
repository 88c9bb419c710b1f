//! Loading of query files and table files.

use crate::error::{CliError, CliResult, FormatError};
use serde::Deserialize;
use serde_json::Value as Json;
use sqleval_core::schema::{ColumnDef, ColumnRef, Table};
use sqleval_core::{Row, SqlType, Value};
use sqleval_query::ast::{Condition, Op, Query, Selector, TableDecl, Term};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QueryFile {
    from: Vec<TableDeclFile>,
    #[serde(rename = "where", default)]
    conditions: Vec<ConditionFile>,
    #[serde(default)]
    select: Vec<SelectorFile>,
}

#[derive(Deserialize)]
struct TableDeclFile {
    source: String,
    #[serde(rename = "as")]
    name: String,
}

#[derive(Deserialize)]
struct ColumnRefFile {
    #[serde(default)]
    table: Option<String>,
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "lowercase")]
enum TermFile {
    Column(ColumnRefFile),
    Literal(LiteralFile),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LiteralFile {
    Int(i64),
    Str(String),
}

#[derive(Deserialize)]
struct ConditionFile {
    op: String,
    left: TermFile,
    right: TermFile,
}

#[derive(Deserialize)]
struct SelectorFile {
    source: ColumnRefFile,
    #[serde(rename = "as")]
    name: String,
}

impl From<ColumnRefFile> for ColumnRef {
    fn from(file: ColumnRefFile) -> Self {
        ColumnRef {
            table: file.table,
            name: file.name,
        }
    }
}

impl From<TermFile> for Term {
    fn from(file: TermFile) -> Self {
        match file {
            TermFile::Column(column) => Term::Column(column.into()),
            TermFile::Literal(LiteralFile::Int(v)) => Term::Literal(Value::Int(v)),
            TermFile::Literal(LiteralFile::Str(s)) => Term::Literal(Value::Str(s)),
        }
    }
}

impl TryFrom<QueryFile> for Query {
    type Error = FormatError;

    fn try_from(file: QueryFile) -> Result<Self, FormatError> {
        let conditions = file
            .conditions
            .into_iter()
            .map(|c| {
                let op = c
                    .op
                    .parse::<Op>()
                    .map_err(|_| FormatError::UnknownOperator(c.op.clone()))?;
                Ok(Condition::new(c.left.into(), op, c.right.into()))
            })
            .collect::<Result<Vec<_>, FormatError>>()?;

        Ok(Query {
            from: file
                .from
                .into_iter()
                .map(|t| TableDecl::new(t.source, t.name))
                .collect(),
            conditions,
            select: file
                .select
                .into_iter()
                .map(|s| Selector::new(s.source.into(), s.name))
                .collect(),
        })
    }
}

/// Parses a query from its JSON text.
pub fn parse_query(text: &str) -> Result<Query, FormatError> {
    let file: QueryFile = serde_json::from_str(text)?;
    Query::try_from(file)
}

/// Parses a table from its JSON text.
///
/// The first array element is the schema `[[name, type], ...]`; every
/// following element is one row.
pub fn parse_table(text: &str) -> Result<Table, FormatError> {
    let json: Json = serde_json::from_str(text)?;
    let mut elements = match json {
        Json::Array(elements) => elements.into_iter(),
        _ => return Err(FormatError::Shape("start of an array (for table)")),
    };

    let columns = match elements.next() {
        Some(Json::Array(defs)) => defs
            .into_iter()
            .map(parse_column)
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(FormatError::Shape("an array of column definitions")),
    };

    let rows = elements
        .enumerate()
        .map(|(i, row)| parse_row(i, row))
        .collect::<Result<Vec<_>, _>>()?;

    Table::new(columns, rows).map_err(FormatError::Table)
}

fn parse_column(def: Json) -> Result<ColumnDef, FormatError> {
    let (name, ty) = match def {
        Json::Array(pair) => match pair.as_slice() {
            [Json::String(name), Json::String(ty)] => (name.clone(), ty.clone()),
            _ => return Err(FormatError::Shape("a column definition [name, type]")),
        },
        _ => return Err(FormatError::Shape("a column definition [name, type]")),
    };
    let sql_type = ty
        .parse::<SqlType>()
        .map_err(|_| FormatError::UnknownType(ty))?;
    Ok(ColumnDef::new(name, sql_type))
}

fn parse_row(index: usize, row: Json) -> Result<Row, FormatError> {
    let cells = match row {
        Json::Array(cells) => cells,
        _ => return Err(FormatError::Shape("start of an array (for table row)")),
    };
    cells
        .into_iter()
        .map(|cell| match cell {
            Json::String(s) => Ok(Value::Str(s)),
            Json::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .ok_or(FormatError::InvalidCell { row: index }),
            _ => Err(FormatError::InvalidCell { row: index }),
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Row::new)
}

/// Reads and parses the query file.
pub fn load_query(path: &Path) -> CliResult<Query> {
    let text = read(path)?;
    parse_query(&text).map_err(|source| CliError::Query {
        path: path.to_path_buf(),
        source,
    })
}

/// Path of the file backing a FROM source.
pub fn table_path(folder: &Path, source: &str) -> PathBuf {
    folder.join(format!("{}.table.json", source))
}

/// Reads and parses a single table file.
pub fn load_table(path: &Path) -> CliResult<Table> {
    let text = read(path)?;
    parse_table(&text).map_err(|source| CliError::Table {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads every FROM table of `query` and binds it to its alias, in FROM order.
pub fn load_tables(folder: &Path, query: &Query) -> CliResult<Vec<Table>> {
    query
        .from
        .iter()
        .map(|decl| {
            let path = table_path(folder, &decl.source);
            tracing::debug!(path = %path.display(), alias = %decl.name, "loading table");
            Ok(load_table(&path)?.bind(&decl.name))
        })
        .collect()
}

fn read(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
