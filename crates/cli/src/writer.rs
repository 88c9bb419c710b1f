//! Result table output.

use serde_json::{json, Value as Json};
use sqleval_core::schema::Table;
use sqleval_core::Value;
use std::io::{self, Write};

fn cell(value: &Value) -> Json {
    match value {
        Value::Int(v) => json!(v),
        Value::Str(s) => json!(s),
    }
}

/// Writes `table` in table-file shape: the schema line, then one row per line.
pub fn write_table<W: Write>(out: &mut W, table: &Table) -> io::Result<()> {
    let columns: Vec<Json> = table
        .columns()
        .iter()
        .map(|c| json!([c.name(), c.sql_type().name()]))
        .collect();

    out.write_all(b"[\n    ")?;
    serde_json::to_writer(&mut *out, &columns)?;
    for row in table.rows() {
        out.write_all(b",\n    ")?;
        let cells: Vec<Json> = row.values().iter().map(cell).collect();
        serde_json::to_writer(&mut *out, &cells)?;
    }
    out.write_all(b"\n]\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqleval_core::schema::ColumnDef;
    use sqleval_core::{Row, SqlType};

    fn render(table: &Table) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, table).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_table() {
        let table = Table::new(
            vec![
                ColumnDef::new("id", SqlType::Int),
                ColumnDef::new("name", SqlType::Str),
            ],
            vec![
                Row::new(vec![Value::Int(1), Value::Str("a".into())]),
                Row::new(vec![Value::Int(-2), Value::Str("say \"hi\"".into())]),
            ],
        )
        .unwrap();

        assert_eq!(
            render(&table),
            "[\n    [[\"id\",\"int\"],[\"name\",\"str\"]],\n    [1,\"a\"],\n    [-2,\"say \\\"hi\\\"\"]\n]\n"
        );
    }

    #[test]
    fn test_write_empty_table() {
        let table = Table::empty(vec![ColumnDef::new("n", SqlType::Str)]);
        assert_eq!(render(&table), "[\n    [[\"n\",\"str\"]]\n]\n");
        assert_eq!(render(&Table::default()), "[\n    []\n]\n");
    }
}
