//! DuckDB-backed spreadsheet access

use crate::error::{DbError, DbResult};
use duckdb::{params, Connection};
use std::path::Path;

/// In-memory DuckDB holding the spreadsheets loaded for a run
pub struct SheetDb {
    conn: Connection,
}

impl SheetDb {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Execute batch SQL
    pub fn execute_batch(&self, sql: &str) -> DbResult<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, sql)))
    }

    /// Load a CSV file into `table`, every column as text
    pub fn load_csv(&self, table: &str, path: &Path) -> DbResult<()> {
        let sql = format!(
            "CREATE OR REPLACE TABLE {} AS SELECT * FROM read_csv_auto({}, header = true, all_varchar = true)",
            quote_ident(table),
            quote_literal(&path.display().to_string())
        );
        self.conn
            .execute_batch(&sql)
            .map_err(|e| DbError::LoadError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        log::debug!("Loaded {} into table {}", path.display(), table);
        Ok(())
    }

    /// Column names of a table in declaration order
    pub fn columns(&self, table: &str) -> DbResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT column_name FROM information_schema.columns \
             WHERE table_name = ? ORDER BY ordinal_position",
        )?;
        let rows = stmt.query_map(params![table], |row| row.get::<_, String>(0))?;
        let columns = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(columns)
    }

    /// Number of rows where `column` equals `value` exactly
    pub fn count_matches(&self, table: &str, column: &str, value: &str) -> DbResult<usize> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} WHERE {} = ?",
            quote_ident(table),
            quote_ident(column)
        );
        let count: i64 = self
            .conn
            .query_row(&sql, params![value], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Selected text columns of every row, in file order
    pub fn text_rows(&self, table: &str, columns: &[&str]) -> DbResult<Vec<Vec<Option<String>>>> {
        let select = columns
            .iter()
            .map(|c| quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "SELECT {} FROM {} ORDER BY rowid",
            select,
            quote_ident(table)
        );
        let width = columns.len();
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            (0..width)
                .map(|i| row.get::<_, Option<String>>(i))
                .collect::<Result<Vec<_>, _>>()
        })?;
        let values = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(values)
    }

    /// Write two-column rows to a CSV file with a header, sorted by the first column
    pub fn write_pairs(
        &self,
        path: &Path,
        header: (&str, &str),
        rows: &[(String, String)],
    ) -> DbResult<()> {
        let write_err = |message: String| DbError::WriteError {
            path: path.display().to_string(),
            message,
        };
        let (key, value) = (quote_ident(header.0), quote_ident(header.1));

        self.execute_batch(&format!(
            "CREATE OR REPLACE TEMP TABLE pairs_out ({key} VARCHAR, {value} VARCHAR)"
        ))?;
        for (k, v) in rows {
            self.conn
                .execute("INSERT INTO pairs_out VALUES (?, ?)", params![k, v])?;
        }

        let copy = format!(
            "COPY (SELECT {key}, {value} FROM pairs_out ORDER BY {key}) TO {} (HEADER, DELIMITER ',')",
            quote_literal(&path.display().to_string())
        );
        self.conn
            .execute_batch(&copy)
            .map_err(|e| write_err(e.to_string()))?;
        self.execute_batch("DROP TABLE pairs_out")
    }
}

/// Quote an identifier for DuckDB
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Quote a string literal for DuckDB
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
