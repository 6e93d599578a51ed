use crate::error::{Result, SqlizeError};
use crate::schema::TableSchema;
use crate::types::Row;
use rusqlite::{params_from_iter, Connection};

/// Inserts rows into a collection table, one committed transaction per row
pub struct RowWriter<'conn> {
    conn: &'conn mut Connection,
    insert_sql: String,
    columns: usize,
    written: usize,
}

impl<'conn> RowWriter<'conn> {
    /// Render the insert statement for `schema` once up front
    pub fn new(conn: &'conn mut Connection, schema: &TableSchema) -> Result<Self> {
        Ok(RowWriter {
            conn,
            insert_sql: schema.insert_sql()?,
            columns: schema.len(),
            written: 0,
        })
    }

    /// Insert and commit a single row
    pub fn insert(&mut self, row: &Row) -> Result<()> {
        if row.len() != self.columns {
            return Err(SqlizeError::RowLength {
                expected: self.columns,
                actual: row.len(),
            });
        }

        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare_cached(&self.insert_sql)?;
            stmt.execute(params_from_iter(row.values().iter()))?;
        }
        tx.commit()?;

        self.written += 1;
        Ok(())
    }

    /// Rows committed so far
    pub fn written(&self) -> usize {
        self.written
    }
}
