//! Row construction and insertion
//!
//! Each post record is read, turned into a [`Row`](crate::types::Row)
//! aligned to the table schema and committed before the next one is
//! touched.

pub mod progress;
pub mod row;
pub mod writer;

pub use progress::Progress;
pub use row::make_row;
pub use writer::RowWriter;

use crate::discovery::{read_body, read_document};
use crate::error::Result;
use crate::schema::TableSchema;
use crate::types::PostRecord;
use rusqlite::Connection;
use std::io::Write;
use tracing::debug;

/// Load every record into the (already materialized) table.
///
/// Returns the number of rows committed.
pub fn load_records<W: Write>(
    conn: &mut Connection,
    schema: &TableSchema,
    records: &[PostRecord],
    mut progress: Progress<W>,
) -> Result<usize> {
    let mut writer = RowWriter::new(conn, schema)?;

    for record in records {
        let document = read_document(record.document_path())?;
        let body = read_body(record.body_path())?;

        let row = make_row(&document, &body, schema)?;
        writer.insert(&row)?;
        debug!(stem = %record.stem, "inserted post");

        progress.update(writer.written())?;
    }

    progress.finish()?;
    Ok(writer.written())
}
