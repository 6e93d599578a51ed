//! # sqlize - load scraped posts into SQLite
//!
//! Turns a directory of scraped posts, stored as `{stem}.json` documents
//! with a `{stem}.txt` body next to each, into one flat SQLite table.
//!
//! ## Pipeline
//!
//! 1. **discovery**: union the top-level keys of every document
//! 2. **schema**: lay out `id`, the discovered keys and `article_text`,
//!    then drop and recreate the table
//! 3. **load**: build one row per post and commit it
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sqlize::{sqlize_with_config, SqlizeConfig};
//!
//! # fn main() -> Result<(), sqlize::SqlizeError> {
//! let config = SqlizeConfig {
//!     data_root: "data/raw".into(),
//!     ..SqlizeConfig::default()
//! };
//!
//! // reads data/raw/rust/*.json and fills the `rust` table
//! let summary = sqlize_with_config("reddit.db", "rust", &config)?;
//! println!("{} rows in {} columns", summary.rows, summary.columns.len());
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use std::path::Path;
use tracing::info;

pub mod db;
pub mod discovery;
pub mod error;
pub mod load;
pub mod schema;
pub mod types;

// Re-export commonly used types for convenience
pub use db::open_connection;
pub use discovery::{discover_keys, list_records};
pub use error::{Result, SqlizeError};
pub use load::{load_records, make_row, Progress, RowWriter};
pub use schema::{materialize, quote_identifier, TableSchema};
pub use types::{KeyOrder, KeySet, PostRecord, Row, SqlizeConfig};

/// What a load run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub table: String,
    pub columns: Vec<String>,
    pub rows: usize,
}

/// Main entry point: load `collection` from the default data root into
/// the database at `db_path`
pub fn sqlize(db_path: impl AsRef<Path>, collection: &str) -> Result<LoadSummary> {
    sqlize_with_config(db_path, collection, &SqlizeConfig::default())
}

/// Discover keys, recreate the collection table and load every post.
///
/// The table is dropped first, so prior contents are lost. Rows are
/// committed one by one; on error the rows already written stay.
pub fn sqlize_with_config(
    db_path: impl AsRef<Path>,
    collection: &str,
    config: &SqlizeConfig,
) -> Result<LoadSummary> {
    let mut conn = open_connection(db_path)?;

    let dir = config.collection_dir(collection);
    let records = list_records(&dir)?;
    let keys = discover_keys(&records, config.key_order)?;

    let schema = TableSchema::from_keys(collection, &keys)?;
    materialize(&conn, &schema)?;
    info!(
        collection,
        files = records.len(),
        columns = schema.len(),
        "table recreated"
    );

    let rows = if config.progress {
        let stdout = std::io::stdout();
        load_records(&mut conn, &schema, &records, Progress::new(stdout.lock(), records.len()))?
    } else {
        load_records(
            &mut conn,
            &schema,
            &records,
            Progress::<std::io::Stdout>::hidden(records.len()),
        )?
    };
    info!(collection, rows, "load finished");

    Ok(LoadSummary {
        table: schema.table().to_string(),
        columns: schema.columns().to_vec(),
        rows,
    })
}
