//! Key discovery - find a collection's post records and union their keys

use crate::error::{Result, SqlizeError};
use crate::types::{KeyOrder, KeySet, PostRecord};
use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// List every `*.json` document in `dir`, paired with its `.txt` body.
///
/// Records come back in filename order. A missing directory is treated as
/// an empty collection.
pub fn list_records(dir: &Path) -> Result<Vec<PostRecord>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(dir = %dir.display(), "collection directory does not exist");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(SqlizeError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SqlizeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            records.push(PostRecord::from_document_path(path));
        }
    }

    records.sort_by(|a, b| a.document_path.cmp(&b.document_path));
    Ok(records)
}

/// Parse a post document; the top level has to be an object
pub fn read_document(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read(path).map_err(|source| SqlizeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match parse_json(content).map_err(|source| SqlizeError::Parse {
        path: path.to_path_buf(),
        source,
    })? {
        Value::Object(map) => Ok(map),
        _ => Err(SqlizeError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Read a post's text body. A missing body file is an error.
pub fn read_body(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| SqlizeError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// SIMD parse first, serde_json when that fails so the error is precise.
fn parse_json(content: Vec<u8>) -> std::result::Result<Value, serde_json::Error> {
    let mut scratch = content.clone();
    match simd_json::serde::from_slice::<Value>(&mut scratch) {
        Ok(value) => Ok(value),
        Err(_) => serde_json::from_slice(&content),
    }
}

/// Union the top-level keys of every record's document.
///
/// Any unreadable or malformed document aborts the whole pass.
pub fn discover_keys(records: &[PostRecord], order: KeyOrder) -> Result<KeySet> {
    let mut keys = KeySet::new();

    for record in records {
        let document = read_document(record.document_path())?;
        let before = keys.len();
        for key in document.keys() {
            keys.insert(key.as_str());
        }
        debug!(
            file = %record.document_path().display(),
            new_keys = keys.len() - before,
            "scanned document"
        );
    }

    if order == KeyOrder::Sorted {
        keys.sort();
    }

    Ok(keys)
}
