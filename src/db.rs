use crate::error::{Result, SqlizeError};
use rusqlite::Connection;
use std::path::Path;

/// Open (or create) the SQLite database at `path`
pub fn open_connection(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();
    Connection::open(path).map_err(|source| SqlizeError::Connect {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.db");
        let conn = open_connection(&path).unwrap();
        conn.execute_batch("CREATE TABLE t (x);").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_connection(dir.path().join("no/such/dir/posts.db")).unwrap_err();
        assert!(matches!(err, SqlizeError::Connect { .. }));
    }
}
