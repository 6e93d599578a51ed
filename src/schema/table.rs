use crate::error::{Result, SqlizeError};
use crate::schema::ident::quote_identifier;
use crate::types::{KeySet, BODY_COLUMN, ID_COLUMN};
use rusqlite::Connection;
use tracing::debug;

/// Ordered column layout of a collection table:
/// `id`, then every other discovered key, then `article_text`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    table: String,
    columns: Vec<String>,
}

impl TableSchema {
    /// Derive the layout from a key set, keeping the key set's order
    pub fn from_keys(table: &str, keys: &KeySet) -> Result<Self> {
        if keys.contains(BODY_COLUMN) {
            return Err(SqlizeError::ReservedColumn(BODY_COLUMN.to_string()));
        }

        let mut columns = Vec::with_capacity(keys.len() + 2);
        columns.push(ID_COLUMN.to_string());
        columns.extend(keys.data_keys().map(str::to_string));
        columns.push(BODY_COLUMN.to_string());

        Ok(TableSchema {
            table: table.to_string(),
            columns,
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Columns between `id` and `article_text`
    pub fn data_columns(&self) -> &[String] {
        &self.columns[1..self.columns.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn drop_sql(&self) -> Result<String> {
        Ok(format!("DROP TABLE IF EXISTS {};", quote_identifier(&self.table)?))
    }

    pub fn create_sql(&self) -> Result<String> {
        let mut defs = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            let quoted = quote_identifier(column)?;
            if column == ID_COLUMN {
                defs.push(format!("{quoted} PRIMARY KEY"));
            } else {
                defs.push(quoted);
            }
        }
        Ok(format!(
            "CREATE TABLE IF NOT EXISTS {} ({});",
            quote_identifier(&self.table)?,
            defs.join(",")
        ))
    }

    pub fn insert_sql(&self) -> Result<String> {
        let names = self
            .columns
            .iter()
            .map(|c| quote_identifier(c))
            .collect::<Result<Vec<_>>>()?;
        let placeholders = vec!["?"; self.columns.len()].join(",");
        Ok(format!(
            "INSERT INTO {}({})VALUES({});",
            quote_identifier(&self.table)?,
            names.join(","),
            placeholders
        ))
    }
}

/// Drop the collection table and recreate it empty with the given layout
pub fn materialize(conn: &Connection, schema: &TableSchema) -> Result<()> {
    // Render everything first so a bad name fails before the drop
    let drop_sql = schema.drop_sql()?;
    let create_sql = schema.create_sql()?;

    debug!(sql = %drop_sql, "dropping table");
    conn.execute(&drop_sql, [])?;

    debug!(sql = %create_sql, "creating table");
    conn.execute(&create_sql, [])?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_columns(conn: &Connection, table: &str) -> Vec<String> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info({})", quote_identifier(table).unwrap()))
            .unwrap();
        stmt.query_map([], |row| row.get::<_, String>(1))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_empty_key_set_gives_two_columns() {
        let schema = TableSchema::from_keys("rust", &KeySet::new()).unwrap();
        assert_eq!(schema.columns(), &["id", "article_text"]);
        assert!(schema.data_columns().is_empty());
    }

    #[test]
    fn test_id_moves_to_front() {
        let keys: KeySet = ["title", "id", "score"].into_iter().collect();
        let schema = TableSchema::from_keys("rust", &keys).unwrap();
        assert_eq!(schema.columns(), &["id", "title", "score", "article_text"]);
        assert_eq!(schema.data_columns(), &["title", "score"]);
    }

    #[test]
    fn test_body_key_is_reserved() {
        let keys: KeySet = ["id", "article_text"].into_iter().collect();
        let err = TableSchema::from_keys("rust", &keys).unwrap_err();
        assert!(matches!(err, SqlizeError::ReservedColumn(_)));
    }

    #[test]
    fn test_rendered_statements() {
        let keys: KeySet = ["id", "title"].into_iter().collect();
        let schema = TableSchema::from_keys("rust", &keys).unwrap();

        assert_eq!(schema.drop_sql().unwrap(), r#"DROP TABLE IF EXISTS "rust";"#);
        assert_eq!(
            schema.create_sql().unwrap(),
            r#"CREATE TABLE IF NOT EXISTS "rust" ("id" PRIMARY KEY,"title","article_text");"#
        );
        assert_eq!(
            schema.insert_sql().unwrap(),
            r#"INSERT INTO "rust"("id","title","article_text")VALUES(?,?,?);"#
        );
    }

    #[test]
    fn test_materialize_replaces_existing_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(r#"CREATE TABLE "rust" (old); INSERT INTO "rust" VALUES (1);"#)
            .unwrap();

        let keys: KeySet = ["id", "select", "link flair"].into_iter().collect();
        let schema = TableSchema::from_keys("rust", &keys).unwrap();
        materialize(&conn, &schema).unwrap();

        assert_eq!(
            table_columns(&conn, "rust"),
            vec!["id", "select", "link flair", "article_text"]
        );
        let count: i64 = conn
            .query_row(r#"SELECT COUNT(*) FROM "rust""#, [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_invalid_table_name_fails_before_drop() {
        let conn = Connection::open_in_memory().unwrap();
        let schema = TableSchema::from_keys("", &KeySet::new()).unwrap();
        let err = materialize(&conn, &schema).unwrap_err();
        assert!(matches!(err, SqlizeError::InvalidIdentifier(_)));
    }
}
