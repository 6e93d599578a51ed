use indexmap::IndexSet;
use rusqlite::types::Value as SqlValue;
use std::path::{Path, PathBuf};

/// Name of the column that always comes first and identifies the post
pub const ID_COLUMN: &str = "id";

/// Name of the column that always comes last and holds the text body
pub const BODY_COLUMN: &str = "article_text";

/// One scraped post on disk: `{stem}.json` plus `{stem}.txt`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    pub stem: String,
    pub document_path: PathBuf,
    pub body_path: PathBuf,
}

impl PostRecord {
    /// Build the record for a document file, pairing it with the `.txt`
    /// sibling that shares its stem. The body file is not checked here.
    pub fn from_document_path(document_path: impl Into<PathBuf>) -> Self {
        let document_path = document_path.into();
        let stem = document_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let body_path = document_path.with_extension("txt");

        PostRecord {
            stem,
            document_path,
            body_path,
        }
    }

    pub fn document_path(&self) -> &Path {
        &self.document_path
    }

    pub fn body_path(&self) -> &Path {
        &self.body_path
    }
}

/// Ordered, deduplicated set of top-level keys seen across a collection.
///
/// The order is the order columns are laid out in, so the same value has
/// to be handed to schema creation, row construction and insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: IndexSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        KeySet::default()
    }

    /// Add a key; returns false if it was already present
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.keys.insert(key.into())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Reorder keys lexically
    pub fn sort(&mut self) {
        self.keys.sort();
    }

    /// Keys that become the middle columns, i.e. everything except `id`
    pub fn data_keys(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|k| *k != ID_COLUMN)
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// Values for one post, positionally aligned to a table schema
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<SqlValue>,
}

impl Row {
    pub fn new(values: Vec<SqlValue>) -> Self {
        Row { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    pub fn into_values(self) -> Vec<SqlValue> {
        self.values
    }
}

/// How the middle columns are ordered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum KeyOrder {
    /// First-seen order over documents visited in filename order
    #[default]
    Discovery,
    /// Lexical order
    Sorted,
}

/// Configuration for a load run
#[derive(Debug, Clone)]
pub struct SqlizeConfig {
    /// Directory holding one sub-directory per collection
    pub data_root: PathBuf,

    /// Ordering strategy for the discovered keys
    pub key_order: KeyOrder,

    /// Whether to print the `Posts SQLized` status line
    pub progress: bool,
}

impl SqlizeConfig {
    /// Directory the given collection's files are read from
    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.data_root.join(collection)
    }
}

impl Default for SqlizeConfig {
    fn default() -> Self {
        SqlizeConfig {
            data_root: PathBuf::from("../data/raw"),
            key_order: KeyOrder::Discovery,
            progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_record_pairs_txt_sibling() {
        let record = PostRecord::from_document_path("raw/rust/abc123.json");
        assert_eq!(record.stem, "abc123");
        assert_eq!(record.body_path(), Path::new("raw/rust/abc123.txt"));
    }

    #[test]
    fn test_key_set_keeps_first_seen_order() {
        let keys: KeySet = ["title", "id", "score", "title"].into_iter().collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["title", "id", "score"]);
        assert_eq!(keys.data_keys().collect::<Vec<_>>(), vec!["title", "score"]);
    }

    #[test]
    fn test_key_set_sort() {
        let mut keys: KeySet = ["url", "author", "id"].into_iter().collect();
        keys.sort();
        assert_eq!(keys.iter().collect::<Vec<_>>(), vec!["author", "id", "url"]);
    }

    #[test]
    fn test_default_config_layout() {
        let config = SqlizeConfig::default();
        assert_eq!(config.collection_dir("rust"), PathBuf::from("../data/raw/rust"));
        assert_eq!(config.key_order, KeyOrder::Discovery);
    }
}
