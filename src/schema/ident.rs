//! Identifier quoting for table and column names

use crate::error::{Result, SqlizeError};
use once_cell::sync::Lazy;
use regex::Regex;

static CONTROL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\x00-\x1f\x7f]").unwrap());

/// Quote a name so it can be spliced into SQL text as an identifier.
///
/// The name is always wrapped in double quotes with embedded quotes
/// doubled, which also makes reserved words usable as column names.
/// Empty names and names with control characters are rejected.
pub fn quote_identifier(name: &str) -> Result<String> {
    if name.is_empty() || CONTROL_CHARS.is_match(name) {
        return Err(SqlizeError::InvalidIdentifier(name.to_string()));
    }
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}
