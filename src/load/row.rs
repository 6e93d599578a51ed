use crate::error::{Result, SqlizeError};
use crate::schema::TableSchema;
use crate::types::{Row, ID_COLUMN};
use rusqlite::types::Value as SqlValue;
use serde_json::{Map, Value};

/// Build the row for one post, aligned to `schema`.
///
/// The id is copied as-is. Every other column keeps the document's value
/// only when it is a truthy scalar; falsy scalars, containers and absent
/// keys all become NULL. An empty body becomes NULL too.
pub fn make_row(document: &Map<String, Value>, body: &str, schema: &TableSchema) -> Result<Row> {
    let mut values = Vec::with_capacity(schema.len());

    values.push(id_value(document.get(ID_COLUMN))?);
    for column in schema.data_columns() {
        values.push(truthy_scalar(document.get(column)));
    }
    values.push(if body.is_empty() {
        SqlValue::Null
    } else {
        SqlValue::Text(body.to_string())
    });

    debug_assert_eq!(values.len(), schema.len());
    Ok(Row::new(values))
}

fn id_value(value: Option<&Value>) -> Result<SqlValue> {
    match value {
        None | Some(Value::Null) => Ok(SqlValue::Null),
        Some(Value::String(s)) => Ok(SqlValue::Text(s.clone())),
        Some(Value::Bool(b)) => Ok(SqlValue::Integer(i64::from(*b))),
        Some(Value::Number(n)) => Ok(number_value(n)),
        Some(Value::Array(_)) => Err(SqlizeError::UnsupportedIdentifier("an array".into())),
        Some(Value::Object(_)) => Err(SqlizeError::UnsupportedIdentifier("an object".into())),
    }
}

fn truthy_scalar(value: Option<&Value>) -> SqlValue {
    match value {
        Some(Value::String(s)) if !s.is_empty() => SqlValue::Text(s.clone()),
        Some(Value::Bool(true)) => SqlValue::Integer(1),
        Some(Value::Number(n)) => match number_value(n) {
            SqlValue::Integer(0) => SqlValue::Null,
            SqlValue::Real(f) if f == 0.0 => SqlValue::Null,
            other => other,
        },
        _ => SqlValue::Null,
    }
}

// Integers outside i64 range fall back to REAL
fn number_value(n: &serde_json::Number) -> SqlValue {
    match n.as_i64() {
        Some(i) => SqlValue::Integer(i),
        None => SqlValue::Real(n.as_f64().unwrap_or(f64::NAN)),
    }
}
