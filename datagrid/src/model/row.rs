//! Rendered row record

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::Value;
use crate::error::RowShapeError;

/// A row as the grid renders it: a mapping from column key to cell value.
///
/// Rows are owned by the caller and handed to the grid on every render.
/// Keys are kept ordered so iteration and serialization are deterministic.
///
/// # Example
///
/// ```
/// use datagrid::model::{Row, Value};
///
/// let row = Row::new().set("name", "Ada").set("age", 36);
/// assert_eq!(row.get("name"), Some(&Value::from("Ada")));
/// assert_eq!(row.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    cells: BTreeMap<String, Value>,
}

impl Row {
    /// Creates a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a cell, builder style.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    /// Sets a cell in place, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.cells.insert(key.into(), value.into())
    }

    /// Returns a reference to the cell value, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.cells.get(key)
    }

    /// Returns `true` if the row has a cell for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.cells.contains_key(key)
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates cells in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Converts any serializable record into a row.
    ///
    /// The record must serialize to an object whose fields are all scalars.
    pub fn from_serialize<S: Serialize + ?Sized>(record: &S) -> Result<Self, RowShapeError> {
        let json = serde_json::to_value(record)?;
        let serde_json::Value::Object(map) = json else {
            return Err(RowShapeError::NotAnObject {
                actual: json_type_name(&json),
            });
        };

        let mut row = Row::new();
        for (key, value) in &map {
            let cell = Value::from_json(value)
                .ok_or_else(|| RowShapeError::non_scalar(key.as_str(), json_type_name(value)))?;
            row.cells.insert(key.clone(), cell);
        }
        Ok(row)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
