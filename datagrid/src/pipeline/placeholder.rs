//! Synthetic rows shown while the data source is loading.

use crate::column::Column;
use crate::model::{Row, Value};

/// Generate `count` synthetic rows for `columns`.
///
/// Cell `(i, j)` holds `i * (columns.len() + 1) + j`, so the same position
/// always produces the same value and the same placeholder width.
pub fn synthetic_rows(columns: &[Column], count: usize) -> Vec<Row> {
    let stride = columns.len() + 1;
    (0..count)
        .map(|i| {
            columns
                .iter()
                .enumerate()
                .map(|(j, c)| (c.key.clone(), Value::from(i * stride + j)))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_by_position() {
        let columns = vec![Column::new("a", "A"), Column::new("b", "B")];
        let rows = synthetic_rows(&columns, 3);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].get("a"), Some(&Value::Int(0)));
        assert_eq!(rows[0].get("b"), Some(&Value::Int(1)));
        assert_eq!(rows[2].get("a"), Some(&Value::Int(6)));
        assert_eq!(rows[2].get("b"), Some(&Value::Int(7)));
    }

    #[test]
    fn test_no_columns() {
        let rows = synthetic_rows(&[], 2);
        assert_eq!(rows, vec![Row::new(), Row::new()]);
    }
}
