//! Single-column row sorting.

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

use crate::model::{Row, Value, cmp_int_float};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    Desc,
    /// Rows keep the order they arrived in.
    #[default]
    None,
}

/// The active sort: one column, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    /// Index of the sorted column in the column sequence.
    pub sort_column: usize,
    pub sort_direction: SortDirection,
}

impl SortState {
    pub fn new(sort_column: usize, sort_direction: SortDirection) -> Self {
        Self {
            sort_column,
            sort_direction,
        }
    }

    /// Returns `true` if rows are reordered by this state.
    pub fn is_active(&self) -> bool {
        self.sort_direction != SortDirection::None
    }
}

/// Comparable projection of a cell. Variant order is the cross-type rank.
#[derive(Debug)]
enum SortKey {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl SortKey {
    fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => SortKey::Null,
            Some(Value::Bool(b)) => SortKey::Bool(*b),
            Some(Value::Int(i)) => SortKey::Int(*i),
            // -0.0 and 0.0 must both equal Int(0).
            Some(Value::Float(f)) if *f == 0.0 => SortKey::Float(0.0),
            Some(Value::Float(f)) => SortKey::Float(*f),
            Some(Value::Text(s)) => SortKey::Text(s.trim().to_lowercase()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Null => 0,
            SortKey::Bool(_) => 1,
            SortKey::Int(_) | SortKey::Float(_) => 2,
            SortKey::Text(_) => 3,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Int(a), SortKey::Float(b)) => cmp_int_float(*a, *b),
            (SortKey::Float(a), SortKey::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Sort rows by the cell under `key`.
///
/// Text compares case-insensitively after trimming; numbers compare
/// numerically. Equal keys keep their input order. `SortDirection::None`
/// returns the rows in their original order. The input is never mutated.
pub fn sort_rows(rows: &[Row], key: &str, direction: SortDirection) -> Vec<Row> {
    if direction == SortDirection::None {
        return rows.to_vec();
    }

    let mut keyed: Vec<(SortKey, &Row)> = rows.iter().map(|r| (SortKey::of(r.get(key)), r)).collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ord = a.compare(b);
        match direction {
            SortDirection::Desc => ord.reverse(),
            _ => ord,
        }
    });
    keyed.into_iter().map(|(_, r)| r.clone()).collect()
}
