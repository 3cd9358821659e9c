//! Raw record to rendered row transforms

use serde::Serialize;

use super::Row;

/// A pure, total mapping from the data source's raw record `R` to a [`Row`].
///
/// Any `Fn(&R) -> Row` closure is a transform.
pub trait RowTransform<R> {
    /// Transform one raw record. Must not have side effects.
    fn transform(&self, raw: &R) -> Row;
}

impl<R, F> RowTransform<R> for F
where
    F: Fn(&R) -> Row,
{
    fn transform(&self, raw: &R) -> Row {
        self(raw)
    }
}

/// Transform for data that already arrives as [`Row`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl RowTransform<Row> for Identity {
    fn transform(&self, raw: &Row) -> Row {
        raw.clone()
    }
}

/// Transform for any serializable record, via [`Row::from_serialize`].
///
/// Records with an invalid shape become an empty row, so every cell of that
/// row formats as an empty string.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeTransform;

impl<R: Serialize> RowTransform<R> for SerdeTransform {
    fn transform(&self, raw: &R) -> Row {
        match Row::from_serialize(raw) {
            Ok(row) => row,
            Err(e) => {
                log::warn!("SerdeTransform: substituting empty row: {}", e);
                Row::new()
            }
        }
    }
}
