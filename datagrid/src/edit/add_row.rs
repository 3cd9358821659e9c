//! Add-row dialog state.

use crate::column::Column;
use crate::model::{Row, Value};

/// Visibility of the add-row dialog. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddRowDialog {
    visible: bool,
}

impl AddRowDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The toolbar's add button was pressed.
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Confirm the dialog, handing back the new row for the add handler.
    pub fn confirm(&mut self, row: Row) -> Row {
        self.visible = false;
        row
    }

    /// Close without adding.
    pub fn cancel(&mut self) {
        self.visible = false;
    }
}

/// What the add-row dialog is rendered with.
#[derive(Debug, Clone)]
pub struct AddRowContext<'a> {
    pub title: Option<&'a str>,
    /// Columns after base meta, help headers, and widths are applied.
    pub columns: &'a [Column],
    /// The filtered rows currently shown.
    pub rows: &'a [Row],
}

impl AddRowContext<'_> {
    /// Returns `true` if a shown row already holds `value` under `key`.
    pub fn is_duplicate(&self, key: &str, value: &Value) -> bool {
        self.rows.iter().any(|row| row.get(key) == Some(value))
    }

    /// Distinct values of a column among the shown rows, in first-seen order.
    pub fn pick_list(&self, key: &str) -> Vec<&Value> {
        let mut values: Vec<&Value> = Vec::new();
        for value in self.rows.iter().filter_map(|row| row.get(key)) {
            if !value.is_null() && !values.contains(&value) {
                values.push(value);
            }
        }
        values
    }
}
