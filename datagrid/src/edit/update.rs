//! Row update events.

use serde::Deserialize;
use serde::Serialize;

use crate::model::{Row, Value};

/// Kind of a grid rows-updated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateAction {
    /// A single cell was edited.
    CellUpdate,
    ColumnFill,
    CopyPaste,
    CellDrag,
}

/// A rows-updated event as raised by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowsUpdated {
    pub action: UpdateAction,
    /// The row before the edit.
    pub from_row: Row,
    /// The edited cells.
    pub updated: Row,
    /// Key of the edited cell.
    pub cell_key: String,
    /// Visible index of the edited row.
    pub to_row: usize,
}

/// An accepted single-cell update, forwarded to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowUpdate {
    pub row_index: usize,
    pub column_key: String,
    pub previous_row: Row,
    pub updated_value: Value,
}

impl RowsUpdated {
    /// Accept the event if it is a single-cell update that changes the cell.
    ///
    /// Other kinds and no-op edits are dropped. A number rewritten in another
    /// representation (`5` to `5.0`) is a no-op.
    pub fn accept(self) -> Option<RowUpdate> {
        if self.action != UpdateAction::CellUpdate {
            log::debug!("RowsUpdated: dropping {:?} event", self.action);
            return None;
        }
        let previous = self.from_row.get(&self.cell_key);
        let updated = self.updated.get(&self.cell_key);
        let unchanged = match (previous, updated) {
            (Some(a), Some(b)) => a.same_as(b),
            (a, b) => a == b,
        };
        if unchanged {
            log::trace!("RowsUpdated: dropping no-op update of '{}'", self.cell_key);
            return None;
        }
        let updated_value = updated.cloned().unwrap_or_default();
        Some(RowUpdate {
            row_index: self.to_row,
            column_key: self.cell_key,
            previous_row: self.from_row,
            updated_value,
        })
    }
}
