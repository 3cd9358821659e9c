//! Per-cell actions.

use serde::Deserialize;
use serde::Serialize;

use crate::grid::GridHost;
use crate::model::Row;

/// A host-defined row action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAction {
    /// Identifier passed back to [`GridHost::on_row_action`].
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl RowAction {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// An action offered on a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellAction {
    /// Delete the row.
    DeleteRow,
    Custom(RowAction),
}

impl CellAction {
    pub fn label(&self) -> &str {
        match self {
            CellAction::DeleteRow => "Delete",
            CellAction::Custom(action) => &action.label,
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            CellAction::DeleteRow => Some("times-circle"),
            CellAction::Custom(action) => action.icon.as_deref(),
        }
    }

    /// Run the action against `row`.
    pub fn invoke(&self, row: &Row, host: &mut dyn GridHost) {
        match self {
            CellAction::DeleteRow => host.on_row_delete(row),
            CellAction::Custom(action) => host.on_row_action(&action.id, row),
        }
    }
}

/// Actions for the cell of `row` in column `column_index`.
///
/// Only the last column carries actions: delete first when the host allows
/// it, then the host's custom actions.
pub fn cell_actions(column_index: usize, column_count: usize, row: &Row, host: &dyn GridHost) -> Vec<CellAction> {
    if column_count == 0 || column_index != column_count - 1 {
        return Vec::new();
    }
    let mut actions = Vec::new();
    if host.can_delete_row(row) {
        actions.push(CellAction::DeleteRow);
    }
    actions.extend(host.row_actions(row).into_iter().map(CellAction::Custom));
    actions
}
