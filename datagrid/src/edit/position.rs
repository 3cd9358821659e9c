//! Editor position tracking.

use serde::Deserialize;
use serde::Serialize;

/// A cell position in the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditorPosition {
    pub row_index: usize,
    pub column_index: usize,
}

impl EditorPosition {
    pub fn new(row_index: usize, column_index: usize) -> Self {
        Self {
            row_index,
            column_index,
        }
    }
}

/// Tracks the open cell editor and the last cell opened for editing.
///
/// Selecting a cell opens its editor. A re-render caused by a row update
/// closes the editor in the renderer; the click that follows on the same
/// cell reopens it.
#[derive(Debug, Clone, Default)]
pub struct EditCoordinator {
    open: Option<EditorPosition>,
    last_edited: Option<EditorPosition>,
}

impl EditCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cell was selected: open its editor and remember it.
    pub fn cell_selected(&mut self, position: EditorPosition) -> EditorPosition {
        self.open = Some(position);
        self.last_edited = Some(position);
        position
    }

    /// A row was clicked, optionally on a cell.
    ///
    /// Returns the position to reopen when the click lands on the last edited cell.
    pub fn row_clicked(&mut self, row_index: usize, column_index: Option<usize>) -> Option<EditorPosition> {
        let column_index = column_index?;
        let clicked = EditorPosition::new(row_index, column_index);
        if self.last_edited != Some(clicked) {
            return None;
        }
        log::debug!(
            "EditCoordinator: reopening editor at ({}, {})",
            row_index,
            column_index
        );
        self.open = Some(clicked);
        Some(clicked)
    }

    /// The renderer closed the editor. The last edited position is kept.
    pub fn editor_closed(&mut self) {
        self.open = None;
    }

    /// Currently open editor, if any.
    pub fn open_editor(&self) -> Option<EditorPosition> {
        self.open
    }

    /// Last cell opened for editing.
    pub fn last_edited(&self) -> Option<EditorPosition> {
        self.last_edited
    }
}
