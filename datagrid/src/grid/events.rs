//! Event handling for the DataGrid.

use crate::edit::{CellAction, EditorPosition, RowsUpdated, cell_actions};
use crate::model::Row;
use crate::pipeline::{ColumnFilter, SortDirection, SortState};
use crate::toolbar::{ViewMode, ViewportController};

use super::host::GridHost;
use super::state::DataGrid;

impl DataGrid {
    // -------------------------------------------------------------------------
    // Editing
    // -------------------------------------------------------------------------

    /// A cell was selected: open its editor.
    pub fn on_cell_selected(&mut self, position: EditorPosition) -> EditorPosition {
        self.editor.cell_selected(position)
    }

    /// A row was clicked. Returns the editor to reopen, if the click landed
    /// on the last edited cell.
    pub fn on_row_click(&mut self, row_index: usize, column_index: Option<usize>) -> Option<EditorPosition> {
        self.editor.row_clicked(row_index, column_index)
    }

    /// The renderer closed the cell editor.
    pub fn on_editor_closed(&mut self) {
        self.editor.editor_closed();
    }

    /// The renderer reported edited rows. Accepted updates go to the host.
    ///
    /// Returns `true` if the host was called.
    pub fn on_grid_rows_updated(&mut self, event: RowsUpdated, host: &mut dyn GridHost) -> bool {
        match event.accept() {
            Some(update) => {
                log::debug!(
                    "DataGrid: row {} '{}' updated",
                    update.row_index,
                    update.column_key
                );
                host.on_row_update(update);
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Sorting and filtering
    // -------------------------------------------------------------------------

    /// A column header requested a sort.
    pub fn on_grid_sort(&mut self, sort_column: usize, sort_direction: SortDirection) {
        log::debug!("DataGrid: sort column {} {:?}", sort_column, sort_direction);
        self.sort = SortState::new(sort_column, sort_direction);
    }

    /// A header filter changed. An empty term removes the column's filter.
    pub fn on_add_filter(&mut self, filter: ColumnFilter) {
        log::debug!("DataGrid: filter '{}' = {:?}", filter.column_key, filter.term);
        self.filters.apply(filter);
    }

    /// Remove every filter.
    pub fn on_clear_filters(&mut self) {
        log::debug!("DataGrid: clearing {} filters", self.filters.len());
        self.filters.clear();
    }

    // -------------------------------------------------------------------------
    // Cell actions
    // -------------------------------------------------------------------------

    /// Actions offered on the cell of `row` in column `column_index`.
    pub fn cell_actions(&self, column_index: usize, row: &Row, host: &dyn GridHost) -> Vec<CellAction> {
        cell_actions(column_index, self.columns.len(), row, host)
    }

    /// Invoke a cell action on `row`.
    pub fn invoke_cell_action(&mut self, action: &CellAction, row: &Row, host: &mut dyn GridHost) {
        log::debug!("DataGrid: invoking {:?}", action);
        action.invoke(row, host);
    }

    // -------------------------------------------------------------------------
    // Add-row dialog
    // -------------------------------------------------------------------------

    /// The toolbar's add button was pressed.
    pub fn open_add_row(&mut self) {
        self.add_row.open();
    }

    /// The dialog was confirmed: close it and hand `row` to the host.
    pub fn confirm_add_row(&mut self, row: Row, host: &mut dyn GridHost) {
        let row = self.add_row.confirm(row);
        host.on_row_add(row);
    }

    /// The dialog was dismissed.
    pub fn cancel_add_row(&mut self) {
        self.add_row.cancel();
    }

    // -------------------------------------------------------------------------
    // Toolbar
    // -------------------------------------------------------------------------

    /// Change row density. The viewport refresh runs at the next
    /// [`render_committed`](Self::render_committed).
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.toolbar.set_view_mode(mode);
    }

    /// Toggle the filter row. Disabled while the last render was loading.
    pub fn toggle_filters(&mut self) -> bool {
        self.toolbar.toggle_filters(self.is_loading)
    }

    /// The host finished committing a render pass.
    ///
    /// Runs at most one pending viewport refresh. Returns `true` if it ran.
    pub fn render_committed(&mut self, viewport: Option<&mut dyn ViewportController>) -> bool {
        self.toolbar.render_committed(viewport)
    }
}
