//! DataGrid state.

use crate::column::{Column, ColumnMeta, ColumnWidths};
use crate::config::GridConfig;
use crate::edit::{AddRowDialog, EditCoordinator, EditorPosition};
use crate::error::ConfigError;
use crate::model::Row;
use crate::pipeline::{FilterState, RowFilter, SortState, TermFilter};
use crate::toolbar::{Toolbar, ViewMode};

/// An interactive grid engine instance.
///
/// Holds the state that lives for the mounted lifetime of one grid. Nothing
/// here expires on its own; state changes only through user events.
pub struct DataGrid {
    pub(super) config: GridConfig,
    pub(super) columns: Vec<Column>,
    pub(super) base_meta: ColumnMeta,
    pub(super) widths: ColumnWidths,
    pub(super) filter: Box<dyn RowFilter>,
    pub(super) sort: SortState,
    pub(super) filters: FilterState,
    pub(super) editor: EditCoordinator,
    pub(super) toolbar: Toolbar,
    pub(super) add_row: AddRowDialog,
    /// Loading flag of the last render.
    pub(super) is_loading: bool,
    /// Rows produced by the last render.
    pub(super) visible_rows: Vec<Row>,
    /// Merged column metadata of the last render.
    pub(super) merged_columns: Vec<Column>,
}

impl DataGrid {
    /// Create a grid with default configuration.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            config: GridConfig::default(),
            columns,
            base_meta: ColumnMeta::default(),
            widths: ColumnWidths::default(),
            filter: Box::new(TermFilter),
            sort: SortState::default(),
            filters: FilterState::default(),
            editor: EditCoordinator::default(),
            toolbar: Toolbar::default(),
            add_row: AddRowDialog::default(),
            is_loading: false,
            visible_rows: Vec::new(),
            merged_columns: Vec::new(),
        }
    }

    /// Create a grid with a validated configuration.
    pub fn with_config(columns: Vec<Column>, config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(columns)
        })
    }

    /// Set defaults applied to every column.
    pub fn with_base_meta(mut self, base_meta: ColumnMeta) -> Self {
        self.base_meta = base_meta;
        self
    }

    /// Set responsive column widths.
    pub fn with_column_widths(mut self, widths: ColumnWidths) -> Self {
        self.widths = widths;
        self
    }

    /// Replace the filtering collaborator.
    pub fn with_filter(mut self, filter: impl RowFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    /// Replace the column sequence.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view_mode(&self) -> ViewMode {
        self.toolbar.view_mode()
    }

    pub fn filters_visible(&self) -> bool {
        self.toolbar.filters_visible()
    }

    /// Currently open cell editor.
    pub fn open_editor(&self) -> Option<EditorPosition> {
        self.editor.open_editor()
    }

    pub fn add_row_visible(&self) -> bool {
        self.add_row.is_visible()
    }

    /// Rows produced by the last render.
    pub fn visible_rows(&self) -> &[Row] {
        &self.visible_rows
    }
}

impl std::fmt::Debug for DataGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataGrid")
            .field("columns", &self.columns.len())
            .field("sort", &self.sort)
            .field("filters", &self.filters)
            .field("editor", &self.editor)
            .field("toolbar", &self.toolbar)
            .field("add_row", &self.add_row)
            .field("is_loading", &self.is_loading)
            .field("visible_rows", &self.visible_rows.len())
            .finish()
    }
}
