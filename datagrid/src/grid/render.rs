//! Render pass for the DataGrid.

use crate::column::{CellContent, FormatterProps, RenderColumn, merge_columns, resolve_columns};
use crate::edit::{AddRowContext, EditorPosition};
use crate::model::{Row, RowTransform};
use crate::pipeline::RowPipeline;
use crate::toolbar::ViewMode;

use super::state::DataGrid;

/// Per-render inputs decided outside the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderInput<'a> {
    /// The data source is still loading.
    pub is_loading: bool,
    /// Active breakpoint, from the current viewport size.
    pub active_breakpoint: Option<&'a str>,
}

impl<'a> RenderInput<'a> {
    /// Data is loaded and no breakpoint is active.
    pub fn ready() -> Self {
        Self::default()
    }

    /// Data is still loading.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            active_breakpoint: None,
        }
    }

    pub fn breakpoint(mut self, breakpoint: &'a str) -> Self {
        self.active_breakpoint = Some(breakpoint);
        self
    }
}

/// Everything the host renderer needs for one pass.
#[derive(Debug, Clone)]
pub struct GridView {
    pub columns: Vec<RenderColumn>,
    pub rows: Vec<Row>,
    pub editor: Option<EditorPosition>,
    pub view_mode: ViewMode,
    pub row_height: u16,
    pub header_row_height: u16,
    pub header_filters_height: u16,
    pub filters_visible: bool,
    /// Set when there is nothing to show and data is not loading.
    pub empty_label: Option<String>,
    pub add_row_button: bool,
    pub view_mode_button: bool,
    pub is_loading: bool,
}

impl GridView {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Format the cell at `(row_index, column_index)`.
    pub fn cell(&self, row_index: usize, column_index: usize) -> Option<CellContent> {
        let row = self.rows.get(row_index)?;
        let column = self.columns.get(column_index)?;
        Some(column.format(&FormatterProps {
            value: row.get(&column.key),
            row,
            row_index,
        }))
    }

    /// Stripe class for a row.
    pub fn row_class(row_index: usize) -> &'static str {
        if row_index % 2 == 1 { "row-even" } else { "row-odd" }
    }
}

impl DataGrid {
    /// Run one render pass over the caller's rows.
    ///
    /// Each raw row goes through `transform`, then the sort/filter pipeline.
    /// While loading the raw rows are ignored and placeholder rows are shown.
    pub fn render<R>(
        &mut self,
        rows: &[R],
        transform: &impl RowTransform<R>,
        input: RenderInput<'_>,
    ) -> GridView {
        self.is_loading = input.is_loading;

        let transformed: Vec<Row> = if input.is_loading {
            Vec::new()
        } else {
            rows.iter().map(|raw| transform.transform(raw)).collect()
        };

        let pipeline = RowPipeline {
            columns: &self.columns,
            sort: &self.sort,
            filters: &self.filters,
            filter: self.filter.as_ref(),
            is_loading: input.is_loading,
            loading_row_count: self.config.loading_row_count,
        };
        self.visible_rows = pipeline.compute_visible_rows(&transformed);

        self.merged_columns = merge_columns(
            &self.columns,
            &self.base_meta,
            &self.widths,
            input.active_breakpoint,
        );
        let columns = resolve_columns(
            &self.columns,
            &self.base_meta,
            &self.widths,
            input.active_breakpoint,
            input.is_loading,
            &self.config.placeholder,
        );

        log::trace!(
            "DataGrid: rendered {} rows, {} columns (loading: {})",
            self.visible_rows.len(),
            columns.len(),
            input.is_loading
        );

        let empty_label = (!input.is_loading && self.visible_rows.is_empty())
            .then(|| self.config.empty_label.clone());

        GridView {
            columns,
            rows: self.visible_rows.clone(),
            editor: self.editor.open_editor(),
            view_mode: self.toolbar.view_mode(),
            row_height: self.toolbar.row_height(),
            header_row_height: self.config.header_row_height,
            header_filters_height: self.config.header_filters_height,
            filters_visible: self.toolbar.filters_visible(),
            empty_label,
            add_row_button: self.config.add_row_button,
            view_mode_button: self.config.view_mode_button,
            is_loading: input.is_loading,
        }
    }

    /// What the add-row dialog is rendered with, when the grid has one.
    pub fn add_row_context(&self) -> Option<AddRowContext<'_>> {
        if !self.config.add_row_button {
            return None;
        }
        Some(AddRowContext {
            title: self.config.dialog_title.as_deref(),
            columns: &self.merged_columns,
            rows: &self.visible_rows,
        })
    }
}
