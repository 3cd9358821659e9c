//! Interactive table engine.
//!
//! Turns caller-owned rows and column descriptors into a sorted, filtered,
//! editable grid view with loading placeholders, responsive column widths,
//! per-cell actions, and row density presets. Rendering is left to the host;
//! this crate only derives what to render and reacts to renderer events.

pub mod column;
pub mod config;
pub mod edit;
pub mod error;
pub mod grid;
pub mod model;
pub mod pipeline;
pub mod toolbar;

pub use grid::{DataGrid, GridHost, GridView, RenderInput};

pub mod prelude {
    pub use crate::column::{CellContent, Column, ColumnMeta, ColumnWidths, FormatterProps, HeaderContent, RenderColumn};
    pub use crate::config::{GridConfig, PlaceholderConfig};
    pub use crate::edit::{CellAction, EditorPosition, RowAction, RowUpdate, RowsUpdated, UpdateAction};
    pub use crate::error::{ConfigError, FilterError, RowShapeError};
    pub use crate::grid::{DataGrid, GridHost, GridView, RenderInput};
    pub use crate::model::{Identity, Row, RowTransform, SerdeTransform, Value};
    pub use crate::pipeline::{ColumnFilter, FilterState, FilterTerm, RowFilter, SortDirection, SortState, TermFilter};
    pub use crate::toolbar::{ScrollOffset, ViewMode, ViewportController};
}
