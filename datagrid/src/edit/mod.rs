//! Cell editing, row updates, add-row dialog, and per-cell actions.

mod actions;
mod add_row;
mod position;
mod update;

pub use actions::{CellAction, RowAction, cell_actions};
pub use add_row::{AddRowContext, AddRowDialog};
pub use position::{EditCoordinator, EditorPosition};
pub use update::{RowUpdate, RowsUpdated, UpdateAction};
