//! The grid engine instance.
//!
//! [`DataGrid`] owns the view state that lives as long as the mounted grid:
//! sort, filters, editor position, density, filter-row visibility, and the
//! add-row dialog. Rows stay owned by the caller and are passed to
//! [`DataGrid::render`] on every pass; the result is a [`GridView`] the host
//! renderer draws. Renderer events come back through the `on_*` methods.
//!
//! # Example
//!
//! ```
//! use datagrid::prelude::*;
//!
//! struct Users(Vec<Row>);
//!
//! impl GridHost for Users {
//!     fn on_row_add(&mut self, row: Row) {
//!         self.0.push(row);
//!     }
//!
//!     fn on_row_update(&mut self, update: RowUpdate) {
//!         if let Some(row) = self.0.get_mut(update.row_index) {
//!             row.insert(update.column_key, update.updated_value);
//!         }
//!     }
//! }
//!
//! let mut grid = DataGrid::new(vec![
//!     Column::new("name", "Name").sortable().editable(),
//!     Column::new("age", "Age").sortable(),
//! ]);
//! let users = Users(vec![
//!     Row::new().set("name", "bob").set("age", 35),
//!     Row::new().set("name", "Alice").set("age", 29),
//! ]);
//!
//! grid.on_grid_sort(0, SortDirection::Asc);
//! let view = grid.render(&users.0, &Identity, RenderInput::ready());
//! assert_eq!(view.rows[0].get("name"), Some(&Value::from("Alice")));
//! assert_eq!(view.row_height, 45);
//! ```

mod events;
mod host;
mod render;
mod state;

pub use host::GridHost;
pub use render::{GridView, RenderInput};
pub use state::DataGrid;
