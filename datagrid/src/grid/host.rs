//! Host collaborator trait.

use crate::edit::{RowAction, RowUpdate};
use crate::model::Row;

/// Callbacks and policies supplied by the code that owns the data.
///
/// Only the add and update handlers are required. By default no row can be
/// deleted and rows carry no custom actions.
pub trait GridHost {
    /// Whether `row` offers a delete action.
    fn can_delete_row(&self, _row: &Row) -> bool {
        false
    }

    /// Custom actions for `row`, listed after the delete action.
    fn row_actions(&self, _row: &Row) -> Vec<RowAction> {
        Vec::new()
    }

    /// A row was confirmed in the add-row dialog.
    fn on_row_add(&mut self, row: Row);

    /// A single cell changed.
    fn on_row_update(&mut self, update: RowUpdate);

    /// The delete action was invoked on `row`.
    fn on_row_delete(&mut self, _row: &Row) {}

    /// A custom action was invoked on `row`.
    fn on_row_action(&mut self, _action_id: &str, _row: &Row) {}
}
