//! Row pipeline: sort, then filter, or placeholder rows while loading.

mod filter;
mod fuzzy;
mod placeholder;
mod sort;

pub use filter::{ColumnFilter, FilterState, FilterTerm, NumericRule, RowFilter, TermFilter, parse_numeric_rules};
pub use placeholder::synthetic_rows;
pub use sort::{SortDirection, SortState, sort_rows};

use crate::column::Column;
use crate::model::Row;

/// Inputs of one pipeline run.
///
/// The sort column index addresses `columns`; an index past the end leaves
/// the rows unsorted.
pub struct RowPipeline<'a> {
    pub columns: &'a [Column],
    pub sort: &'a SortState,
    pub filters: &'a FilterState,
    pub filter: &'a dyn RowFilter,
    pub is_loading: bool,
    pub loading_row_count: usize,
}

impl RowPipeline<'_> {
    /// Compute the rows to render. Never mutates `rows`.
    ///
    /// While loading, the real rows are ignored and `loading_row_count`
    /// synthetic rows are produced instead. A failing filter yields an empty
    /// sequence.
    pub fn compute_visible_rows(&self, rows: &[Row]) -> Vec<Row> {
        if self.is_loading {
            log::trace!("RowPipeline: {} placeholder rows", self.loading_row_count);
            return synthetic_rows(self.columns, self.loading_row_count);
        }

        let sorted = match self.columns.get(self.sort.sort_column) {
            Some(column) if self.sort.is_active() => {
                sort_rows(rows, &column.key, self.sort.sort_direction)
            }
            Some(_) => rows.to_vec(),
            None => {
                if self.sort.is_active() {
                    log::debug!(
                        "RowPipeline: sort column {} out of range ({} columns), leaving rows unsorted",
                        self.sort.sort_column,
                        self.columns.len()
                    );
                }
                rows.to_vec()
            }
        };

        match self.filter.filter(sorted, self.filters) {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("RowPipeline: substituting empty rows: {}", e);
                Vec::new()
            }
        }
    }
}
