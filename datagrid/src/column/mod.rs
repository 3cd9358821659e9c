//! Column descriptors and per-render column resolution.
//!
//! Columns arrive from the caller as [`Column`] descriptors, optionally
//! completed by a shared [`ColumnMeta`]. Each render resolves them into
//! [`RenderColumn`]s:
//! - base meta merged under each column
//! - header wrapped with a help affordance when the column has a tooltip
//! - width taken from the active breakpoint's [`ColumnWidths`] profile
//! - capabilities and formatter adjusted for the loading state

mod item;
mod placeholder;
mod resolve;
mod widths;

pub use item::{CellContent, Column, ColumnMeta, Formatter, FormatterProps, HeaderContent};
pub use placeholder::{placeholder_cell, placeholder_seed, placeholder_width};
pub use resolve::{RenderColumn, merge_columns, resolve_columns};
pub use widths::{BASE_BREAKPOINT, ColumnWidths};
