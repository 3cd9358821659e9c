//! Per-render column resolution.

use crate::config::PlaceholderConfig;

use super::item::{CellContent, Column, ColumnMeta, Formatter, FormatterProps, HeaderContent};
use super::placeholder::placeholder_cell;
use super::widths::ColumnWidths;

/// A column ready to render.
#[derive(Clone)]
pub struct RenderColumn {
    pub key: String,
    pub name: String,
    pub header: HeaderContent,
    pub width: Option<u32>,
    pub editable: bool,
    pub filterable: bool,
    pub sortable: bool,
    formatter: Option<Formatter>,
    placeholder_formatter: Option<Formatter>,
    is_loading: bool,
    placeholder: PlaceholderConfig,
}

impl RenderColumn {
    /// Format one cell of this column.
    ///
    /// While loading this renders a placeholder sized from the raw value.
    /// Otherwise it delegates to the column formatter, or shows the value as
    /// text with a missing value shown as an empty string.
    pub fn format(&self, props: &FormatterProps<'_>) -> CellContent {
        if self.is_loading {
            return match &self.placeholder_formatter {
                Some(f) => f(props),
                None => placeholder_cell(props.value, &self.placeholder),
            };
        }
        match &self.formatter {
            Some(f) => f(props),
            None => CellContent::Text(props.value.map(ToString::to_string).unwrap_or_default()),
        }
    }

    /// Whether this column was resolved for the loading state.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }
}

impl std::fmt::Debug for RenderColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderColumn")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("width", &self.width)
            .field("editable", &self.editable)
            .field("filterable", &self.filterable)
            .field("sortable", &self.sortable)
            .field("is_loading", &self.is_loading)
            .finish()
    }
}

/// Merge base meta into each column, wrap help headers, and apply the
/// active width profile.
///
/// This is the column metadata handed to the add-row dialog.
pub fn merge_columns(
    columns: &[Column],
    base: &ColumnMeta,
    widths: &ColumnWidths,
    active_breakpoint: Option<&str>,
) -> Vec<Column> {
    let profile = widths.resolve(active_breakpoint);
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let mut merged = column.merged(base);
            if let Some(tooltip) = &merged.tooltip {
                let header = merged
                    .header
                    .take()
                    .unwrap_or_else(|| HeaderContent::Text(merged.name.clone()));
                merged.header = Some(header.with_help(tooltip.clone()));
            }
            if let Some(Some(width)) = profile.get(i) {
                merged.width = Some(*width);
            }
            merged
        })
        .collect()
}

/// Resolve columns for one render pass.
///
/// While `is_loading` every column is forced read-only: not editable,
/// filterable, or sortable.
pub fn resolve_columns(
    columns: &[Column],
    base: &ColumnMeta,
    widths: &ColumnWidths,
    active_breakpoint: Option<&str>,
    is_loading: bool,
    placeholder: &PlaceholderConfig,
) -> Vec<RenderColumn> {
    merge_columns(columns, base, widths, active_breakpoint)
        .into_iter()
        .map(|c| RenderColumn {
            header: c
                .header
                .clone()
                .unwrap_or_else(|| HeaderContent::Text(c.name.clone())),
            key: c.key,
            name: c.name,
            width: c.width,
            editable: !is_loading && c.editable.unwrap_or(false),
            filterable: !is_loading && c.filterable.unwrap_or(false),
            sortable: !is_loading && c.sortable.unwrap_or(false),
            formatter: c.formatter,
            placeholder_formatter: c.placeholder_formatter,
            is_loading,
            placeholder: *placeholder,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Row, Value};

    fn columns() -> Vec<Column> {
        vec![
            Column::new("name", "Name").editable().sortable().filterable(),
            Column::new("age", "Age").width(50).tooltip("Years"),
        ]
    }

    #[test]
    fn test_help_header_wrapped_once() {
        let base = ColumnMeta::new();
        let widths = ColumnWidths::default();
        let once = merge_columns(&columns(), &base, &widths, None);
        let twice = merge_columns(&once, &base, &widths, None);
        assert_eq!(once[1].header, twice[1].header);
        assert_eq!(twice[1].header.as_ref().map(|h| h.label()), Some("Age"));
        assert_eq!(twice[1].header.as_ref().and_then(|h| h.tooltip()), Some("Years"));
        assert_eq!(once[0].header, None);
    }

    #[test]
    fn test_loading_forces_read_only() {
        let resolved = resolve_columns(
            &columns(),
            &ColumnMeta::new().editable(true),
            &ColumnWidths::default(),
            None,
            true,
            &PlaceholderConfig::default(),
        );
        assert!(resolved.iter().all(|c| !c.editable && !c.filterable && !c.sortable));
    }

    #[test]
    fn test_default_format_missing_value() {
        let resolved = resolve_columns(
            &columns(),
            &ColumnMeta::new(),
            &ColumnWidths::default(),
            None,
            false,
            &PlaceholderConfig::default(),
        );
        let row = Row::new().set("name", "Ada");
        let props = FormatterProps {
            value: row.get("age"),
            row: &row,
            row_index: 0,
        };
        assert_eq!(resolved[1].format(&props), CellContent::Text(String::new()));

        let props = FormatterProps {
            value: row.get("name"),
            row: &row,
            row_index: 0,
        };
        assert_eq!(resolved[0].format(&props), CellContent::Text("Ada".into()));
    }

    #[test]
    fn test_custom_formatter_and_placeholder_formatter() {
        let cols = vec![
            Column::new("n", "N")
                .formatter(|p| CellContent::Text(format!("#{}", p.value.cloned().unwrap_or_default())))
                .placeholder_formatter(|_| CellContent::Text("...".into())),
        ];
        let row = Row::new().set("n", 7);
        let props = FormatterProps {
            value: row.get("n"),
            row: &row,
            row_index: 0,
        };
        let base = ColumnMeta::new();
        let widths = ColumnWidths::default();
        let config = PlaceholderConfig::default();

        let ready = resolve_columns(&cols, &base, &widths, None, false, &config);
        assert_eq!(ready[0].format(&props), CellContent::Text("#7".into()));

        let loading = resolve_columns(&cols, &base, &widths, None, true, &config);
        assert_eq!(loading[0].format(&props), CellContent::Text("...".into()));
        assert_eq!(row.get("n"), Some(&Value::Int(7)));
    }
}
