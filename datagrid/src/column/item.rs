//! Column descriptor, base meta, and cell/header content types.

use std::sync::Arc;

use serde::Deserialize;
use serde::Serialize;

use crate::model::{Row, Value};

/// What a formatter sees for one cell.
#[derive(Debug, Clone, Copy)]
pub struct FormatterProps<'a> {
    /// The cell value; `None` when the row has no cell for the column.
    pub value: Option<&'a Value>,
    /// The whole row.
    pub row: &'a Row,
    /// Position of the row in the visible sequence.
    pub row_index: usize,
}

/// What a cell renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Plain text.
    Text(String),
    /// A loading placeholder bar.
    Placeholder {
        /// Bar width as a percentage of the cell.
        width_percent: f64,
        /// Bar height.
        height: u16,
    },
}

impl CellContent {
    /// Returns the text for `Text` content.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellContent::Text(s) => Some(s),
            CellContent::Placeholder { .. } => None,
        }
    }

    /// Returns the placeholder width formatted for a stylesheet (`"46.667%"`).
    pub fn width_css(&self) -> Option<String> {
        match self {
            CellContent::Placeholder { width_percent, .. } => Some(format!("{:.3}%", width_percent)),
            CellContent::Text(_) => None,
        }
    }
}

/// Cell formatter supplied by the caller.
pub type Formatter = Arc<dyn Fn(&FormatterProps<'_>) -> CellContent + Send + Sync>;

/// Header content of a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderContent {
    /// Plain header text.
    Text(String),
    /// Header content followed by a help affordance.
    WithHelp {
        content: Box<HeaderContent>,
        tooltip: String,
    },
}

impl HeaderContent {
    /// Attach a help affordance.
    ///
    /// Wrapping an already wrapped header replaces its tooltip instead of
    /// nesting a second affordance.
    pub fn with_help(self, tooltip: impl Into<String>) -> Self {
        let tooltip = tooltip.into();
        match self {
            HeaderContent::WithHelp { content, .. } => HeaderContent::WithHelp { content, tooltip },
            content => HeaderContent::WithHelp {
                content: Box::new(content),
                tooltip,
            },
        }
    }

    /// The header's text, without any help affordance.
    pub fn label(&self) -> &str {
        match self {
            HeaderContent::Text(s) => s,
            HeaderContent::WithHelp { content, .. } => content.label(),
        }
    }

    /// The help text, if the header carries one.
    pub fn tooltip(&self) -> Option<&str> {
        match self {
            HeaderContent::Text(_) => None,
            HeaderContent::WithHelp { tooltip, .. } => Some(tooltip),
        }
    }
}

/// Column configuration.
///
/// Columns are an ordered sequence; order is display order and `key` is
/// unique within the sequence. Capabilities left unset fall back to the
/// grid's [`ColumnMeta`], then to `false`.
///
/// # Examples
///
/// ```
/// use datagrid::column::Column;
///
/// let columns = vec![
///     Column::new("name", "Name").sortable().filterable(),
///     Column::new("email", "Email").editable().width(240),
///     Column::new("role", "Role").tooltip("Access level in the workspace"),
/// ];
/// assert_eq!(columns[1].width, Some(240));
/// ```
#[derive(Clone, Default, Deserialize)]
pub struct Column {
    /// Key of the cell this column shows.
    pub key: String,
    /// Display name, used as header text unless `header` is set.
    pub name: String,
    #[serde(default)]
    pub editable: Option<bool>,
    #[serde(default)]
    pub filterable: Option<bool>,
    #[serde(default)]
    pub sortable: Option<bool>,
    /// Declared width.
    #[serde(default)]
    pub width: Option<u32>,
    /// Help text shown next to the header.
    #[serde(default)]
    pub tooltip: Option<String>,
    /// Custom header content.
    #[serde(default)]
    pub header: Option<HeaderContent>,
    #[serde(skip)]
    pub formatter: Option<Formatter>,
    #[serde(skip)]
    pub placeholder_formatter: Option<Formatter>,
}

impl Column {
    /// Create a new column.
    pub fn new(key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Allow editing cells of this column.
    pub fn editable(mut self) -> Self {
        self.editable = Some(true);
        self
    }

    /// Allow filtering on this column.
    pub fn filterable(mut self) -> Self {
        self.filterable = Some(true);
        self
    }

    /// Allow sorting on this column.
    pub fn sortable(mut self) -> Self {
        self.sortable = Some(true);
        self
    }

    /// Set the declared width.
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the header help text.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set custom header content.
    pub fn header(mut self, header: HeaderContent) -> Self {
        self.header = Some(header);
        self
    }

    /// Set the cell formatter.
    pub fn formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&FormatterProps<'_>) -> CellContent + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(f));
        self
    }

    /// Set the formatter used while loading.
    pub fn placeholder_formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&FormatterProps<'_>) -> CellContent + Send + Sync + 'static,
    {
        self.placeholder_formatter = Some(Arc::new(f));
        self
    }

    /// Merge base meta under this column. Fields set on the column win.
    pub fn merged(&self, base: &ColumnMeta) -> Column {
        Column {
            key: self.key.clone(),
            name: self.name.clone(),
            editable: self.editable.or(base.editable),
            filterable: self.filterable.or(base.filterable),
            sortable: self.sortable.or(base.sortable),
            width: self.width.or(base.width),
            tooltip: self.tooltip.clone().or_else(|| base.tooltip.clone()),
            header: self.header.clone(),
            formatter: self.formatter.clone().or_else(|| base.formatter.clone()),
            placeholder_formatter: self
                .placeholder_formatter
                .clone()
                .or_else(|| base.placeholder_formatter.clone()),
        }
    }
}

impl std::fmt::Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("name", &self.name)
            .field("editable", &self.editable)
            .field("filterable", &self.filterable)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("tooltip", &self.tooltip)
            .field("header", &self.header)
            .field("formatter", &self.formatter.is_some())
            .field("placeholder_formatter", &self.placeholder_formatter.is_some())
            .finish()
    }
}

/// Defaults applied to every column before its own fields.
#[derive(Clone, Default)]
pub struct ColumnMeta {
    pub editable: Option<bool>,
    pub filterable: Option<bool>,
    pub sortable: Option<bool>,
    pub width: Option<u32>,
    pub tooltip: Option<String>,
    pub formatter: Option<Formatter>,
    pub placeholder_formatter: Option<Formatter>,
}

impl ColumnMeta {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = Some(editable);
        self
    }

    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = Some(filterable);
        self
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn formatter<F>(mut self, f: F) -> Self
    where
        F: Fn(&FormatterProps<'_>) -> CellContent + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(f));
        self
    }
}

impl std::fmt::Debug for ColumnMeta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColumnMeta")
            .field("editable", &self.editable)
            .field("filterable", &self.filterable)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("tooltip", &self.tooltip)
            .field("formatter", &self.formatter.is_some())
            .finish()
    }
}
