//! Grid configuration.

use serde::Deserialize;

use crate::error::ConfigError;

/// Per-grid configuration.
///
/// Fixed for the lifetime of a [`DataGrid`](crate::grid::DataGrid). Every
/// field has a default, so a JSON source only needs the fields it changes.
///
/// # Example
///
/// ```
/// use datagrid::config::GridConfig;
///
/// let config = GridConfig::from_json(r#"{ "loading_row_count": 8, "add_row_button": true }"#).unwrap();
/// assert_eq!(config.loading_row_count, 8);
/// assert_eq!(config.empty_label, "No items to display");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Number of synthetic rows shown while loading.
    pub loading_row_count: usize,

    /// Label shown when there are no rows to display.
    pub empty_label: String,

    /// Whether the toolbar offers an "Add Row" button and dialog.
    pub add_row_button: bool,

    /// Whether the toolbar offers the density selector.
    pub view_mode_button: bool,

    /// Title of the add-row dialog.
    pub dialog_title: Option<String>,

    /// Height of the header row.
    pub header_row_height: u16,

    /// Height of the header filter row.
    pub header_filters_height: u16,

    /// Loading placeholder sizing.
    pub placeholder: PlaceholderConfig,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            loading_row_count: 5,
            empty_label: "No items to display".to_string(),
            add_row_button: false,
            view_mode_button: true,
            dialog_title: None,
            header_row_height: 45,
            header_filters_height: 55,
            placeholder: PlaceholderConfig::default(),
        }
    }
}

impl GridConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the config is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.placeholder.validate()
    }

    /// Set the number of loading placeholder rows.
    pub fn loading_row_count(mut self, count: usize) -> Self {
        self.loading_row_count = count;
        self
    }

    /// Set the empty-grid label.
    pub fn empty_label(mut self, label: impl Into<String>) -> Self {
        self.empty_label = label.into();
        self
    }

    /// Enable the add-row button and dialog.
    pub fn add_row_button(mut self) -> Self {
        self.add_row_button = true;
        self
    }

    /// Hide the density selector.
    pub fn without_view_mode_button(mut self) -> Self {
        self.view_mode_button = false;
        self
    }

    /// Set the add-row dialog title.
    pub fn dialog_title(mut self, title: impl Into<String>) -> Self {
        self.dialog_title = Some(title.into());
        self
    }
}

/// Constants for the loading placeholder width.
///
/// A raw value `v` maps to a bar of `((v * multiplier) % modulus + floor)`
/// units out of `floor + modulus`, expressed as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaceholderConfig {
    pub multiplier: u64,
    pub modulus: u64,
    pub floor: u64,
    /// Bar height.
    pub height: u16,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            multiplier: 137,
            modulus: 11,
            floor: 4,
            height: 20,
        }
    }
}

impl PlaceholderConfig {
    /// Check that the constants produce a bounded percentage.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.modulus == 0 {
            return Err(ConfigError::invalid("placeholder.modulus", "must be greater than zero"));
        }
        if self.multiplier == 0 {
            return Err(ConfigError::invalid(
                "placeholder.multiplier",
                "must be greater than zero",
            ));
        }
        if self.floor.checked_add(self.modulus).is_none() {
            return Err(ConfigError::invalid(
                "placeholder.floor",
                "floor plus modulus must fit in 64 bits",
            ));
        }
        Ok(())
    }

    /// Units of a full-width bar.
    pub(crate) fn span(&self) -> u64 {
        self.floor.saturating_add(self.modulus)
    }

    /// Smallest width percentage this config can produce.
    pub fn min_percent(&self) -> f64 {
        percent(self.floor, self.span())
    }

    /// Largest width percentage this config can produce.
    pub fn max_percent(&self) -> f64 {
        percent(self.span().saturating_sub(1), self.span())
    }
}

/// `part` out of `whole` as a percentage; zero for an empty whole.
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
