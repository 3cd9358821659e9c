//! Responsive column widths.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

/// Profile key used when no breakpoint is active.
pub const BASE_BREAKPOINT: &str = "base";

/// Width profiles keyed by breakpoint.
///
/// Each profile is a width sequence aligned positionally with the column
/// sequence; `None` entries leave the column's own width untouched. Numeric
/// breakpoint keys are minimum viewport widths in pixels.
///
/// # Example
///
/// ```
/// use datagrid::column::ColumnWidths;
///
/// let widths: ColumnWidths = serde_json::from_str(r#"{ "base": [100, null], "768": [80, null] }"#).unwrap();
/// assert_eq!(widths.resolve(Some("768")), &[Some(80), None]);
/// assert_eq!(widths.resolve(Some("unknown")), &[Some(100), None]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnWidths {
    profiles: BTreeMap<String, Vec<Option<u32>>>,
}

impl ColumnWidths {
    /// Create widths with only a base profile.
    pub fn new(base: Vec<Option<u32>>) -> Self {
        let mut profiles = BTreeMap::new();
        profiles.insert(BASE_BREAKPOINT.to_string(), base);
        Self { profiles }
    }

    /// Add a breakpoint profile.
    pub fn breakpoint(mut self, key: impl Into<String>, widths: Vec<Option<u32>>) -> Self {
        self.profiles.insert(key.into(), widths);
        self
    }

    /// Breakpoint keys, excluding `base`.
    pub fn breakpoints(&self) -> impl Iterator<Item = &str> {
        self.profiles
            .keys()
            .map(String::as_str)
            .filter(|k| *k != BASE_BREAKPOINT)
    }

    /// Width sequence for the active breakpoint.
    ///
    /// Falls back to `base` when nothing is active or the active key has no
    /// profile, and to an empty sequence when there is no base either.
    pub fn resolve(&self, active: Option<&str>) -> &[Option<u32>] {
        active
            .and_then(|key| self.profiles.get(key))
            .or_else(|| self.profiles.get(BASE_BREAKPOINT))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Largest numeric breakpoint not exceeding `viewport_width`.
    ///
    /// Keys that are not pixel widths are ignored. `None` means `base` applies.
    pub fn breakpoint_for_width(&self, viewport_width: u32) -> Option<&str> {
        self.breakpoints()
            .filter_map(|k| k.parse::<u32>().ok().map(|px| (px, k)))
            .filter(|(px, _)| *px <= viewport_width)
            .max_by_key(|(px, _)| *px)
            .map(|(_, k)| k)
    }
}
