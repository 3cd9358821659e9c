//! Row density presets.

use serde::Deserialize;
use serde::Serialize;

/// Row density. Each mode maps to a fixed row height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Sparse,
    #[default]
    Comfy,
    Compact,
}

impl ViewMode {
    /// All modes in toolbar order.
    pub const ALL: [ViewMode; 3] = [ViewMode::Sparse, ViewMode::Comfy, ViewMode::Compact];

    /// Row height for this mode.
    pub const fn row_height(self) -> u16 {
        match self {
            ViewMode::Sparse => 60,
            ViewMode::Comfy => 45,
            ViewMode::Compact => 35,
        }
    }

    /// Icon name for the toolbar button.
    pub const fn icon(self) -> &'static str {
        match self {
            ViewMode::Sparse => "sparse",
            ViewMode::Comfy => "comfy",
            ViewMode::Compact => "compact",
        }
    }

    /// Tooltip for the toolbar button.
    pub const fn name(self) -> &'static str {
        match self {
            ViewMode::Sparse => "Sparse",
            ViewMode::Comfy => "Comfy",
            ViewMode::Compact => "Compact",
        }
    }

    /// Position in [`ViewMode::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Mode at a toolbar position.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heights_in_declared_order() {
        let heights: Vec<u16> = ViewMode::ALL.iter().map(|m| m.row_height()).collect();
        assert_eq!(heights, vec![60, 45, 35]);
    }

    #[test]
    fn test_index_round_trip() {
        for mode in ViewMode::ALL {
            assert_eq!(ViewMode::from_index(mode.index()), Some(mode));
        }
        assert_eq!(ViewMode::from_index(3), None);
        assert_eq!(ViewMode::default(), ViewMode::Comfy);
    }
}
