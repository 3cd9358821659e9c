//! Toolbar state.

use super::schedule::AfterCommit;
use super::view_mode::ViewMode;
use super::viewport::ViewportController;

/// Transient toolbar state: density and filter-row visibility.
#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    view_mode: ViewMode,
    filters_visible: bool,
    refresh: AfterCommit<ViewMode>,
}

impl Toolbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Row height for the current density.
    pub fn row_height(&self) -> u16 {
        self.view_mode.row_height()
    }

    pub fn filters_visible(&self) -> bool {
        self.filters_visible
    }

    /// Change density and schedule a viewport refresh for after the next commit.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        log::debug!("Toolbar: view mode {:?} -> {:?}", self.view_mode, mode);
        self.view_mode = mode;
        if self.refresh.schedule(mode) {
            log::trace!("Toolbar: collapsed pending viewport refresh");
        }
    }

    /// Toggle the filter row. Disabled while loading.
    ///
    /// Returns the resulting visibility.
    pub fn toggle_filters(&mut self, is_loading: bool) -> bool {
        if !is_loading {
            self.filters_visible = !self.filters_visible;
        }
        self.filters_visible
    }

    /// Whether a viewport refresh waits for the next commit.
    pub fn refresh_pending(&self) -> bool {
        self.refresh.is_pending()
    }

    /// A render pass committed: run the pending viewport refresh, if any.
    ///
    /// Returns `true` if a refresh ran. Without a viewport the pending
    /// refresh is discarded.
    pub fn render_committed(&mut self, viewport: Option<&mut dyn ViewportController>) -> bool {
        let Some(mode) = self.refresh.take() else {
            return false;
        };
        let Some(viewport) = viewport else {
            log::debug!("Toolbar: no viewport for {:?} refresh", mode);
            return false;
        };
        viewport.refresh_metrics();
        let offset = viewport.scroll_offset();
        viewport.rescroll_to(offset);
        log::trace!("Toolbar: viewport refreshed for {:?} at {:?}", mode, offset);
        true
    }
}
