//! Viewport capability implemented by the host renderer.

/// Scroll position of the grid canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollOffset {
    pub top: u32,
    pub left: u32,
}

/// The narrow slice of the renderer's viewport the grid needs.
///
/// Row height changes invalidate cached row positions; the grid asks the
/// viewport to recompute them and replay its last scroll position.
pub trait ViewportController {
    /// Recompute cached row metrics.
    fn refresh_metrics(&mut self);

    /// Last known scroll position.
    fn scroll_offset(&self) -> ScrollOffset;

    /// Re-run scroll handling at `offset`.
    fn rescroll_to(&mut self, offset: ScrollOffset);
}
