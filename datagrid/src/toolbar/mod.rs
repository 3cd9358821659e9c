//! Toolbar state: density selector, filter visibility, and the deferred
//! viewport refresh that follows a density change.

mod schedule;
mod state;
mod view_mode;
mod viewport;

pub use schedule::AfterCommit;
pub use state::Toolbar;
pub use view_mode::ViewMode;
pub use viewport::{ScrollOffset, ViewportController};
