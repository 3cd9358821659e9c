//! Single-flight "after render commit" scheduling.

/// A slot for work that runs once the current render pass has committed.
///
/// Scheduling again before the commit replaces the pending value, so many
/// requests between two commits collapse into one run with the latest value.
#[derive(Debug, Clone)]
pub struct AfterCommit<T> {
    pending: Option<T>,
}

impl<T> Default for AfterCommit<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> AfterCommit<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `value`. Returns `true` if it replaced a pending value.
    pub fn schedule(&mut self, value: T) -> bool {
        self.pending.replace(value).is_some()
    }

    /// Returns `true` if work is waiting for the next commit.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value at commit time. Later calls return `None`
    /// until something is scheduled again.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_to_latest() {
        let mut slot = AfterCommit::new();
        assert!(!slot.schedule(1));
        assert!(slot.schedule(2));
        assert!(slot.schedule(3));
        assert_eq!(slot.take(), Some(3));
        assert_eq!(slot.take(), None);
        assert!(!slot.is_pending());
    }
}
