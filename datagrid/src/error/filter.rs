//! FilterError for filter collaborators

/// Error a [`RowFilter`](crate::pipeline::RowFilter) may report instead of a row sequence.
///
/// The pipeline never propagates it: a failed filter yields an empty sequence.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FilterError {
    /// The collaborator produced something that is not a row sequence.
    #[error("Filter returned a malformed result: {reason}")]
    Malformed { reason: String },

    /// A filter term could not be interpreted for its column.
    #[error("Filter term '{term}' on column '{column}' is not valid")]
    InvalidTerm { column: String, term: String },
}

impl FilterError {
    /// Creates a new malformed result error.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}
