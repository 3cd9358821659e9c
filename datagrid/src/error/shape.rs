//! RowShapeError for converting host records into rows

/// Error type for [`Row::from_serialize`](crate::model::Row::from_serialize).
#[derive(Debug, thiserror::Error)]
pub enum RowShapeError {
    /// The record could not be serialized at all.
    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The record serialized to something other than a key/value object.
    #[error("Record must serialize to an object, got {actual}")]
    NotAnObject { actual: &'static str },

    /// A field holds a nested value that cannot be shown in a single cell.
    #[error("Field '{field}' is not a scalar (got {actual})")]
    NonScalar { field: String, actual: &'static str },
}

impl RowShapeError {
    /// Creates a new non-scalar field error.
    pub fn non_scalar(field: impl Into<String>, actual: &'static str) -> Self {
        Self::NonScalar {
            field: field.into(),
            actual,
        }
    }
}
