//! ConfigError for grid configuration loading

/// Error type for loading and validating a [`GridConfig`](crate::config::GridConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration source was not valid JSON for the config shape.
    #[error("Failed to parse grid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value the grid cannot work with.
    #[error("Invalid grid config field '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    /// Creates a new invalid field error.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}
