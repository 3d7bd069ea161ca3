use thiserror::Error;

/// Custom error type for the equisample crate.
///
/// Every fallible construction path reports through this enum so that a
/// sampler either comes back fully usable or not at all. Iteration itself
/// never fails: all validation happens eagerly, before training starts.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum EquisampleError {
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Dataset item at index {index} cannot be read as a (data, label) pair: {message}")]
    DatasetShape { index: usize, message: String },

    #[error("Empty dataset: {context}")]
    EmptyDataset { context: String },

    #[error("Index out of bounds: index {index} for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

impl EquisampleError {
    /// Shorthand for a `Configuration` error with a formatted message.
    pub(crate) fn config(message: impl Into<String>) -> Self {
        EquisampleError::Configuration {
            message: message.into(),
        }
    }
}
