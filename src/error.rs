//! Error types for stub generation.

use thiserror::Error;

/// A specialized Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenerateError>;

/// Errors that abort a generation run.
///
/// Any of these is fatal for the whole request: no artifacts are emitted when
/// generation fails.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A method references a message type that no input file declares.
    #[error(
        "cannot find message {type_name} referenced by {service}.{method}; \
         make sure all .proto files it depends on were provided"
    )]
    UnresolvedType {
        service: String,
        method: String,
        type_name: String,
    },

    /// A file requested for output is not part of the descriptor set.
    #[error("requested file {0} is missing from the descriptor set")]
    MissingFile(String),

    /// Invalid generator configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Generated tokens could not be turned into source text.
    #[error("failed to render {file}: {message}")]
    Render { file: String, message: String },
}

impl From<config::ConfigError> for GenerateError {
    fn from(err: config::ConfigError) -> Self {
        GenerateError::Config(err.to_string())
    }
}
