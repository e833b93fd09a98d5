use thiserror::Error;

/// Errors that can occur while saving or replaying blueprints.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BlueprintError {
    #[error("Blueprint not found at position {0}")]
    NotFound(usize),
    #[error("Blueprint storage error: {0}")]
    Storage(String),
    #[error("Blueprint serialization error: {0}")]
    Serialization(String),
}
