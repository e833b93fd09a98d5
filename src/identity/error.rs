use thiserror::Error;

/// Errors that can occur while resolving a customer number.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    #[error("Malformed customer number {0:?}: please enter exactly 8 digits")]
    MalformedInput(String),
    #[error("Invalid checksum for customer number {0}")]
    InvalidChecksum(String),
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
}
