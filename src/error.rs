use thiserror::Error;

use crate::blueprint::BlueprintError;
use crate::domain::ProductId;
use crate::identity::IdentityError;
use crate::order::OrderError;

/// Everything a session request can fail with. All variants are recoverable:
/// the caller shows the message and lets the customer try again.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Blueprint(#[from] BlueprintError),
    #[error("Not logged in")]
    NotLoggedIn,
    #[error("Not available while {actual}, only while {expected}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
    #[error("Blueprint {0:?} has no products left in the catalog")]
    BlueprintUnresolvable(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
