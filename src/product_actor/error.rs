use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::error::ValidationError;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError<ValidationError>> for ProductError {
    fn from(error: FrameworkError<ValidationError>) -> Self {
        match error {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Rejected(e) => ProductError::Validation(e),
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                ProductError::ActorCommunicationError(error.to_string())
            }
        }
    }
}
