//! Error types for the Dish actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during dish operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DishError {
    /// The requested dish was not found.
    #[error("Dish not found: {0}")]
    NotFound(String),

    /// The dish data provided is invalid.
    #[error("Dish validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for DishError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<DishError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => DishError::NotFound(id),
            Err(other) => DishError::ActorCommunicationError(other.to_string()),
        }
    }
}
