//! Error types for the Order actor.

use crate::dish_actor::DishError;
use crate::framework::FrameworkError;
use crate::restaurant_actor::RestaurantError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The restaurant named in a new order does not exist.
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    /// A dish named in a new order does not exist.
    #[error("Dish not found: {0}")]
    DishNotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<RestaurantError> for OrderError {
    fn from(e: RestaurantError) -> Self {
        match e {
            RestaurantError::NotFound(id) => OrderError::RestaurantNotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<DishError> for OrderError {
    fn from(e: DishError) -> Self {
        match e {
            DishError::NotFound(id) => OrderError::DishNotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
