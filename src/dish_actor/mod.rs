//! # Dish Actor
//!
//! Stores menu items. A dish records its restaurant by id; the restaurant's menu
//! list is kept in step by the restaurant service.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::DishClient;
use crate::framework::ResourceActor;
use crate::model::Dish;

/// Creates a new Dish actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Dish>, DishClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, DishClient::new(generic_client))
}
