//! # Restaurant Actor
//!
//! Stores restaurants. Besides CRUD it offers [`RestaurantAction`]s that keep the
//! menu and order id lists in step with the dish and order stores.
//!
//! ```rust,ignore
//! restaurant_client.attach_dish(restaurant_id, dish_id).await?;
//! restaurant_client.attach_order(restaurant_id, order_id).await?;
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::RestaurantClient;
use crate::framework::ResourceActor;
use crate::model::Restaurant;

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}
