//! Custom actions for the Restaurant actor.
//!
//! A restaurant keeps the ids of its menu and of the orders placed with it. These
//! actions maintain those lists; they are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::model::{DishId, OrderId};

/// Bookkeeping operations on a restaurant's id lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RestaurantAction {
    /// Adds a dish to the menu. Adding an id already present is a no-op.
    AttachDish(DishId),
    /// Removes a dish from the menu, if present.
    DetachDish(DishId),
    /// Records an order placed with this restaurant.
    AttachOrder(OrderId),
}
