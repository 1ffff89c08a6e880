//! # Order Access Rules
//!
//! Who may look at an order, and which statuses each role may write.
//!
//! Both checks are pure. The order-edit workflow runs [`can_view`] first and
//! [`can_transition`] second; failing either aborts the edit.
//!
//! | Role     | May set              |
//! |----------|----------------------|
//! | Client   | nothing              |
//! | Owner    | Cooking, Cooked      |
//! | Delivery | PickedUp, Delivered  |
//!
//! The current status is never consulted: an owner may set `Cooked` on a
//! `Pending` order, and any permitted status may be written from any state.

use crate::model::{Order, OrderStatus, User, UserId, UserRole};

/// Whether `actor` may see `order`.
///
/// `restaurant_owner` is the owner of the order's restaurant, resolved by the
/// caller; `None` when the order has no restaurant or it no longer exists.
pub fn can_view(actor: &User, order: &Order, restaurant_owner: Option<&UserId>) -> bool {
    match actor.role {
        UserRole::Client => order.customer_id == actor.id,
        UserRole::Delivery => order.driver_id == Some(actor.id),
        UserRole::Owner => restaurant_owner == Some(&actor.id),
    }
}

/// The statuses `role` is allowed to write.
pub fn permitted_statuses(role: UserRole) -> &'static [OrderStatus] {
    match role {
        UserRole::Client => &[],
        UserRole::Owner => &[OrderStatus::Cooking, OrderStatus::Cooked],
        UserRole::Delivery => &[OrderStatus::PickedUp, OrderStatus::Delivered],
    }
}

/// Whether `role` may set an order to `status`.
pub fn can_transition(role: UserRole, status: OrderStatus) -> bool {
    permitted_statuses(role).contains(&status)
}
