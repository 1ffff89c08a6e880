//! Represents a placed order.
//!
//! Managed by the order store, see [`crate::order_actor`]. Creation prices the
//! items once; afterwards only `status` ever changes.

use crate::model::{DishId, RestaurantId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order is in its life.
///
/// The intended path is `Pending → Cooking → Cooked → PickedUp → Delivered`, but
/// only *who* may set *which* status is enforced (see [`crate::order_guard`]), not
/// the order of steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Cooking,
    Cooked,
    PickedUp,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Cooking,
        OrderStatus::Cooked,
        OrderStatus::PickedUp,
        OrderStatus::Delivered,
    ];

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Cooking => "Cooking",
            OrderStatus::Cooked => "Cooked",
            OrderStatus::PickedUp => "PickedUp",
            OrderStatus::Delivered => "Delivered",
        };
        f.write_str(name)
    }
}

/// A customer's pick for one option of a dish, optionally naming a choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub choice: Option<String>,
}

impl SelectedOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choice: None,
        }
    }

    pub fn with_choice(name: impl Into<String>, choice: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            choice: Some(choice.into()),
        }
    }
}

/// One line of a checkout request: a dish and the options picked for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemSelection {
    pub dish_id: DishId,
    #[serde(default)]
    pub options: Vec<SelectedOption>,
}

/// One priced line of a stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub dish_id: DishId,
    pub options: Vec<SelectedOption>,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub driver_id: Option<UserId>,
    pub restaurant_id: Option<RestaurantId>,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub status: OrderStatus,
}

/// Payload for placing an order. Items are priced by the order store on creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: UserId,
    pub driver_id: Option<UserId>,
    pub restaurant_id: RestaurantId,
    pub items: Vec<OrderItemSelection>,
}

/// The only post-creation mutation an order accepts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderUpdate {
    pub status: OrderStatus,
}
