//! # Order Workflows
//!
//! Checkout, order queries and status edits. Pricing happens inside the order
//! actor on create; this layer resolves who is asking, applies
//! [`order_guard`](crate::order_guard) and turns failures into user-facing text.

use super::output::CoreOutput;
use crate::clients::{OrderClient, RestaurantClient};
use crate::framework::{ActorClient, Filter};
use crate::model::{
    Order, OrderCreate, OrderId, OrderItemSelection, OrderStatus, Restaurant, RestaurantId, User,
    UserId, UserRole,
};
use crate::order_actor::OrderError;
use crate::order_guard;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderInput {
    pub restaurant_id: RestaurantId,
    pub items: Vec<OrderItemSelection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateOrderOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetOrdersInput {
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetOrdersOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orders: Option<Vec<Order>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetOrderInput {
    pub id: OrderId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GetOrderOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditOrderInput {
    pub id: OrderId,
    pub status: OrderStatus,
}

pub type EditOrderOutput = CoreOutput;

/// Why an order could not be loaded for a user.
enum Denied {
    NotFound,
    Hidden,
    Failed,
}

#[derive(Clone)]
pub struct OrderService {
    orders: OrderClient,
    restaurants: RestaurantClient,
}

impl OrderService {
    pub fn new(orders: OrderClient, restaurants: RestaurantClient) -> Self {
        Self { orders, restaurants }
    }

    /// Places an order for `customer`. The stored order starts `Pending`.
    #[instrument(skip(self, customer), fields(customer_id = %customer.id))]
    pub async fn create_order(&self, customer: &User, input: CreateOrderInput) -> CreateOrderOutput {
        let params = OrderCreate {
            customer_id: customer.id,
            driver_id: None,
            restaurant_id: input.restaurant_id,
            items: input.items,
        };
        match self.orders.create_order(params).await {
            Ok(order_id) => {
                info!(%order_id, "Order created");
                CreateOrderOutput {
                    core: CoreOutput::success(),
                    order_id: Some(order_id),
                }
            }
            Err(e) => {
                let message = match e {
                    OrderError::RestaurantNotFound(_) => "Restaurant not found",
                    OrderError::DishNotFound(_) => "Dish not found",
                    other => {
                        error!(error = %other, "create_order failed");
                        "Could not create order"
                    }
                };
                CreateOrderOutput {
                    core: CoreOutput::failure(message),
                    ..Default::default()
                }
            }
        }
    }

    /// Orders relevant to `user`: placed by a client, driven by a driver, or
    /// received by an owner's restaurants. Optionally narrowed to one status.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn get_orders(&self, user: &User, input: GetOrdersInput) -> GetOrdersOutput {
        match self.orders_for(user, input.status).await {
            Ok(orders) => GetOrdersOutput {
                core: CoreOutput::success(),
                orders: Some(orders),
            },
            Err(e) => {
                error!(error = %e, "get_orders failed");
                GetOrdersOutput {
                    core: CoreOutput::failure("Could not get orders"),
                    ..Default::default()
                }
            }
        }
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn get_order(&self, user: &User, input: GetOrderInput) -> GetOrderOutput {
        match self.visible_order(user, input.id).await {
            Ok(order) => GetOrderOutput {
                core: CoreOutput::success(),
                order: Some(order),
            },
            Err(denied) => GetOrderOutput {
                core: CoreOutput::failure(match denied {
                    Denied::NotFound => "Order not found",
                    Denied::Hidden => "You can't see that",
                    Denied::Failed => "Could not load order",
                }),
                ..Default::default()
            },
        }
    }

    /// Sets a new status, provided `user` can see the order and their role may
    /// write that status. The current status is not consulted.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn edit_order(&self, user: &User, input: EditOrderInput) -> EditOrderOutput {
        let order = match self.visible_order(user, input.id).await {
            Ok(order) => order,
            Err(Denied::NotFound) => return CoreOutput::failure("Order not found"),
            Err(Denied::Hidden) => return CoreOutput::failure("You can't see that"),
            Err(Denied::Failed) => return CoreOutput::failure("Could not edit order"),
        };
        if !order_guard::can_transition(user.role, input.status) {
            warn!(role = ?user.role, status = %input.status, "Transition refused");
            return CoreOutput::failure("You can't do that");
        }
        match self.orders.update_status(order.id, input.status).await {
            Ok(updated) => {
                info!(order_id = %updated.id, status = %updated.status, "Order edited");
                CoreOutput::success()
            }
            Err(OrderError::NotFound(_)) => CoreOutput::failure("Order not found"),
            Err(e) => {
                error!(error = %e, "edit_order failed");
                CoreOutput::failure("Could not edit order")
            }
        }
    }

    async fn orders_for(
        &self,
        user: &User,
        status: Option<OrderStatus>,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        let by_status = move |order: &Order| status.map_or(true, |s| order.status == s);
        let user_id = user.id;
        let orders = match user.role {
            UserRole::Client => {
                self.orders
                    .list(Filter::new(move |o: &Order| o.customer_id == user_id && by_status(o)))
                    .await?
            }
            UserRole::Delivery => {
                self.orders
                    .list(Filter::new(move |o: &Order| {
                        o.driver_id == Some(user_id) && by_status(o)
                    }))
                    .await?
            }
            UserRole::Owner => {
                let owned: HashSet<RestaurantId> = self
                    .restaurants
                    .list(Filter::new(move |r: &Restaurant| r.owner_id == user_id))
                    .await?
                    .into_iter()
                    .map(|r| r.id)
                    .collect();
                self.orders
                    .list(Filter::new(move |o: &Order| {
                        o.restaurant_id.is_some_and(|id| owned.contains(&id)) && by_status(o)
                    }))
                    .await?
            }
        };
        Ok(orders)
    }

    /// Loads an order and checks it against [`order_guard::can_view`].
    async fn visible_order(&self, user: &User, id: OrderId) -> Result<Order, Denied> {
        let order = match self.orders.get(id).await {
            Ok(Some(order)) => order,
            Ok(None) => return Err(Denied::NotFound),
            Err(e) => {
                error!(error = %e, %id, "Order lookup failed");
                return Err(Denied::Failed);
            }
        };
        let owner = match (user.role, order.restaurant_id) {
            (UserRole::Owner, Some(restaurant_id)) => self.restaurant_owner(restaurant_id).await?,
            _ => None,
        };
        if !order_guard::can_view(user, &order, owner.as_ref()) {
            warn!(%id, "Order hidden from user");
            return Err(Denied::Hidden);
        }
        Ok(order)
    }

    async fn restaurant_owner(&self, id: RestaurantId) -> Result<Option<UserId>, Denied> {
        match self.restaurants.get(id).await {
            Ok(restaurant) => Ok(restaurant.map(|r| r.owner_id)),
            Err(e) => {
                error!(error = %e, %id, "Restaurant lookup failed");
                Err(Denied::Failed)
            }
        }
    }
}
