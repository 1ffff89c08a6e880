//! [`ActorEntity`] implementation for [`Order`].
//!
//! Checkout happens in `on_create`: the restaurant and every dish are resolved
//! through the injected clients, each item is priced, the total is summed and the
//! new order id is recorded on the restaurant. Any failure aborts the create and
//! nothing is stored.

use super::error::OrderError;
use crate::clients::{DishClient, RestaurantClient};
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderUpdate};
use crate::pricing;
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = (RestaurantClient, DishClient);
    type Error = OrderError;

    /// Items start unpriced; prices are filled in by `on_create`.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        let items = params
            .items
            .into_iter()
            .map(|selection| OrderItem {
                dish_id: selection.dish_id,
                options: selection.options,
                price: 0.0,
            })
            .collect();
        Ok(Order {
            id,
            customer_id: params.customer_id,
            driver_id: params.driver_id,
            restaurant_id: Some(params.restaurant_id),
            items,
            total: 0.0,
            status: Default::default(),
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (restaurants, dishes) = ctx;
        let restaurant_id = self
            .restaurant_id
            .ok_or_else(|| OrderError::RestaurantNotFound(self.id.to_string()))?;

        restaurants
            .get(restaurant_id)
            .await?
            .ok_or_else(|| OrderError::RestaurantNotFound(restaurant_id.to_string()))?;

        for item in &mut self.items {
            let dish = dishes
                .get(item.dish_id)
                .await?
                .ok_or_else(|| OrderError::DishNotFound(item.dish_id.to_string()))?;
            item.price = pricing::price_item(&dish, &item.options);
            debug!(dish_id = %item.dish_id, price = item.price, "Item priced");
        }
        self.total = pricing::order_total(&self.items);

        restaurants.attach_order(restaurant_id, self.id).await?;
        info!(order_id = %self.id, %restaurant_id, total = self.total, "Order placed");
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &Self::Context) -> Result<(), OrderError> {
        self.status = update.status;
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &Self::Context) -> Result<(), OrderError> {
        Ok(())
    }
}
