use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{DishId, OrderId, Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use crate::restaurant_actor::{RestaurantAction, RestaurantError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<RestaurantId, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(RestaurantError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(RestaurantError::from)
    }

    #[instrument(skip(self))]
    pub async fn attach_dish(&self, id: RestaurantId, dish_id: DishId) -> Result<(), RestaurantError> {
        self.action(id, RestaurantAction::AttachDish(dish_id)).await
    }

    #[instrument(skip(self))]
    pub async fn detach_dish(&self, id: RestaurantId, dish_id: DishId) -> Result<(), RestaurantError> {
        self.action(id, RestaurantAction::DetachDish(dish_id)).await
    }

    #[instrument(skip(self))]
    pub async fn attach_order(
        &self,
        id: RestaurantId,
        order_id: OrderId,
    ) -> Result<(), RestaurantError> {
        self.action(id, RestaurantAction::AttachOrder(order_id)).await
    }

    async fn action(&self, id: RestaurantId, action: RestaurantAction) -> Result<(), RestaurantError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(RestaurantError::from)
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RestaurantError::from(e)
    }
}
