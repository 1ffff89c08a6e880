use crate::dish_actor::DishError;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Dish, DishCreate, DishId, DishUpdate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Dish actor.
#[derive(Clone)]
pub struct DishClient {
    inner: ResourceClient<Dish>,
}

impl DishClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_dish(&self, params: DishCreate) -> Result<DishId, DishError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(DishError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_dish(&self, id: DishId, update: DishUpdate) -> Result<Dish, DishError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(DishError::from)
    }
}

#[async_trait]
impl ActorClient<Dish> for DishClient {
    type Error = DishError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DishError::from(e)
    }
}
