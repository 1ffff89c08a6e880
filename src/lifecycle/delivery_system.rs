use crate::clients::{DishClient, OrderClient, RestaurantClient, UserClient};
use crate::config::AppConfig;
use crate::services::{OrderService, RestaurantService, UserService};
use tracing::{error, info};

/// The running back end: four resource actors plus the services on top of them.
///
/// ```ignore
/// let system = DeliverySystem::new(&AppConfig::default());
/// let account = system.user_service.create_account(input).await;
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    pub user_client: UserClient,
    pub restaurant_client: RestaurantClient,
    pub dish_client: DishClient,
    pub order_client: OrderClient,

    pub user_service: UserService,
    pub restaurant_service: RestaurantService,
    pub order_service: OrderService,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl DeliverySystem {
    /// Spawns every actor on the current Tokio runtime and wires the services.
    pub fn new(config: &AppConfig) -> Self {
        let capacity = config.channel_capacity;

        let (user_actor, user_client) = crate::user_actor::new(capacity);
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(capacity);
        let (dish_actor, dish_client) = crate::dish_actor::new(capacity);
        let (order_actor, order_client) = crate::order_actor::new(capacity);

        let handles = vec![
            tokio::spawn(user_actor.run(())),
            tokio::spawn(restaurant_actor.run(())),
            tokio::spawn(dish_actor.run(())),
            tokio::spawn(order_actor.run((restaurant_client.clone(), dish_client.clone()))),
        ];

        let user_service = UserService::new(user_client.clone());
        let restaurant_service = RestaurantService::new(
            restaurant_client.clone(),
            dish_client.clone(),
            config.page_size,
        );
        let order_service = OrderService::new(order_client.clone(), restaurant_client.clone());

        info!(capacity, page_size = config.page_size, "Delivery system started");
        Self {
            user_client,
            restaurant_client,
            dish_client,
            order_client,
            user_service,
            restaurant_service,
            order_service,
            handles,
        }
    }

    /// Closes every channel and waits for the actors to drain and exit.
    ///
    /// Fails if an actor task panicked. Clients cloned out of the system keep their
    /// actor alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        let Self {
            user_client,
            restaurant_client,
            dish_client,
            order_client,
            user_service,
            restaurant_service,
            order_service,
            handles,
        } = self;
        drop(order_service);
        drop(restaurant_service);
        drop(user_service);
        drop(order_client);
        drop(dish_client);
        drop(restaurant_client);
        drop(user_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
