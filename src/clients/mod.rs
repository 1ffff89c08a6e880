//! Typed wrappers around [`ResourceClient`](crate::framework::ResourceClient).
//!
//! Each client fixes the entity type, maps store failures to the resource's error
//! enum and adds the operations specific to that resource. Shared `get`, `list` and
//! `delete` come from [`ActorClient`](crate::framework::ActorClient).

pub mod dish_client;
pub mod order_client;
pub mod restaurant_client;
pub mod user_client;

pub use dish_client::*;
pub use order_client::*;
pub use restaurant_client::*;
pub use user_client::*;
