//! # System Lifecycle
//!
//! Starting, wiring and stopping the four resource actors.
//!
//! ## Late binding
//!
//! Actors are constructed without dependencies and receive them through
//! `run(context)`. Only the order actor has any:
//!
//! ```rust,ignore
//! impl ActorEntity for Order {
//!     type Context = (RestaurantClient, DishClient);
//! }
//! ```
//!
//! ## Shutdown
//!
//! [`DeliverySystem::shutdown`] drops every client, which closes the channels, and
//! then awaits the actor tasks. The order actor holds clones of the restaurant and
//! dish clients, so those two stores stop only after the order store has. The graph
//! is acyclic, so channel closure is enough.
//!
//! See [`setup_tracing`] for log setup.

pub mod delivery_system;
pub mod tracing;

pub use delivery_system::DeliverySystem;
pub use self::tracing::setup_tracing;
