//! # ActorEntity Trait
//!
//! The contract every stored resource (users, restaurants, dishes, orders) implements
//! so that a single generic [`ResourceActor`](super::ResourceActor) can own it.
//!
//! Associated types pin each resource to its own payloads: an `Order` store only
//! accepts an `OrderCreate`, a `Dish` store only a `DishCreate`, and the compiler
//! rejects anything else.
//!
//! # Hooks
//! `on_create` and `on_delete` have no-op defaults. `on_update` and `handle_action`
//! must be written by every entity, even when they do nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A resource that can be managed by a [`ResourceActor`](super::ResourceActor).
///
/// Hooks receive the actor's `Context`, which is handed to `run()` rather than
/// `new()`. This lets the order store hold restaurant and dish clients that were
/// created alongside it.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier allocated by the store from a monotonically increasing `u32`.
    ///
    /// `Ord` keeps listings in creation order, which pagination depends on.
    type Id: Ord + Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new instance.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD (e.g. attaching an order to a restaurant).
    type Action: Send + Sync + Debug;

    /// What an `Action` returns.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into every hook. `()` when there are none.
    type Context: Send + Sync;

    /// One error enum per resource, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the entity from its allocated id and the create payload.
    /// Runs synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the entity is stored.
    /// An error here aborts the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Runs before removal. An error keeps the entity in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
