//! In-memory resource stores built on the actor model.
//!
//! Every persisted type (users, restaurants, dishes, orders) gets one
//! [`ResourceActor`] task that exclusively owns its entities, and any number of
//! [`ResourceClient`] handles that talk to it over a channel.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - what a stored type implements: payload types, hooks, error type
//! - [`ResourceActor`] - the task that owns a store and serves CRUD, List and Action requests
//! - [`ResourceClient`] - cloneable async handle to one store
//! - [`ActorClient`] - shared `get`/`list`/`delete` for the typed clients
//! - [`FrameworkError`] - channel and lookup failures, plus boxed entity errors
//!
//! # Testing
//!
//! See [`mock`] for scripted stand-ins that need no running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
