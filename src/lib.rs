//! # Nuber Eats
//!
//! > **The core of a food-delivery back end, on resource-oriented actors.**
//!
//! Customers order dishes from restaurants, owners cook them, drivers deliver them.
//! This crate holds the two pieces of business logic that matter most, and the
//! workflows around them:
//!
//! - **Pricing** ([`pricing`]): what an order item costs given the options the
//!   customer picked.
//! - **Order access** ([`order_guard`]): who may see an order, and which status
//!   each role may set.
//!
//! ## 🏗️ Architecture
//!
//! Every stored type (users, restaurants, dishes, orders) lives in its own
//! [`ResourceActor`](framework::ResourceActor): a Tokio task that owns the data
//! and handles requests one at a time, so no locks are needed. Typed clients hide
//! the message passing, and services turn client calls into `{ ok, error? }`
//! responses.
//!
//! ```text
//! services ──► clients ──► ResourceActor<User | Restaurant | Dish | Order>
//!                                              │
//!                       Order::on_create ──────┴──► RestaurantClient, DishClient
//! ```
//!
//! Placing an order is a single create on the order store. Its `on_create` hook
//! looks up the restaurant and dishes through injected clients, prices every item
//! and records the order on the restaurant before anything is stored.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic actor, client, entity trait and test doubles.
//!
//! ### 2. The Data ([`model`])
//! Plain serializable structs and the create/update payloads for each store.
//!
//! ### 3. The Rules ([`pricing`], [`order_guard`])
//! Pure functions, no I/O.
//!
//! ### 4. The Stores ([`user_actor`], [`restaurant_actor`], [`dish_actor`], [`order_actor`])
//! `ActorEntity` implementations with their validation and hooks.
//!
//! ### 5. The Interface ([`clients`], [`services`])
//! Typed clients, and the workflows a front end calls.
//!
//! ### 6. The Orchestrator ([`lifecycle`], [`config`])
//! [`DeliverySystem`](lifecycle::DeliverySystem) starts and stops everything;
//! [`AppConfig`](config::AppConfig) sizes it.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! NUBER_CONFIG=nuber.example.toml cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod dish_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod order_guard;
pub mod pricing;
pub mod restaurant_actor;
pub mod services;
pub mod user_actor;
