//! Pure data structures implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod dish;
pub mod order;
pub mod restaurant;
pub mod user;

pub use dish::*;
pub use order::*;
pub use restaurant::*;
pub use user::*;
