//! Request workflows.
//!
//! Each service takes the already-identified caller plus a serializable input and
//! returns a serializable output built on [`CoreOutput`]. Store errors never leave
//! this layer: they are logged and replaced by fixed user-facing messages.

pub mod order_service;
pub mod output;
pub mod restaurant_service;
pub mod user_service;

pub use order_service::*;
pub use output::{CoreOutput, PageInput};
pub use restaurant_service::*;
pub use user_service::*;
