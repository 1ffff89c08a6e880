//! Represents a restaurant and the ids of what it owns.
//!
//! Managed by the restaurant store, see [`crate::restaurant_actor`].
//! Menu dishes and placed orders are referenced by id only; resolving them is the
//! job of the dish and order clients.

use crate::model::{DishId, OrderId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// A cuisine grouping, keyed by its slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

impl Category {
    /// Normalizes a free-form category name: trimmed, lowercased, spaces become `-` in the slug.
    ///
    /// ```
    /// use nuber_eats::model::Category;
    /// let category = Category::from_name("  Korean BBQ ");
    /// assert_eq!(category.name, "korean bbq");
    /// assert_eq!(category.slug, "korean-bbq");
    /// ```
    pub fn from_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        let slug = name.replace(' ', "-");
        Self { name, slug }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cover_img: String,
    pub address: String,
    pub category: Option<Category>,
    pub owner_id: UserId,
    pub menu: Vec<DishId>,
    pub orders: Vec<OrderId>,
}

/// Payload for creating a new restaurant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantCreate {
    pub name: String,
    pub cover_img: String,
    pub address: String,
    pub category: Option<Category>,
    pub owner_id: UserId,
}

/// Payload for updating a restaurant. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub cover_img: Option<String>,
    pub address: Option<String>,
    pub category: Option<Category>,
}
