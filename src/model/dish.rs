//! Represents a menu item and its customization axes.
//!
//! Managed by the dish store, see [`crate::dish_actor`]. Pricing over these types
//! lives in [`crate::pricing`].

use crate::model::RestaurantId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DishId(pub u32);

impl From<u32> for DishId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dish_{}", self.0)
    }
}

/// One selectable value under a [`DishOption`], e.g. "Large".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishChoice {
    pub name: String,
    pub extra: Option<f64>,
}

impl DishChoice {
    pub fn new(name: impl Into<String>, extra: Option<f64>) -> Self {
        Self {
            name: name.into(),
            extra,
        }
    }
}

/// A named customization axis, e.g. "Size".
///
/// Either a flat surcharge (`extra`), a list of `choices` each with their own
/// surcharge, or both; when both are set only `extra` is ever charged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishOption {
    pub name: String,
    pub extra: Option<f64>,
    #[serde(default)]
    pub choices: Vec<DishChoice>,
}

impl DishOption {
    /// An option that charges a flat amount.
    pub fn flat(name: impl Into<String>, extra: f64) -> Self {
        Self {
            name: name.into(),
            extra: Some(extra),
            choices: Vec::new(),
        }
    }

    /// An option whose price depends on the chosen value.
    pub fn with_choices(name: impl Into<String>, choices: Vec<DishChoice>) -> Self {
        Self {
            name: name.into(),
            extra: None,
            choices,
        }
    }

    pub fn choice(&self, name: &str) -> Option<&DishChoice> {
        self.choices.iter().find(|choice| choice.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub photo: Option<String>,
    pub restaurant_id: RestaurantId,
    pub options: Vec<DishOption>,
}

impl Dish {
    pub fn option(&self, name: &str) -> Option<&DishOption> {
        self.options.iter().find(|option| option.name == name)
    }
}

/// Payload for creating a new dish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub photo: Option<String>,
    pub restaurant_id: RestaurantId,
    #[serde(default)]
    pub options: Vec<DishOption>,
}

/// Payload for updating a dish. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub photo: Option<String>,
    pub options: Option<Vec<DishOption>>,
}
