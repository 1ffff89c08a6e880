//! [`ActorEntity`] implementation for [`Restaurant`].

use super::actions::RestaurantAction;
use super::error::RestaurantError;
use crate::framework::ActorEntity;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantUpdate};
use async_trait::async_trait;

const MIN_NAME_LEN: usize = 5;

fn validate_name(name: &str) -> Result<(), RestaurantError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(RestaurantError::ValidationError(format!(
            "name must be at least {MIN_NAME_LEN} characters: {name:?}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = ();
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, RestaurantError> {
        validate_name(&params.name)?;
        Ok(Restaurant {
            id,
            name: params.name.trim().to_string(),
            cover_img: params.cover_img,
            address: params.address,
            category: params.category,
            owner_id: params.owner_id,
            menu: Vec::new(),
            orders: Vec::new(),
        })
    }

    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), RestaurantError> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name.trim().to_string();
        }
        if let Some(cover_img) = update.cover_img {
            self.cover_img = cover_img;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(category) = update.category {
            self.category = Some(category);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: RestaurantAction, _ctx: &()) -> Result<(), RestaurantError> {
        match action {
            RestaurantAction::AttachDish(dish_id) => {
                if !self.menu.contains(&dish_id) {
                    self.menu.push(dish_id);
                }
            }
            RestaurantAction::DetachDish(dish_id) => self.menu.retain(|id| *id != dish_id),
            RestaurantAction::AttachOrder(order_id) => self.orders.push(order_id),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, DishId, OrderId, UserId};

    fn restaurant() -> Restaurant {
        Restaurant::from_create_params(
            RestaurantId(1),
            RestaurantCreate {
                name: " Seoul Kitchen ".to_string(),
                cover_img: "cover.png".to_string(),
                address: "Gangnam".to_string(),
                category: Some(Category::from_name("Korean")),
                owner_id: UserId(1),
            },
        )
        .unwrap()
    }

    #[test]
    fn short_names_are_rejected() {
        let result = Restaurant::from_create_params(
            RestaurantId(1),
            RestaurantCreate {
                name: "Pho".to_string(),
                cover_img: String::new(),
                address: String::new(),
                category: None,
                owner_id: UserId(1),
            },
        );
        assert!(matches!(result, Err(RestaurantError::ValidationError(_))));
        assert_eq!(restaurant().name, "Seoul Kitchen");
    }

    #[tokio::test]
    async fn menu_bookkeeping() {
        let mut restaurant = restaurant();
        for action in [
            RestaurantAction::AttachDish(DishId(1)),
            RestaurantAction::AttachDish(DishId(2)),
            RestaurantAction::AttachDish(DishId(1)),
            RestaurantAction::DetachDish(DishId(2)),
            RestaurantAction::AttachOrder(OrderId(7)),
        ] {
            restaurant.handle_action(action, &()).await.unwrap();
        }
        assert_eq!(restaurant.menu, vec![DishId(1)]);
        assert_eq!(restaurant.orders, vec![OrderId(7)]);
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let mut restaurant = restaurant();
        let update = RestaurantUpdate {
            address: Some("Mapo".to_string()),
            ..Default::default()
        };
        restaurant.on_update(update, &()).await.unwrap();
        assert_eq!(restaurant.address, "Mapo");
        assert_eq!(restaurant.name, "Seoul Kitchen");
        assert_eq!(restaurant.category.as_ref().map(|c| c.slug.as_str()), Some("korean"));
    }
}
