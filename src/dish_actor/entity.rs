//! [`ActorEntity`] implementation for [`Dish`].

use super::error::DishError;
use crate::framework::ActorEntity;
use crate::model::{Dish, DishCreate, DishId, DishOption, DishUpdate};
use async_trait::async_trait;
use std::collections::HashSet;

const MIN_NAME_LEN: usize = 5;
const DESCRIPTION_LEN: std::ops::RangeInclusive<usize> = 5..=140;

fn validate_name(name: &str) -> Result<(), DishError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(DishError::ValidationError(format!(
            "name must be at least {MIN_NAME_LEN} characters: {name:?}"
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<(), DishError> {
    if !DESCRIPTION_LEN.contains(&description.chars().count()) {
        return Err(DishError::ValidationError(format!(
            "description must be {} to {} characters",
            DESCRIPTION_LEN.start(),
            DESCRIPTION_LEN.end()
        )));
    }
    Ok(())
}

fn validate_amount(what: &str, amount: f64) -> Result<(), DishError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(DishError::ValidationError(format!("invalid {what}: {amount}")));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), DishError> {
    validate_amount("price", price)
}

/// Option names are unique within a dish, choice names within an option.
/// Every extra is a finite, non-negative amount.
fn validate_options(options: &[DishOption]) -> Result<(), DishError> {
    let mut option_names = HashSet::new();
    for option in options {
        if !option_names.insert(option.name.as_str()) {
            return Err(DishError::ValidationError(format!(
                "duplicate option: {:?}",
                option.name
            )));
        }
        if let Some(extra) = option.extra {
            validate_amount("extra", extra)?;
        }
        let mut choice_names = HashSet::new();
        for choice in &option.choices {
            if !choice_names.insert(choice.name.as_str()) {
                return Err(DishError::ValidationError(format!(
                    "duplicate choice {:?} in option {:?}",
                    choice.name, option.name
                )));
            }
            if let Some(extra) = choice.extra {
                validate_amount("extra", extra)?;
            }
        }
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = DishError;

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, DishError> {
        validate_name(&params.name)?;
        validate_description(&params.description)?;
        validate_price(params.price)?;
        validate_options(&params.options)?;
        Ok(Dish {
            id,
            name: params.name.trim().to_string(),
            price: params.price,
            description: params.description,
            photo: params.photo,
            restaurant_id: params.restaurant_id,
            options: params.options,
        })
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), DishError> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name.trim().to_string();
        }
        if let Some(price) = update.price {
            validate_price(price)?;
            self.price = price;
        }
        if let Some(description) = update.description {
            validate_description(&description)?;
            self.description = description;
        }
        if let Some(photo) = update.photo {
            self.photo = Some(photo);
        }
        if let Some(options) = update.options {
            validate_options(&options)?;
            self.options = options;
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), DishError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DishChoice, RestaurantId};

    fn params() -> DishCreate {
        DishCreate {
            name: "Bibimbap".to_string(),
            price: 10.0,
            description: "Rice bowl".to_string(),
            photo: None,
            restaurant_id: RestaurantId(1),
            options: vec![DishOption::with_choices(
                "Size",
                vec![DishChoice::new("L", Some(2.0)), DishChoice::new("XL", Some(5.0))],
            )],
        }
    }

    #[test]
    fn accepts_valid_dish() {
        let dish = Dish::from_create_params(DishId(3), params()).unwrap();
        assert_eq!(dish.id, DishId(3));
        assert_eq!(dish.option("Size").and_then(|o| o.choice("XL")).and_then(|c| c.extra), Some(5.0));
    }

    #[test]
    fn rejects_negative_price() {
        let result = Dish::from_create_params(DishId(1), DishCreate { price: -1.0, ..params() });
        assert!(matches!(result, Err(DishError::ValidationError(_))));
    }

    #[test]
    fn rejects_duplicate_option_and_choice_names() {
        let mut dup_option = params();
        dup_option.options.push(DishOption::flat("Size", 1.0));
        assert!(Dish::from_create_params(DishId(1), dup_option).is_err());

        let mut dup_choice = params();
        dup_choice.options[0].choices.push(DishChoice::new("L", None));
        assert!(Dish::from_create_params(DishId(1), dup_choice).is_err());
    }

    #[test]
    fn rejects_bad_option_extras() {
        for extra in [-20.0, f64::NAN, f64::INFINITY] {
            let mut flat = params();
            flat.options.push(DishOption::flat("Spice", extra));
            assert!(
                matches!(Dish::from_create_params(DishId(1), flat), Err(DishError::ValidationError(_))),
                "option extra {extra} accepted"
            );

            let mut choice = params();
            choice.options[0].choices.push(DishChoice::new("XXL", Some(extra)));
            assert!(
                matches!(Dish::from_create_params(DishId(1), choice), Err(DishError::ValidationError(_))),
                "choice extra {extra} accepted"
            );
        }

        let mut free = params();
        free.options.push(DishOption::flat("Spice", 0.0));
        assert!(Dish::from_create_params(DishId(1), free).is_ok());
    }

    #[tokio::test]
    async fn update_rejects_bad_option_extras() {
        let mut dish = Dish::from_create_params(DishId(1), params()).unwrap();
        let update = DishUpdate {
            options: Some(vec![DishOption::flat("Size", -1.0)]),
            ..Default::default()
        };
        assert!(matches!(
            dish.on_update(update, &()).await,
            Err(DishError::ValidationError(_))
        ));

        let update = DishUpdate {
            options: Some(vec![DishOption::with_choices(
                "Size",
                vec![DishChoice::new("L", Some(f64::INFINITY))],
            )]),
            ..Default::default()
        };
        assert!(dish.on_update(update, &()).await.is_err());
        assert_eq!(dish.options, params().options);
    }

    #[tokio::test]
    async fn invalid_update_is_rejected() {
        let mut dish = Dish::from_create_params(DishId(1), params()).unwrap();
        let update = DishUpdate {
            price: Some(f64::NAN),
            ..Default::default()
        };
        assert!(dish.on_update(update, &()).await.is_err());

        let update = DishUpdate {
            price: Some(12.5),
            ..Default::default()
        };
        dish.on_update(update, &()).await.unwrap();
        assert_eq!(dish.price, 12.5);
        assert_eq!(dish.name, "Bibimbap");
    }
}
