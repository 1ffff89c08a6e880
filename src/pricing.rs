//! # Order Pricing
//!
//! Turns a dish plus the customer's option picks into a line price, and line
//! prices into an order total. Both are pure and never fail: a pick that names an
//! option or choice the dish does not have simply costs nothing. Checking that the
//! dish and restaurant exist is the caller's job and happens before pricing.

use crate::model::{Dish, OrderItem, SelectedOption};

/// Price of one order line: the dish's base price plus every applicable surcharge.
///
/// For each pick, the option with the same name is looked up on the dish:
///
/// - an option with a flat `extra` charges that amount and its choices are never
///   consulted, even when the pick names one;
/// - otherwise the named choice, if it exists and has an `extra`, is charged.
///
/// A zero flat `extra` counts as no flat extra, so the choice is consulted.
///
/// ```
/// use nuber_eats::model::{Dish, DishChoice, DishId, DishOption, RestaurantId, SelectedOption};
/// use nuber_eats::pricing::price_item;
///
/// let dish = Dish {
///     id: DishId(1),
///     name: "Bibimbap".into(),
///     price: 10.0,
///     description: "Mixed rice bowl".into(),
///     photo: None,
///     restaurant_id: RestaurantId(1),
///     options: vec![DishOption::with_choices(
///         "Toppings",
///         vec![DishChoice::new("Cheese", Some(1.5))],
///     )],
/// };
/// let picks = [SelectedOption::with_choice("Toppings", "Cheese")];
/// assert_eq!(price_item(&dish, &picks), 11.5);
/// ```
pub fn price_item(dish: &Dish, selections: &[SelectedOption]) -> f64 {
    selections
        .iter()
        .map(|selection| surcharge(dish, selection))
        .fold(dish.price, |price, extra| price + extra)
}

fn surcharge(dish: &Dish, selection: &SelectedOption) -> f64 {
    let Some(option) = dish.option(&selection.name) else {
        return 0.0;
    };
    match option.extra {
        Some(extra) if extra != 0.0 => extra,
        _ => selection
            .choice
            .as_deref()
            .and_then(|name| option.choice(name))
            .and_then(|choice| choice.extra)
            .unwrap_or(0.0),
    }
}

/// Sum of the already-priced lines.
pub fn order_total(items: &[OrderItem]) -> f64 {
    items.iter().map(|item| item.price).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DishChoice, DishId, DishOption, RestaurantId};

    fn dish(price: f64, options: Vec<DishOption>) -> Dish {
        Dish {
            id: DishId(1),
            name: "Bulgogi".to_string(),
            price,
            description: "Marinated beef".to_string(),
            photo: None,
            restaurant_id: RestaurantId(1),
            options,
        }
    }

    fn size_option() -> DishOption {
        DishOption {
            name: "Size".to_string(),
            extra: Some(2.0),
            choices: vec![
                DishChoice::new("Large", Some(5.0)),
                DishChoice::new("Small", None),
            ],
        }
    }

    fn toppings_option() -> DishOption {
        DishOption::with_choices(
            "Toppings",
            vec![
                DishChoice::new("Cheese", Some(1.5)),
                DishChoice::new("Onion", None),
            ],
        )
    }

    #[test]
    fn base_price_without_selections() {
        assert_eq!(price_item(&dish(10.0, vec![size_option()]), &[]), 10.0);
    }

    #[test]
    fn unknown_option_costs_nothing() {
        let dish = dish(10.0, vec![size_option(), toppings_option()]);
        let picks = [SelectedOption::with_choice("Sauce", "Spicy")];
        assert_eq!(price_item(&dish, &picks), 10.0);
    }

    #[test]
    fn flat_extra_wins_over_choices() {
        let dish = dish(10.0, vec![size_option()]);
        assert_eq!(price_item(&dish, &[SelectedOption::new("Size")]), 12.0);
        assert_eq!(
            price_item(&dish, &[SelectedOption::with_choice("Size", "Large")]),
            12.0
        );
    }

    #[test]
    fn choice_extra_is_added() {
        let dish = dish(10.0, vec![toppings_option()]);
        let picks = [SelectedOption::with_choice("Toppings", "Cheese")];
        assert_eq!(price_item(&dish, &picks), 11.5);
    }

    #[test]
    fn missing_or_free_choice_costs_nothing() {
        let dish = dish(10.0, vec![toppings_option()]);
        for pick in [
            SelectedOption::new("Toppings"),
            SelectedOption::with_choice("Toppings", "Onion"),
            SelectedOption::with_choice("Toppings", "Pineapple"),
        ] {
            assert_eq!(price_item(&dish, &[pick]), 10.0);
        }
    }

    #[test]
    fn zero_flat_extra_falls_through_to_choice() {
        let option = DishOption {
            name: "Size".to_string(),
            extra: Some(0.0),
            choices: vec![DishChoice::new("Large", Some(3.0))],
        };
        let dish = dish(10.0, vec![option]);
        let picks = [SelectedOption::with_choice("Size", "Large")];
        assert_eq!(price_item(&dish, &picks), 13.0);
    }

    #[test]
    fn every_matching_selection_is_charged() {
        let dish = dish(10.0, vec![size_option(), toppings_option()]);
        let picks = [
            SelectedOption::new("Size"),
            SelectedOption::with_choice("Toppings", "Cheese"),
        ];
        assert_eq!(price_item(&dish, &picks), 13.5);
    }

    #[test]
    fn total_sums_lines() {
        let size = dish(10.0, vec![size_option()]);
        let toppings = dish(10.0, vec![toppings_option()]);
        let lines = [
            (&size, vec![SelectedOption::with_choice("Size", "Large")]),
            (&toppings, vec![SelectedOption::with_choice("Toppings", "Cheese")]),
        ];
        let items: Vec<OrderItem> = lines
            .into_iter()
            .map(|(dish, options)| OrderItem {
                dish_id: dish.id,
                price: price_item(dish, &options),
                options,
            })
            .collect();

        assert_eq!(items[0].price, 12.0);
        assert_eq!(items[1].price, 11.5);
        assert_eq!(order_total(&items), 23.5);
    }

    #[test]
    fn empty_order_totals_zero() {
        assert_eq!(order_total(&[]), 0.0);
    }
}
