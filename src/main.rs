//! # Nuber Eats demo
//!
//! Walks one order from checkout into the kitchen against an in-process
//! [`DeliverySystem`], printing each response as JSON.
//!
//! Configuration comes from the TOML file named by `NUBER_CONFIG` (optional) and
//! `NUBER_*` overrides, see [`nuber_eats::config`].

use nuber_eats::config::{AppConfig, ConfigLoader};
use nuber_eats::lifecycle::{setup_tracing, DeliverySystem};
use nuber_eats::model::{
    DishChoice, DishOption, OrderItemSelection, OrderStatus, SelectedOption, User, UserRole,
};
use nuber_eats::services::*;
use serde::Serialize;
use tracing::{info, Instrument};

fn show<T: Serialize>(label: &str, output: &T) -> Result<(), String> {
    let json = serde_json::to_string(output).map_err(|e| e.to_string())?;
    println!("{label:>18}: {json}");
    Ok(())
}

async fn sign_up(system: &DeliverySystem, email: &str, role: UserRole) -> Result<User, String> {
    let account = system
        .user_service
        .create_account(CreateAccountInput {
            email: email.to_string(),
            role,
        })
        .await;
    show("create_account", &account)?;
    let user_id = account.user_id.ok_or_else(|| format!("no account for {email}"))?;
    let profile = system
        .user_service
        .user_profile(UserProfileInput { user_id })
        .await;
    profile.user.ok_or_else(|| format!("no profile for {email}"))
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let mut loader = ConfigLoader::new();
    if let Ok(path) = std::env::var("NUBER_CONFIG") {
        loader = loader.with_file(path);
    }
    let config: AppConfig = loader.load().await.map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!(?config, "Starting Nuber Eats");
    let system = DeliverySystem::new(&config);

    let owner = sign_up(&system, "owner@nuber.test", UserRole::Owner).await?;
    let customer = sign_up(&system, "customer@nuber.test", UserRole::Client).await?;
    let driver = sign_up(&system, "driver@nuber.test", UserRole::Delivery).await?;

    let restaurant = system
        .restaurant_service
        .create_restaurant(
            &owner,
            CreateRestaurantInput {
                name: "Seoul Kitchen".to_string(),
                cover_img: "https://img.nuber.test/seoul.png".to_string(),
                address: "123 Gangnam-daero".to_string(),
                category_name: "Korean Food".to_string(),
            },
        )
        .await;
    show("create_restaurant", &restaurant)?;
    let restaurant_id = restaurant.restaurant_id.ok_or("restaurant not created")?;

    let dish = system
        .restaurant_service
        .create_dish(
            &owner,
            CreateDishInput {
                restaurant_id,
                name: "Bibimbap".to_string(),
                price: 10.0,
                description: "Rice with vegetables and egg".to_string(),
                photo: None,
                options: vec![
                    DishOption::with_choices(
                        "Size",
                        vec![DishChoice::new("L", Some(2.0)), DishChoice::new("XL", Some(5.0))],
                    ),
                    DishOption::with_choices(
                        "Toppings",
                        vec![DishChoice::new("Cheese", Some(1.5))],
                    ),
                ],
            },
        )
        .await;
    show("create_dish", &dish)?;
    let dish_id = dish.dish_id.ok_or("dish not created")?;

    let span = tracing::info_span!("order_processing");
    let order = async {
        system
            .order_service
            .create_order(
                &customer,
                CreateOrderInput {
                    restaurant_id,
                    items: vec![
                        OrderItemSelection {
                            dish_id,
                            options: vec![SelectedOption::with_choice("Size", "L")],
                        },
                        OrderItemSelection {
                            dish_id,
                            options: vec![SelectedOption::with_choice("Toppings", "Cheese")],
                        },
                    ],
                },
            )
            .await
    }
    .instrument(span)
    .await;
    show("create_order", &order)?;
    let order_id = order.order_id.ok_or("order not created")?;

    let edit = |user: &User, status: OrderStatus| {
        let user = user.clone();
        let service = system.order_service.clone();
        async move {
            service
                .edit_order(&user, EditOrderInput { id: order_id, status })
                .await
        }
    };
    show("client edits", &edit(&customer, OrderStatus::Cooking).await)?;
    show("owner cooks", &edit(&owner, OrderStatus::Cooking).await)?;
    show("owner cooked", &edit(&owner, OrderStatus::Cooked).await)?;

    // No driver has been assigned, so the driver cannot see the order yet.
    let hidden = system
        .order_service
        .get_order(&driver, GetOrderInput { id: order_id })
        .await;
    show("driver views", &hidden)?;

    let fetched = system
        .order_service
        .get_order(&customer, GetOrderInput { id: order_id })
        .await;
    show("customer views", &fetched)?;

    let categories = system.restaurant_service.all_categories().await;
    show("all_categories", &categories)?;

    system.shutdown().await?;
    info!("Demo complete");
    Ok(())
}
