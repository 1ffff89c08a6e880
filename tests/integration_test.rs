use nuber_eats::config::AppConfig;
use nuber_eats::framework::ActorClient;
use nuber_eats::lifecycle::DeliverySystem;
use nuber_eats::model::{
    DishChoice, DishId, DishOption, OrderCreate, OrderId, OrderItemSelection, OrderStatus,
    RestaurantId, SelectedOption, User, UserRole,
};
use nuber_eats::services::*;

struct Cast {
    owner: User,
    customer: User,
    driver: User,
}

async fn user(system: &DeliverySystem, email: &str, role: UserRole) -> User {
    let account = system
        .user_service
        .create_account(CreateAccountInput {
            email: email.to_string(),
            role,
        })
        .await;
    assert!(account.core.ok, "{:?}", account.core.error);
    system
        .user_service
        .user_profile(UserProfileInput {
            user_id: account.user_id.unwrap(),
        })
        .await
        .user
        .unwrap()
}

async fn cast(system: &DeliverySystem) -> Cast {
    Cast {
        owner: user(system, "owner@nuber.test", UserRole::Owner).await,
        customer: user(system, "customer@nuber.test", UserRole::Client).await,
        driver: user(system, "driver@nuber.test", UserRole::Delivery).await,
    }
}

async fn restaurant(
    system: &DeliverySystem,
    owner: &User,
    name: &str,
    category: &str,
) -> RestaurantId {
    let output = system
        .restaurant_service
        .create_restaurant(
            owner,
            CreateRestaurantInput {
                name: name.to_string(),
                cover_img: "cover.png".to_string(),
                address: "Gangnam".to_string(),
                category_name: category.to_string(),
            },
        )
        .await;
    assert!(output.core.ok, "{:?}", output.core.error);
    output.restaurant_id.unwrap()
}

async fn bibimbap(system: &DeliverySystem, owner: &User, restaurant_id: RestaurantId) -> DishId {
    let output = system
        .restaurant_service
        .create_dish(
            owner,
            CreateDishInput {
                restaurant_id,
                name: "Bibimbap".to_string(),
                price: 10.0,
                description: "Rice bowl".to_string(),
                photo: None,
                options: vec![
                    DishOption {
                        name: "Size".to_string(),
                        extra: Some(2.0),
                        choices: vec![DishChoice::new("L", Some(3.0))],
                    },
                    DishOption::with_choices(
                        "Toppings",
                        vec![DishChoice::new("Cheese", Some(1.5))],
                    ),
                ],
            },
        )
        .await;
    assert!(output.core.ok, "{:?}", output.core.error);
    output.dish_id.unwrap()
}

fn items(dish_id: DishId) -> Vec<OrderItemSelection> {
    vec![
        OrderItemSelection {
            dish_id,
            options: vec![SelectedOption::with_choice("Size", "L")],
        },
        OrderItemSelection {
            dish_id,
            options: vec![SelectedOption::with_choice("Toppings", "Cheese")],
        },
    ]
}

fn error_of(output: &CoreOutput) -> Option<&str> {
    output.error.as_deref()
}

/// Full end-to-end flow with all real actors: checkout, pricing, and the
/// owner's status edits.
#[tokio::test]
async fn test_full_delivery_flow() {
    let system = DeliverySystem::new(&AppConfig::default());
    let Cast { owner, customer, .. } = cast(&system).await;
    let restaurant_id = restaurant(&system, &owner, "Seoul Kitchen", "Korean").await;
    let dish_id = bibimbap(&system, &owner, restaurant_id).await;

    let created = system
        .order_service
        .create_order(
            &customer,
            CreateOrderInput {
                restaurant_id,
                items: items(dish_id),
            },
        )
        .await;
    assert!(created.core.ok, "{:?}", created.core.error);
    let order_id = created.order_id.unwrap();

    let fetched = system
        .order_service
        .get_order(&customer, GetOrderInput { id: order_id })
        .await;
    let order = fetched.order.expect("customer sees own order");
    assert_eq!(order.total, 23.5);
    assert_eq!(order.status, OrderStatus::Pending);

    let stored = system
        .restaurant_client
        .get(restaurant_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.orders, vec![order_id]);
    assert_eq!(stored.menu, vec![dish_id]);

    // The guard does not check the current status: Cooked straight from Pending.
    let cooked = system
        .order_service
        .edit_order(
            &owner,
            EditOrderInput {
                id: order_id,
                status: OrderStatus::Cooked,
            },
        )
        .await;
    assert!(cooked.ok, "{:?}", cooked.error);

    let owner_view = system
        .order_service
        .get_orders(
            &owner,
            GetOrdersInput {
                status: Some(OrderStatus::Cooked),
            },
        )
        .await;
    let orders = owner_view.orders.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].status, OrderStatus::Cooked);
    assert_eq!(orders[0].total, 23.5);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_checkout_failures() {
    let system = DeliverySystem::new(&AppConfig::default());
    let Cast { owner, customer, .. } = cast(&system).await;
    let restaurant_id = restaurant(&system, &owner, "Seoul Kitchen", "Korean").await;

    let no_restaurant = system
        .order_service
        .create_order(
            &customer,
            CreateOrderInput {
                restaurant_id: RestaurantId(99),
                items: Vec::new(),
            },
        )
        .await;
    assert_eq!(error_of(&no_restaurant.core), Some("Restaurant not found"));

    let no_dish = system
        .order_service
        .create_order(
            &customer,
            CreateOrderInput {
                restaurant_id,
                items: items(DishId(42)),
            },
        )
        .await;
    assert_eq!(error_of(&no_dish.core), Some("Dish not found"));

    let customer_orders = system
        .order_service
        .get_orders(&customer, GetOrdersInput::default())
        .await;
    assert_eq!(customer_orders.orders.map(|o| o.len()), Some(0));

    let missing = system
        .order_service
        .get_order(&customer, GetOrderInput { id: OrderId(7) })
        .await;
    assert_eq!(error_of(&missing.core), Some("Order not found"));

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_order_visibility_and_transitions() {
    let system = DeliverySystem::new(&AppConfig::default());
    let Cast {
        owner,
        customer,
        driver,
    } = cast(&system).await;
    let stranger = user(&system, "other@nuber.test", UserRole::Client).await;
    let rival = user(&system, "rival@nuber.test", UserRole::Owner).await;
    let restaurant_id = restaurant(&system, &owner, "Seoul Kitchen", "Korean").await;
    let dish_id = bibimbap(&system, &owner, restaurant_id).await;

    let order_id = system
        .order_service
        .create_order(
            &customer,
            CreateOrderInput {
                restaurant_id,
                items: items(dish_id),
            },
        )
        .await
        .order_id
        .unwrap();

    for outsider in [&stranger, &rival, &driver] {
        let output = system
            .order_service
            .get_order(outsider, GetOrderInput { id: order_id })
            .await;
        assert_eq!(error_of(&output.core), Some("You can't see that"));
    }

    let edit = |status| EditOrderInput {
        id: order_id,
        status,
    };
    let by_customer = system
        .order_service
        .edit_order(&customer, edit(OrderStatus::Cooking))
        .await;
    assert_eq!(error_of(&by_customer), Some("You can't do that"));

    let owner_delivers = system
        .order_service
        .edit_order(&owner, edit(OrderStatus::Delivered))
        .await;
    assert_eq!(error_of(&owner_delivers), Some("You can't do that"));

    let by_stranger = system
        .order_service
        .edit_order(&stranger, edit(OrderStatus::Cooking))
        .await;
    assert_eq!(error_of(&by_stranger), Some("You can't see that"));

    let unchanged = system
        .order_client
        .get(order_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.status, OrderStatus::Pending);

    system.shutdown().await.expect("Failed to shutdown system");
}

/// Drivers are only ever set at creation, so this goes through the order client.
#[tokio::test]
async fn test_driver_edits_delivery_statuses() {
    let system = DeliverySystem::new(&AppConfig::default());
    let Cast {
        owner,
        customer,
        driver,
    } = cast(&system).await;
    let restaurant_id = restaurant(&system, &owner, "Seoul Kitchen", "Korean").await;
    let dish_id = bibimbap(&system, &owner, restaurant_id).await;

    let order_id = system
        .order_client
        .create_order(OrderCreate {
            customer_id: customer.id,
            driver_id: Some(driver.id),
            restaurant_id,
            items: items(dish_id),
        })
        .await
        .unwrap();

    for status in [OrderStatus::PickedUp, OrderStatus::Delivered] {
        let output = system
            .order_service
            .edit_order(&driver, EditOrderInput { id: order_id, status })
            .await;
        assert!(output.ok, "{:?}", output.error);
    }
    let cooking = system
        .order_service
        .edit_order(
            &driver,
            EditOrderInput {
                id: order_id,
                status: OrderStatus::Cooking,
            },
        )
        .await;
    assert_eq!(error_of(&cooking), Some("You can't do that"));

    let driven = system
        .order_service
        .get_orders(&driver, GetOrdersInput::default())
        .await
        .orders
        .unwrap();
    assert_eq!(driven.len(), 1);
    assert!(driven[0].status.is_terminal());

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_restaurant_management() {
    let config = AppConfig {
        page_size: 2,
        ..AppConfig::default()
    };
    let system = DeliverySystem::new(&config);
    let Cast {
        owner, customer, ..
    } = cast(&system).await;
    let rival = user(&system, "rival@nuber.test", UserRole::Owner).await;

    let seoul = restaurant(&system, &owner, "Seoul Kitchen", "Korean Food").await;
    restaurant(&system, &owner, "Busan Grill", "korean food ").await;
    restaurant(&system, &rival, "Tokyo Ramen", "Japanese").await;

    let categories = system.restaurant_service.all_categories().await;
    let categories = categories.categories.unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].category.slug, "korean-food");
    assert_eq!(categories[0].restaurant_count, 2);

    let korean = system
        .restaurant_service
        .find_category_by_slug(CategoryInput {
            slug: "korean-food".to_string(),
            page: PageInput::default(),
        })
        .await;
    assert_eq!(korean.total_results, 2);
    assert_eq!(korean.total_pages, 1);

    let missing = system
        .restaurant_service
        .find_category_by_slug(CategoryInput {
            slug: "thai".to_string(),
            page: PageInput::default(),
        })
        .await;
    assert_eq!(error_of(&missing.core), Some("Category not found"));

    let second_page = system
        .restaurant_service
        .all_restaurants(PageInput { page: 2 })
        .await;
    assert_eq!(second_page.total_pages, 2);
    assert_eq!(second_page.total_results, 3);
    let names: Vec<_> = second_page.results.unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Tokyo Ramen"]);

    let search = system
        .restaurant_service
        .search_restaurant_by_name(SearchRestaurantInput {
            query: "KITCHEN".to_string(),
            page: PageInput::default(),
        })
        .await;
    assert_eq!(search.total_results, 1);

    let hijack = system
        .restaurant_service
        .edit_restaurant(
            &rival,
            EditRestaurantInput {
                restaurant_id: seoul,
                name: Some("Stolen Kitchen".to_string()),
                cover_img: None,
                address: None,
                category_name: None,
            },
        )
        .await;
    assert_eq!(
        error_of(&hijack),
        Some("You can't edit a restaurant that you don't own")
    );

    let dish_id = bibimbap(&system, &owner, seoul).await;
    let foreign_dish = system
        .restaurant_service
        .delete_dish(&rival, DeleteDishInput { dish_id })
        .await;
    assert_eq!(error_of(&foreign_dish), Some("You can't do that"));

    let repriced = system
        .restaurant_service
        .edit_dish(
            &owner,
            EditDishInput {
                dish_id,
                name: None,
                price: Some(11.0),
                description: None,
                photo: None,
                options: None,
            },
        )
        .await;
    assert!(repriced.ok, "{:?}", repriced.error);
    assert_eq!(
        system.dish_client.get(dish_id).await.unwrap().unwrap().price,
        11.0
    );

    let order_id = system
        .order_service
        .create_order(
            &customer,
            CreateOrderInput {
                restaurant_id: seoul,
                items: items(dish_id),
            },
        )
        .await
        .order_id
        .unwrap();

    let refused = system
        .restaurant_service
        .delete_restaurant(&rival, DeleteRestaurantInput { restaurant_id: seoul })
        .await;
    assert_eq!(
        error_of(&refused),
        Some("You can't delete a restaurant that you don't own")
    );

    let deleted = system
        .restaurant_service
        .delete_restaurant(&owner, DeleteRestaurantInput { restaurant_id: seoul })
        .await;
    assert!(deleted.ok, "{:?}", deleted.error);
    assert!(system.dish_client.get(dish_id).await.unwrap().is_none());

    // The order survives, but no owner can resolve it any more.
    let orphan = system
        .order_service
        .get_order(&owner, GetOrderInput { id: order_id })
        .await;
    assert_eq!(error_of(&orphan.core), Some("You can't see that"));
    let own = system
        .order_service
        .get_order(&customer, GetOrderInput { id: order_id })
        .await;
    assert!(own.core.ok);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_accounts() {
    let system = DeliverySystem::new(&AppConfig::default());
    let Cast { customer, .. } = cast(&system).await;

    let duplicate = system
        .user_service
        .create_account(CreateAccountInput {
            email: "customer@nuber.test".to_string(),
            role: UserRole::Owner,
        })
        .await;
    assert_eq!(
        error_of(&duplicate.core),
        Some("There is a user with that email already")
    );

    let malformed = system
        .user_service
        .create_account(CreateAccountInput {
            email: "not-an-email".to_string(),
            role: UserRole::Client,
        })
        .await;
    assert_eq!(error_of(&malformed.core), Some("Couldn't create account"));

    system
        .user_client
        .update_user(
            customer.id,
            nuber_eats::model::UserUpdate {
                email: None,
                verified: Some(true),
            },
        )
        .await
        .unwrap();
    let edited = system
        .user_service
        .edit_profile(
            customer.id,
            EditProfileInput {
                email: Some("new@nuber.test".to_string()),
            },
        )
        .await;
    assert!(edited.ok, "{:?}", edited.error);

    let profile = system
        .user_service
        .user_profile(UserProfileInput {
            user_id: customer.id,
        })
        .await
        .user
        .unwrap();
    assert_eq!(profile.email, "new@nuber.test");
    assert!(!profile.verified);

    let taken = system
        .user_service
        .edit_profile(
            customer.id,
            EditProfileInput {
                email: Some("owner@nuber.test".to_string()),
            },
        )
        .await;
    assert_eq!(
        error_of(&taken),
        Some("There is a user with that email already")
    );

    let nobody = system
        .user_service
        .user_profile(UserProfileInput {
            user_id: nuber_eats::model::UserId(404),
        })
        .await;
    assert_eq!(error_of(&nobody.core), Some("User not found"));

    system.shutdown().await.expect("Failed to shutdown system");
}

async fn pending_code(system: &DeliverySystem, user: &User) -> String {
    system
        .user_client
        .get(user.id)
        .await
        .unwrap()
        .and_then(|u| u.verification_code)
        .expect("unverified account holds a code")
}

async fn verify(system: &DeliverySystem, code: &str) -> CoreOutput {
    system
        .user_service
        .verify_email(VerifyEmailInput {
            code: code.to_string(),
        })
        .await
}

#[tokio::test]
async fn test_email_verification() {
    let system = DeliverySystem::new(&AppConfig::default());
    let Cast {
        customer, driver, ..
    } = cast(&system).await;

    let wrong = verify(&system, "not-a-code").await;
    assert_eq!(error_of(&wrong), Some("Verification not found"));

    let code = pending_code(&system, &customer).await;
    assert_ne!(code, pending_code(&system, &driver).await);
    let verified = verify(&system, &code).await;
    assert!(verified.ok, "{:?}", verified.error);

    let profile = system
        .user_service
        .user_profile(UserProfileInput {
            user_id: customer.id,
        })
        .await
        .user
        .unwrap();
    assert!(profile.verified);
    assert_eq!(profile.verification_code, None);

    // Codes are single-use.
    let reused = verify(&system, &code).await;
    assert_eq!(error_of(&reused), Some("Verification not found"));

    // A new email needs a new verification; the old code stays dead.
    let edited = system
        .user_service
        .edit_profile(
            customer.id,
            EditProfileInput {
                email: Some("moved@nuber.test".to_string()),
            },
        )
        .await;
    assert!(edited.ok, "{:?}", edited.error);
    let reissued = pending_code(&system, &customer).await;
    assert_ne!(reissued, code);
    assert_eq!(error_of(&verify(&system, &code).await), Some("Verification not found"));
    assert!(verify(&system, &reissued).await.ok);

    // The driver's own code was untouched.
    let driver_code = pending_code(&system, &driver).await;
    assert!(verify(&system, &driver_code).await.ok);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn test_dish_extras_must_be_non_negative_amounts() {
    let system = DeliverySystem::new(&AppConfig::default());
    let Cast { owner, customer, .. } = cast(&system).await;
    let restaurant_id = restaurant(&system, &owner, "Seoul Kitchen", "Korean").await;

    for extra in [-20.0, f64::NAN, f64::INFINITY] {
        let output = system
            .restaurant_service
            .create_dish(
                &owner,
                CreateDishInput {
                    restaurant_id,
                    name: "Tteokbokki".to_string(),
                    price: 10.0,
                    description: "Rice cakes".to_string(),
                    photo: None,
                    options: vec![DishOption::flat("Size", extra)],
                },
            )
            .await;
        assert_eq!(
            error_of(&output.core),
            Some("Could not create dish"),
            "extra {extra} accepted"
        );
    }

    let dish_id = bibimbap(&system, &owner, restaurant_id).await;
    let edited = system
        .restaurant_service
        .edit_dish(
            &owner,
            EditDishInput {
                dish_id,
                name: None,
                price: None,
                description: None,
                photo: None,
                options: Some(vec![DishOption::with_choices(
                    "Size",
                    vec![DishChoice::new("L", Some(-5.0))],
                )]),
            },
        )
        .await;
    assert_eq!(error_of(&edited), Some("Could not edit dish"));

    // The menu holds only the valid dish, and it still prices as before.
    let stored = system
        .restaurant_client
        .get(restaurant_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.menu, vec![dish_id]);

    let created = system
        .order_service
        .create_order(
            &customer,
            CreateOrderInput {
                restaurant_id,
                items: items(dish_id),
            },
        )
        .await;
    let order = system
        .order_service
        .get_order(
            &customer,
            GetOrderInput {
                id: created.order_id.unwrap(),
            },
        )
        .await
        .order
        .unwrap();
    assert_eq!(order.total, 23.5);

    system.shutdown().await.expect("Failed to shutdown system");
}
