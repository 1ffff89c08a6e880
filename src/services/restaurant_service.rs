//! # Restaurant and Menu Workflows
//!
//! Owner-side management of restaurants and dishes, plus the public catalogue
//! queries (categories, listings, search). Listings are paged in creation order.

use super::output::{paginate, CoreOutput, PageInput};
use crate::clients::{DishClient, RestaurantClient};
use crate::dish_actor::DishError;
use crate::framework::{ActorClient, Filter};
use crate::model::{
    Category, Dish, DishCreate, DishId, DishOption, DishUpdate, Restaurant, RestaurantCreate,
    RestaurantId, RestaurantUpdate, User,
};
use crate::restaurant_actor::RestaurantError;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRestaurantInput {
    pub name: String,
    pub cover_img: String,
    pub address: String,
    pub category_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRestaurantOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<RestaurantId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRestaurantInput {
    pub restaurant_id: RestaurantId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cover_img: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
}

pub type EditRestaurantOutput = CoreOutput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteRestaurantInput {
    pub restaurant_id: RestaurantId,
}

pub type DeleteRestaurantOutput = CoreOutput;

/// A category together with how many restaurants use it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    #[serde(flatten)]
    pub category: Category,
    pub restaurant_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllCategoriesOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategorySummary>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInput {
    pub slug: String,
    #[serde(flatten)]
    pub page: PageInput,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurants: Option<Vec<Restaurant>>,
    pub total_pages: u32,
    pub total_results: usize,
}

/// A page of restaurants. Shared by the full listing and by search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantsOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Restaurant>>,
    pub total_pages: u32,
    pub total_results: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantInput {
    pub restaurant_id: RestaurantId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<Restaurant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRestaurantInput {
    pub query: String,
    #[serde(flatten)]
    pub page: PageInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDishInput {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub options: Vec<DishOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateDishOutput {
    #[serde(flatten)]
    pub core: CoreOutput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<DishId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditDishInput {
    pub dish_id: DishId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub options: Option<Vec<DishOption>>,
}

pub type EditDishOutput = CoreOutput;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDishInput {
    pub dish_id: DishId,
}

pub type DeleteDishOutput = CoreOutput;

/// An empty or blank category name means "no category".
fn category_from(name: &str) -> Option<Category> {
    let category = Category::from_name(name);
    (!category.name.is_empty()).then_some(category)
}

#[derive(Clone)]
pub struct RestaurantService {
    restaurants: RestaurantClient,
    dishes: DishClient,
    page_size: usize,
}

impl RestaurantService {
    pub fn new(restaurants: RestaurantClient, dishes: DishClient, page_size: usize) -> Self {
        Self {
            restaurants,
            dishes,
            page_size,
        }
    }

    #[instrument(skip(self, owner), fields(owner_id = %owner.id))]
    pub async fn create_restaurant(
        &self,
        owner: &User,
        input: CreateRestaurantInput,
    ) -> CreateRestaurantOutput {
        let params = RestaurantCreate {
            name: input.name,
            cover_img: input.cover_img,
            address: input.address,
            category: category_from(&input.category_name),
            owner_id: owner.id,
        };
        match self.restaurants.create_restaurant(params).await {
            Ok(restaurant_id) => CreateRestaurantOutput {
                core: CoreOutput::success(),
                restaurant_id: Some(restaurant_id),
            },
            Err(e) => {
                warn!(error = %e, "create_restaurant failed");
                CreateRestaurantOutput {
                    core: CoreOutput::failure("Could not create restaurant"),
                    ..Default::default()
                }
            }
        }
    }

    #[instrument(skip(self, owner), fields(owner_id = %owner.id))]
    pub async fn edit_restaurant(
        &self,
        owner: &User,
        input: EditRestaurantInput,
    ) -> EditRestaurantOutput {
        let not_owner = "You can't edit a restaurant that you don't own";
        if let Err(output) = self
            .owned_restaurant(owner, input.restaurant_id, not_owner, "Could not edit restaurant")
            .await
        {
            return output;
        }
        let update = RestaurantUpdate {
            name: input.name,
            cover_img: input.cover_img,
            address: input.address,
            category: input.category_name.as_deref().and_then(category_from),
        };
        match self.restaurants.update_restaurant(input.restaurant_id, update).await {
            Ok(_) => CoreOutput::success(),
            Err(RestaurantError::NotFound(_)) => CoreOutput::failure("Restaurant not found"),
            Err(e) => {
                warn!(error = %e, "edit_restaurant failed");
                CoreOutput::failure("Could not edit restaurant")
            }
        }
    }

    /// Deletes the restaurant and its menu. Orders keep the dangling restaurant id.
    #[instrument(skip(self, owner), fields(owner_id = %owner.id))]
    pub async fn delete_restaurant(
        &self,
        owner: &User,
        input: DeleteRestaurantInput,
    ) -> DeleteRestaurantOutput {
        let not_owner = "You can't delete a restaurant that you don't own";
        let restaurant = match self
            .owned_restaurant(owner, input.restaurant_id, not_owner, "Could not delete restaurant")
            .await
        {
            Ok(restaurant) => restaurant,
            Err(output) => return output,
        };
        if let Err(e) = self.restaurants.delete(restaurant.id).await {
            error!(error = %e, "delete_restaurant failed");
            return CoreOutput::failure("Could not delete restaurant");
        }
        for dish_id in restaurant.menu {
            match self.dishes.delete(dish_id).await {
                Ok(()) | Err(DishError::NotFound(_)) => {}
                Err(e) => warn!(error = %e, %dish_id, "Menu cleanup failed"),
            }
        }
        info!(restaurant_id = %restaurant.id, "Restaurant deleted");
        CoreOutput::success()
    }

    /// Every category in use, in order of first appearance.
    #[instrument(skip(self))]
    pub async fn all_categories(&self) -> AllCategoriesOutput {
        let restaurants = match self.restaurants.list(Filter::all()).await {
            Ok(restaurants) => restaurants,
            Err(e) => {
                error!(error = %e, "all_categories failed");
                return AllCategoriesOutput {
                    core: CoreOutput::failure("Could not load categories"),
                    ..Default::default()
                };
            }
        };
        let mut categories: Vec<CategorySummary> = Vec::new();
        for category in restaurants.into_iter().filter_map(|r| r.category) {
            match categories.iter_mut().find(|c| c.category.slug == category.slug) {
                Some(summary) => summary.restaurant_count += 1,
                None => categories.push(CategorySummary {
                    category,
                    restaurant_count: 1,
                }),
            }
        }
        AllCategoriesOutput {
            core: CoreOutput::success(),
            categories: Some(categories),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_category_by_slug(&self, input: CategoryInput) -> CategoryOutput {
        let slug = input.slug.clone();
        let restaurants = match self
            .restaurants
            .list(Filter::new(move |r: &Restaurant| {
                r.category.as_ref().is_some_and(|c| c.slug == slug)
            }))
            .await
        {
            Ok(restaurants) => restaurants,
            Err(e) => {
                error!(error = %e, "find_category_by_slug failed");
                return CategoryOutput {
                    core: CoreOutput::failure("Could not load category"),
                    ..Default::default()
                };
            }
        };
        let Some(category) = restaurants.first().and_then(|r| r.category.clone()) else {
            return CategoryOutput {
                core: CoreOutput::failure("Category not found"),
                ..Default::default()
            };
        };
        let (page, total_pages, total_results) =
            paginate(restaurants, input.page.page, self.page_size);
        CategoryOutput {
            core: CoreOutput::success(),
            category: Some(category),
            restaurants: Some(page),
            total_pages,
            total_results,
        }
    }

    #[instrument(skip(self))]
    pub async fn all_restaurants(&self, input: PageInput) -> RestaurantsOutput {
        self.page_of(Filter::all(), input.page, "Could not load restaurants")
            .await
    }

    #[instrument(skip(self))]
    pub async fn find_restaurant_by_id(&self, input: RestaurantInput) -> RestaurantOutput {
        match self.restaurants.get(input.restaurant_id).await {
            Ok(Some(restaurant)) => RestaurantOutput {
                core: CoreOutput::success(),
                restaurant: Some(restaurant),
            },
            Ok(None) => RestaurantOutput {
                core: CoreOutput::failure("Restaurant not found"),
                ..Default::default()
            },
            Err(e) => {
                error!(error = %e, "find_restaurant_by_id failed");
                RestaurantOutput {
                    core: CoreOutput::failure("Could not find restaurant"),
                    ..Default::default()
                }
            }
        }
    }

    /// Case-insensitive substring match on the restaurant name.
    #[instrument(skip(self))]
    pub async fn search_restaurant_by_name(
        &self,
        input: SearchRestaurantInput,
    ) -> RestaurantsOutput {
        let query = input.query.trim().to_lowercase();
        let filter = Filter::new(move |r: &Restaurant| r.name.to_lowercase().contains(&query));
        self.page_of(filter, input.page.page, "Could not search for restaurants")
            .await
    }

    #[instrument(skip(self, owner), fields(owner_id = %owner.id))]
    pub async fn create_dish(&self, owner: &User, input: CreateDishInput) -> CreateDishOutput {
        let failure = |message: &str| CreateDishOutput {
            core: CoreOutput::failure(message),
            ..Default::default()
        };
        if let Err(output) = self
            .owned_restaurant(owner, input.restaurant_id, "You can't do that", "Could not create dish")
            .await
        {
            return CreateDishOutput {
                core: output,
                ..Default::default()
            };
        }
        let params = DishCreate {
            name: input.name,
            price: input.price,
            description: input.description,
            photo: input.photo,
            restaurant_id: input.restaurant_id,
            options: input.options,
        };
        let dish_id = match self.dishes.create_dish(params).await {
            Ok(dish_id) => dish_id,
            Err(e) => {
                warn!(error = %e, "create_dish failed");
                return failure("Could not create dish");
            }
        };
        if let Err(e) = self.restaurants.attach_dish(input.restaurant_id, dish_id).await {
            error!(error = %e, %dish_id, "Attaching dish to menu failed");
            if let Err(e) = self.dishes.delete(dish_id).await {
                error!(error = %e, %dish_id, "Removing unattached dish failed");
            }
            return failure("Could not create dish");
        }
        CreateDishOutput {
            core: CoreOutput::success(),
            dish_id: Some(dish_id),
        }
    }

    #[instrument(skip(self, owner), fields(owner_id = %owner.id))]
    pub async fn edit_dish(&self, owner: &User, input: EditDishInput) -> EditDishOutput {
        if let Err(output) = self.owned_dish(owner, input.dish_id, "Could not edit dish").await {
            return output;
        }
        let update = DishUpdate {
            name: input.name,
            price: input.price,
            description: input.description,
            photo: input.photo,
            options: input.options,
        };
        match self.dishes.update_dish(input.dish_id, update).await {
            Ok(_) => CoreOutput::success(),
            Err(DishError::NotFound(_)) => CoreOutput::failure("Dish not found"),
            Err(e) => {
                warn!(error = %e, "edit_dish failed");
                CoreOutput::failure("Could not edit dish")
            }
        }
    }

    #[instrument(skip(self, owner), fields(owner_id = %owner.id))]
    pub async fn delete_dish(&self, owner: &User, input: DeleteDishInput) -> DeleteDishOutput {
        let dish = match self.owned_dish(owner, input.dish_id, "Could not delete dish").await {
            Ok(dish) => dish,
            Err(output) => return output,
        };
        match self.dishes.delete(dish.id).await {
            Ok(()) => {}
            Err(DishError::NotFound(_)) => return CoreOutput::failure("Dish not found"),
            Err(e) => {
                error!(error = %e, "delete_dish failed");
                return CoreOutput::failure("Could not delete dish");
            }
        }
        match self.restaurants.detach_dish(dish.restaurant_id, dish.id).await {
            Ok(()) | Err(RestaurantError::NotFound(_)) => CoreOutput::success(),
            Err(e) => {
                error!(error = %e, "Detaching dish from menu failed");
                CoreOutput::failure("Could not delete dish")
            }
        }
    }

    /// Loads a restaurant and checks that `owner` owns it.
    async fn owned_restaurant(
        &self,
        owner: &User,
        id: RestaurantId,
        not_owner: &str,
        failed: &str,
    ) -> Result<Restaurant, CoreOutput> {
        match self.restaurants.get(id).await {
            Ok(Some(restaurant)) if restaurant.owner_id == owner.id => Ok(restaurant),
            Ok(Some(_)) => {
                warn!(%id, "Restaurant owned by someone else");
                Err(CoreOutput::failure(not_owner))
            }
            Ok(None) => Err(CoreOutput::failure("Restaurant not found")),
            Err(e) => {
                error!(error = %e, %id, "Restaurant lookup failed");
                Err(CoreOutput::failure(failed))
            }
        }
    }

    /// Loads a dish and checks that `owner` owns its restaurant.
    async fn owned_dish(&self, owner: &User, id: DishId, failed: &str) -> Result<Dish, CoreOutput> {
        let dish = match self.dishes.get(id).await {
            Ok(Some(dish)) => dish,
            Ok(None) => return Err(CoreOutput::failure("Dish not found")),
            Err(e) => {
                error!(error = %e, %id, "Dish lookup failed");
                return Err(CoreOutput::failure(failed));
            }
        };
        match self.restaurants.get(dish.restaurant_id).await {
            Ok(Some(restaurant)) if restaurant.owner_id == owner.id => Ok(dish),
            Ok(_) => Err(CoreOutput::failure("You can't do that")),
            Err(e) => {
                error!(error = %e, %id, "Restaurant lookup failed");
                Err(CoreOutput::failure(failed))
            }
        }
    }

    async fn page_of(
        &self,
        filter: Filter<Restaurant>,
        page: u32,
        failed: &str,
    ) -> RestaurantsOutput {
        match self.restaurants.list(filter).await {
            Ok(restaurants) => {
                let (results, total_pages, total_results) =
                    paginate(restaurants, page, self.page_size);
                RestaurantsOutput {
                    core: CoreOutput::success(),
                    results: Some(results),
                    total_pages,
                    total_results,
                }
            }
            Err(e) => {
                error!(error = %e, "Restaurant listing failed");
                RestaurantsOutput {
                    core: CoreOutput::failure(failed),
                    ..Default::default()
                }
            }
        }
    }
}
