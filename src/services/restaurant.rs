use log::info;

use crate::domain::MIN_MEMBER_AGE;
use crate::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::dto::restaurant::ListRestaurantsParams;
use crate::forms::restaurant::{CreateRestaurantForm, UpdateRestaurantForm};
use crate::forms::validate_form;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    AttachOutcome, ClientReader, RestaurantListQuery, RestaurantReader, RestaurantWriter,
};
use crate::services::{ServiceError, ServiceResult, check_pagination};

pub fn create_restaurant<R>(repo: &R, form: &CreateRestaurantForm) -> ServiceResult<Restaurant>
where
    R: RestaurantWriter + ?Sized,
{
    validate_form(form).map_err(ServiceError::ValidationFailed)?;

    let new_restaurant: NewRestaurant = form.into();
    let restaurant = repo
        .create_restaurant(&new_restaurant)
        .map_err(ServiceError::persistence)?;
    info!("Created restaurant with ID {}", restaurant.id);

    Ok(restaurant)
}

pub fn list_restaurants<R>(
    repo: &R,
    params: ListRestaurantsParams,
) -> ServiceResult<Paginated<Restaurant>>
where
    R: RestaurantReader + ?Sized,
{
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_ITEMS_PER_PAGE);
    check_pagination(page, limit)?;

    let mut query = RestaurantListQuery::new().paginate(page, limit);
    if let Some(name) = params.name {
        query = query.name(name);
    }
    if let Some(address) = params.address {
        query = query.address(address);
    }
    if let Some(capacity) = params.capacity {
        query = query.capacity(capacity);
    }

    let (total, data) = repo.list_restaurants(query).map_err(ServiceError::query)?;
    Ok(Paginated::new(data, total, page, limit))
}

pub fn get_restaurant<R>(repo: &R, restaurant_id: i32) -> ServiceResult<Restaurant>
where
    R: RestaurantReader + ?Sized,
{
    repo.get_restaurant_by_id(restaurant_id)
        .map_err(ServiceError::query)?
        .ok_or(ServiceError::NotFound {
            entity: "Restaurant",
            id: restaurant_id,
        })
}

pub fn update_restaurant<R>(
    repo: &R,
    restaurant_id: i32,
    form: &UpdateRestaurantForm,
) -> ServiceResult<Restaurant>
where
    R: RestaurantReader + RestaurantWriter + ?Sized,
{
    validate_form(form).map_err(ServiceError::ValidationFailed)?;
    get_restaurant(repo, restaurant_id)?;

    let updates: UpdateRestaurant = form.into();
    repo.update_restaurant(restaurant_id, &updates)
        .map_err(ServiceError::persistence)
}

pub fn remove_restaurant<R>(repo: &R, restaurant_id: i32) -> ServiceResult<()>
where
    R: RestaurantWriter + ?Sized,
{
    let affected = repo
        .delete_restaurant(restaurant_id)
        .map_err(ServiceError::persistence)?;
    if affected == 0 {
        return Err(ServiceError::NotFound {
            entity: "Restaurant",
            id: restaurant_id,
        });
    }
    info!("Removed restaurant with ID {restaurant_id}");
    Ok(())
}

/// Registers a client on a restaurant's roster as one guarded transition.
///
/// The checks run in a fixed order and short-circuit on the first
/// failure: restaurant exists, client exists, capacity available, not
/// already a member, client is an adult. The final write re-verifies
/// capacity and uniqueness inside the storage transaction, so a
/// concurrent request that slipped past the prechecks still resolves to
/// the same error instead of overrunning the roster.
pub fn add_client_to_restaurant<R>(
    repo: &R,
    restaurant_id: i32,
    client_id: i32,
) -> ServiceResult<Restaurant>
where
    R: RestaurantReader + RestaurantWriter + ClientReader + ?Sized,
{
    let restaurant = get_restaurant(repo, restaurant_id)?;

    let client = repo
        .get_client_by_id(client_id)
        .map_err(ServiceError::query)?
        .ok_or(ServiceError::NotFound {
            entity: "Client",
            id: client_id,
        })?;

    if restaurant.is_full() {
        return Err(ServiceError::CapacityExceeded);
    }
    if restaurant.has_member(client.id) {
        return Err(ServiceError::DuplicateMembership);
    }
    if client.age < MIN_MEMBER_AGE {
        return Err(ServiceError::IneligibleAge);
    }

    match repo
        .attach_client(restaurant_id, client_id)
        .map_err(ServiceError::persistence)?
    {
        AttachOutcome::Attached(restaurant) => {
            info!("Added client {client_id} to restaurant {restaurant_id}");
            Ok(restaurant)
        }
        AttachOutcome::CapacityReached => Err(ServiceError::CapacityExceeded),
        AttachOutcome::AlreadyMember => Err(ServiceError::DuplicateMembership),
    }
}
