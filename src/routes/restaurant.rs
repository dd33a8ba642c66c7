use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::dto::RemovalResponse;
use crate::dto::restaurant::ListRestaurantsParams;
use crate::forms::restaurant::{CreateRestaurantForm, UpdateRestaurantForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::{self, ServiceError};

#[post("/restaurant")]
pub async fn create_restaurant(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateRestaurantForm>,
) -> Result<HttpResponse, ServiceError> {
    let restaurant = services::restaurant::create_restaurant(repo.get_ref(), &form)?;
    Ok(HttpResponse::Created().json(restaurant))
}

#[get("/restaurant")]
pub async fn list_restaurants(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListRestaurantsParams>,
) -> Result<HttpResponse, ServiceError> {
    let page = services::restaurant::list_restaurants(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/restaurant/{restaurant_id}")]
pub async fn get_restaurant(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    restaurant_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let restaurant =
        services::restaurant::get_restaurant(repo.get_ref(), restaurant_id.into_inner())?;
    Ok(HttpResponse::Ok().json(restaurant))
}

#[patch("/restaurant/{restaurant_id}")]
pub async fn update_restaurant(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    restaurant_id: web::Path<i32>,
    form: web::Json<UpdateRestaurantForm>,
) -> Result<HttpResponse, ServiceError> {
    let restaurant = services::restaurant::update_restaurant(
        repo.get_ref(),
        restaurant_id.into_inner(),
        &form,
    )?;
    Ok(HttpResponse::Ok().json(restaurant))
}

#[delete("/restaurant/{restaurant_id}")]
pub async fn remove_restaurant(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    restaurant_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let restaurant_id = restaurant_id.into_inner();
    services::restaurant::remove_restaurant(repo.get_ref(), restaurant_id)?;
    Ok(HttpResponse::Ok().json(RemovalResponse::new("Restaurant", restaurant_id)))
}

#[post("/restaurant/{restaurant_id}/add-client/{client_id}")]
pub async fn add_client_to_restaurant(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<(i32, i32)>,
) -> Result<HttpResponse, ServiceError> {
    let (restaurant_id, client_id) = path.into_inner();
    let restaurant =
        services::restaurant::add_client_to_restaurant(repo.get_ref(), restaurant_id, client_id)?;
    Ok(HttpResponse::Ok().json(restaurant))
}
