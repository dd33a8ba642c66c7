use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::dto::RemovalResponse;
use crate::dto::order::ListOrdersParams;
use crate::forms::order::{CreateOrderForm, UpdateOrderForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::{self, ServiceError};

#[post("/order")]
pub async fn create_order(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateOrderForm>,
) -> Result<HttpResponse, ServiceError> {
    let order = services::order::create_order(repo.get_ref(), &form)?;
    Ok(HttpResponse::Created().json(order))
}

#[get("/order")]
pub async fn list_orders(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, ServiceError> {
    let page = services::order::list_orders(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/order/{order_id}")]
pub async fn get_order(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    order_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let order = services::order::get_order(repo.get_ref(), order_id.into_inner())?;
    Ok(HttpResponse::Ok().json(order))
}

#[patch("/order/{order_id}")]
pub async fn update_order(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    order_id: web::Path<i32>,
    form: web::Json<UpdateOrderForm>,
) -> Result<HttpResponse, ServiceError> {
    let order = services::order::update_order(repo.get_ref(), order_id.into_inner(), &form)?;
    Ok(HttpResponse::Ok().json(order))
}

#[delete("/order/{order_id}")]
pub async fn remove_order(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    order_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let order_id = order_id.into_inner();
    services::order::remove_order(repo.get_ref(), order_id)?;
    Ok(HttpResponse::Ok().json(RemovalResponse::new("Order", order_id)))
}
