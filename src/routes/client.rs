use actix_web::{HttpResponse, delete, get, patch, post, web};

use crate::dto::RemovalResponse;
use crate::dto::client::ListClientsParams;
use crate::forms::client::{CreateClientForm, UpdateClientForm};
use crate::models::auth::AuthenticatedUser;
use crate::repository::DieselRepository;
use crate::services::{self, ServiceError};

#[post("/client")]
pub async fn create_client(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<CreateClientForm>,
) -> Result<HttpResponse, ServiceError> {
    let client = services::client::create_client(repo.get_ref(), &form)?;
    Ok(HttpResponse::Created().json(client))
}

#[get("/client")]
pub async fn list_clients(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    params: web::Query<ListClientsParams>,
) -> Result<HttpResponse, ServiceError> {
    let page = services::client::list_clients(repo.get_ref(), params.into_inner())?;
    Ok(HttpResponse::Ok().json(page))
}

#[get("/client/{client_id}")]
pub async fn get_client(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    client_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let client = services::client::get_client(repo.get_ref(), client_id.into_inner())?;
    Ok(HttpResponse::Ok().json(client))
}

#[patch("/client/{client_id}")]
pub async fn update_client(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    client_id: web::Path<i32>,
    form: web::Json<UpdateClientForm>,
) -> Result<HttpResponse, ServiceError> {
    let client =
        services::client::update_client(repo.get_ref(), client_id.into_inner(), &form)?;
    Ok(HttpResponse::Ok().json(client))
}

#[delete("/client/{client_id}")]
pub async fn remove_client(
    _user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    client_id: web::Path<i32>,
) -> Result<HttpResponse, ServiceError> {
    let client_id = client_id.into_inner();
    services::client::remove_client(repo.get_ref(), client_id)?;
    Ok(HttpResponse::Ok().json(RemovalResponse::new("Client", client_id)))
}
