#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::client::{
        create_client, get_client, list_clients, remove_client, update_client,
    };
    use crate::routes::order::{create_order, get_order, list_orders, remove_order, update_order};
    use crate::routes::restaurant::{
        add_client_to_restaurant, create_restaurant, get_restaurant, list_restaurants,
        remove_restaurant, update_restaurant,
    };

    /// Builds and runs the Actix-Web HTTP server using the provided
    /// configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);
        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Logger::default())
                .service(
                    web::scope("/api/v1")
                        .service(create_client)
                        .service(list_clients)
                        .service(get_client)
                        .service(update_client)
                        .service(remove_client)
                        .service(create_restaurant)
                        .service(list_restaurants)
                        .service(get_restaurant)
                        .service(update_restaurant)
                        .service(remove_restaurant)
                        .service(add_client_to_restaurant)
                        .service(create_order)
                        .service(list_orders)
                        .service(get_order)
                        .service(update_order)
                        .service(remove_order),
                )
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

#[cfg(feature = "server")]
pub use server::run;
