//! Mock repository implementation for isolating services in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::order::{NewOrder, Order, UpdateOrder};
use crate::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AttachOutcome, ClientListQuery, ClientReader, ClientWriter, OrderListQuery, OrderReader,
    OrderWriter, RestaurantListQuery, RestaurantReader, RestaurantWriter,
};

mock! {
    pub Repository {}

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
        fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
    }

    impl ClientWriter for Repository {
        fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
        fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client>;
        fn delete_client(&self, client_id: i32) -> RepositoryResult<usize>;
    }

    impl RestaurantReader for Repository {
        fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
        fn list_restaurants(
            &self,
            query: RestaurantListQuery,
        ) -> RepositoryResult<(usize, Vec<Restaurant>)>;
    }

    impl RestaurantWriter for Repository {
        fn create_restaurant(&self, new_restaurant: &NewRestaurant) -> RepositoryResult<Restaurant>;
        fn update_restaurant(
            &self,
            restaurant_id: i32,
            updates: &UpdateRestaurant,
        ) -> RepositoryResult<Restaurant>;
        fn delete_restaurant(&self, restaurant_id: i32) -> RepositoryResult<usize>;
        fn attach_client(
            &self,
            restaurant_id: i32,
            client_id: i32,
        ) -> RepositoryResult<AttachOutcome>;
    }

    impl OrderReader for Repository {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    }

    impl OrderWriter for Repository {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
        fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
        fn delete_order(&self, order_id: i32) -> RepositoryResult<usize>;
    }
}
