//! Persistence contracts and the Diesel implementation.
//!
//! Each entity gets a reader and a writer trait so services can state
//! exactly which capabilities they need and tests can swap in mocks.
//! Query structs are the filter allow-list: a filter that is not a field
//! here cannot be expressed, and every supplied filter is combined with
//! logical OR (the behavior existing API clients rely on).

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::order::{NewOrder, Order, UpdateOrder};
use crate::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod order;
pub mod restaurant;

use crate::db::DbPool;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        ((self.page - 1) * self.per_page) as i64
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientListQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default)]
pub struct RestaurantListQuery {
    pub name: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default)]
pub struct OrderListQuery {
    pub client_name: Option<String>,
    pub restaurant_name: Option<String>,
    pub pagination: Option<Pagination>,
}

impl ClientListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

impl RestaurantListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

impl OrderListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    pub fn restaurant_name(mut self, name: impl Into<String>) -> Self {
        self.restaurant_name = Some(name.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Outcome of the transactional membership write. The losing side of a
/// concurrent race surfaces here even when the service-level prechecks
/// passed.
#[derive(Debug, Clone)]
pub enum AttachOutcome {
    /// Membership persisted; carries the refreshed restaurant with its
    /// roster.
    Attached(Restaurant),
    /// The roster was already at capacity when the write ran.
    CapacityReached,
    /// The client was already on this restaurant's roster.
    AlreadyMember,
}

pub trait ClientReader {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)>;
}

pub trait ClientWriter {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client>;
    fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client>;
    fn delete_client(&self, client_id: i32) -> RepositoryResult<usize>;
}

pub trait RestaurantReader {
    /// Fetches a restaurant with its member roster eager-loaded.
    fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>>;
    fn list_restaurants(
        &self,
        query: RestaurantListQuery,
    ) -> RepositoryResult<(usize, Vec<Restaurant>)>;
}

pub trait RestaurantWriter {
    fn create_restaurant(&self, new_restaurant: &NewRestaurant) -> RepositoryResult<Restaurant>;
    fn update_restaurant(
        &self,
        restaurant_id: i32,
        updates: &UpdateRestaurant,
    ) -> RepositoryResult<Restaurant>;
    /// Deletes the restaurant, detaching any remaining members first.
    fn delete_restaurant(&self, restaurant_id: i32) -> RepositoryResult<usize>;
    /// Persists the membership edge. Capacity and uniqueness are
    /// re-verified inside a single write transaction so two concurrent
    /// calls cannot both slip past the service-level checks.
    fn attach_client(&self, restaurant_id: i32, client_id: i32)
    -> RepositoryResult<AttachOutcome>;
}

pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
}

pub trait OrderWriter {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
    fn delete_order(&self, order_id: i32) -> RepositoryResult<usize>;
}

/// Diesel-backed implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<crate::db::DbConnection> {
        Ok(self.pool.get()?)
    }
}
