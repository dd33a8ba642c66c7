use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::client::Client as DomainClient;
use crate::domain::order::RestaurantRef;
use crate::domain::restaurant::{
    NewRestaurant as DomainNewRestaurant, Restaurant as DomainRestaurant,
    UpdateRestaurant as DomainUpdateRestaurant,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::restaurants)]
/// Diesel model for [`crate::domain::restaurant::Restaurant`]. The member
/// roster lives on the `clients` table and is attached separately.
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub capacity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct NewRestaurant<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub capacity: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::restaurants)]
pub struct UpdateRestaurant<'a> {
    pub name: Option<&'a str>,
    pub address: Option<&'a str>,
    pub capacity: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl Restaurant {
    /// Builds the domain entity with the given roster attached.
    pub fn into_domain(self, clients: Vec<DomainClient>) -> DomainRestaurant {
        DomainRestaurant {
            id: self.id,
            name: self.name,
            address: self.address,
            capacity: self.capacity,
            created_at: self.created_at,
            updated_at: self.updated_at,
            clients,
        }
    }
}

impl From<Restaurant> for RestaurantRef {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            capacity: restaurant.capacity,
            created_at: restaurant.created_at,
            updated_at: restaurant.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewRestaurant> for NewRestaurant<'a> {
    fn from(restaurant: &'a DomainNewRestaurant) -> Self {
        Self {
            name: restaurant.name.as_str(),
            address: restaurant.address.as_str(),
            capacity: restaurant.capacity,
        }
    }
}

impl<'a> From<&'a DomainUpdateRestaurant> for UpdateRestaurant<'a> {
    fn from(updates: &'a DomainUpdateRestaurant) -> Self {
        Self {
            name: updates.name.as_deref(),
            address: updates.address.as_deref(),
            capacity: updates.capacity,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_domain_attaches_roster() {
        let now = Utc::now().naive_utc();
        let db = Restaurant {
            id: 3,
            name: "El Buen Sabor".to_string(),
            address: "Avenida Siempre Viva 123".to_string(),
            capacity: 50,
            created_at: now,
            updated_at: now,
        };
        let members = vec![DomainClient {
            id: 9,
            restaurant_id: Some(3),
            ..DomainClient::default()
        }];
        let domain = db.into_domain(members);
        assert_eq!(domain.capacity, 50);
        assert_eq!(domain.clients.len(), 1);
        assert!(domain.has_member(9));
    }
}
