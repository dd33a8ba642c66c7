use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;
use crate::domain::restaurant::Restaurant;

/// An order always carries its resolved client and restaurant. Both are
/// loaded alongside the row; an order row with dangling references cannot
/// exist because creation resolves them first and the schema enforces the
/// foreign keys.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub description: String,
    pub client: Client,
    pub restaurant: RestaurantRef,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Restaurant as embedded in an order response: the flat entity without
/// its member roster.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRef {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub capacity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
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

#[derive(Clone, Debug, Deserialize)]
pub struct NewOrder {
    pub description: String,
    pub client_id: i32,
    pub restaurant_id: i32,
}

impl NewOrder {
    #[must_use]
    pub fn new(description: String, client_id: i32, restaurant_id: i32) -> Self {
        Self {
            description: description.trim().to_string(),
            client_id,
            restaurant_id,
        }
    }
}

/// Only the description may change after creation; the client and
/// restaurant references are immutable.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateOrder {
    pub description: Option<String>,
}

impl UpdateOrder {
    #[must_use]
    pub fn new(description: Option<String>) -> Self {
        Self {
            description: description
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}
