use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::client::Client;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub address: String,
    /// Maximum number of simultaneous client memberships.
    pub capacity: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Current member roster, eager-loaded on fetch. Order is not
    /// meaningful.
    pub clients: Vec<Client>,
}

impl Restaurant {
    /// Whether the roster is already at capacity.
    pub fn is_full(&self) -> bool {
        self.clients.len() >= self.capacity as usize
    }

    /// Whether the given client is already part of the roster.
    pub fn has_member(&self, client_id: i32) -> bool {
        self.clients.iter().any(|c| c.id == client_id)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewRestaurant {
    pub name: String,
    pub address: String,
    pub capacity: i32,
}

impl NewRestaurant {
    #[must_use]
    pub fn new(name: String, address: String, capacity: i32) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            capacity,
        }
    }
}

/// Partial patch for a restaurant. The member roster is only mutated
/// through the membership operation, never through an update.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateRestaurant {
    pub name: Option<String>,
    pub address: Option<String>,
    pub capacity: Option<i32>,
}

impl UpdateRestaurant {
    #[must_use]
    pub fn new(name: Option<String>, address: Option<String>, capacity: Option<i32>) -> Self {
        Self {
            name: name.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            address: address
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            capacity,
        }
    }
}
