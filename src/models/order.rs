use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, Order as DomainOrder, UpdateOrder as DomainUpdateOrder,
};
use crate::models::client::Client;
use crate::models::restaurant::Restaurant;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
/// Diesel model for [`crate::domain::order::Order`]. Responses always join
/// in the referenced client and restaurant rows.
pub struct Order {
    pub id: i32,
    pub description: String,
    pub client_id: i32,
    pub restaurant_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub description: &'a str,
    pub client_id: i32,
    pub restaurant_id: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder<'a> {
    pub description: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl From<(Order, Client, Restaurant)> for DomainOrder {
    fn from((order, client, restaurant): (Order, Client, Restaurant)) -> Self {
        Self {
            id: order.id,
            description: order.description,
            client: client.into(),
            restaurant: restaurant.into(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewOrder> for NewOrder<'a> {
    fn from(order: &'a DomainNewOrder) -> Self {
        Self {
            description: order.description.as_str(),
            client_id: order.client_id,
            restaurant_id: order.restaurant_id,
        }
    }
}

impl<'a> From<&'a DomainUpdateOrder> for UpdateOrder<'a> {
    fn from(updates: &'a DomainUpdateOrder) -> Self {
        Self {
            description: updates.description.as_deref(),
            updated_at: Utc::now().naive_utc(),
        }
    }
}
